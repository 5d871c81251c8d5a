use serde::{Deserialize, Serialize};
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YScale {
    /// Fit the axis to the data min/max with a little padding.
    Auto,
    /// Pin the axis to `[min, max]` regardless of the data.
    Fixed { min: f64, max: f64 },
}
impl YScale {
    pub fn symmetric(magnitude: f64) -> Self {
        YScale::Fixed {
            min: -magnitude,
            max: magnitude,
        }
    }
    /// A fixed range must be finite and increasing; `Auto` is always usable.
    pub fn is_valid(&self) -> bool {
        match *self {
            YScale::Auto => true,
            YScale::Fixed { min, max } => min.is_finite() && max.is_finite() && min < max,
        }
    }
    pub fn resolve(&self, values: &[f64]) -> (f64, f64) {
        match *self {
            YScale::Fixed { min, max } => (min, max),
            YScale::Auto => {
                let (min, max) = values
                    .iter()
                    .copied()
                    .filter(|v| v.is_finite())
                    .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
                if min > max {
                    return (-1.0, 1.0);
                }
                // Avoid a zero-height axis.
                let pad = ((max - min) * 0.1).max(1e-3);
                (min - pad, max + pad)
            }
        }
    }
}
impl Default for YScale {
    fn default() -> Self {
        YScale::symmetric(1.1)
    }
}
/// Closed interval of seconds shown by the zoom inset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}
impl TimeWindow {
    pub fn first(seconds: f64) -> Self {
        Self {
            start: 0.0,
            end: seconds,
        }
    }
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
    pub fn is_valid(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.span() > 0.0
    }
}
impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow::first(0.1)
    }
}
/// Rectangle in normalized figure coordinates, origin at the bottom-left.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsetRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}
impl InsetRect {
    /// Inside the unit square with a non-empty area.
    pub fn is_valid(&self) -> bool {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        in_unit(self.left)
            && in_unit(self.bottom)
            && self.width > 0.0
            && self.height > 0.0
            && in_unit(self.left + self.width)
            && in_unit(self.bottom + self.height)
    }
}
impl Default for InsetRect {
    fn default() -> Self {
        Self {
            left: 0.6,
            bottom: 0.6,
            width: 0.25,
            height: 0.25,
        }
    }
}
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureLayout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Window size in logical pixels.
    pub size_px: [f32; 2],
    pub y_scale: YScale,
    pub grid: bool,
    pub inset: InsetRect,
    pub zoom: TimeWindow,
}
impl Default for FigureLayout {
    fn default() -> Self {
        Self {
            title: "Morse Code Audio Waveform".to_owned(),
            x_label: "Time (seconds)".to_owned(),
            y_label: "Amplitude".to_owned(),
            size_px: [1500.0, 500.0],
            y_scale: YScale::default(),
            grid: true,
            inset: InsetRect::default(),
            zoom: TimeWindow::default(),
        }
    }
}

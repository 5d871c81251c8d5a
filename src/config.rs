// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use crate::drivers::PlotterError;
use crate::waveform::{FigureLayout, TimeWindow, YScale};
/// Input file read when no path is given, relative to the working directory.
pub const DEFAULT_INPUT: &str = "morse_samples.txt";
/// Assumed rate of the sample file. Files written at another rate need `--sample-rate`.
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 44_100.0;
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    pub input: PathBuf,
    pub sample_rate_hz: f64,
    pub layout: FigureLayout,
}
impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            layout: FigureLayout::default(),
        }
    }
}
impl PlotterConfig {
    /// Read a JSON config. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
    pub fn with_zoom_seconds(mut self, seconds: f64) -> Self {
        self.layout.zoom = TimeWindow::first(seconds);
        self
    }
    pub fn validate(&self) -> Result<(), PlotterError> {
        if !(self.sample_rate_hz.is_finite() && self.sample_rate_hz > 0.0) {
            return Err(PlotterError::InvalidSampleRate(self.sample_rate_hz));
        }
        let layout = &self.layout;
        let zoom = layout.zoom;
        if !zoom.is_valid() {
            return Err(PlotterError::InvalidZoom {
                start: zoom.start,
                end: zoom.end,
            });
        }
        if let YScale::Fixed { min, max } = layout.y_scale {
            if !layout.y_scale.is_valid() {
                return Err(PlotterError::InvalidYRange { min, max });
            }
        }
        if !layout.inset.is_valid() {
            return Err(PlotterError::InvalidInset(layout.inset));
        }
        let [width, height] = layout.size_px;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PlotterError::InvalidWindowSize { width, height });
        }
        Ok(())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::InsetRect;
    #[test]
    fn defaults_match_the_classic_plot() {
        let config = PlotterConfig::default();
        assert_eq!(config.input, PathBuf::from("morse_samples.txt"));
        assert_eq!(config.sample_rate_hz, 44_100.0);
        assert_eq!(config.layout.title, "Morse Code Audio Waveform");
        assert_eq!(config.layout.x_label, "Time (seconds)");
        assert_eq!(config.layout.y_label, "Amplitude");
        assert_eq!(config.layout.y_scale, YScale::Fixed { min: -1.1, max: 1.1 });
        assert_eq!(config.layout.inset, InsetRect::default());
        assert_eq!(config.layout.zoom, TimeWindow { start: 0.0, end: 0.1 });
        assert!(config.layout.grid);
        assert!(config.validate().is_ok());
    }
    #[test]
    fn partial_json_keeps_defaults() {
        let config = PlotterConfig::from_json_str(
            r#"{"sample_rate_hz": 48000, "layout": {"title": "Beacon", "y_scale": "auto"}}"#,
        )
        .unwrap();
        assert_eq!(config.sample_rate_hz, 48_000.0);
        assert_eq!(config.layout.title, "Beacon");
        assert_eq!(config.layout.y_scale, YScale::Auto);
        assert_eq!(config.layout.x_label, "Time (seconds)");
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
    }
    #[test]
    fn fixed_scale_from_json() {
        let config =
            PlotterConfig::from_json_str(r#"{"layout": {"y_scale": {"fixed": {"min": -2, "max": 2}}}}"#)
                .unwrap();
        assert_eq!(config.layout.y_scale, YScale::Fixed { min: -2.0, max: 2.0 });
    }
    #[test]
    fn rejects_bad_rate_and_zoom() {
        let config = PlotterConfig {
            sample_rate_hz: 0.0,
            ..PlotterConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PlotterError::InvalidSampleRate(_))
        ));
        let config = PlotterConfig::default().with_zoom_seconds(-0.5);
        assert!(matches!(config.validate(), Err(PlotterError::InvalidZoom { .. })));
    }
    #[test]
    fn rejects_inverted_or_flat_y_range() {
        for json in [
            r#"{"layout": {"y_scale": {"fixed": {"min": 2, "max": -2}}}}"#,
            r#"{"layout": {"y_scale": {"fixed": {"min": 1, "max": 1}}}}"#,
        ] {
            let config = PlotterConfig::from_json_str(json).unwrap();
            assert!(matches!(
                config.validate(),
                Err(PlotterError::InvalidYRange { .. })
            ));
        }
        let mut config = PlotterConfig::default();
        config.layout.y_scale = YScale::Fixed {
            min: f64::NEG_INFINITY,
            max: 1.0,
        };
        assert!(matches!(
            config.validate(),
            Err(PlotterError::InvalidYRange { .. })
        ));
    }
    #[test]
    fn rejects_degenerate_inset() {
        for json in [
            r#"{"layout": {"inset": {"left": 0.6, "bottom": 0.6, "width": 0, "height": 0.25}}}"#,
            r#"{"layout": {"inset": {"left": 0.6, "bottom": 0.6, "width": 0.25, "height": 0}}}"#,
            r#"{"layout": {"inset": {"left": 5, "bottom": 0.6, "width": 0.25, "height": 0.25}}}"#,
            r#"{"layout": {"inset": {"left": 0.9, "bottom": 0.6, "width": 0.25, "height": 0.25}}}"#,
        ] {
            let config = PlotterConfig::from_json_str(json).unwrap();
            assert!(matches!(
                config.validate(),
                Err(PlotterError::InvalidInset(_))
            ));
        }
    }
    #[test]
    fn rejects_empty_window_size() {
        let config = PlotterConfig::from_json_str(r#"{"layout": {"size_px": [0, 0]}}"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PlotterError::InvalidWindowSize { .. })
        ));
        let config = PlotterConfig::from_json_str(r#"{"layout": {"size_px": [800, -1]}}"#).unwrap();
        assert!(config.validate().is_err());
    }
}

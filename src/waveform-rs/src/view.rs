use super::config::InsetRect;
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    /// Seconds from the first sample.
    pub time: f64,
    pub value: f64,
}
impl SamplePoint {
    pub fn as_pair(&self) -> [f64; 2] {
        [self.time, self.value]
    }
}
/// One axes worth of data: the bounds to show and the points to draw.
#[derive(Clone, Debug)]
pub struct TraceView {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub points: Vec<SamplePoint>,
}
impl TraceView {
    pub fn pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(SamplePoint::as_pair).collect()
    }
}
#[derive(Clone, Debug)]
pub struct FigureView {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub main: TraceView,
    pub inset: TraceView,
    pub inset_rect: InsetRect,
}

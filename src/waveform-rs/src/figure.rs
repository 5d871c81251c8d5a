use std::ops::Range;
use super::{
    config::{FigureLayout, TimeWindow},
    view::{FigureView, SamplePoint, TraceView},
};
/// Build the main panel and the zoom inset for a single trace.
///
/// `time` must be ascending. Extra entries in the longer of the two slices are ignored.
pub fn build_figure(time: &[f64], values: &[f64], layout: &FigureLayout) -> FigureView {
    let len = time.len().min(values.len());
    let (time, values) = (&time[..len], &values[..len]);
    let y_range = layout.y_scale.resolve(values);
    let points: Vec<SamplePoint> = time
        .iter()
        .zip(values)
        .map(|(&time, &value)| SamplePoint { time, value })
        .collect();
    let visible = window_indices(time, layout.zoom);
    let inset = TraceView {
        x_range: (layout.zoom.start, layout.zoom.end),
        y_range,
        points: points[visible].to_vec(),
    };
    let main = TraceView {
        x_range: main_x_range(time),
        y_range,
        points,
    };
    FigureView {
        title: layout.title.clone(),
        x_label: layout.x_label.clone(),
        y_label: layout.y_label.clone(),
        grid: layout.grid,
        main,
        inset,
        inset_rect: layout.inset,
    }
}
fn main_x_range(time: &[f64]) -> (f64, f64) {
    match (time.first(), time.last()) {
        (Some(&first), Some(&last)) if last > first => (first, last),
        // Nothing to span yet; show a unit axis instead of a degenerate one.
        (Some(&first), _) => (first, first + 1.0),
        _ => (0.0, 1.0),
    }
}
/// Indices of the samples inside `window`, widened by one on each side so the
/// trace runs to the panel edges instead of stopping at the last inner point.
/// An inverted or NaN window selects nothing.
pub fn window_indices(time: &[f64], window: TimeWindow) -> Range<usize> {
    if time.is_empty() || !(window.start <= window.end) {
        return 0..0;
    }
    let lo = time.partition_point(|&t| t < window.start);
    let hi = time.partition_point(|&t| t <= window.end);
    lo.saturating_sub(1)..(hi + 1).min(time.len())
}

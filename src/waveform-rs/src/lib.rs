pub mod config;
pub mod figure;
pub mod view;
pub use config::{FigureLayout, InsetRect, TimeWindow, YScale};
pub use figure::build_figure;
pub use view::{FigureView, TraceView};

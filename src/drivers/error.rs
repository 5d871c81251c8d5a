use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;
use crate::waveform::InsetRect;
#[derive(Debug, Error)]
pub enum PlotterError {
    #[error("sample rate must be a positive number of hertz, got {0}")]
    InvalidSampleRate(f64),
    #[error("zoom window [{start}, {end}] must be finite and non-empty")]
    InvalidZoom { start: f64, end: f64 },
    #[error("fixed y range [{min}, {max}] must be finite with min below max")]
    InvalidYRange { min: f64, max: f64 },
    #[error("inset {0:?} must lie inside the unit square with a positive width and height")]
    InvalidInset(InsetRect),
    #[error("window size {width}x{height} must be positive")]
    InvalidWindowSize { width: f32, height: f32 },
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {content:?} is not a valid sample value")]
    Parse {
        line: usize,
        content: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("time axis has {time} points but there are {samples} samples")]
    LengthMismatch { time: usize, samples: usize },
    #[error("failed to open plot window: {0}")]
    Display(String),
}
impl From<eframe::Error> for PlotterError {
    fn from(value: eframe::Error) -> Self {
        PlotterError::Display(value.to_string())
    }
}

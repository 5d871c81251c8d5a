use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use log::info;
use crate::drivers::PlotterError;
/// Writes samples in the plotter's input format: one decimal value per line.
pub struct SampleRecorder {
    writer: BufWriter<File>,
    path: PathBuf,
    written: usize,
}
impl SampleRecorder {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, PlotterError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| PlotterError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
            written: 0,
        })
    }
    pub fn write_block(&mut self, samples: &[f64]) -> Result<(), PlotterError> {
        for value in samples {
            // `{}` on f64 is the shortest text that parses back to the same value.
            writeln!(self.writer, "{value}").map_err(|source| self.io_error(source))?;
        }
        self.written += samples.len();
        Ok(())
    }
    /// Flush everything to disk and report how many samples were written.
    pub fn finish(mut self) -> Result<usize, PlotterError> {
        self.writer.flush().map_err(|source| self.io_error(source))?;
        info!("wrote {} samples to {}", self.written, self.path.display());
        Ok(self.written)
    }
    fn io_error(&self, source: std::io::Error) -> PlotterError {
        PlotterError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

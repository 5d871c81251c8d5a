use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use crate::drivers::PlotterError;
/// Something that can hand over an ordered run of amplitude samples.
pub trait SampleSource {
    /// Human readable origin, used in logs and the window footer.
    fn describe(&self) -> String;
    fn read_samples(&mut self) -> Result<Vec<f64>, PlotterError>;
}
/// Newline-delimited text file, one decimal sample per line.
pub struct TextFileSource {
    path: PathBuf,
}
impl TextFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}
impl SampleSource for TextFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }
    fn read_samples(&mut self) -> Result<Vec<f64>, PlotterError> {
        load_samples(&self.path)
    }
}
/// In-memory source useful for tests and generated signals.
pub struct ManualSource {
    label: String,
    samples: Vec<f64>,
}
impl ManualSource {
    pub fn new(label: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            samples,
        }
    }
}
impl SampleSource for ManualSource {
    fn describe(&self) -> String {
        self.label.clone()
    }
    fn read_samples(&mut self) -> Result<Vec<f64>, PlotterError> {
        Ok(self.samples.clone())
    }
}
/// Read every sample in `path`, in file order.
///
/// Surrounding whitespace is trimmed and blank lines are skipped. The first
/// line that does not parse aborts the read with its 1-based line number.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<f64>, PlotterError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PlotterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_samples(&text)?;
    debug!("parsed {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
/// Same rules as [`load_samples`], applied to text already in memory.
pub fn parse_samples(text: &str) -> Result<Vec<f64>, PlotterError> {
    let mut samples = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(value) = parse_line(idx + 1, line)? {
            samples.push(value);
        }
    }
    Ok(samples)
}
fn parse_line(line_no: usize, line: &str) -> Result<Option<f64>, PlotterError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|source| PlotterError::Parse {
            line: line_no,
            content: trimmed.to_owned(),
            source,
        })
}
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    #[test]
    fn loads_lines_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("samples.txt");
        fs::write(&path, "1.0\n-1.0\n0.0\n").unwrap();
        assert_eq!(load_samples(&path).unwrap(), vec![1.0, -1.0, 0.0]);
    }
    #[test]
    fn single_line_without_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("one.txt");
        fs::write(&path, "0.5").unwrap();
        assert_eq!(load_samples(&path).unwrap(), vec![0.5]);
    }
    #[test]
    fn empty_file_gives_no_samples() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert!(load_samples(&path).unwrap().is_empty());
    }
    #[test]
    fn whitespace_is_trimmed_and_blank_lines_skipped() {
        let samples = parse_samples("  0.25 \n\n\t-0.75\r\n   \n1e-3\n").unwrap();
        assert_eq!(samples, vec![0.25, -0.75, 0.001]);
    }
    #[test]
    fn reading_twice_gives_equal_sequences() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("twice.txt");
        fs::write(&path, "0.1\n0.2\n0.3\n").unwrap();
        let mut source = TextFileSource::new(&path);
        let first = source.read_samples().unwrap();
        let second = source.read_samples().unwrap();
        assert_eq!(first, second);
    }
    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.txt");
        match load_samples(&path) {
            Err(PlotterError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }
    #[test]
    fn malformed_line_reports_its_number() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "0.5\nabc\n0.1\n").unwrap();
        match load_samples(&path) {
            Err(PlotterError::Parse { line, content, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
    #[test]
    fn manual_source_repeats_its_samples() {
        let mut source = ManualSource::new("memory", vec![0.5, -0.5]);
        assert_eq!(source.describe(), "memory");
        assert_eq!(source.read_samples().unwrap(), vec![0.5, -0.5]);
        assert_eq!(source.read_samples().unwrap(), vec![0.5, -0.5]);
    }
}

use crate::drivers::PlotterError;
use crate::waveform::{build_figure, FigureLayout, FigureView};
/// `i / sample_rate_hz` for every sample index.
pub fn build_time_axis(sample_count: usize, sample_rate_hz: f64) -> Result<Vec<f64>, PlotterError> {
    if !(sample_rate_hz.is_finite() && sample_rate_hz > 0.0) {
        return Err(PlotterError::InvalidSampleRate(sample_rate_hz));
    }
    Ok((0..sample_count)
        .map(|i| i as f64 / sample_rate_hz)
        .collect())
}
/// Loaded samples paired with their time axis.
#[derive(Clone, Debug)]
pub struct Waveform {
    sample_rate_hz: f64,
    samples: Vec<f64>,
    time: Vec<f64>,
}
impl Waveform {
    pub fn new(samples: Vec<f64>, sample_rate_hz: f64) -> Result<Self, PlotterError> {
        let time = build_time_axis(samples.len(), sample_rate_hz)?;
        Ok(Self {
            sample_rate_hz,
            samples,
            time,
        })
    }
    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
    pub fn time(&self) -> &[f64] {
        &self.time
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate_hz
    }
    pub fn stats(&self) -> Option<SampleStats> {
        SampleStats::from_samples(&self.samples)
    }
    /// Number of samples outside `[min, max]`.
    pub fn count_outside(&self, (min, max): (f64, f64)) -> usize {
        self.samples.iter().filter(|v| **v < min || **v > max).count()
    }
    pub fn figure(&self, layout: &FigureLayout) -> Result<FigureView, PlotterError> {
        figure_from_parts(self.time(), self.samples(), layout)
    }
}
/// Pair a time axis with its samples for drawing. The two must line up one to one.
pub fn figure_from_parts(
    time: &[f64],
    samples: &[f64],
    layout: &FigureLayout,
) -> Result<FigureView, PlotterError> {
    if time.len() != samples.len() {
        return Err(PlotterError::LengthMismatch {
            time: time.len(),
            samples: samples.len(),
        });
    }
    Ok(build_figure(time, samples, layout))
}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleStats {
    pub min: f64,
    pub max: f64,
    pub rms: f64,
    pub peak: f64,
}
impl SampleStats {
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut sum_sq = 0.0;
        for &v in samples {
            min = min.min(v);
            max = max.max(v);
            sum_sq += v * v;
        }
        Some(Self {
            min,
            max,
            rms: (sum_sq / samples.len() as f64).sqrt(),
            peak: min.abs().max(max.abs()),
        })
    }
}

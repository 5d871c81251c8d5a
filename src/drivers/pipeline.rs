use log::{info, warn};
use crate::drivers::error::PlotterError;
use crate::drivers::source::SampleSource;
use crate::drivers::Waveform;
use crate::waveform::{FigureLayout, FigureView, YScale};
/// load → derive time axis → build figure, in that order and nothing else.
pub struct PlotPipeline<S: SampleSource> {
    source: S,
    sample_rate_hz: f64,
}
impl<S: SampleSource> PlotPipeline<S> {
    pub fn new(source: S, sample_rate_hz: f64) -> Self {
        Self {
            source,
            sample_rate_hz,
        }
    }
    pub fn load(&mut self) -> Result<Waveform, PlotterError> {
        let samples = self.source.read_samples()?;
        let waveform = Waveform::new(samples, self.sample_rate_hz)?;
        info!(
            "loaded {} samples from {} ({:.3} s at {} Hz)",
            waveform.len(),
            self.source.describe(),
            waveform.duration_seconds(),
            self.sample_rate_hz
        );
        Ok(waveform)
    }
    pub fn run(&mut self, layout: &FigureLayout) -> Result<(Waveform, FigureView), PlotterError> {
        let waveform = self.load()?;
        if waveform.is_empty() {
            warn!("{} holds no samples; drawing an empty plot", self.source.describe());
        }
        if let YScale::Fixed { min, max } = layout.y_scale {
            let clipped = waveform.count_outside((min, max));
            if clipped > 0 {
                warn!("{clipped} samples fall outside the y range [{min}, {max}] and will be clipped");
            }
        }
        let figure = waveform.figure(layout)?;
        Ok((waveform, figure))
    }
}

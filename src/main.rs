// src/main.rs
mod config;
mod drivers;
mod gui;
mod morse;
mod recorder;
mod waveform;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use config::{PlotterConfig, DEFAULT_INPUT, DEFAULT_SAMPLE_RATE_HZ};
use drivers::{ManualSource, PlotPipeline, SampleSource, TextFileSource};
use morse::ToneSpec;
use recorder::SampleRecorder;
/// Plot a text file of audio samples with a zoomed inset of the first moments.
#[derive(Debug, Parser)]
#[command(version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    view: ViewArgs,
}
#[derive(Debug, Subcommand)]
enum Command {
    /// Open the waveform window (default).
    View(ViewArgs),
    /// Synthesize morse code audio into a sample file.
    Generate(GenerateArgs),
}
#[derive(Debug, Args)]
struct ViewArgs {
    /// Sample file, one decimal value per line [default: morse_samples.txt]
    input: Option<PathBuf>,
    /// Sample rate of the file in Hz [default: 44100]
    #[arg(short = 'r', long)]
    sample_rate: Option<f64>,
    /// Length of the zoom inset in seconds, starting at 0 [default: 0.1]
    #[arg(short, long)]
    zoom: Option<f64>,
    /// JSON file with plot settings; command line flags win over it
    #[arg(short, long)]
    config: Option<PathBuf>,
}
#[derive(Debug, Args)]
struct GenerateArgs {
    /// Text to encode
    text: String,
    /// Where to write the samples
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    output: PathBuf,
    #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE_HZ)]
    sample_rate: f64,
    /// Tone frequency in Hz
    #[arg(long, default_value_t = 440.0)]
    frequency: f64,
    /// Open the plot for the generated samples once written
    #[arg(long)]
    show: bool,
}
impl ViewArgs {
    fn resolve(&self) -> Result<PlotterConfig> {
        let mut config = match &self.config {
            Some(path) => PlotterConfig::from_json_file(path)?,
            None => PlotterConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(rate) = self.sample_rate {
            config.sample_rate_hz = rate;
        }
        if let Some(seconds) = self.zoom {
            config = config.with_zoom_seconds(seconds);
        }
        config.validate()?;
        Ok(config)
    }
}
// 入口函数
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Generate(args)) => generate(&args),
        Some(Command::View(args)) => view(&args),
        None => view(&cli.view),
    }
}
fn view(args: &ViewArgs) -> Result<()> {
    let config = args.resolve()?;
    debug!("plot layout: {:?}", config.layout);
    let source = TextFileSource::new(&config.input);
    plot(source, &config)
}
fn generate(args: &GenerateArgs) -> Result<()> {
    let config = PlotterConfig {
        input: args.output.clone(),
        sample_rate_hz: args.sample_rate,
        ..PlotterConfig::default()
    };
    config.validate()?;
    let morse = morse::text_to_morse(&args.text);
    info!("{:?} => {}", args.text, morse);
    let tone = ToneSpec {
        frequency_hz: args.frequency,
        ..ToneSpec::default()
    };
    let samples = morse::morse_to_samples(&morse, args.sample_rate, &tone);
    let mut recorder = SampleRecorder::create(&args.output)?;
    recorder.write_block(&samples)?;
    recorder.finish()?;
    if args.show {
        plot(ManualSource::new(morse, samples), &config)?;
    }
    Ok(())
}
fn plot<S: SampleSource>(source: S, config: &PlotterConfig) -> Result<()> {
    let label = source.describe();
    let mut pipeline = PlotPipeline::new(source, config.sample_rate_hz);
    let (waveform, figure) = pipeline
        .run(&config.layout)
        .with_context(|| format!("loading samples from {label}"))?;
    let app = gui::WaveformApp::new(figure, &waveform, &label);
    gui::run_blocking(app, config.layout.size_px)?;
    Ok(())
}

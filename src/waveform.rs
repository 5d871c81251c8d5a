// Adapter module to surface the figure view model kept under `waveform-rs/`.
// The sources are included directly so the standalone crate and the binary stay in sync.
#[path = "waveform-rs/src/lib.rs"]
mod waveform_rs;

pub use waveform_rs::*;

// src/drivers/mod.rs
// 读取样本、时间轴与绘图前的数据整理
pub mod buffer;
pub mod error;
pub mod pipeline;
pub mod source;
// 公开导出，方便 main / gui 直接使用
pub use buffer::{SampleStats, Waveform};
pub use error::PlotterError;
pub use pipeline::PlotPipeline;
pub use source::{ManualSource, SampleSource, TextFileSource};

mod analyzer;
mod error;
mod stt;
pub mod tracing;
pub mod web;
pub mod yt;

pub use analyzer::{builder::VideoAnalyzerBuilder, AnalysisReport, VideoAnalyzer};
pub use error::Error;
pub use stt::{openai, TranscribeResponse, Transcriber};

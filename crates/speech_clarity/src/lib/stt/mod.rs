pub mod openai;
mod transcriber;

pub use transcriber::{TranscribeResponse, Transcriber};

use std::{fmt::Debug, future::Future, path::Path};

use serde::Deserialize;

/// Speech-to-text seam. Implementations run a pretrained recognition
/// model over a local audio file and return the recognized text.
pub trait Transcriber {
    const TRANSCRIBER_MODEL: &'static str;

    type Error: Debug;

    fn transcribe(
        &self,
        audio_path: &Path,
    ) -> impl Future<Output = Result<TranscribeResponse, Self::Error>> + Send;
}

#[derive(Debug, Deserialize)]
pub struct TranscribeResponse {
    pub text: String,
}

/// Errors surfaced by a single analysis run.
///
/// Apart from the empty-URL gate there is no recovery: stage failures
/// wrap their source and propagate to the caller, which renders them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no video URL was provided")]
    EmptyVideoUrl,
    #[error("failed to prepare run directory: {0}")]
    Workdir(#[from] std::io::Error),
    #[error("audio download failed: {0}")]
    AudioFetch(anyhow::Error),
    #[error("transcription failed: {0}")]
    Transcription(anyhow::Error),
}

pub mod builder;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use text_metrics::{flesch_reading_ease, improve_clarity, round2, summarize};
use uuid::Uuid;

use crate::{error::Error, stt::Transcriber, yt::AudioFetcher};

/// Everything a single run produces, held in memory only.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Full recognized text, exactly as the model returned it.
    pub transcript: String,
    /// Transcript after filler stripping and sentence-length filtering.
    pub improved_text: String,
    /// Flesch reading-ease of the improved text, rounded to two decimals.
    pub clarity_score: f64,
    /// Leading sentences of the improved text.
    pub summary: String,
}

/// The core single-run video analysis pipeline: fetch audio, transcribe,
/// post-process, score, summarize. One linear sequence per call; nothing
/// survives a run except the returned report.
pub struct VideoAnalyzer<F, T>
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    workdir: PathBuf,
    fetcher: F,
    transcriber: T,
    max_summary_sentences: usize,
}

/// Unique on-disk workspace for one run. Dropping the guard removes the
/// directory and everything in it, on success and failure alike.
struct RunDir {
    path: PathBuf,
}

impl RunDir {
    fn create(root: &Path) -> io::Result<Self> {
        let path = root.join("runs").join(Uuid::new_v4().to_string());
        fs::create_dir_all(&path)?;
        Ok(RunDir { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunDir {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.path) {
            tracing::warn!(error = ?e, path = ?self.path, "Failed to clean up run directory");
        } else {
            tracing::debug!(path = ?self.path, "Cleaned up run directory");
        }
    }
}

impl<F, T> VideoAnalyzer<F, T>
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    pub(crate) fn new(
        workdir: impl Into<PathBuf>,
        fetcher: F,
        transcriber: T,
        max_summary_sentences: usize,
    ) -> Self {
        VideoAnalyzer {
            workdir: workdir.into(),
            fetcher,
            transcriber,
            max_summary_sentences,
        }
    }

    /// Runs the full pipeline for one video URL.
    ///
    /// The only input validation is the emptiness check; every other
    /// failure propagates as an [`Error`] wrapping its stage.
    #[tracing::instrument(skip(self))]
    pub async fn analyze(&self, video_url: &str) -> Result<AnalysisReport, Error> {
        let video_url = video_url.trim();
        if video_url.is_empty() {
            return Err(Error::EmptyVideoUrl);
        }

        let run_dir = RunDir::create(&self.workdir)?;

        tracing::info!("Downloading audio");
        let audio_path = self
            .fetcher
            .fetch(video_url, run_dir.path())
            .await
            .map_err(Error::AudioFetch)?;

        tracing::info!(audio = ?audio_path, "Transcribing audio");
        let transcript = self
            .transcriber
            .transcribe(&audio_path)
            .await
            .map_err(|e| Error::Transcription(anyhow::anyhow!("{e:?}")))?
            .text;

        let improved_text = improve_clarity(&transcript);
        let clarity_score = round2(flesch_reading_ease(&improved_text));
        let summary = summarize(&improved_text, self.max_summary_sentences);
        tracing::info!(score = clarity_score, "Analysis complete");

        Ok(AnalysisReport {
            transcript,
            improved_text,
            clarity_score,
            summary,
        })
    }
}

use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::yt::AudioFetcher;

/// Audio fetcher backed by the `yt-dlp` binary.
pub struct YtDlpFetcher {
    program: PathBuf,
}

impl YtDlpFetcher {
    const AUDIO_FORMAT: &'static str = "mp3";

    pub fn new() -> Self {
        Self::with_program("yt-dlp")
    }

    /// Uses an explicit executable path instead of resolving `yt-dlp`
    /// from `PATH`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        YtDlpFetcher {
            program: program.into(),
        }
    }
}

impl Default for YtDlpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioFetcher for YtDlpFetcher {
    async fn fetch(&self, url: &str, dest_dir: &Path) -> anyhow::Result<PathBuf> {
        tracing::debug!(url, dest = ?dest_dir, "Invoking yt-dlp");
        let output_template = dest_dir.join("audio.%(ext)s");
        let audio_path = dest_dir.join(format!("audio.{}", Self::AUDIO_FORMAT));

        let output = Command::new(&self.program)
            .arg("-f")
            .arg("bestaudio/best")
            .arg("-x")
            .arg("--audio-format")
            .arg(Self::AUDIO_FORMAT)
            .arg("--no-playlist")
            .arg("-o")
            .arg(&output_template)
            .arg(url)
            .output()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to spawn yt-dlp"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("yt-dlp exited with {}: {}", output.status, stderr.trim());
        }

        if !audio_path.exists() {
            anyhow::bail!(
                "yt-dlp did not produce expected file: {}",
                audio_path.display()
            );
        }

        Ok(audio_path)
    }
}

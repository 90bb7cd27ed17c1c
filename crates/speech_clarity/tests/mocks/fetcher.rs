use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use speech_clarity::yt::AudioFetcher;

#[derive(Clone, Default)]
pub struct MockAudioFetcher {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockAudioFetcher {
    pub fn failing(msg: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl AudioFetcher for MockAudioFetcher {
    async fn fetch(&self, url: &str, dest_dir: &Path) -> anyhow::Result<PathBuf> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(dest_dir.join("audio.mp3"))
    }
}

use std::path::PathBuf;

use text_metrics::DEFAULT_MAX_SENTENCES;

use crate::{stt::Transcriber, yt::AudioFetcher, VideoAnalyzer};

pub struct VideoAnalyzerBuilder<F = (), T = ()> {
    workdir: PathBuf,
    fetcher: F,
    transcriber: T,
    max_summary_sentences: usize,
}

impl VideoAnalyzerBuilder {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            fetcher: (),
            transcriber: (),
            max_summary_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}

impl<F, T> VideoAnalyzerBuilder<F, T> {
    pub fn fetcher<F2: AudioFetcher + Send + Sync + 'static>(
        self,
        fetcher: F2,
    ) -> VideoAnalyzerBuilder<F2, T> {
        VideoAnalyzerBuilder {
            workdir: self.workdir,
            fetcher,
            transcriber: self.transcriber,
            max_summary_sentences: self.max_summary_sentences,
        }
    }

    pub fn transcriber<T2: Transcriber + Send + Sync + 'static>(
        self,
        transcriber: T2,
    ) -> VideoAnalyzerBuilder<F, T2> {
        VideoAnalyzerBuilder {
            workdir: self.workdir,
            fetcher: self.fetcher,
            transcriber,
            max_summary_sentences: self.max_summary_sentences,
        }
    }

    pub fn max_summary_sentences(mut self, max_summary_sentences: usize) -> Self {
        self.max_summary_sentences = max_summary_sentences;
        self
    }
}

impl<F, T> VideoAnalyzerBuilder<F, T>
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    pub fn build(self) -> VideoAnalyzer<F, T> {
        VideoAnalyzer::new(
            self.workdir,
            self.fetcher,
            self.transcriber,
            self.max_summary_sentences,
        )
    }
}

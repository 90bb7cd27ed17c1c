pub mod fetcher;

use std::{
    future::Future,
    path::{Path, PathBuf},
};

/// Audio acquisition seam. Implementations select the best available
/// audio stream for `url`, download it into `dest_dir`, and return the
/// path of the produced file.
pub trait AudioFetcher {
    fn fetch(
        &self,
        url: &str,
        dest_dir: &Path,
    ) -> impl Future<Output = anyhow::Result<PathBuf>> + Send;
}

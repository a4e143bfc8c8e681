use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::error::{FetchError, Result};
use crate::http::HttpClient;
use crate::progress::Progress;

/// Configuration for a fetch operation.
#[derive(Clone, Default)]
pub struct FetchOptions {
    /// Progress callback invoked after each chunk write.
    ///
    /// The callback receives a reference to avoid cloning on every
    /// invocation.
    ///
    /// Default: None
    pub on_progress: Option<Arc<dyn Fn(&Progress) + Send + Sync>>,
}

impl FetchOptions {
    /// Set the progress callback.
    pub fn on_progress(mut self, callback: impl Fn(&Progress) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchOptions")
            .field("on_progress", &self.on_progress.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// How a successful fetch concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The destination file already existed; no network request was made.
    ///
    /// Existence alone is sufficient, the file's content is not
    /// inspected.
    AlreadyPresent,

    /// The file was downloaded and its size verified.
    Downloaded { bytes: u64 },
}

/// Removes the destination file on drop unless the fetch committed.
///
/// Armed before the file is created, disarmed after verification passes.
/// Covers every exit path out of the write loop, including `?` returns.
struct PartialGuard {
    path: PathBuf,
    armed: bool,
}

impl PartialGuard {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PartialGuard {
    fn drop(&mut self) {
        if self.armed && self.path.exists() {
            let _ = std::fs::remove_file(&self.path);
            tracing::warn!(path = %self.path.display(), "removed partial download");
        }
    }
}

/// The main fetcher implementation that downloads files with size
/// verification.
pub struct Fetcher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    /// Create a new fetcher with the provided HTTP client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetch a file from the given URL and save it to the destination.
    ///
    /// If `dest` already exists the fetch short-circuits to
    /// [`FetchOutcome::AlreadyPresent`] without touching the network.
    /// Otherwise the expected size is probed via a HEAD request, the body
    /// is streamed to `dest` chunk by chunk (reporting progress through
    /// `options.on_progress`), and the resulting file size is compared
    /// against the probed size.
    ///
    /// # Errors
    ///
    /// Any transport failure, HTTP error status, I/O failure or size
    /// mismatch is returned as a [`FetchError`]. If the destination file
    /// had already been created by the time the error occurred, it is
    /// removed before this function returns.
    pub async fn fetch(
        &self,
        url: &str,
        dest: &Path,
        options: FetchOptions,
    ) -> Result<FetchOutcome> {
        if dest.exists() {
            tracing::debug!(path = %dest.display(), "destination exists, skipping download");
            return Ok(FetchOutcome::AlreadyPresent);
        }

        let total_bytes = self
            .client
            .content_length(url)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        tracing::debug!(url, ?total_bytes, "probed expected size");

        // Opens the connection and checks the HTTP status; nothing has
        // been written yet, so an error here needs no cleanup.
        let mut stream = self
            .client
            .stream(url)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let mut guard = PartialGuard::new(dest);
        let mut file = tokio::fs::File::create(dest).await?;
        let mut bytes_downloaded = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::Network(e.to_string()))?;
            file.write_all(&chunk).await?;
            bytes_downloaded += chunk.len() as u64;

            if let Some(ref callback) = options.on_progress {
                callback(&Progress {
                    bytes_downloaded,
                    total_bytes,
                });
            }
        }

        file.flush().await?;
        drop(file);

        // Stat the file rather than trusting the write counter; the size
        // on disk is what the caller will read back.
        let actual = tokio::fs::metadata(dest).await?.len();
        if let Some(expected) = total_bytes
            && actual != expected
        {
            return Err(FetchError::SizeMismatch { expected, actual });
        }
        tracing::debug!(path = %dest.display(), bytes = actual, "size verified");

        guard.disarm();
        Ok(FetchOutcome::Downloaded { bytes: actual })
    }
}

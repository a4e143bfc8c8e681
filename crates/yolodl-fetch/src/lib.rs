//! Streaming HTTP download of model weights files.
//!
//! The engine performs one linear operation per call: skip if the
//! destination already exists, probe the server-advertised size, stream
//! the body to disk in chunks with progress reporting, then verify the
//! on-disk byte count against the advertised size. Any failure after the
//! destination file has been created removes it again, so a failed fetch
//! never leaves a partial file behind.
//!
//! The HTTP layer is abstracted behind [`HttpClient`] so tests can drive
//! the engine without a network; [`ReqwestClient`] is the production
//! implementation.

mod error;
mod fetcher;
mod http;
mod progress;

pub use error::{FetchError, Result};
pub use fetcher::{FetchOptions, FetchOutcome, Fetcher};
pub use http::{BoxStream, HttpClient};
pub use progress::Progress;

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;

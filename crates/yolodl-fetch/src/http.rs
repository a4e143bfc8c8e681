use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
///
/// The stream yields `Result<Bytes, E>` where E is the error type of the
/// HTTP client that produced it.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Asynchronous HTTP client abstraction.
///
/// This trait is the minimal seam the fetcher needs: a metadata probe for
/// the expected size and a streaming body opener. Implementations handle
/// their own redirect following and error mapping.
///
/// # Implementations
///
/// - [`ReqwestClient`]: production implementation using `reqwest`
/// - Mock implementations in the integration tests
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + 'static;

    /// Query the Content-Length header without downloading the body.
    ///
    /// Issues a HEAD request, following redirects. Returns `Ok(Some(n))`
    /// if the final response carries a parseable Content-Length,
    /// `Ok(None)` if the header is absent or malformed (e.g. chunked
    /// encoding), `Err(...)` if the request itself fails.
    fn content_length(
        &self,
        url: &str,
    ) -> impl Future<Output = std::result::Result<Option<u64>, Self::Error>> + Send;

    /// Open a streaming GET request and return the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (DNS failure, connection
    /// error) or if the server answers with a non-success HTTP status.
    /// Status checking happens here, before anything is written to disk.
    fn stream(
        &self,
        url: &str,
    ) -> impl Future<
        Output = std::result::Result<
            BoxStream<'static, std::result::Result<Bytes, Self::Error>>,
            Self::Error,
        >,
    > + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::error::{FetchError, Result};

    /// Production HTTP client implementation using reqwest.
    ///
    /// Uses the client defaults: redirects are followed (up to reqwest's
    /// limit of 10) and no request timeout is configured.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new client with default configuration.
        pub fn new() -> Result<Self> {
            let client = reqwest::Client::builder()
                .build()
                .map_err(|e| FetchError::Network(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn content_length(
            &self,
            url: &str,
        ) -> std::result::Result<Option<u64>, Self::Error> {
            let response = self.client.head(url).send().await?;
            let content_length = response
                .headers()
                .get(reqwest::header::CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());

            Ok(content_length)
        }

        async fn stream(
            &self,
            url: &str,
        ) -> std::result::Result<
            BoxStream<'static, std::result::Result<Bytes, Self::Error>>,
            Self::Error,
        > {
            let response = self.client.get(url).send().await?.error_for_status()?;

            Ok(Box::pin(response.bytes_stream()))
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;

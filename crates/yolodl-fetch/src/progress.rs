/// Represents the current state of a download operation.
///
/// Passed by reference to the progress callback after each chunk write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Number of bytes written to the destination file so far.
    pub bytes_downloaded: u64,

    /// Total expected bytes, if known from the Content-Length probe.
    ///
    /// `None` when the server doesn't advertise a length (e.g. chunked
    /// transfer encoding).
    pub total_bytes: Option<u64>,
}

impl Progress {
    /// Calculate the percentage of completion.
    ///
    /// Returns `None` if `total_bytes` is unknown or zero.
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        match self.total_bytes {
            Some(total) if total > 0 => {
                Some((self.bytes_downloaded as f64 / total as f64) * 100.0)
            }
            _ => None,
        }
    }
}

use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;
use yolodl_fetch::Progress;

const PB_STYLE: &str =
    "{spinner:.blue} {msg} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    let pb_style = match ProgressStyle::with_template(PB_STYLE) {
        Ok(pb_style) => pb_style.tick_chars(TICK).progress_chars(PB_CHARS),
        Err(_) => return None,
    };

    Some(pb_style)
});

/// Byte-scaled progress bar for a single download.
///
/// The bar starts without a length; the server-reported total is adopted
/// from the first progress event that carries one, so downloads without a
/// Content-Length still render as an unbounded bar.
#[derive(Clone)]
pub struct ProgressTracker {
    pb: ProgressBar,
}

impl ProgressTracker {
    pub fn new(label: String) -> Self {
        let pb = ProgressBar::no_length();
        if let Some(pb_style) = PB_TEMPLATE.as_ref() {
            pb.set_style(pb_style.clone());
        }
        pb.set_message(label);
        ProgressTracker { pb }
    }

    pub fn observe(&self, progress: &Progress) {
        if self.pb.length().is_none()
            && let Some(total) = progress.total_bytes
        {
            self.pb.set_length(total);
        }
        self.pb.set_position(progress.bytes_downloaded);
    }

    pub fn finish(&self) {
        self.pb.finish();
    }

    /// Remove the bar without leaving output (skip and failure paths).
    pub fn clear(&self) {
        self.pb.finish_and_clear();
    }
}

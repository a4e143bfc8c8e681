use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use yolodl_fetch::{FetchOptions, FetchOutcome, Fetcher, ReqwestClient};

use crate::cli::Args;
use crate::registry::ModelEntry;
use crate::tracker::ProgressTracker;

mod cli;
mod registry;
mod tracker;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let model = args.model;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(model.weights_filename()));

    // The outcome is summarized on the console only; the exit code stays
    // 0 either way.
    let _ok = run(model, &output).await;
}

async fn run(model: &ModelEntry, output: &Path) -> bool {
    match try_fetch(model, output).await {
        Ok(FetchOutcome::AlreadyPresent) => {
            println!("{} already exists, skipping download", output.display());
            true
        }
        Ok(FetchOutcome::Downloaded { bytes }) => {
            println!("successfully downloaded {} ({bytes} bytes)", output.display());
            true
        }
        Err(e) => {
            eprintln!("download of {} failed: {e:#}", model.name);
            false
        }
    }
}

async fn try_fetch(model: &ModelEntry, output: &Path) -> anyhow::Result<FetchOutcome> {
    let client = ReqwestClient::new().context("failed to build HTTP client")?;
    let fetcher = Fetcher::new(client);

    let tracker = ProgressTracker::new(format!("downloading {}", output.display()));
    let observer = tracker.clone();
    let options = FetchOptions::default().on_progress(move |p| observer.observe(p));

    let outcome = fetcher.fetch(model.url, output, options).await;
    match &outcome {
        Ok(FetchOutcome::Downloaded { .. }) => tracker.finish(),
        _ => tracker.clear(),
    }

    Ok(outcome?)
}

use std::path::PathBuf;

use clap::Parser;

use crate::registry::{self, DEFAULT_MODEL, ModelEntry};

/// Download YOLOv9 pretrained weights.
///
/// Invoked with no arguments this downloads the yolov9-c checkpoint to
/// ./yolov9-c.pt.
#[derive(Debug, Parser)]
#[command(name = "yolodl", version)]
pub struct Args {
    /// Model to download.
    #[arg(long, default_value = DEFAULT_MODEL, value_parser = parse_model)]
    pub model: &'static ModelEntry,

    /// Destination path, defaults to <model>.pt in the current directory.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

fn parse_model(name: &str) -> Result<&'static ModelEntry, String> {
    registry::lookup(name).ok_or_else(|| {
        let known: Vec<_> = registry::names().collect();
        format!("unknown model '{name}', expected one of: {}", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_selects_the_default() {
        let args = Args::parse_from(["yolodl"]);
        assert_eq!(args.model.name, "yolov9-c");
        assert!(args.output.is_none());
    }

    #[test]
    fn model_and_output_are_selectable() {
        let args = Args::parse_from(["yolodl", "--model", "yolov9-s", "--output", "weights/s.pt"]);
        assert_eq!(args.model.name, "yolov9-s");
        assert_eq!(args.output, Some(PathBuf::from("weights/s.pt")));
    }

    #[test]
    fn unknown_model_lists_known_names() {
        let err = Args::try_parse_from(["yolodl", "--model", "yolov5-x"]).unwrap_err();
        assert!(err.to_string().contains("yolov9-c"));
    }
}

//! The fixed table of downloadable YOLOv9 models.
//!
//! Three pretrained checkpoints are published with the upstream v0.1
//! release; the table is compiled in and read-only.

/// One row of the model table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelEntry {
    pub name: &'static str,
    pub url: &'static str,
}

impl ModelEntry {
    /// File name the weights are saved under by default.
    pub fn weights_filename(&self) -> String {
        format!("{}.pt", self.name)
    }
}

/// Model downloaded when no `--model` is given.
pub const DEFAULT_MODEL: &str = "yolov9-c";

pub const MODELS: [ModelEntry; 3] = [
    ModelEntry {
        name: "yolov9-c",
        url: "https://github.com/WongKinYiu/yolov9/releases/download/v0.1/yolov9-c.pt",
    },
    ModelEntry {
        name: "yolov9-e",
        url: "https://github.com/WongKinYiu/yolov9/releases/download/v0.1/yolov9-e.pt",
    },
    ModelEntry {
        name: "yolov9-s",
        url: "https://github.com/WongKinYiu/yolov9/releases/download/v0.1/yolov9-s.pt",
    },
];

pub fn lookup(name: &str) -> Option<&'static ModelEntry> {
    MODELS.iter().find(|m| m.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    MODELS.iter().map(|m| m.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_in_table() {
        let entry = lookup(DEFAULT_MODEL).unwrap();
        assert_eq!(entry.name, "yolov9-c");
        assert!(entry.url.ends_with("yolov9-c.pt"));
    }

    #[test]
    fn unknown_model_is_rejected() {
        assert!(lookup("yolov8-n").is_none());
    }

    #[test]
    fn weights_filename_follows_model_name() {
        assert_eq!(
            lookup("yolov9-e").unwrap().weights_filename(),
            "yolov9-e.pt"
        );
    }
}

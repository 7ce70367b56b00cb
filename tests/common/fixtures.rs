//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use ascedit::assets::AssetLoader;
use ascedit::models::AppConfig;
use tempfile::TempDir;

/// Palette used by integration tests
pub const PALETTE_YAML: &str = r##"palette:
  ink: "#102030"
  paper: "rgb(250, 245, 230)"
  glass: "rgba(0, 128, 255, 64)"
  Highlight: "#ff0"
  blank: "rgb()"
output:
  formats: [rgb, hsvf]
  precision: 2
"##;

/// A config file written to a temporary directory
pub struct TestConfig {
    dir: TempDir,
    path: PathBuf,
}

impl TestConfig {
    /// Write `yaml` as config.yaml in a fresh temp dir
    pub fn with_yaml(yaml: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        Self { dir, path }
    }

    pub fn new() -> Self {
        Self::with_yaml(PALETTE_YAML)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn loader(&self) -> AssetLoader {
        AssetLoader::new(Some(self.path.clone()))
    }

    pub fn load(&self) -> AppConfig {
        AppConfig::load_from_assets(&self.loader())
    }
}

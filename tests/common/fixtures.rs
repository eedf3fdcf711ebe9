//! Test fixtures: throwaway input/output directories and sample binaries.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Sample inputs named after the formats the tool is typically pointed at
pub mod samples {
    /// 3 triples: one red, one green, one blue pixel
    pub const RGB_TRIPLES: &[u8] = &[255, 0, 0, 0, 255, 0, 0, 0, 255];

    /// Bytes resembling a small Atari 2600 cartridge header
    pub fn cartridge(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 37 % 251) as u8).collect()
    }
}

/// Temporary input and output directories for one test
pub struct Workspace {
    root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir(root.path().join("in")).expect("Failed to create input dir");
        Self { root }
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.path().join("in")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write an input file and return its path
    pub fn add_input(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.input_dir().join(name);
        fs::write(&path, bytes).expect("Failed to write input");
        path
    }

    /// Write a config file at the workspace root and return its path
    pub fn add_config(&self, yaml: &str) -> PathBuf {
        let path = self.root.path().join("bin2art.yaml");
        fs::write(&path, yaml).expect("Failed to write config");
        path
    }
}

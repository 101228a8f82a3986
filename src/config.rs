use std::path::{Path, PathBuf};

const DEFAULT_DATA_FILE: &str = "data.json";

/// Runtime settings. The binary always runs with [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Path of the JSON file holding all transactions.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

use std::path::PathBuf;

pub const DEFAULT_DATABASE: &str = "data.db";
pub const DEFAULT_REPORT: &str = "metadata.csv";
pub const DEFAULT_EXTENSION: &str = "xlsx";

/// Output locations and input filter for a conversion run.
///
/// Defaults write `data.db` and `metadata.csv` relative to the current
/// working directory and pick up `*.xlsx` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub database: PathBuf,
    pub report: PathBuf,
    pub extension: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            report: PathBuf::from(DEFAULT_REPORT),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ConvertConfig {
    /// Places both outputs under `dir`, keeping their default file names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            database: dir.join(DEFAULT_DATABASE),
            report: dir.join(DEFAULT_REPORT),
            ..Self::default()
        }
    }
}

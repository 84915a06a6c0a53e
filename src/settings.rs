use std::path::{Path, PathBuf};
use std::time::Duration;

const DATA_FILE: &str = "data/data1.0.json";
const IMG_DIR: &str = "img";
const BASE_URL: &str = "https://www.satisfactorytools.com/assets/images/items/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Run configuration. The defaults are the fixed paths the tool has always
/// used; tests inject temp directories and local endpoints instead.
#[derive(Debug, Clone)]
pub struct Settings {
    data_file: PathBuf,
    img_dir: PathBuf,
    base_url: String,
    request_timeout: Duration,
}

impl Settings {
    pub fn new(
        data_file: impl Into<PathBuf>,
        img_dir: impl Into<PathBuf>,
        base_url: impl Into<String>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            data_file: data_file.into(),
            img_dir: img_dir.into(),
            base_url: base_url.into(),
            request_timeout,
        }
    }

    // Borrowing getters (no clones).
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn img_dir(&self) -> &Path {
        &self.img_dir
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DATA_FILE, IMG_DIR, BASE_URL, REQUEST_TIMEOUT)
    }
}

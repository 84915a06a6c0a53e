use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};

use crate::settings::Settings;

const USER_AGENT: &str = "item-icons-downloader-rust/1.0";

/// Outcome of a single icon fetch. Transport-level faults (timeout, DNS,
/// connection reset) are reported through `Err` instead so callers can attach
/// the request context to the log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The file was already on disk; no request was made.
    AlreadyCached,
    /// HTTP 200, body written to the cache directory.
    Downloaded,
    /// Any non-200 status, redirect statuses included. Nothing written.
    Failed(StatusCode),
}

/// Build the asset filename for an icon identifier.
pub fn icon_filename(icon: &str) -> String {
    format!("{icon}_64.png")
}

/// Resolve the download URL against the configured base, falling back to
/// string concatenation when the base is not parseable as a URL.
pub fn icon_url(base_url: &str, filename: &str) -> String {
    Url::parse(base_url)
        .and_then(|base| base.join(filename))
        .map(|u| u.into())
        .unwrap_or_else(|_| format!("{base_url}{filename}"))
}

/// Fetches icons into the cache directory through one shared HTTP client
/// carrying the fixed request timeout.
pub struct IconFetcher {
    client: Client,
    base_url: String,
    img_dir: PathBuf,
}

impl IconFetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url().to_string(),
            img_dir: settings.img_dir().to_path_buf(),
        })
    }

    /// Where the cached copy of `filename` lives (or would live).
    pub fn cache_path(&self, filename: &str) -> PathBuf {
        self.img_dir.join(filename)
    }

    /// Fetch one icon. Existence of the cache file is the sole validity
    /// signal: a present file short-circuits before any network activity, and
    /// a given icon value is written at most once across runs.
    pub async fn fetch(&self, icon: &str) -> Result<FetchOutcome> {
        let filename = icon_filename(icon);
        let out_path = self.cache_path(&filename);

        if out_path.exists() {
            return Ok(FetchOutcome::AlreadyCached);
        }

        let url = icon_url(&self.base_url, &filename);
        let res = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = res.status();
        if status != StatusCode::OK {
            return Ok(FetchOutcome::Failed(status));
        }

        let bytes = res
            .bytes()
            .await
            .with_context(|| format!("read body from {url}"))?;

        write_full(&out_path, &bytes)?;

        Ok(FetchOutcome::Downloaded)
    }
}

/// Single-shot write of the full response body. Write to a tmp file then
/// rename; a failed write leaves no half-written `.png` behind.
fn write_full(dest_path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = dest_path.with_extension("download");
    let mut file =
        fs::File::create(&tmp).with_context(|| format!("create file {}", tmp.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("write file {}", tmp.display()))?;
    drop(file);

    fs::rename(&tmp, dest_path)
        .with_context(|| format!("move {} -> {}", tmp.display(), dest_path.display()))?;

    Ok(())
}

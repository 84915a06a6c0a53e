use std::fs;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog;
use crate::fetcher::{FetchOutcome, IconFetcher, icon_filename};
use crate::settings::Settings;

/// Per-run tally of item outcomes. `failed` counts non-200 responses,
/// `errors` counts transport-level faults; neither aborts the run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub downloaded: usize,
    pub cached: usize,
    pub failed: usize,
    pub errors: usize,
    pub skipped: usize,
}

fn item_progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template(
        "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} icons",
    )
    .context("build progress style")?
    .progress_chars("#>-");
    pb.set_style(style);
    Ok(pb)
}

/// Run the whole batch: ensure the cache directory, load the catalogue, then
/// walk every item exactly once. Setup failures abort with `Err`; per-item
/// failures only show up in the log and the returned summary.
pub async fn run(settings: &Settings) -> Result<RunSummary> {
    fs::create_dir_all(settings.img_dir())
        .with_context(|| format!("create dir {}", settings.img_dir().display()))?;

    let catalog = catalog::load_from_file(settings.data_file())
        .with_context(|| format!("load catalogue from {}", settings.data_file().display()))?;
    let items = catalog.items();

    println!("Found {} items to process.", items.len());

    let fetcher = IconFetcher::new(settings)?;
    let pb = item_progress_bar(items.len() as u64)?;
    let mut summary = RunSummary {
        total: items.len(),
        ..RunSummary::default()
    };

    for (class_name, item) in items {
        let Some(icon) = item.icon() else {
            pb.println(format!("No icon found for item '{class_name}', skipping."));
            summary.skipped += 1;
            pb.inc(1);
            continue;
        };

        let filename = icon_filename(icon);
        match fetcher.fetch(icon).await {
            Ok(FetchOutcome::AlreadyCached) => {
                pb.println(format!("Exists: {}", fetcher.cache_path(&filename).display()));
                summary.cached += 1;
            }
            Ok(FetchOutcome::Downloaded) => {
                pb.println(format!("Downloaded: {filename}"));
                summary.downloaded += 1;
            }
            Ok(FetchOutcome::Failed(status)) => {
                pb.println(format!("Failed ({}): {filename}", status.as_u16()));
                summary.failed += 1;
            }
            Err(err) => {
                pb.println(format!("Error downloading {filename}: {err:#}"));
                summary.errors += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    Ok(summary)
}

use anyhow::Result;

use item_icons_downloader::runner;
use item_icons_downloader::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::default();

    let summary = runner::run(&settings).await?;

    println!(
        "Done: {} downloaded, {} cached, {} failed, {} errors, {} skipped.",
        summary.downloaded, summary.cached, summary.failed, summary.errors, summary.skipped
    );

    Ok(())
}

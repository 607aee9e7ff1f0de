use chrono::Local;
use clap::Parser;
use pagesift::{cli::Cli, info_time, process, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let cli = Cli::parse();
    process::run(cli).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}

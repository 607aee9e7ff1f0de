use std::path::{Path, PathBuf};

use chrono::Local;

use crate::cli::{Cli, Command, DEFAULT_SNIPPET_SELECTORS};
use crate::extract::{ExtractJob, Rule};
use crate::inspect::{self, BlockRules};
use crate::load::Document;
use crate::{info_time, Result};

/// Fixed line for a run that found nothing. Distinct from the numbered-list
/// format so an empty run is recognizable at a glance.
pub const NO_MATCH_MESSAGE: &str =
    "No matching labels found; inspect the page and adjust the selectors.";

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Blocks {
            file,
            block_selector,
            heading_selector,
            snippet_selector,
        } => {
            let rules = BlockRules {
                blocks: block_selector,
                heading: heading_selector,
                snippet: snippet_selector,
            };
            run_blocks(file, rules).await
        }
        Command::Selectors { file, selectors } => run_selectors(file, selectors).await,
        Command::Labels {
            file,
            keywords,
            max,
            raw,
            selector,
            attribute,
            pattern,
        } => {
            let rule = if raw {
                Rule::pattern(pattern)
            } else {
                Rule::attribute(selector, attribute)
            };
            let job = ExtractJob {
                input: file,
                rules: vec![rule],
                keywords,
                max_results: (max > 0).then_some(max),
            };
            run_labels(job).await
        }
    }
}

async fn run_blocks(file: PathBuf, rules: BlockRules) -> Result<()> {
    let start_time = Local::now();
    let doc = load(&file).await?;
    let reports = inspect::scan_blocks(&doc, rules).await?;

    println!("blocks {}", reports.len());
    for report in &reports {
        if report.has_snippet {
            println!("snippet found for {}", report.title);
        } else {
            println!("no snippet {}", report.title);
        }
    }

    info_time!(start_time, "Scanned {} blocks", reports.len());
    Ok(())
}

async fn run_selectors(file: PathBuf, selectors: Vec<String>) -> Result<()> {
    let start_time = Local::now();
    let selectors = if selectors.is_empty() {
        DEFAULT_SNIPPET_SELECTORS
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        selectors
    };

    let doc = load(&file).await?;
    let counts = inspect::count_selectors(&doc, selectors).await?;
    for entry in &counts {
        println!("{} {}", entry.selector, entry.count);
    }

    info_time!(start_time, "Probed {} selectors", counts.len());
    Ok(())
}

async fn run_labels(job: ExtractJob) -> Result<()> {
    let start_time = Local::now();
    let doc = load(&job.input).await?;
    let labels = job.run_on(&doc).await?;

    if labels.is_empty() {
        println!("{NO_MATCH_MESSAGE}");
    } else {
        for (idx, label) in labels.iter().enumerate() {
            println!("{}. {}", idx + 1, label);
        }
    }

    info_time!(start_time, "Extracted {} labels", labels.len());
    Ok(())
}

async fn load(path: &Path) -> Result<Document> {
    let doc = Document::load(path).await?;
    info_time!("Loaded {} ({} bytes)", doc.path().display(), doc.len());
    Ok(doc)
}

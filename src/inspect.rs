use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::extract::create_selector;
use crate::load::Document;
use crate::Result;

/// Placeholder reported for a block without a heading.
pub const NO_TITLE: &str = "No title";

/// Match count of one probed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorCount {
    pub selector: String,
    pub count: usize,
}

/// One result block: its heading text and whether a snippet selector
/// matched a descendant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockReport {
    pub title: String,
    pub has_snippet: bool,
}

/// Selector triple driving the block scan.
#[derive(Debug, Clone)]
pub struct BlockRules {
    /// Grouped selector matching the candidate result blocks.
    pub blocks: String,
    /// Heading looked up inside each block for the report label.
    pub heading: String,
    /// Snippet selector each block is checked against.
    pub snippet: String,
}

/// Reports, per selector, how many elements it matches. One count per
/// selector, in the given order. A selector matching nothing is a zero,
/// not an error; a selector that won't parse is.
pub async fn count_selectors(doc: &Document, selectors: Vec<String>) -> Result<Vec<SelectorCount>> {
    let html = doc.share();
    spawn_blocking(move || count_selectors_in(&html, &selectors)).await?
}

fn count_selectors_in(raw: &str, selectors: &[String]) -> Result<Vec<SelectorCount>> {
    let tree = Html::parse_document(raw);

    let mut counts = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let sel = create_selector(selector)?;
        counts.push(SelectorCount {
            selector: selector.clone(),
            count: tree.select(&sel).count(),
        });
    }
    Ok(counts)
}

/// Classifies every result block on the page as has-snippet / no-snippet,
/// labelled by its heading text. Blocks come back in document order.
pub async fn scan_blocks(doc: &Document, rules: BlockRules) -> Result<Vec<BlockReport>> {
    let html = doc.share();
    spawn_blocking(move || scan_blocks_in(&html, &rules)).await?
}

fn scan_blocks_in(raw: &str, rules: &BlockRules) -> Result<Vec<BlockReport>> {
    let block_sel = create_selector(&rules.blocks)?;
    let heading_sel = create_selector(&rules.heading)?;
    let snippet_sel = create_selector(&rules.snippet)?;

    let tree = Html::parse_document(raw);
    let mut reports = Vec::new();
    for block in tree.select(&block_sel) {
        reports.push(BlockReport {
            title: heading_text(block, &heading_sel),
            has_snippet: block.select(&snippet_sel).next().is_some(),
        });
    }
    Ok(reports)
}

/// First heading descendant's trimmed text, or the placeholder.
fn heading_text(block: ElementRef, heading_sel: &Selector) -> String {
    match block.select(heading_sel).next() {
        Some(heading) => {
            let text = heading.text().collect::<String>();
            let text = text.trim();
            if text.is_empty() {
                NO_TITLE.to_owned()
            } else {
                text.to_owned()
            }
        }
        None => NO_TITLE.to_owned(),
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

// Selector lists the saved pages were last inspected with. Only defaults;
// every one can be overridden on the command line.
pub const DEFAULT_BLOCK_SELECTOR: &str =
    "#search .tF2Cxc, #search .Gx5Zad, #search .kvH3mc, #search .Ww4FFb";
pub const DEFAULT_HEADING_SELECTOR: &str = "h3";
pub const DEFAULT_SNIPPET_SELECTOR: &str = ".VwiC3b, .yXK7lf, .MUxGbd span, .st";
pub const DEFAULT_SNIPPET_SELECTORS: &[&str] = &[".VwiC3b", ".yXK7lf", ".MUxGbd span", ".st"];
pub const DEFAULT_LABEL_SELECTOR: &str = "div[aria-label]";
pub const DEFAULT_LABEL_ATTR: &str = "aria-label";
pub const DEFAULT_LABEL_PATTERN: &str = r#"aria-label="([^"]+)""#;

#[derive(Debug, Parser)]
#[command(
    name = "pagesift",
    about = "Offline inspector for saved search and map listing pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count result blocks on a saved search page and check each for a snippet
    Blocks {
        /// Saved HTML page to inspect
        file: PathBuf,
        /// Selector matching the candidate result blocks
        #[arg(long = "blocks", value_name = "CSS", default_value = DEFAULT_BLOCK_SELECTOR)]
        block_selector: String,
        /// Selector for the heading identifying each block
        #[arg(long = "heading", value_name = "CSS", default_value = DEFAULT_HEADING_SELECTOR)]
        heading_selector: String,
        /// Selector that should match a snippet inside each block
        #[arg(long = "snippet", value_name = "CSS", default_value = DEFAULT_SNIPPET_SELECTOR)]
        snippet_selector: String,
    },
    /// Report how many elements each candidate selector matches
    Selectors {
        /// Saved HTML page to inspect
        file: PathBuf,
        /// Selectors to probe, in order. Defaults to the known snippet selectors.
        #[arg(long = "selector", value_name = "CSS")]
        selectors: Vec<String>,
    },
    /// Extract keyword-filtered labels from a saved listing page
    Labels {
        /// Saved HTML page to inspect
        file: PathBuf,
        /// Keep only labels containing one of these words (case-insensitive)
        #[arg(short, long = "keyword", value_name = "WORD")]
        keywords: Vec<String>,
        /// Stop after this many labels. If set to 0 the limit is lifted.
        #[arg(short, long, default_value_t = 5)]
        max: usize,
        /// Scan the raw text with the fallback pattern instead of parsing the markup
        #[arg(long)]
        raw: bool,
        /// Selector for label-bearing elements
        #[arg(long, value_name = "CSS", default_value = DEFAULT_LABEL_SELECTOR)]
        selector: String,
        /// Attribute holding the label
        #[arg(long, value_name = "NAME", default_value = DEFAULT_LABEL_ATTR)]
        attribute: String,
        /// Fallback pattern for --raw; capture group 1 is the label
        #[arg(long, value_name = "REGEX", default_value = DEFAULT_LABEL_PATTERN)]
        pattern: String,
    },
}

use std::path::PathBuf;

use regex::Regex;
use scraper::{Html, Selector};
use tokio::task::spawn_blocking;

use crate::load::Document;
use crate::{Error, Result};

/// What to read off a structurally matched element.
#[derive(Debug, Clone)]
pub enum Target {
    /// The element's trimmed text content.
    Text,
    /// The value of the named attribute.
    Attr(String),
}

/// One candidate-selection rule. Rules run in the order given; candidates
/// come out in document order (structural) or match order (textual).
#[derive(Debug, Clone)]
pub enum Rule {
    /// Select elements in the parsed tree by CSS selector.
    Structural { selector: String, target: Target },
    /// Scan the raw text; capture group 1 is the candidate value.
    Textual { pattern: String },
}

impl Rule {
    pub fn text(selector: impl Into<String>) -> Self {
        Rule::Structural {
            selector: selector.into(),
            target: Target::Text,
        }
    }

    pub fn attribute(selector: impl Into<String>, attr: impl Into<String>) -> Self {
        Rule::Structural {
            selector: selector.into(),
            target: Target::Attr(attr.into()),
        }
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Rule::Textual {
            pattern: pattern.into(),
        }
    }
}

/// Everything one extraction run needs, spelled out instead of living in
/// module-level constants: the input page, the rule list, the keyword
/// filter and the result bound.
#[derive(Debug, Clone)]
pub struct ExtractJob {
    pub input: PathBuf,
    pub rules: Vec<Rule>,
    pub keywords: Vec<String>,
    /// `None` lifts the bound.
    pub max_results: Option<usize>,
}

impl ExtractJob {
    /// Runs the rule list against an already loaded document.
    ///
    /// Parsing and selecting are CPU-bound, so the pass runs on the
    /// blocking pool with the raw page shared in via `Arc`.
    ///
    /// `Ok` with an empty `Vec` means the run succeeded and nothing
    /// matched; only unusable rules and dead tasks surface as `Err`.
    pub async fn run_on(&self, doc: &Document) -> Result<Vec<String>> {
        let html = doc.share();
        let rules = self.rules.clone();
        let filter = KeywordFilter::new(&self.keywords);
        let max = self.max_results;

        spawn_blocking(move || sift(&html, &rules, &filter, max)).await?
    }
}

/// Case-insensitive OR filter over a keyword set. An empty set keeps
/// everything.
#[derive(Debug, Clone)]
pub struct KeywordFilter(Vec<String>);

impl KeywordFilter {
    pub fn new(keywords: &[String]) -> Self {
        Self(keywords.iter().map(|kw| kw.to_lowercase()).collect())
    }

    pub fn accepts(&self, candidate: &str) -> bool {
        if self.0.is_empty() {
            return true;
        }
        let candidate = candidate.to_lowercase();
        self.0.iter().any(|kw| candidate.contains(kw))
    }
}

/// Applies the rules in order, trimming, filtering and bounding as it goes.
/// The tree is only built if a structural rule actually runs.
fn sift(raw: &str, rules: &[Rule], filter: &KeywordFilter, max: Option<usize>) -> Result<Vec<String>> {
    let cap = max.unwrap_or(usize::MAX);
    let mut kept = Vec::new();
    let mut tree: Option<Html> = None;

    for rule in rules {
        if kept.len() >= cap {
            break;
        }
        match rule {
            Rule::Structural { selector, target } => {
                let sel = create_selector(selector)?;
                let tree = tree.get_or_insert_with(|| Html::parse_document(raw));
                for element in tree.select(&sel) {
                    let value = match target {
                        Target::Text => element.text().collect::<String>(),
                        Target::Attr(name) => {
                            element.value().attr(name).unwrap_or_default().to_owned()
                        }
                    };
                    if keep(&mut kept, &value, filter, cap) {
                        break;
                    }
                }
            }
            Rule::Textual { pattern } => {
                let re = Regex::new(pattern)?;
                for caps in re.captures_iter(raw) {
                    let value = caps.get(1).map_or("", |m| m.as_str());
                    if keep(&mut kept, value, filter, cap) {
                        break;
                    }
                }
            }
        }
    }
    Ok(kept)
}

/// Trim, filter, collect. Returns true once the bound is hit.
fn keep(kept: &mut Vec<String>, value: &str, filter: &KeywordFilter, cap: usize) -> bool {
    let value = value.trim();
    if !value.is_empty() && filter.accepts(value) {
        kept.push(value.to_owned());
    }
    kept.len() >= cap
}

#[inline]
pub(crate) fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::BadSelector(sel_str.into()))
}

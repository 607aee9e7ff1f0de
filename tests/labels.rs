//! End-to-end label extraction through a real file on disk.

use std::path::PathBuf;

use pagesift::extract::{ExtractJob, Rule};
use pagesift::load::Document;
use pagesift::{Error, Result};

const LISTING_PAGE: &str = r#"<html><body>
    <div aria-label="Brasserie Léon, Paris"></div>
    <div aria-label="Café du Coin"></div>
    <div aria-label="Le Paris Brasserie"></div>
</body></html>"#;

const LABEL_PATTERN: &str = r#"aria-label="([^"]+)""#;

fn write_fixture(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, LISTING_PAGE).unwrap();
    path
}

fn job(input: PathBuf, rule: Rule) -> ExtractJob {
    ExtractJob {
        input,
        rules: vec![rule],
        keywords: vec!["Brasserie".to_owned(), "Paris".to_owned()],
        max_results: Some(5),
    }
}

#[tokio::test]
async fn structural_and_textual_extraction_agree() -> Result<()> {
    let path = write_fixture("pagesift_listing.html");
    let doc = Document::load(&path).await?;

    let structural = job(
        path.clone(),
        Rule::attribute("div[aria-label]", "aria-label"),
    );
    let textual = job(path, Rule::pattern(LABEL_PATTERN));

    let from_tree = structural.run_on(&doc).await?;
    let from_text = textual.run_on(&doc).await?;

    assert_eq!(from_tree, ["Brasserie Léon, Paris", "Le Paris Brasserie"]);
    assert_eq!(from_tree, from_text);
    Ok(())
}

#[tokio::test]
async fn zero_matches_is_a_result_not_an_error() -> Result<()> {
    let path = write_fixture("pagesift_listing_nomatch.html");
    let doc = Document::load(&path).await?;

    let mut probe = job(path, Rule::attribute("div[aria-label]", "aria-label"));
    probe.keywords = vec!["Pizzeria".to_owned()];

    let labels = probe.run_on(&doc).await?;
    assert!(labels.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_input_file_is_fatal() {
    let err = Document::load(std::path::Path::new("no/such/page.html"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ReadInput { .. }));
}

//! Pulls the embedded diagram block out of a platform HTML export.
//!
//! Exports wrap the diagram source in `<code class="language-mermaid">`
//! with HTML-escaped arrows. Extraction strips any markup inside the block
//! and unescapes entities, yielding the raw mini-language text.

use std::sync::LazyLock;

use quick_xml::escape::unescape;
use regex::Regex;
use thiserror::Error;

static DIAGRAM_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<code[^>]*class="[^"]*language-mermaid[^"]*"[^>]*>(.*?)</code>"#).unwrap()
});

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The export carries no embedded diagram block. Fatal for this one
    /// document; a batch reports it and moves on.
    #[error("no language-mermaid code block found")]
    NoDiagramBlock,
}

/// Extract the raw diagram text from an HTML export.
pub fn extract_diagram_source(html: &str) -> Result<String, ExtractError> {
    let block = DIAGRAM_BLOCK_RE
        .captures(html)
        .and_then(|captures| captures.get(1))
        .ok_or(ExtractError::NoDiagramBlock)?;

    let inner = strip_tags(block.as_str());
    match unescape(&inner) {
        Ok(unescaped) => Ok(unescaped.into_owned()),
        // Malformed entity: keep the raw text instead of failing the
        // document.
        Err(_) => Ok(inner),
    }
}

fn strip_tags(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

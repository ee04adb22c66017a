//! Restricted frontmatter parser for blog posts.
//!
//! Posts open with a small metadata block:
//!
//! ```text
//! ---
//! title: "Hello, world"
//! date: 2024-03-05
//! tags: [rust, "static sites"]
//! # comments are skipped
//! ---
//! Body starts here.
//! ```
//!
//! This is deliberately not YAML. Each line is `key: value`, where the value is
//! either a scalar (optionally wrapped in matching quotes) or a single-level
//! bracketed list split on commas. There is no escaping, no nesting and no
//! multi-line value; input that needs any of those parses into something, but
//! not into what YAML would produce.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

const OPEN_FENCE: &str = "---\n";
const CLOSE_FENCE: &str = "\n---\n";

#[derive(Error, Debug, PartialEq)]
pub enum FrontmatterError {
    #[error("missing frontmatter delimited by --- at the top of the file")]
    MissingBlock,
    #[error("invalid frontmatter line (expected `key: value`): {0}")]
    InvalidLine(String),
}

/// A single frontmatter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            Value::Scalar(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{s:?}"),
            Value::List(items) => write!(f, "{items:?}"),
        }
    }
}

/// Parsed frontmatter: key → value. Later duplicate keys win.
pub type Frontmatter = BTreeMap<String, Value>;

/// Locate the frontmatter block at the very start of `text` and return its body
/// (the lines between the fences, without the surrounding newlines).
///
/// The opening fence must be the first line. The block ends at the first
/// `\n---\n` after it, so the closing fence needs a trailing newline.
pub fn extract_block(text: &str) -> Result<&str, FrontmatterError> {
    let rest = text
        .strip_prefix(OPEN_FENCE)
        .ok_or(FrontmatterError::MissingBlock)?;
    let end = rest.find(CLOSE_FENCE).ok_or(FrontmatterError::MissingBlock)?;
    Ok(&rest[..end])
}

/// Parse the frontmatter at the top of a post.
pub fn parse(text: &str) -> Result<Frontmatter, FrontmatterError> {
    let block = extract_block(text)?;
    let mut data = Frontmatter::new();

    for raw in block.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| FrontmatterError::InvalidLine(line.to_string()))?;
        data.insert(key.trim().to_string(), parse_value(value.trim()));
    }

    Ok(data)
}

fn parse_value(value: &str) -> Value {
    if let Some(inner) = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
    {
        let inner = inner.trim();
        if inner.is_empty() {
            return Value::List(Vec::new());
        }
        let items = inner
            .split(',')
            .map(|item| item.trim().trim_matches(is_quote).to_string())
            .collect();
        return Value::List(items);
    }

    Value::Scalar(unquote(value).to_string())
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Strip one pair of matching surrounding quotes. A lone quote character
/// collapses to the empty string.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value
                .get(1..value.len() - 1)
                .unwrap_or_default();
        }
    }
    value
}

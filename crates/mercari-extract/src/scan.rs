//! Heuristic search for product arrays in an unknown JSON tree.
//!
//! This is a discovery aid for a human reading the console, not a schema
//! check. Two rules fire:
//!
//! - **product-array**: a non-empty array whose *first* element is an object
//!   with a `name` or `title` key and a `price`, `prices` or `amount` key.
//!   Later elements are never inspected.
//! - **items-key**: any object key spelled exactly `items` whose value is an
//!   array, whatever the elements look like.
//!
//! Findings never stop the walk; every array and object is visited once, in
//! pre-order, using an explicit stack so deep documents cannot exhaust the
//! call stack.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::artifact::read_document;
use crate::error::ExtractError;

pub const DEFAULT_SAMPLE_SIZE: usize = 3;

const NAME_KEYS: [&str; 2] = ["name", "title"];
const PRICE_KEYS: [&str; 3] = ["price", "prices", "amount"];
const ITEMS_KEY: &str = "items";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Location of a node, root first. Displays dot-joined; the root is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath(Vec<PathSegment>);

impl JsonPath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend(self.0.iter().cloned());
        segments.push(segment);
        Self(segments)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    ProductArray,
    ItemsKey,
}

impl Heuristic {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Heuristic::ProductArray => "product-array",
            Heuristic::ItemsKey => "items-key",
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Heuristic::ProductArray => "Possible product array",
            Heuristic::ItemsKey => "Found items array",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanFinding {
    pub path: JsonPath,
    pub heuristic: Heuristic,
    /// Clones of the first few array elements.
    pub sample: Vec<Value>,
}

struct Frame<'a> {
    value: &'a Value,
    path: JsonPath,
    under_items_key: bool,
}

/// Walks `root` and returns every finding in pre-order.
///
/// For an `items` array, the items-key finding precedes a product-array
/// finding on the same node.
#[must_use]
pub fn scan_json_tree(root: &Value, sample_size: usize) -> Vec<ScanFinding> {
    let mut findings = Vec::new();
    let mut stack = vec![Frame {
        value: root,
        path: JsonPath::root(),
        under_items_key: false,
    }];

    while let Some(frame) = stack.pop() {
        match frame.value {
            Value::Array(elements) => {
                if frame.under_items_key {
                    findings.push(finding(&frame.path, Heuristic::ItemsKey, elements, sample_size));
                }
                if looks_like_product_array(elements) {
                    findings.push(finding(
                        &frame.path,
                        Heuristic::ProductArray,
                        elements,
                        sample_size,
                    ));
                }
                // Reversed so the first child is popped first.
                for (index, child) in elements.iter().enumerate().rev() {
                    stack.push(Frame {
                        value: child,
                        path: frame.path.child(PathSegment::Index(index)),
                        under_items_key: false,
                    });
                }
            }
            Value::Object(map) => {
                for (key, child) in map.iter().rev() {
                    stack.push(Frame {
                        value: child,
                        path: frame.path.child(PathSegment::Key(key.clone())),
                        under_items_key: key == ITEMS_KEY,
                    });
                }
            }
            _ => {}
        }
    }

    findings
}

fn looks_like_product_array(elements: &[Value]) -> bool {
    let Some(Value::Object(first)) = elements.first() else {
        return false;
    };
    NAME_KEYS.iter().any(|k| first.contains_key(*k))
        && PRICE_KEYS.iter().any(|k| first.contains_key(*k))
}

fn finding(
    path: &JsonPath,
    heuristic: Heuristic,
    elements: &[Value],
    sample_size: usize,
) -> ScanFinding {
    tracing::debug!(path = %path, heuristic = %heuristic, len = elements.len(), "scan finding");
    ScanFinding {
        path: path.clone(),
        heuristic,
        sample: elements.iter().take(sample_size).cloned().collect(),
    }
}

/// Console rendering of one finding: a heading line, the sample as indented
/// JSON, and a `---` separator.
///
/// # Errors
///
/// Returns [`ExtractError::Serialize`] if the sample cannot be serialized.
pub fn render_finding(finding: &ScanFinding) -> Result<String, ExtractError> {
    let sample = serde_json::to_string_pretty(&finding.sample)?;
    Ok(format!(
        "{} at {}\n{sample}\n---",
        finding.heuristic.heading(),
        finding.path
    ))
}

/// Reads and parses the JSON file at `path`, then scans it.
///
/// Parsing has no nesting limit; the parsed tree is torn down with
/// [`drop_iteratively`] once the walk is done.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] if the file cannot be read and
/// [`ExtractError::ParseFailure`] if it is not valid JSON.
pub fn scan_json_file(path: &Path, sample_size: usize) -> Result<Vec<ScanFinding>, ExtractError> {
    let text = read_document(path)?;
    let root = parse_unbounded(&text).map_err(|source| ExtractError::ParseFailure {
        path: PathBuf::from(path),
        source,
    })?;
    let findings = scan_json_tree(&root, sample_size);
    drop_iteratively(root);
    Ok(findings)
}

fn parse_unbounded(text: &str) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    // Grows the stack on demand while descending.
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Frees `value` without recursing into it. `Value`'s own `Drop` recurses
/// once per nesting level.
pub fn drop_iteratively(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(elements) => pending.extend(elements),
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, child)| child)),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod tests;

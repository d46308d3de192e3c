//! Item-card parsing over raw listing markup.
//!
//! Cards are recognised by a fixed structural signature rather than by
//! building a DOM: the outer `<div>` carries `id="m…"`, `data-itemprice` and
//! `data-itemstatus` in that order, and the card ends at the first literal
//! `</div></div></a></div>` after it. That terminator is tied to the current
//! listing markup; nested markup repeating the same four closes truncates the
//! card early.
//!
//! Per-card fields are independent, optional sub-matches inside the card body.
//! A failed sub-match leaves the field `None` and never drops the card.

use std::path::Path;
use std::sync::LazyLock;

use mercari_core::{ItemImage, ItemRecord};
use regex::{Captures, Regex};

use crate::artifact::{read_document, write_artifact};
use crate::error::ExtractError;

static ITEM_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<div id="(m[0-9]+)" data-itemprice="([0-9]+)" data-itemstatus="([^"]+)"[^>]*>((?s:.*?))</div></div></a></div>"#,
    )
    .expect("valid item block regex")
});

static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="([^"]+)""#).expect("valid href regex"));

// All four attributes, in this order, on one <img>.
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<img[^>]*alt="([^"]*)"[^>]*title="([^"]*)"[^>]*srcset="([^"]*)"[^>]*src="([^"]*)"[^>]*>"#,
    )
    .expect("valid image regex")
});

static PRICE_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-testid="ItemPrice"[^>]*>([^<]+)"#).expect("valid price text regex")
});

static DISCOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-testid="ItemDecorationRectangle"(?s:.*?)<p[^>]*>([^<]+)</p>"#)
        .expect("valid discount regex")
});

/// One outer match before field extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemBlock<'a> {
    pub id: &'a str,
    pub price_raw: &'a str,
    pub status: &'a str,
    pub inner: &'a str,
}

/// Scans `html` left to right for non-overlapping item blocks.
pub fn find_item_blocks(html: &str) -> impl Iterator<Item = ItemBlock<'_>> {
    ITEM_BLOCK_RE.captures_iter(html).map(|cap| ItemBlock {
        id: group(&cap, 1),
        price_raw: group(&cap, 2),
        status: group(&cap, 3),
        inner: group(&cap, 4),
    })
}

/// Parses every item card in `html`, in document order.
///
/// Duplicate ids are kept as separate records. An empty result is not an
/// error.
#[must_use]
pub fn parse_items(html: &str) -> Vec<ItemRecord> {
    find_item_blocks(html).filter_map(parse_block).collect()
}

/// Builds a record from one block. Returns `None` only when the price digits
/// overflow `u64`.
#[must_use]
pub fn parse_block(block: ItemBlock<'_>) -> Option<ItemRecord> {
    let Ok(price_cents) = block.price_raw.parse::<u64>() else {
        tracing::warn!(
            id = block.id,
            price = block.price_raw,
            "skipping item block: price out of range"
        );
        return None;
    };

    let mut item = ItemRecord::new(block.id, block.status, price_cents);
    item.price_text = first_capture(&PRICE_TEXT_RE, block.inner);
    item.href = first_capture(&HREF_RE, block.inner);
    item.image = extract_image(block.inner);
    item.discount = first_capture(&DISCOUNT_RE, block.inner);
    Some(item)
}

fn extract_image(inner: &str) -> Option<ItemImage> {
    let cap = IMAGE_RE.captures(inner)?;
    Some(ItemImage {
        alt: group(&cap, 1).to_string(),
        title: group(&cap, 2).to_string(),
        srcset: group(&cap, 3).to_string(),
        src: group(&cap, 4).to_string(),
    })
}

fn first_capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

fn group<'h>(cap: &Captures<'h>, index: usize) -> &'h str {
    cap.get(index).map_or("", |m| m.as_str())
}

/// Reads `input_path`, parses all item cards and writes them to
/// `output_path` as a 2-space indented JSON array.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] if the input cannot be read or the output
/// cannot be written.
pub fn parse_items_file(input_path: &Path, output_path: &Path) -> Result<usize, ExtractError> {
    let html = read_document(input_path)?;
    let items = parse_items(&html);
    let json = serde_json::to_string_pretty(&items)?;
    write_artifact(output_path, &json)?;
    Ok(items.len())
}

#[cfg(test)]
#[path = "items_test.rs"]
mod tests;

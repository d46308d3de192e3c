//! Brand dataset extraction from `item-cell` list entries.
//!
//! Produces the lighter [`BrandItem`] shape used for curated brand datasets.
//! Like [`crate::items`], cells are found by text signatures, not a DOM: a
//! cell runs from `<li … data-testid="item-cell" …>` to the next `</li>`, and
//! its link region runs from the thumbnail anchor to the end of the cell.

use std::path::Path;
use std::sync::LazyLock;

use mercari_core::brands::{format_yen, FALLBACK_TITLE};
use mercari_core::{BrandImage, BrandItem};
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::artifact::{read_document, write_artifact_creating_dirs};
use crate::error::ExtractError;
use crate::text::{attr_value, clean_decoded_text, decode_entities, has_class_token};

static ITEM_CELL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<li\b[^>]*\bdata-testid="item-cell"[^>]*>(.*?)</li>"#)
        .expect("valid item cell regex")
});
static ANCHOR_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b[^>]*>").expect("valid anchor regex"));
static DIV_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<div\b[^>]*>").expect("valid div regex"));
static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("valid img regex"));
static ITEM_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<([a-z][a-z0-9]*)\b[^>]*\bdata-testid="thumbnail-item-name"[^>]*>"#)
        .expect("valid item name regex")
});
static PRICE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<(span)\b[^>]*\bclass="[^"]*number__[^"]*"[^>]*>"#)
        .expect("valid price span regex")
});

const THUMBNAIL_LINK: &str = "thumbnail-link";
const THUMBNAIL_CLASS: &str = "merItemThumbnail";

#[derive(Debug, Clone)]
pub struct BrandOptions {
    /// Relative hrefs are joined onto this when present.
    pub base_url: Option<Url>,
    /// Stop after this many records. `None` or `Some(0)` keeps everything.
    pub limit: Option<usize>,
    /// Spaces per JSON indentation level.
    pub indent: usize,
}

impl Default for BrandOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            limit: None,
            indent: 2,
        }
    }
}

/// Extracts brand items from every `item-cell` in `html`, in document order.
#[must_use]
pub fn extract_brand_items(
    html: &str,
    base_url: Option<&Url>,
    limit: Option<usize>,
) -> Vec<BrandItem> {
    let limit = limit.filter(|&n| n > 0);
    let mut results = Vec::new();

    for cap in ITEM_CELL_RE.captures_iter(html) {
        let Some(cell) = cap.get(1).map(|m| m.as_str()) else {
            continue;
        };
        let Some(item) = parse_cell(cell, base_url) else {
            continue;
        };
        results.push(item);
        if limit.is_some_and(|n| results.len() >= n) {
            break;
        }
    }

    results
}

fn parse_cell(cell: &str, base_url: Option<&Url>) -> Option<BrandItem> {
    let anchor = ANCHOR_TAG_RE
        .find_iter(cell)
        .find(|m| attr_value(m.as_str(), "data-testid") == Some(THUMBNAIL_LINK))?;
    let link = &cell[anchor.start()..];

    // Markup values are entity-encoded; record fields carry decoded text.
    let href = attr_value(anchor.as_str(), "href").map(decode_entities).unwrap_or_default();
    let full_href = resolve_href(&href, base_url);

    let thumb_id = DIV_TAG_RE
        .find_iter(link)
        .map(|m| m.as_str())
        .find(|tag| has_class_token(tag, THUMBNAIL_CLASS))
        .and_then(|tag| attr_value(tag, "id"))
        .filter(|id| !id.is_empty())
        .map(decode_entities);
    let item_id = thumb_id.or_else(|| {
        href.trim_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
    });

    let img_tag = IMG_TAG_RE.find(link).map(|m| m.as_str());
    let image_src = img_tag
        .and_then(|t| attr_value(t, "src"))
        .map(decode_entities)
        .unwrap_or_default();
    let image_alt = img_tag
        .and_then(|t| attr_value(t, "alt"))
        .map(clean_decoded_text)
        .unwrap_or_default();

    let title = element_text(link, &ITEM_NAME_RE).unwrap_or_default();
    let price_text_raw = element_text(link, &PRICE_SPAN_RE).unwrap_or_default();

    if title.is_empty() && price_text_raw.is_empty() && image_src.is_empty() {
        return None;
    }

    let digits: String = price_text_raw.chars().filter(char::is_ascii_digit).collect();
    let price = digits.parse::<u64>().ok();
    let price_text = match price {
        Some(amount) => Some(format_yen(amount)),
        None if !price_text_raw.is_empty() => Some(price_text_raw.clone()),
        None => None,
    };

    let id = item_id.unwrap_or_else(|| {
        if title.is_empty() {
            image_src.clone()
        } else {
            title.clone()
        }
    });

    let display_title = if !title.is_empty() {
        title
    } else if !image_alt.is_empty() {
        image_alt.clone()
    } else {
        FALLBACK_TITLE.to_string()
    };

    let image = (!image_src.is_empty()).then(|| BrandImage {
        src: image_src,
        alt: (!image_alt.is_empty()).then_some(image_alt),
    });

    Some(BrandItem {
        id,
        title: display_title,
        href: full_href,
        price,
        price_text,
        image,
    })
}

fn resolve_href(href: &str, base_url: Option<&Url>) -> String {
    match base_url.map(|base| base.join(href)) {
        Some(Ok(joined)) => joined.to_string(),
        Some(Err(e)) => {
            tracing::debug!(href, error = %e, "could not resolve href against base");
            href.to_string()
        }
        None => href.to_string(),
    }
}

/// Cleaned text of the first element whose opening tag matches `open_re`.
///
/// Group 1 of `open_re` must capture the tag name. The element ends at the
/// next closing tag of that name, or at the end of `region`.
fn element_text(region: &str, open_re: &Regex) -> Option<String> {
    let cap = open_re.captures(region)?;
    let open = cap.get(0)?;
    let name = cap.get(1)?.as_str().to_ascii_lowercase();
    let rest = &region[open.end()..];
    let close = format!("</{name}");
    let end = rest
        .char_indices()
        .find(|&(i, _)| {
            rest.get(i..i + close.len())
                .is_some_and(|s| s.eq_ignore_ascii_case(&close))
        })
        .map_or(rest.len(), |(i, _)| i);
    Some(clean_decoded_text(&rest[..end]))
}

/// Reads `html_path`, extracts brand items and writes them to `out_path`,
/// creating parent directories as needed.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] on read or write failure.
pub fn extract_brand_file(
    html_path: &Path,
    out_path: &Path,
    options: &BrandOptions,
) -> Result<usize, ExtractError> {
    let html = read_document(html_path)?;
    let items = extract_brand_items(&html, options.base_url.as_ref(), options.limit);
    let json = to_json_with_indent(&items, options.indent)?;
    write_artifact_creating_dirs(out_path, &json)?;
    Ok(items.len())
}

fn to_json_with_indent<T: Serialize>(value: &T, indent: usize) -> Result<String, ExtractError> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
#[path = "brand_test.rs"]
mod tests;

use serde::Serialize;

/// Title used when a cell carries neither a name nor an image alt.
pub const FALLBACK_TITLE: &str = "商品";

/// One entry of a brand dataset built from `item-cell` list entries.
///
/// Unlike [`crate::ItemRecord`], absent optionals are omitted from the JSON
/// rather than written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandItem {
    pub id: String,
    pub title: String,
    /// Link resolved against the base URL when one was supplied.
    pub href: String,
    /// Whole-yen price parsed from the digits of the price label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<BrandImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandImage {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Formats a yen amount with comma thousands separators, e.g. `¥12,800`.
#[must_use]
pub fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    grouped.push('¥');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;

//! Embedded data island extraction.
//!
//! Server-rendered pages ship their hydration state as JSON inside a
//! `<script id="__NEXT_DATA__" …>` element. The payload is located purely by
//! text offsets and copied out byte for byte; it is never parsed here.
//!
//! The tag close is searched from the marker, not from the `<script` start,
//! so the marker is assumed to sit inside the opening tag's attribute list.
//! A literal `>` in an attribute value between `<script` and the marker will
//! therefore shift the content start. Generated pages never do this.

use std::ops::Range;
use std::path::Path;

use crate::artifact::{read_document, write_artifact};
use crate::error::ExtractError;

pub use mercari_core::config::DEFAULT_NEXT_DATA_MARKER;

const SCRIPT_OPEN: &str = "<script";
const SCRIPT_CLOSE: &str = "</script>";

/// Returns the byte range of the payload belonging to the first occurrence of
/// `marker`.
///
/// # Errors
///
/// - [`ExtractError::NotFound`] if `marker` does not occur in `html`.
/// - [`ExtractError::MalformedDocument`] if no `<script` precedes the marker,
///   no `>` follows it, or no `</script>` follows the tag close.
pub fn locate_next_data(html: &str, marker: &str) -> Result<Range<usize>, ExtractError> {
    let marker_index = html.find(marker).ok_or_else(|| ExtractError::NotFound {
        marker: marker.to_string(),
    })?;

    let open_tag_start = html[..marker_index]
        .rfind(SCRIPT_OPEN)
        .ok_or_else(|| ExtractError::malformed("unable to locate opening <script> tag"))?;

    let open_tag_end = html[marker_index..]
        .find('>')
        .map(|rel| marker_index + rel)
        .ok_or_else(|| ExtractError::malformed("unable to locate end of <script> tag"))?;

    let content_start = open_tag_end + 1;
    let content_end = html[content_start..]
        .find(SCRIPT_CLOSE)
        .map(|rel| content_start + rel)
        .ok_or_else(|| {
            ExtractError::malformed(format!("unable to find closing </script> tag for {marker}"))
        })?;

    tracing::debug!(
        marker,
        marker_index,
        open_tag_start,
        content_start,
        content_end,
        "located embedded data script"
    );

    Ok(content_start..content_end)
}

/// Returns the verbatim payload text for `marker`. No trimming is applied.
///
/// # Errors
///
/// Same as [`locate_next_data`].
pub fn extract_next_data<'a>(html: &'a str, marker: &str) -> Result<&'a str, ExtractError> {
    let range = locate_next_data(html, marker)?;
    Ok(&html[range])
}

/// Reads `html_path`, extracts the payload and writes it to `out_path`.
///
/// Returns the payload length in characters. Nothing is written when
/// extraction fails.
///
/// # Errors
///
/// Returns the extraction error, or [`ExtractError::Io`] if either file
/// operation fails.
pub fn extract_next_data_file(
    html_path: &Path,
    out_path: &Path,
    marker: &str,
) -> Result<usize, ExtractError> {
    let html = read_document(html_path)?;
    let payload = extract_next_data(&html, marker)?;
    write_artifact(out_path, payload)?;
    Ok(payload.chars().count())
}

#[cfg(test)]
#[path = "next_data_test.rs"]
mod tests;

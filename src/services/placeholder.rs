//! Synthetic image URLs for queries no provider could serve.

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/800x600/3B82F6/FFFFFF";

/// Generates `count` placeholder URLs, each embedding the URL-escaped
/// query so the rendered placeholder names what it stands in for.
///
/// Placeholders are deliberately never cached: they carry no search cost
/// worth saving, and a later retry should get another shot at real images.
#[must_use]
pub fn placeholder_urls(query: &str, count: usize) -> Vec<String> {
    let text = urlencoding::encode(query);
    (0..count)
        .map(|_| format!("{PLACEHOLDER_BASE}?text={text}"))
        .collect()
}

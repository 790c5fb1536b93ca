//! Tag Parsing
//!
//! Tag input arrives as one raw comma-separated string from the article
//! form. Entries are trimmed and empty entries dropped; order and
//! duplicates are preserved as entered.

/// Parse a raw comma-separated tag string into the stored tag list.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

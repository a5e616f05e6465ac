//! HTML entity helpers.

/// Turn literal `&amp;` sequences back into `&`.
///
/// The portal double-encodes query strings inside `src` attributes, so even
/// after the parser decodes entities once the value may still contain
/// `&amp;`.
pub fn unescape_amp(s: &str) -> String {
    s.replace("&amp;", "&")
}

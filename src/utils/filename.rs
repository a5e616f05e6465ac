//! Filesystem-safe names.

/// Longest name component kept, in characters.
const MAX_COMPONENT_CHARS: usize = 100;

/// Sanitize a string for use as (part of) a filename.
///
/// Path separators, characters rejected by common filesystems and control
/// characters become `_`.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .take(MAX_COMPONENT_CHARS)
        .collect::<String>()
        .trim()
        .trim_matches('_')
        .to_string()
}

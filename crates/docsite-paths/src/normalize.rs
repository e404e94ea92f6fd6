//! Percent-encoding of reserved route characters and lookup suggestions.

/// Whitespace as understood by the browser-side router (`\s` in its regex
/// dialect). Differs from [`char::is_whitespace`] on U+0085 and U+FEFF.
fn is_route_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Percent-encode the characters that break a hash-route fragment.
///
/// Every run of whitespace becomes a single `%20`, and `(`, `)`, `&` become
/// `%28`, `%29`, `%26`. Nothing else is touched, including percent sequences
/// already present in the input.
///
/// # Examples
///
/// ```
/// use docsite_paths::normalize_path;
///
/// assert_eq!(normalize_path("a b"), "a%20b");
/// assert_eq!(normalize_path("a \t b"), "a%20b");
/// assert_eq!(normalize_path("a(b)c&d"), "a%28b%29c%26d");
/// assert_eq!(normalize_path("a%20b"), "a%20b");
/// ```
pub fn normalize_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 8);
    let mut in_whitespace = false;

    // Substitution text never contains a later rule's trigger, so one pass
    // yields the same result as applying the four rules in sequence.
    for c in path.chars() {
        if is_route_whitespace(c) {
            if !in_whitespace {
                out.push_str("%20");
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        match c {
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '&' => out.push_str("%26"),
            _ => out.push(c),
        }
    }

    out
}

/// Whether [`normalize_path`] would change `path`.
pub fn needs_encoding(path: &str) -> bool {
    path.chars()
        .any(|c| is_route_whitespace(c) || matches!(c, '(' | ')' | '&'))
}

/// Return true if `path` is present and non-empty.
///
/// # Examples
///
/// ```
/// use docsite_paths::is_valid_path;
///
/// assert!(is_valid_path(Some("x")));
/// assert!(!is_valid_path(Some("")));
/// assert!(!is_valid_path(None));
/// ```
pub fn is_valid_path(path: Option<&str>) -> bool {
    path.is_some_and(|p| !p.is_empty())
}

/// Candidate paths to try after `path` failed to resolve.
///
/// Returns nothing for an absent or empty path. Otherwise returns exactly
/// three candidates in this order: the [normalized](normalize_path) form,
/// the path with all whitespace removed, and the lower-cased path. Entries
/// are not deduplicated.
///
/// No candidate is guaranteed to resolve.
pub fn suggested_paths(path: Option<&str>) -> Vec<String> {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        return Vec::new();
    };

    vec![
        normalize_path(path),
        path.chars().filter(|&c| !is_route_whitespace(c)).collect(),
        path.to_lowercase(),
    ]
}

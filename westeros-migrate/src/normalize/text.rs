//! String cleaning rules shared by every entity kind.
//!
//! The source data was scraped from wiki infoboxes, so multi-valued fields are
//! single strings joined with HTML line breaks, and names carry stray quotes and
//! parenthesized annotations. These functions are pure and independent; the
//! entity normalizers decide in which order to apply them.

use lazy_static::lazy_static;
use regex::Regex;

/// Line-break markers separating values in a multi-valued field, in the order
/// they are tried.
pub const MULTI_VALUE_MARKERS: [&str; 3] = ["<br>", "<br/>", "<br />"];

lazy_static! {
    // Greedy: spans from the first '(' to the last ')'.
    static ref PARENTHESIZED: Regex = Regex::new(r"\(.*\)").unwrap();
}

// ASCII whitespace including vertical tab and form feed; other Unicode
// spaces such as NBSP are content.
fn is_noise(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c' | '"' | '\'')
}

/// Strip leading and trailing ASCII whitespace and quote marks.
pub fn clean(entry: &str) -> &str {
    entry.trim_matches(is_noise)
}

/// Split `entry` on the first marker from [`MULTI_VALUE_MARKERS`] it contains.
///
/// Only that one marker is split on; an entry mixing `<br>` and `<br/>` keeps
/// the second kind inside its pieces. Without any marker the entry comes back
/// as the single piece.
pub fn split_multi_value(entry: &str) -> Vec<&str> {
    for marker in MULTI_VALUE_MARKERS {
        if entry.contains(marker) {
            return entry.split(marker).collect();
        }
    }

    vec![entry]
}

/// Remove matching `suffixes` from every entry and drop entries left empty.
///
/// Suffixes are tried in order against the progressively stripped value, so
/// every suffix that matches at its turn is removed. No trimming happens here.
pub fn strip_suffixes<I, S>(entries: I, suffixes: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let mut value = entry.as_ref();
            for suffix in suffixes {
                if let Some(stripped) = value.strip_suffix(*suffix) {
                    value = stripped;
                }
            }
            (!value.is_empty()).then(|| value.to_string())
        })
        .collect()
}

/// Remove the parenthesized part of a name.
///
/// Parentheses are not matched pairwise: everything from the first `(` to the
/// last `)` goes.
pub fn strip_parenthesized(name: &str) -> String {
    PARENTHESIZED.replace_all(name, "").into_owned()
}

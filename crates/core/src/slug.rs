//! URL slug derivation for curriculum entities.
//!
//! Courses, skills and lessons carry a slug. When the caller leaves it blank
//! the slug is derived from the title: lowercase the title, collapse every
//! run of non-word characters into a single hyphen, then trim hyphens from
//! both ends. Word characters are ASCII letters, digits and underscore.

use std::sync::LazyLock;

use regex::Regex;

/// Maximal run of characters that are not ASCII word characters.
const NON_WORD_RUN_PATTERN: &str = r"[^0-9A-Za-z_]+";

static NON_WORD_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NON_WORD_RUN_PATTERN).expect("valid regex"));

/// Derive a slug from a title.
///
/// # Examples
///
/// ```
/// use bandroom_core::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("Jazz & Blues!!"), "jazz-blues");
/// assert_eq!(slugify("A__B"), "a__b");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_WORD_RUN_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Return `slug` unchanged unless it is blank, in which case derive one
/// from `title`.
///
/// Caller-supplied slugs are not normalised or checked for format.
pub fn slug_or_derive(slug: &str, title: &str) -> String {
    if slug.trim().is_empty() {
        slugify(title)
    } else {
        slug.to_string()
    }
}

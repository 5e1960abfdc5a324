use crate::error::{PostError, Result};
use regex::Regex;
use std::sync::OnceLock;

static STRIP_RE: OnceLock<Regex> = OnceLock::new();
static COLLAPSE_RE: OnceLock<Regex> = OnceLock::new();

fn strip_re() -> &'static Regex {
    STRIP_RE.get_or_init(|| Regex::new(r"[^\w\s-]").unwrap())
}

fn collapse_re() -> &'static Regex {
    COLLAPSE_RE.get_or_init(|| Regex::new(r"[-\s]+").unwrap())
}

/// Derive a filename-safe slug from a post title.
///
/// Lower-cases the title, drops everything that is not a word character,
/// whitespace or a dash, collapses runs of dashes and whitespace into a single
/// dash and trims dashes from both ends. A title with nothing retainable
/// yields the empty string.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let stripped = strip_re().replace_all(&lower, "");
    let collapsed = collapse_re().replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// An empty slug would produce a bare-date filename; reject it instead.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(PostError::EmptyTitle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: &[&str] = &[
        "Hello, World! 2024",
        "   ---   ",
        "Rust & C++: a_b",
        "  leading and trailing  ",
        "multiple --- dashes   and\tspaces",
        "Café Crème",
        "-already-a-slug-",
        "!!!",
        "snake_case_title",
    ];

    #[test]
    fn basic_title() {
        assert_eq!(slugify("Hello, World! 2024"), "hello-world-2024");
    }

    #[test]
    fn punctuation_is_dropped_not_dashed() {
        assert_eq!(slugify("Rust & C++: a_b"), "rust-c-a_b");
        assert_eq!(slugify("don't stop"), "dont-stop");
    }

    #[test]
    fn runs_collapse_to_single_dash() {
        assert_eq!(slugify("multiple --- dashes   and\tspaces"), "multiple-dashes-and-spaces");
    }

    #[test]
    fn unicode_word_characters_survive() {
        assert_eq!(slugify("Café Crème"), "café-crème");
    }

    #[test]
    fn only_dashes_and_whitespace_is_empty() {
        assert_eq!(slugify("   ---   "), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn no_edge_dashes_or_whitespace() {
        for title in TITLES {
            let slug = slugify(title);
            assert!(!slug.starts_with('-'), "leading dash in {slug:?}");
            assert!(!slug.ends_with('-'), "trailing dash in {slug:?}");
            assert!(!slug.contains("--"), "double dash in {slug:?}");
            assert!(!slug.chars().any(char::is_whitespace), "whitespace in {slug:?}");
        }
    }

    #[test]
    fn idempotent() {
        for title in TITLES {
            let once = slugify(title);
            assert_eq!(slugify(&once), once, "not idempotent for {title:?}");
        }
    }

    #[test]
    fn validate_rejects_empty() {
        assert!(matches!(validate_slug(""), Err(PostError::EmptyTitle)));
        validate_slug("a").unwrap();
    }
}

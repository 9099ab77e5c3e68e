//! Project name normalization.

use std::sync::OnceLock;

use regex::Regex;

/// Separator inserted at word boundaries.
pub const SEPARATOR: &str = "_";

fn acronym_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("static regex"))
}

fn camel_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z\d])([A-Z])").expect("static regex"))
}

/// Turn a project name into a lowercase, underscore-separated identifier.
///
/// `"HTTPServer"` splits at the acronym boundary before lowercasing, so it
/// becomes `"http_server"`; camelCase and hyphens split the same way.
///
/// ```
/// use archetype_core::domain::normalize;
///
/// assert_eq!(normalize("MyProject"), "my_project");
/// assert_eq!(normalize("HTTPServer"), "http_server");
/// assert_eq!(normalize("foo-bar"), "foo_bar");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(word: &str) -> String {
    let word = acronym_boundary().replace_all(word, "${1}_${2}");
    let word = camel_boundary().replace_all(&word, "${1}_${2}");
    word.replace('-', SEPARATOR).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case() {
        assert_eq!(normalize("MyProject"), "my_project");
        assert_eq!(normalize("myProject"), "my_project");
    }

    #[test]
    fn acronym_followed_by_word() {
        assert_eq!(normalize("HTTPServer"), "http_server");
        assert_eq!(normalize("parseHTTPResponse"), "parse_http_response");
    }

    #[test]
    fn digits_before_uppercase() {
        assert_eq!(normalize("Version2Beta"), "version2_beta");
    }

    #[test]
    fn hyphens_become_underscores() {
        assert_eq!(normalize("foo-bar"), "foo_bar");
        assert_eq!(normalize("pybuilder-archetype-base"), "pybuilder_archetype_base");
    }

    #[test]
    fn empty_maps_to_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn already_normalized_is_unchanged() {
        assert_eq!(normalize("sample_proj"), "sample_proj");
    }

    #[test]
    fn all_caps_stays_one_word() {
        assert_eq!(normalize("HTTP"), "http");
    }
}

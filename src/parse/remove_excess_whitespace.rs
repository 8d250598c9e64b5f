use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// Collapses every whitespace run (newlines and non-breaking spaces included) to one space and trims the ends.
pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    // a single plain space is already fine, anything else gets replaced
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s\s+|[^\S ]").expect("regex should be valid"));
    RE.replace_all(s.trim(), " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_runs() {
        assert_eq!(
            remove_excess_whitespace("  Arroz\n\t   branco\u{a0}com  alho "),
            "Arroz branco com alho"
        );
    }

    #[test]
    fn test_borrows_clean_input() {
        assert!(matches!(
            remove_excess_whitespace(" Feijão preto"),
            Cow::Borrowed("Feijão preto")
        ));
    }
}

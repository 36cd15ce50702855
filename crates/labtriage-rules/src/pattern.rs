use regex::{Regex, RegexBuilder};

/// Case-insensitive pattern over free text.
///
/// Rule tables match test names and unit tokens through this wrapper; the
/// only contract callers rely on is [`TextPattern::matches`]. Today it is
/// backed by a regex, which keeps the curated tables compact.
#[derive(Debug, Clone)]
pub struct TextPattern {
    source: String,
    regex: Regex,
}

impl TextPattern {
    /// Compile a pattern.
    ///
    /// # Panics
    ///
    /// Panics when the pattern does not compile. The shipped tables are
    /// static, so a bad pattern is a programming error and is caught by the
    /// table integrity tests.
    pub fn new(source: &str) -> Self {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .expect("invalid rule pattern");
        Self {
            source: source.to_string(),
            regex,
        }
    }

    /// Whether the pattern matches anywhere in `candidate`.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// The pattern text as written in the rule table.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_case_insensitive() {
        let pattern = TextPattern::new(r"potassium|\bk\b");
        assert!(pattern.matches("Serum POTASSIUM"));
        assert!(pattern.matches("K"));
        assert!(pattern.matches("s. k level"));
        assert!(!pattern.matches("keratin"));
    }

    #[test]
    fn test_word_boundary_respected() {
        let pattern = TextPattern::new(r"sodium|\bna\b");
        assert!(pattern.matches("Na"));
        assert!(pattern.matches("serum na "));
        assert!(!pattern.matches("sonata"));
    }

    #[test]
    fn test_as_str_returns_source() {
        let pattern = TextPattern::new(r"mg/dl");
        assert_eq!(pattern.as_str(), "mg/dl");
    }
}

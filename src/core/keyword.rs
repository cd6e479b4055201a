// LogSift - core/keyword.rs
//
// Case-insensitive keyword filtering. Lines are retained, never rewritten:
// output keeps original text and order.

use crate::core::scanner;
use crate::util::constants;
use crate::util::error::ValidationError;

/// A set of lower-cased, non-blank keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a set, discarding blank keywords.
    ///
    /// Returns `ValidationError::NoKeywords` when nothing usable remains, since
    /// an empty keyword would match every line.
    pub fn new<I, S>(keywords: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lowered: Vec<String> = Vec::new();
        for keyword in keywords {
            let k = keyword.as_ref().trim().to_lowercase();
            if !k.is_empty() && !lowered.contains(&k) {
                lowered.push(k);
            }
        }
        if lowered.is_empty() {
            return Err(ValidationError::NoKeywords);
        }
        Ok(Self { keywords: lowered })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when the line contains any keyword, ignoring case.
    pub fn matches(&self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        let lower = line.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            keywords: constants::DEFAULT_KEYWORDS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

/// Lines of `text` matching any keyword, in source order, untouched.
pub fn filter_lines<'a>(text: &'a str, keywords: &KeywordSet) -> Vec<&'a str> {
    scanner::scan_lines(text)
        .filter(|line| keywords.matches(line.raw))
        .map(|line| line.raw)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let set = KeywordSet::new(["Seek"]).unwrap();
        assert!(set.matches("player SEEK to 30s"));
        assert!(set.matches("onseeked"));
        assert!(!set.matches("pause"));
    }

    #[test]
    fn test_empty_line_never_matches() {
        let set = KeywordSet::default();
        assert!(!set.matches(""));
        assert!(!set.matches("   "));
    }

    #[test]
    fn test_blank_keywords_discarded() {
        let set = KeywordSet::new(["", "  ", "Touch"]).unwrap();
        assert_eq!(set.keywords(), ["touch".to_string()]);
    }

    #[test]
    fn test_all_blank_keywords_rejected() {
        assert_eq!(KeywordSet::new([" "]), Err(ValidationError::NoKeywords));
        assert_eq!(
            KeywordSet::new(Vec::<String>::new()),
            Err(ValidationError::NoKeywords)
        );
    }

    #[test]
    fn test_filter_preserves_text_and_order() {
        let text = "a mouse\nnothing\n  TimeUpdate 3 \n\nslider end";
        let lines = filter_lines(text, &KeywordSet::default());
        assert_eq!(lines, vec!["a mouse", "  TimeUpdate 3 ", "slider end"]);
    }
}

//! Keyword matching primitives
//!
//! Two kinds of test are used by the rule chain and must not be mixed up:
//! substring containment, which also matches inside longer words ("count" in
//! "discount"), and whole-word matching, which requires `\b` boundaries on
//! both sides ("count" does not match "account").
//!
//! Both expect text that has already been lowercased.

use regex::Regex;

use crate::errors::{ClassifierError, Result};

/// How a keyword is tested against the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Substring,
    Word,
}

/// True when `keyword` occurs anywhere in `text`
pub fn contains_substring(text: &str, keyword: &str) -> bool {
    text.contains(keyword)
}

/// True when `keyword` occurs in `text` as a standalone word or phrase
///
/// Compiles the word-boundary pattern on every call. Repeated matching should
/// build a [`Keyword::word`] once and reuse it, as the rule tables do.
pub fn contains_word(text: &str, keyword: &str) -> Result<bool> {
    Ok(Keyword::word(keyword)?.is_match(text))
}

fn word_pattern(keyword: &str) -> Result<Regex> {
    Regex::new(&format!(r"\b{}\b", regex::escape(keyword))).map_err(|source| {
        ClassifierError::InvalidKeyword {
            keyword: keyword.to_string(),
            source,
        }
    })
}

/// One keyword and the primitive used to find it
#[derive(Debug, Clone)]
pub struct Keyword {
    text: String,
    // Compiled only for whole-word keywords
    pattern: Option<Regex>,
}

impl Keyword {
    pub fn substring(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pattern: None,
        }
    }

    pub fn word(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let pattern = word_pattern(&text)?;
        Ok(Self {
            text,
            pattern: Some(pattern),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> MatchMode {
        if self.pattern.is_some() {
            MatchMode::Word
        } else {
            MatchMode::Substring
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match &self.pattern {
            Some(re) => re.is_match(text),
            None => contains_substring(text, &self.text),
        }
    }
}

/// Ordered keywords; the set matches when any of them does
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    /// Keywords tested by plain containment. Never fails.
    pub fn substrings<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Keyword::substring).collect(),
        }
    }

    /// Keywords tested with word boundaries; each one is compiled here, once
    pub fn words<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = keywords
            .into_iter()
            .map(Keyword::word)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { keywords })
    }

    /// Appends the keywords of `other`, keeping both orders
    pub fn or(mut self, other: KeywordSet) -> Self {
        self.keywords.extend(other.keywords);
        self
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// First keyword, in declaration order, found in `text`
    pub fn find(&self, text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| k.is_match(text))
            .map(Keyword::text)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_substring_matches_inside_words() {
        assert!(contains_substring("apply the discount", "count"));
        assert!(contains_substring("a connected graph", "connect"));
        assert!(!contains_substring("", "count"));
    }

    #[test]
    fn test_word_rejects_inside_words() {
        assert!(!contains_word("calculate account balance.", "count").unwrap());
        assert!(contains_word("count the items", "count").unwrap());
        assert!(contains_word("items (count) here", "count").unwrap());
    }

    #[test]
    fn test_word_matches_phrases() {
        assert!(contains_word("find two sum in an array", "two sum").unwrap());
        assert!(contains_word("is there a sum = k pair", "sum = k").unwrap());
        assert!(!contains_word("find two summands", "two sum").unwrap());
    }

    #[test]
    fn test_word_boundaries_are_unicode_aware() {
        // 'é' is a word character, so there is no boundary before "array"
        assert!(!contains_word("éarray", "array").unwrap());
        assert!(contains_word("tableau: array", "array").unwrap());
    }

    #[test]
    fn test_word_keyword_is_escaped() {
        assert!(contains_word("x a+b y", "a+b").unwrap());
        assert!(!contains_word("x aab y", "a+b").unwrap());
    }

    #[test]
    fn test_contains_word_agrees_with_compiled_keyword() {
        let keyword = Keyword::word("sum = k").unwrap();
        for text in ["sum = k", "a sum = k pair", "sum = kk", "xsum = k", ""] {
            assert_eq!(
                contains_word(text, "sum = k").unwrap(),
                keyword.is_match(text),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_keyword_mode() {
        assert_eq!(Keyword::substring("tree").mode(), MatchMode::Substring);
        assert_eq!(Keyword::word("tree").unwrap().mode(), MatchMode::Word);
    }

    #[test]
    fn test_find_reports_first_declared_keyword() {
        let set = KeywordSet::substrings(["cycle", "connect"]);
        assert_eq!(set.find("connected graph with a cycle"), Some("cycle"));
        assert_eq!(set.find("no such luck"), None);
    }

    #[test]
    fn test_word_set() {
        let set = KeywordSet::words(["stream", "top k"]).unwrap();
        assert!(set.is_match("process a stream of ints"));
        assert!(!set.is_match("process streaming data"));
        let texts: Vec<&str> = set.keywords().iter().map(Keyword::text).collect();
        assert_eq!(texts, vec!["stream", "top k"]);
    }

    #[test]
    fn test_or_keeps_modes_per_keyword() {
        let set = KeywordSet::words(["string"])
            .unwrap()
            .or(KeywordSet::substrings(["substring"]));
        assert!(set.is_match("longest substring"));
        assert!(set.is_match("a string"));
        assert!(!set.is_match("stringify"));
        let modes: Vec<MatchMode> = set.keywords().iter().map(Keyword::mode).collect();
        assert_eq!(modes, vec![MatchMode::Word, MatchMode::Substring]);
    }

    #[test]
    fn test_empty_set_never_matches() {
        let set = KeywordSet::default();
        assert!(!set.is_match("anything"));
        assert!(!set.is_match(""));
    }
}

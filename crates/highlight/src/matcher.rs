//! Word classification against backend matching prefixes.

use crate::category::{Completeness, Exactness, MatchCategory};
use serde::{Deserialize, Serialize};

/// A successful prefix match on a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    /// Byte length of the matched leading span of the word
    pub matched_len: usize,
    /// Highlight category
    pub category: MatchCategory,
}

/// Outcome of classifying one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    /// No prefix matched the start of the word
    Unmatched,
    /// A prefix matched the start of the word
    Matched(WordMatch),
}

impl MatchResult {
    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    /// Byte length of the matched span, 0 when unmatched.
    #[inline]
    pub fn matched_len(&self) -> usize {
        match self {
            MatchResult::Matched(m) => m.matched_len,
            MatchResult::Unmatched => 0,
        }
    }

    #[inline]
    pub fn category(&self) -> Option<MatchCategory> {
        match self {
            MatchResult::Matched(m) => Some(m.category),
            MatchResult::Unmatched => None,
        }
    }

    /// Splits the classified word into `(matched, remainder)`.
    ///
    /// Returns `None` when unmatched, or when `word` is not the word this
    /// result was computed for and the split would not land on a char boundary.
    pub fn split<'w>(&self, word: &'w str) -> Option<(&'w str, &'w str)> {
        match self {
            MatchResult::Matched(m) if word.is_char_boundary(m.matched_len) => {
                Some(word.split_at(m.matched_len))
            }
            _ => None,
        }
    }
}

/// Classify a single word against the result's matching prefixes.
///
/// Prefixes are tried in the order given and the first one that is a
/// case-insensitive prefix of `word` wins, even when a later one would match
/// more of it. Prefixes are compared literally. Empty prefixes never match.
///
/// The matched span is exact when its lower-cased text equals one of the
/// lower-cased `query_keywords`, and complete when it covers the whole word.
///
/// # Example
/// ```
/// use autocomplete_highlight::{classify_word, MatchCategory};
///
/// let result = classify_word(&["nem"], &["nem"], "Nemo");
/// assert_eq!(result.category(), Some(MatchCategory::ExactPrefix));
/// assert_eq!(result.split("Nemo"), Some(("Nem", "o")));
/// ```
pub fn classify_word<P, K>(prefixes: &[P], query_keywords: &[K], word: &str) -> MatchResult
where
    P: AsRef<str>,
    K: AsRef<str>,
{
    if word.is_empty() {
        return MatchResult::Unmatched;
    }

    let Some(matched_len) = prefixes
        .iter()
        .find_map(|prefix| leading_match_len(word, prefix.as_ref()))
    else {
        tracing::trace!(word, "no matching prefix");
        return MatchResult::Unmatched;
    };

    let matched = word[..matched_len].to_lowercase();
    let exactness = if query_keywords
        .iter()
        .any(|keyword| keyword.as_ref().to_lowercase() == matched)
    {
        Exactness::Exact
    } else {
        Exactness::Fuzzy
    };

    let completeness = if matched_len == word.len() {
        Completeness::Complete
    } else {
        Completeness::Prefix
    };

    MatchResult::Matched(WordMatch {
        matched_len,
        category: MatchCategory::combine(exactness, completeness),
    })
}

/// Byte length of the span of `word` matched by `prefix`, if `prefix` is a
/// case-insensitive prefix of `word`.
fn leading_match_len(word: &str, prefix: &str) -> Option<usize> {
    if prefix.is_empty() {
        return None;
    }

    let mut word_chars = word.char_indices();
    for p in prefix.chars() {
        let (_, w) = word_chars.next()?;
        if !chars_eq_ignore_case(w, p) {
            return None;
        }
    }

    Some(word_chars.next().map_or(word.len(), |(idx, _)| idx))
}

#[inline]
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_empty_prefixes_never_match() {
        assert_eq!(classify_word(&NONE, &["nem"], "Nemo"), MatchResult::Unmatched);
    }

    #[test]
    fn test_empty_word_never_matches() {
        assert_eq!(classify_word(&["n"], &["n"], ""), MatchResult::Unmatched);
    }

    #[test]
    fn test_exact_prefix() {
        let result = classify_word(&["nem"], &["nem"], "Nemo");
        assert_eq!(
            result,
            MatchResult::Matched(WordMatch { matched_len: 3, category: MatchCategory::ExactPrefix })
        );
        assert_eq!(result.split("Nemo"), Some(("Nem", "o")));
    }

    #[test]
    fn test_exact_complete() {
        let result = classify_word(&["home"], &["HOME"], "Home");
        assert_eq!(result.category(), Some(MatchCategory::ExactComplete));
        assert_eq!(result.matched_len(), 4);
    }

    #[test]
    fn test_fuzzy_prefix_for_typo() {
        let result = classify_word(&["fin"], &["finr"], "Finds");
        assert_eq!(result.category(), Some(MatchCategory::FuzzyPrefix));
        assert_eq!(result.split("Finds"), Some(("Fin", "ds")));
    }

    #[test]
    fn test_fuzzy_complete() {
        let result = classify_word(&["cat"], &["cta"], "cat");
        assert_eq!(result.category(), Some(MatchCategory::FuzzyComplete));
    }

    #[test]
    fn test_first_listed_prefix_wins() {
        let result = classify_word(&["a", "ab"], &["ab"], "abacus");
        assert_eq!(result.matched_len(), 1);
        assert_eq!(result.category(), Some(MatchCategory::FuzzyPrefix));

        let result = classify_word(&["ab", "a"], &["ab"], "abacus");
        assert_eq!(result.matched_len(), 2);
        assert_eq!(result.category(), Some(MatchCategory::ExactPrefix));
    }

    #[test]
    fn test_non_matching_prefix_is_skipped() {
        let result = classify_word(&["xyz", "ab"], &NONE, "abacus");
        assert_eq!(result.matched_len(), 2);
    }

    #[test]
    fn test_no_mid_word_match() {
        assert_eq!(classify_word(&["emo"], &["emo"], "Nemo"), MatchResult::Unmatched);
    }

    #[test]
    fn test_prefix_longer_than_word() {
        assert_eq!(classify_word(&["nemos"], &NONE, "Nemo"), MatchResult::Unmatched);
    }

    #[test]
    fn test_empty_prefix_entry_is_skipped() {
        let result = classify_word(&["", "ne"], &["ne"], "Nemo");
        assert_eq!(result.matched_len(), 2);
        assert_eq!(classify_word(&[""], &NONE, "Nemo"), MatchResult::Unmatched);
    }

    #[test]
    fn test_prefix_is_matched_literally() {
        assert_eq!(classify_word(&["n.m"], &NONE, "Nemo"), MatchResult::Unmatched);
        assert!(classify_word(&["c++"], &["c++"], "C++17").is_matched());
    }

    #[test]
    fn test_unicode_case_folding() {
        let result = classify_word(&["éco"], &["éco"], "École");
        assert_eq!(result.category(), Some(MatchCategory::ExactPrefix));
        assert_eq!(result.split("École"), Some(("Éco", "le")));
    }

    #[test]
    fn test_matched_len_is_byte_length() {
        let result = classify_word(&["ü"], &NONE, "Über");
        assert_eq!(result.matched_len(), 'Ü'.len_utf8());
    }

    #[test]
    fn test_unmatched_accessors() {
        let result = MatchResult::Unmatched;
        assert!(!result.is_matched());
        assert_eq!(result.matched_len(), 0);
        assert_eq!(result.category(), None);
        assert_eq!(result.split("word"), None);
    }

    #[test]
    fn test_owned_inputs() {
        let prefixes = vec!["nem".to_string()];
        let keywords = vec!["nem".to_string()];
        assert!(classify_word(&prefixes, &keywords, "nemo").is_matched());
    }
}

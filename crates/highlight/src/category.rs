//! Match categories.
//!
//! A matched word falls into exactly one of four categories, the product of
//! whether the matched prefix was one of the typed keywords and whether it
//! consumed the whole word.

use crate::error::HighlightError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether the matched prefix is one of the query keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exactness {
    /// Prefix equals a query keyword (case-insensitive)
    Exact,
    /// Prefix was matched approximately by the backend
    Fuzzy,
}

/// Whether the matched prefix covers the whole word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Completeness {
    /// Matched span is the full word
    Complete,
    /// Matched span is a strict leading part of the word
    Prefix,
}

/// Highlight category of a matched word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCategory {
    /// Exact keyword, whole word
    ExactComplete,
    /// Exact keyword, leading part of the word
    ExactPrefix,
    /// Fuzzy prefix, whole word
    FuzzyComplete,
    /// Fuzzy prefix, leading part of the word
    FuzzyPrefix,
}

impl MatchCategory {
    /// All categories, in declaration order.
    pub const ALL: [MatchCategory; 4] = [
        MatchCategory::ExactComplete,
        MatchCategory::ExactPrefix,
        MatchCategory::FuzzyComplete,
        MatchCategory::FuzzyPrefix,
    ];

    /// Combines the two classification axes into a category.
    #[inline]
    pub fn combine(exactness: Exactness, completeness: Completeness) -> Self {
        match (exactness, completeness) {
            (Exactness::Exact, Completeness::Complete) => MatchCategory::ExactComplete,
            (Exactness::Exact, Completeness::Prefix) => MatchCategory::ExactPrefix,
            (Exactness::Fuzzy, Completeness::Complete) => MatchCategory::FuzzyComplete,
            (Exactness::Fuzzy, Completeness::Prefix) => MatchCategory::FuzzyPrefix,
        }
    }

    pub fn exactness(self) -> Exactness {
        match self {
            MatchCategory::ExactComplete | MatchCategory::ExactPrefix => Exactness::Exact,
            MatchCategory::FuzzyComplete | MatchCategory::FuzzyPrefix => Exactness::Fuzzy,
        }
    }

    pub fn completeness(self) -> Completeness {
        match self {
            MatchCategory::ExactComplete | MatchCategory::FuzzyComplete => Completeness::Complete,
            MatchCategory::ExactPrefix | MatchCategory::FuzzyPrefix => Completeness::Prefix,
        }
    }

    #[inline]
    pub fn is_exact(self) -> bool {
        self.exactness() == Exactness::Exact
    }

    #[inline]
    pub fn is_complete(self) -> bool {
        self.completeness() == Completeness::Complete
    }

    /// The class name renderers use for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchCategory::ExactComplete => "exact_complete",
            MatchCategory::ExactPrefix => "exact_prefix",
            MatchCategory::FuzzyComplete => "fuzzy_complete",
            MatchCategory::FuzzyPrefix => "fuzzy_prefix",
        }
    }
}

impl fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchCategory {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| HighlightError::invalid(format!("unknown match category `{}`", s)))
    }
}

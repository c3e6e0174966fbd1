//! Field highlighting.
//!
//! Splits a field into whitespace-separated words, classifies each one and
//! wraps the matched leading span in markup.

use crate::category::{Exactness, MatchCategory};
use crate::matcher::{classify_word, MatchResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Shared default highlighter used by the free functions.
static DEFAULT_HIGHLIGHTER: Lazy<Highlighter> = Lazy::new(Highlighter::default);

/// How a matched span is wrapped in the output text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum Markup {
    /// `<tag class='CATEGORY'>matched</tag>`
    ClassedSpan {
        #[serde(default = "default_tag")]
        tag: String,
    },
    /// Separate marker pairs for exact and fuzzy matches.
    Markers {
        #[serde(default = "default_exact_pre")]
        exact_pre: String,
        #[serde(default = "default_exact_post")]
        exact_post: String,
        #[serde(default = "default_fuzzy_pre")]
        fuzzy_pre: String,
        #[serde(default = "default_fuzzy_post")]
        fuzzy_post: String,
    },
}

impl Default for Markup {
    fn default() -> Self {
        Markup::ClassedSpan { tag: default_tag() }
    }
}

impl Markup {
    /// Markers with the default exact/fuzzy pairs.
    pub fn markers() -> Self {
        Markup::Markers {
            exact_pre: default_exact_pre(),
            exact_post: default_exact_post(),
            fuzzy_pre: default_fuzzy_pre(),
            fuzzy_post: default_fuzzy_post(),
        }
    }

    /// Appends `matched` wrapped for `category` to `out`.
    pub fn wrap_into(&self, out: &mut String, matched: &str, category: MatchCategory) {
        match self {
            Markup::ClassedSpan { tag } => {
                out.push('<');
                out.push_str(tag);
                out.push_str(" class='");
                out.push_str(category.as_str());
                out.push_str("'>");
                out.push_str(matched);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            Markup::Markers { exact_pre, exact_post, fuzzy_pre, fuzzy_post } => {
                let (pre, post) = match category.exactness() {
                    Exactness::Exact => (exact_pre, exact_post),
                    Exactness::Fuzzy => (fuzzy_pre, fuzzy_post),
                };
                out.push_str(pre);
                out.push_str(matched);
                out.push_str(post);
            }
        }
    }
}

fn default_tag() -> String {
    "span".to_string()
}

fn default_exact_pre() -> String {
    "<b>".to_string()
}

fn default_exact_post() -> String {
    "</b>".to_string()
}

fn default_fuzzy_pre() -> String {
    "<i>".to_string()
}

fn default_fuzzy_post() -> String {
    "</i>".to_string()
}

/// One word of a highlighted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WordSegment<'a> {
    /// Word with no matching prefix, emitted unchanged
    Plain { word: &'a str },
    /// Word split into the matched span and the rest, both in original case
    Highlighted {
        matched: &'a str,
        remainder: &'a str,
        category: MatchCategory,
    },
}

/// Stateless field highlighter.
///
/// Holds only the markup settings; prefixes and keywords are passed on every
/// call, so one instance can serve any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlighter {
    #[serde(default)]
    pub markup: Markup,
}

impl Highlighter {
    pub fn new(markup: Markup) -> Self {
        Self { markup }
    }

    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    /// See [`classify_word`].
    #[inline]
    pub fn classify<P: AsRef<str>, K: AsRef<str>>(
        &self,
        prefixes: &[P],
        query_keywords: &[K],
        word: &str,
    ) -> MatchResult {
        classify_word(prefixes, query_keywords, word)
    }

    /// Classifies every word of `text`, in order.
    pub fn segments<'a, P: AsRef<str>, K: AsRef<str>>(
        &self,
        prefixes: &[P],
        query_keywords: &[K],
        text: &'a str,
    ) -> Vec<WordSegment<'a>> {
        text.split_whitespace()
            .map(|word| {
                let result = classify_word(prefixes, query_keywords, word);
                match (result.category(), result.split(word)) {
                    (Some(category), Some((matched, remainder))) => {
                        WordSegment::Highlighted { matched, remainder, category }
                    }
                    _ => WordSegment::Plain { word },
                }
            })
            .collect()
    }

    /// Highlights `text`, joining words with single spaces.
    ///
    /// Leading and trailing whitespace is dropped and internal whitespace
    /// runs collapse to one space.
    pub fn highlight_text<P: AsRef<str>, K: AsRef<str>>(
        &self,
        prefixes: &[P],
        query_keywords: &[K],
        text: &str,
    ) -> String {
        let mut out = String::with_capacity(text.len());
        for (idx, segment) in self.segments(prefixes, query_keywords, text).into_iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            match segment {
                WordSegment::Plain { word } => out.push_str(word),
                WordSegment::Highlighted { matched, remainder, category } => {
                    self.markup.wrap_into(&mut out, matched, category);
                    out.push_str(remainder);
                }
            }
        }
        out
    }

    /// Highlights an optional field value.
    ///
    /// Absent and empty values pass through unchanged.
    pub fn highlight_field<P: AsRef<str>, K: AsRef<str>>(
        &self,
        prefixes: &[P],
        query_keywords: &[K],
        field_text: Option<&str>,
    ) -> Option<String> {
        match field_text {
            None => None,
            Some("") => Some(String::new()),
            Some(text) => Some(self.highlight_text(prefixes, query_keywords, text)),
        }
    }
}

/// Highlights an optional field value with the default markup.
///
/// # Example
/// ```
/// use autocomplete_highlight::highlight_field;
///
/// let marked = highlight_field(&["nem"], &["nem"], Some("Nemo Finds Home"));
/// assert_eq!(
///     marked.as_deref(),
///     Some("<span class='exact_prefix'>Nem</span>o Finds Home")
/// );
/// ```
pub fn highlight_field<P: AsRef<str>, K: AsRef<str>>(
    prefixes: &[P],
    query_keywords: &[K],
    field_text: Option<&str>,
) -> Option<String> {
    DEFAULT_HIGHLIGHTER.highlight_field(prefixes, query_keywords, field_text)
}

/// Highlights `text` with the default markup.
pub fn highlight_text<P: AsRef<str>, K: AsRef<str>>(
    prefixes: &[P],
    query_keywords: &[K],
    text: &str,
) -> String {
    DEFAULT_HIGHLIGHTER.highlight_text(prefixes, query_keywords, text)
}

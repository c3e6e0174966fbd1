//! Prefix-match highlighting for autocomplete search results.
//!
//! A search backend returns, per result, the record and the prefixes it
//! matched (exactly or fuzzily) against the user's query. This crate finds
//! those prefixes at the start of each word of a field and wraps the matched
//! span in markup naming one of four categories:
//!
//! - `exact_complete` / `exact_prefix`: the prefix is one of the typed keywords
//! - `fuzzy_complete` / `fuzzy_prefix`: the backend matched it approximately
//!
//! Everything here is stateless; query keywords and prefixes are passed on
//! every call.
//!
//! # Example
//!
//! ```
//! use autocomplete_highlight::{highlight_field, classify_word, MatchCategory};
//!
//! let marked = highlight_field(&["fin"], &["finr"], Some("Nemo Finds Home"));
//! assert_eq!(
//!     marked.as_deref(),
//!     Some("Nemo <span class='fuzzy_prefix'>Fin</span>ds Home")
//! );
//!
//! let result = classify_word(&["home"], &["home"], "Home");
//! assert_eq!(result.category(), Some(MatchCategory::ExactComplete));
//! ```

mod category;
mod config;
mod error;
mod highlight;
mod matcher;
pub mod response;

#[cfg(feature = "wasm")]
mod wasm;

pub use category::{Completeness, Exactness, MatchCategory};
pub use config::HighlightConfig;
pub use error::{HighlightError, HighlightErrorCode, Result};
pub use highlight::{highlight_field, highlight_text, Highlighter, Markup, WordSegment};
pub use matcher::{classify_word, MatchResult, WordMatch};
pub use response::{field_text, HighlightedField, HighlightedHit, SearchHit, SearchResponse};

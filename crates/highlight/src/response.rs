//! Backend response model and batch highlighting.
//!
//! A response carries the query keywords once and, per result, the record
//! plus the prefixes the backend matched in it. Renderers call
//! [`Highlighter::highlight_response`] to get every requested field marked up,
//! with failures isolated to the field that caused them.

use crate::error::{HighlightError, Result};
use crate::highlight::Highlighter;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Search response as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Terms the user typed
    #[serde(default)]
    pub query_keywords: Vec<String>,
    /// Results in rank order
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// One search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Record attributes by name
    #[serde(default)]
    pub record: Map<String, Value>,
    /// Prefixes the backend matched in this record, in priority order
    #[serde(default, alias = "matching_prefixes")]
    pub matching_prefix: Vec<String>,
}

impl SearchResponse {
    /// Parses a response, rejecting anything not shaped like one.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| HighlightError::invalid(format!("malformed search response: {}", e)))
    }
}

/// A rendered field of one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedField {
    pub name: String,
    /// Marked text, `None` when the field is absent or null
    pub value: Option<String>,
    /// Set when the field could not be highlighted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// All rendered fields of one result, in requested order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedHit {
    pub fields: Vec<HighlightedField>,
}

impl HighlightedHit {
    /// Looks up a rendered field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .and_then(|field| field.value.as_deref())
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|field| field.error.is_some())
    }
}

/// Converts a record value to field text.
///
/// Strings are used as-is, numbers and booleans by their JSON text, null as
/// an absent field. Arrays and objects are rejected.
pub fn field_text(value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) => Err(HighlightError::invalid("field value is an array, expected text")),
        Value::Object(_) => Err(HighlightError::invalid("field value is an object, expected text")),
    }
}

impl Highlighter {
    /// Highlights the requested fields of one result.
    ///
    /// An empty `fields` slice renders every record attribute in key order.
    pub fn highlight_hit<F: AsRef<str>>(
        &self,
        response: &SearchResponse,
        hit: &SearchHit,
        fields: &[F],
    ) -> HighlightedHit {
        let names: Vec<&str> = if fields.is_empty() {
            hit.record.keys().map(String::as_str).collect()
        } else {
            fields.iter().map(|field| field.as_ref()).collect()
        };

        let fields = names
            .into_iter()
            .map(|name| {
                let text = match hit.record.get(name) {
                    Some(value) => field_text(value),
                    None => Ok(None),
                };
                match text {
                    Ok(text) => HighlightedField {
                        name: name.to_string(),
                        value: self.highlight_field(
                            hit.matching_prefix.as_slice(),
                            response.query_keywords.as_slice(),
                            text.as_deref(),
                        ),
                        error: None,
                    },
                    Err(e) => {
                        tracing::debug!(field = name, error = %e, "skipping field");
                        HighlightedField {
                            name: name.to_string(),
                            value: None,
                            error: Some(e.to_string()),
                        }
                    }
                }
            })
            .collect();

        HighlightedHit { fields }
    }

    /// Highlights the requested fields of every result, in result order.
    pub fn highlight_response<F: AsRef<str> + Sync>(
        &self,
        response: &SearchResponse,
        fields: &[F],
    ) -> Vec<HighlightedHit> {
        tracing::debug!(
            results = response.results.len(),
            keywords = response.query_keywords.len(),
            "highlighting response"
        );

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            response
                .results
                .par_iter()
                .map(|hit| self.highlight_hit(response, hit, fields))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            response
                .results
                .iter()
                .map(|hit| self.highlight_hit(response, hit, fields))
                .collect()
        }
    }
}

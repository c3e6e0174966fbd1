//! WASM bindings for the highlighter.
//!
//! Prefix and keyword lists cross the boundary as JSON arrays of strings.

use crate::{classify_word as classify, highlight_text, Highlighter, SearchResponse};
use wasm_bindgen::prelude::*;

fn parse_list(json: &str, what: &str) -> Result<Vec<String>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("{} must be a JSON array of strings: {}", what, e)))
}

/// Highlight one field.
///
/// # Arguments
/// * `prefixes_json` - JSON array of matching prefixes for the result
/// * `keywords_json` - JSON array of query keywords
/// * `text` - Field text
///
/// # Returns
/// Field text with matched spans wrapped in `<span class='CATEGORY'>`
#[wasm_bindgen]
pub fn highlight_field(prefixes_json: &str, keywords_json: &str, text: &str) -> Result<String, JsValue> {
    let prefixes = parse_list(prefixes_json, "prefixes")?;
    let keywords = parse_list(keywords_json, "keywords")?;
    Ok(highlight_text(&prefixes, &keywords, text))
}

/// Classify one word.
///
/// Returns JSON such as `{"status":"matched","matched_len":3,"category":"exact_prefix"}`
/// or `{"status":"unmatched"}`.
#[wasm_bindgen]
pub fn classify_word(prefixes_json: &str, keywords_json: &str, word: &str) -> Result<String, JsValue> {
    let prefixes = parse_list(prefixes_json, "prefixes")?;
    let keywords = parse_list(keywords_json, "keywords")?;
    let result = classify(&prefixes, &keywords, word);
    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Highlight a whole backend response.
///
/// # Arguments
/// * `response_json` - Response with `query_keywords` and `results`
/// * `fields_json` - JSON array of field names (empty for all fields)
///
/// # Returns
/// JSON array of highlighted results
#[wasm_bindgen]
pub fn highlight_response(response_json: &str, fields_json: &str) -> Result<String, JsValue> {
    let response = SearchResponse::from_json(response_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let fields = parse_list(fields_json, "fields")?;

    let hits = Highlighter::default().highlight_response(&response, &fields);

    serde_json::to_string(&hits)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

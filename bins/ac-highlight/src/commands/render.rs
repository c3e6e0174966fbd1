//! Render command - highlight every result of a saved response

use crate::OutputFormat;
use anyhow::{Context, Result};
use autocomplete_highlight::{
    field_text, HighlightConfig, Highlighter, MatchCategory, SearchHit, SearchResponse, WordSegment,
};
use owo_colors::{OwoColorize, Stream, Style};
use std::io::Read;
use std::path::Path;

/// Run render command
pub fn run(
    config: &HighlightConfig,
    input: Option<&Path>,
    fields: &[String],
    format: OutputFormat,
) -> Result<()> {
    let json = read_input(input)?;
    let response = SearchResponse::from_json(&json)?;

    // Command-line fields take precedence over configured ones
    let fields = if fields.is_empty() { &config.fields[..] } else { fields };
    let highlighter = config.highlighter();

    tracing::debug!(
        results = response.results.len(),
        fields = fields.len(),
        ?format,
        "rendering response"
    );

    match format {
        OutputFormat::Json => {
            let hits = highlighter.highlight_response(&response, fields);
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        OutputFormat::Markup => {
            let hits = highlighter.highlight_response(&response, fields);
            for (idx, hit) in hits.iter().enumerate() {
                println!("[{}]", idx + 1);
                for field in &hit.fields {
                    match (&field.value, &field.error) {
                        (_, Some(error)) => println!("  {}: !{}", field.name, error),
                        (Some(value), None) => println!("  {}: {}", field.name, value),
                        (None, None) => println!("  {}:", field.name),
                    }
                }
            }
        }
        OutputFormat::Text => {
            for (idx, hit) in response.results.iter().enumerate() {
                println!("{}", format!("[{}]", idx + 1).if_supports_color(Stream::Stdout, |t| t.dimmed()));
                print_hit_colored(&highlighter, &response, hit, fields);
            }
        }
    }

    if response.results.is_empty() {
        eprintln!("No results");
    }

    Ok(())
}

/// Read the response JSON from a file or stdin.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read response file {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read response from stdin")?;
            Ok(buf)
        }
    }
}

fn print_hit_colored(highlighter: &Highlighter, response: &SearchResponse, hit: &SearchHit, fields: &[String]) {
    let names: Vec<&str> = if fields.is_empty() {
        hit.record.keys().map(String::as_str).collect()
    } else {
        fields.iter().map(String::as_str).collect()
    };

    for name in names {
        let text = match hit.record.get(name).map(field_text) {
            Some(Ok(text)) => text,
            Some(Err(e)) => {
                println!("  {}: {}", name, e.if_supports_color(Stream::Stdout, |t| t.red()));
                continue;
            }
            None => None,
        };

        let Some(text) = text else {
            println!("  {}:", name);
            continue;
        };

        let words: Vec<String> = highlighter
            .segments(hit.matching_prefix.as_slice(), response.query_keywords.as_slice(), &text)
            .into_iter()
            .map(|segment| match segment {
                WordSegment::Plain { word } => word.to_string(),
                WordSegment::Highlighted { matched, remainder, category } => format!(
                    "{}{}",
                    matched.if_supports_color(Stream::Stdout, |t| t.style(category_style(category))),
                    remainder
                ),
            })
            .collect();

        println!("  {}: {}", name, words.join(" "));
    }
}

/// Green for exact matches, yellow for fuzzy ones, bold when the whole word matched.
fn category_style(category: MatchCategory) -> Style {
    let style = if category.is_exact() {
        Style::new().green()
    } else {
        Style::new().yellow()
    };

    if category.is_complete() {
        style.bold()
    } else {
        style.underline()
    }
}

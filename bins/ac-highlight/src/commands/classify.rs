//! Classify command - classify one word against matching prefixes

use anyhow::Result;
use autocomplete_highlight::{classify_word, MatchResult};
use owo_colors::{OwoColorize, Stream};

/// Run classify command
pub fn run(word: &str, prefixes: &[String], keywords: &[String], json: bool) -> Result<()> {
    let result = classify_word(prefixes, keywords, word);

    if json {
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    match (result, result.split(word)) {
        (MatchResult::Matched(m), Some((matched, remainder))) => {
            println!(
                "{} {}|{}",
                m.category.if_supports_color(Stream::Stdout, |t| t.green()),
                matched,
                remainder
            );
        }
        _ => println!("{} {}", "unmatched".if_supports_color(Stream::Stdout, |t| t.dimmed()), word),
    }

    Ok(())
}

//! Boundary validation for loosely typed quote payloads.

use serde::Deserialize;

use crate::engine::Quote;

pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// One entry as served by the public quote API.
///
/// Both fields are optional there (`author` is frequently `null`), so they
/// are optional here until validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuote {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Turn raw entries into typed quotes, dropping malformed ones.
///
/// An entry is kept when its trimmed text contains at least one A-Z letter.
/// A missing or blank author becomes [`UNKNOWN_AUTHOR`]. Some sources append
/// a `", type.fit"` attribution suffix to authors; it is stripped.
pub fn validate_quotes(raw: Vec<RawQuote>) -> Vec<Quote> {
    let total = raw.len();
    let quotes: Vec<Quote> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let text = entry.text.as_deref().map(str::trim).unwrap_or_default();
            if !text.chars().any(|ch| ch.is_ascii_alphabetic()) {
                tracing::debug!(index, "Dropping quote without letters");
                return None;
            }
            let author = entry
                .author
                .as_deref()
                .map(|author| author.trim().trim_end_matches(", type.fit").trim())
                .filter(|author| !author.is_empty())
                .unwrap_or(UNKNOWN_AUTHOR);
            Some(Quote::new(text, author))
        })
        .collect();

    if quotes.len() < total {
        tracing::info!(kept = quotes.len(), dropped = total - quotes.len(), "Validated quotes");
    }
    quotes
}

/// Parse a JSON array of raw quotes and validate it.
///
/// Only the outer array is required to be well formed. Entries with the
/// wrong shape are treated as empty and dropped during validation.
pub fn parse_quotes(json: &str) -> Result<Vec<Quote>, serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let raw = values
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap_or_default())
        .collect();
    Ok(validate_quotes(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_well_formed_entries() {
        let quotes = parse_quotes(r#"[{"text": "Be yourself.", "author": "Oscar Wilde"}]"#).unwrap();
        assert_eq!(quotes, vec![Quote::new("Be yourself.", "Oscar Wilde")]);
    }

    #[test]
    fn null_author_becomes_unknown() {
        let quotes = parse_quotes(r#"[{"text": "Hello there", "author": null}, {"text": "Bye"}]"#).unwrap();
        assert_eq!(quotes.len(), 2);
        assert!(quotes.iter().all(|quote| quote.author == UNKNOWN_AUTHOR));
    }

    #[test]
    fn strips_source_suffix_from_author() {
        let quotes = parse_quotes(r#"[{"text": "Stay hungry", "author": "Steve Jobs, type.fit"}]"#).unwrap();
        assert_eq!(quotes[0].author, "Steve Jobs");
    }

    #[test]
    fn drops_missing_blank_and_letterless_text() {
        let quotes = parse_quotes(
            r#"[{"author": "A"}, {"text": "   ", "author": "B"}, {"text": "42!", "author": "C"}, {"text": " Ok ", "author": "D"}]"#,
        )
        .unwrap();
        assert_eq!(quotes, vec![Quote::new("Ok", "D")]);
    }

    #[test]
    fn drops_entries_with_wrong_shape() {
        let quotes = parse_quotes(r#"[{"text": 7, "author": "A"}, "loose", {"text": "Kept", "author": "B"}]"#).unwrap();
        assert_eq!(quotes, vec![Quote::new("Kept", "B")]);
    }

    #[test]
    fn rejects_non_array_payload() {
        assert!(parse_quotes(r#"{"text": "nope"}"#).is_err());
    }
}

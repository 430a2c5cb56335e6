//! Lenient field decoders for backend payloads.
//!
//! The backend is not owned by this workspace and its serializers are loose:
//! decimals arrive as strings, lists sometimes arrive comma-joined, and unset
//! enums arrive as `""`. These helpers normalize all of that at the edge.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse an optional value from its string form; blank strings become `None`.
pub(crate) fn opt_from_str<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(u64),
    Float(f64),
    Text(String),
}

/// Accept integers, decimals (`120000.00`) or numeric strings.
pub(crate) fn opt_lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrText::Int(n)) => return Ok(Some(n)),
        Some(NumberOrText::Float(f)) => f,
        Some(NumberOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map_err(|_| de::Error::custom(format!("invalid number: {text}")))?
        }
    };

    if parsed.is_finite() && parsed >= 0.0 {
        Ok(Some(parsed.trunc() as u64))
    } else {
        Err(de::Error::custom(format!("invalid non-negative number: {parsed}")))
    }
}

pub(crate) fn opt_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    opt_lenient_u64(deserializer)?
        .map(|n| u32::try_from(n).map_err(de::Error::custom))
        .transpose()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrText {
    List(Vec<String>),
    Text(String),
}

/// Accept a JSON array of strings or a comma-separated string.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ListOrText>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(ListOrText::List(items)) => items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        Some(ListOrText::Text(text)) => split_list(&text),
    })
}

/// Split a comma-separated input into trimmed, non-empty entries.
pub(crate) fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "opt_lenient_u64")]
        amount: Option<u64>,
        #[serde(default, deserialize_with = "string_list")]
        tags: Vec<String>,
    }

    #[test]
    fn test_lenient_amounts() {
        let s: Sample = serde_json::from_str(r#"{"amount": "120000.00"}"#).unwrap();
        assert_eq!(s.amount, Some(120_000));

        let s: Sample = serde_json::from_str(r#"{"amount": 95000}"#).unwrap();
        assert_eq!(s.amount, Some(95_000));

        let s: Sample = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        assert_eq!(s.amount, None);

        assert!(serde_json::from_str::<Sample>(r#"{"amount": -5}"#).is_err());
    }

    #[test]
    fn test_string_list_accepts_both_shapes() {
        let s: Sample = serde_json::from_str(r#"{"tags": ["rust", " tokio "]}"#).unwrap();
        assert_eq!(s.tags, vec!["rust", "tokio"]);

        let s: Sample = serde_json::from_str(r#"{"tags": "health, remote stipend,,"}"#).unwrap();
        assert_eq!(s.tags, vec!["health", "remote stipend"]);

        let s: Sample = serde_json::from_str("{}").unwrap();
        assert!(s.tags.is_empty());
    }
}

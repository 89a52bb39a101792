//! Lenient decoding for request bodies posted by HTML forms
//!
//! Form-backed clients send every value as a string, script clients send
//! proper JSON numbers and arrays. Both shapes are accepted here.

use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Decode an optional integer given either as a JSON number or a numeric string.
///
/// `null` and blank strings decode to `None`.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    parse_int(Option::<IntOrString>::deserialize(deserializer)?)
}

/// Like [`lenient_int`], but only truthy values are kept.
///
/// The number `0` is falsy and decodes to `None`. The string `"0"` is not
/// blank, so it is kept as `Some(0)`.
pub fn truthy_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        Some(IntOrString::Int(0)) => Ok(None),
        other => parse_int(other),
    }
}

fn parse_int<E: de::Error>(value: Option<IntOrString>) -> Result<Option<i64>, E> {
    match value {
        None => Ok(None),
        Some(IntOrString::Int(v)) => Ok(Some(v)),
        Some(IntOrString::Str(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", s)))
        }
    }
}

/// Tags as sent by clients: a list, or a single comma-joined string
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Joined(String),
}

impl TagsInput {
    /// Normalize into trimmed, non-empty tags
    pub fn into_tags(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            TagsInput::List(list) => list,
            TagsInput::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Normalized tags, or `None` for an empty joined string.
    ///
    /// Any list counts as given, even an empty one.
    pub fn into_given_tags(self) -> Option<Vec<String>> {
        match &self {
            TagsInput::Joined(joined) if joined.is_empty() => None,
            _ => Some(self.into_tags()),
        }
    }
}

/// Keep a string only when it is non-empty
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

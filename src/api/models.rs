use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One news item as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    #[serde(deserialize_with = "id_text")]
    pub id: String,
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub date_added: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendingWord {
    pub word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

impl FromStr for Vote {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Vote::Up),
            "down" => Ok(Vote::Down),
            _ => Err(()),
        }
    }
}

/// Request body for `POST /vote`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VotePayload {
    pub vote: Vote,
    pub topics: Vec<String>,
    pub nick: String,
    pub user: String,
}

// Entry ids arrive as numbers from some endpoints and strings from others.
fn id_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "entry id must be a number or string, got {}",
            other
        ))),
    }
}

//! Chat line formatting. Nothing in here touches the network.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::api::models::{Entry, TrendingWord};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%a, %d %b %Y",
];

pub fn entry_line(entry: &Entry) -> String {
    match entry.date_added.as_deref().and_then(parse_date) {
        Some(date) => format!(
            "#{} ({}): {} {}",
            entry.id,
            date.format("%Y-%m-%d"),
            entry.title,
            entry.href
        ),
        None => format!("#{}: {} {}", entry.id, entry.title, entry.href),
    }
}

pub fn words_line(nick: &str, num_hours: u32, num_words: u32, words: &[TrendingWord]) -> String {
    let word_list = words
        .iter()
        .map(|w| w.word.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}: Trending {} words over the last {} hours: {}",
        nick, num_words, num_hours, word_list
    )
}

pub fn error_line(nick: &str, message: &str) -> String {
    format!("{}: Error => {}", nick, message)
}

pub fn info_line(text: impl Into<String>) -> String {
    text.into()
}

/// Best-effort parse of the free-form `date_added` field.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        })
}

use tracing::warn;

use crate::api::response::NO_DETAILS;
use crate::error::{AppError, Result};
use crate::present::{error_line, info_line, words_line};
use crate::AppState;

use super::Invoker;

pub const TOO_MANY_VALUES: &str = "You may supply a maximum of 2 values for trending: '.trending <num-hours> <num-words>'. Using default values instead.";
pub const NOT_A_NUMBER: &str = "Trending values must be positive whole numbers: '.trending <num-hours> <num-words>'. Using default values instead.";
const NO_WORDS: &str =
    "No words were returned for your trending 'number of hours' and 'number of words' range";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendingArgs {
    pub hours: u32,
    pub words: u32,
}

/// Reads `[hours] [words]`, starting from `defaults` for anything not supplied.
pub fn parse_args(args: &str, defaults: TrendingArgs) -> Result<TrendingArgs> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    if tokens.len() > 2 {
        return Err(AppError::UsageError(TOO_MANY_VALUES.to_string()));
    }

    let mut parsed = defaults;
    if let Some(hours) = tokens.first() {
        parsed.hours = positive(hours)?;
    }
    if let Some(words) = tokens.get(1) {
        parsed.words = positive(words)?;
    }
    Ok(parsed)
}

fn positive(token: &str) -> Result<u32> {
    match token.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::UsageError(NOT_A_NUMBER.to_string())),
    }
}

pub async fn run(state: &AppState, invoker: &Invoker, args: &str) -> Vec<String> {
    let nick = invoker.nick.as_str();
    let defaults = TrendingArgs {
        hours: state.config.default_trending_hours,
        words: state.config.default_trending_words,
    };

    let mut lines = Vec::new();
    // Bad arguments are reported but the lookup still runs with the defaults.
    let wanted = match parse_args(args, defaults) {
        Ok(wanted) => wanted,
        Err(e) => {
            lines.push(error_line(nick, &e.chat_message()));
            defaults
        }
    };

    let result = state.client.fetch_trending(wanted.hours, wanted.words).await;
    if !result.is_ok() {
        lines.push(error_line(nick, &result.display_message(NO_DETAILS)));
        return lines;
    }

    match result.words() {
        Ok(words) if !words.is_empty() => {
            lines.push(words_line(nick, wanted.hours, wanted.words, &words));
        }
        Ok(_) => lines.push(info_line(format!("{}: {}", nick, NO_WORDS))),
        Err(e) => {
            warn!("Unreadable word cloud payload: {}", e);
            lines.push(error_line(nick, &e.chat_message()));
        }
    }
    lines
}

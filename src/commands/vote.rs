use crate::api::models::{Vote, VotePayload};
use crate::api::response::NO_DETAILS;
use crate::error::{AppError, Result};
use crate::present::{error_line, info_line};
use crate::AppState;

use super::Invoker;

pub const USAGE: &str = "You need to supply topic(s) and end with the term 'up' or 'down' to register: '.vote <topic(s)> [up|down]'";

/// Splits `<topic...> up|down` into the topics and the direction.
pub fn parse_args(args: &str) -> Result<(Vec<String>, Vote)> {
    let mut tokens: Vec<&str> = args.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(AppError::UsageError(USAGE.to_string()));
    }

    let vote = tokens
        .pop()
        .and_then(|last| last.parse::<Vote>().ok())
        .ok_or_else(|| AppError::UsageError(USAGE.to_string()))?;

    Ok((tokens.into_iter().map(str::to_string).collect(), vote))
}

pub async fn run(state: &AppState, invoker: &Invoker, args: &str) -> Vec<String> {
    let nick = invoker.nick.as_str();
    let (topics, vote) = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(e) => return vec![error_line(nick, &e.chat_message())],
    };

    let payload = VotePayload {
        vote,
        topics,
        nick: invoker.nick.clone(),
        user: invoker.user.clone(),
    };

    let result = state.client.post_vote(&payload).await;
    if result.is_ok() {
        vec![info_line(format!("{}: {}", nick, result.message))]
    } else {
        vec![error_line(nick, &result.display_message(NO_DETAILS))]
    }
}

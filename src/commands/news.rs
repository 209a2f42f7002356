use tracing::warn;

use crate::api::models::Entry;
use crate::api::response::{ApiResult, NO_DETAILS};
use crate::present::{entry_line, error_line, info_line};
use crate::AppState;

use super::Invoker;

pub const MISSING_ID: &str = "Supply an entry id after the '#': '.n #<id>'";
const COULD_NOT_RETRIEVE: &str = "Could not retrieve entry";

/// `.n` lists the latest entries, `.n #<id>` shows one entry and anything
/// else is a search.
pub async fn run(state: &AppState, invoker: &Invoker, args: &str) -> Vec<String> {
    let args = args.trim();
    if args.is_empty() {
        latest(state, invoker).await
    } else if let Some(id) = args.strip_prefix('#') {
        by_id(state, invoker, id.trim()).await
    } else {
        search(state, invoker, args).await
    }
}

async fn by_id(state: &AppState, invoker: &Invoker, id: &str) -> Vec<String> {
    let nick = invoker.nick.as_str();
    if id.is_empty() {
        return vec![error_line(nick, MISSING_ID)];
    }

    let result = state.client.fetch_by_id(id).await;
    if !result.is_ok() {
        let text = if result.message.trim().is_empty() {
            result.display_message(COULD_NOT_RETRIEVE)
        } else {
            format!("Error {}: {}", result.status_code, result.message)
        };
        return vec![error_line(nick, &text)];
    }

    match entries_or_error(&result, nick) {
        Ok(mut entries) => match entries.pop() {
            Some(entry) => vec![entry_line(&entry)],
            None => vec![error_line(
                nick,
                &format!("The specific ID '{}' was not found", id),
            )],
        },
        Err(line) => vec![line],
    }
}

async fn search(state: &AppState, invoker: &Invoker, term: &str) -> Vec<String> {
    let nick = invoker.nick.as_str();
    let result = state.client.search(term).await;
    if !result.is_ok() {
        return vec![error_line(nick, &result.display_message(NO_DETAILS))];
    }

    let entries = match entries_or_error(&result, nick) {
        Ok(entries) => entries,
        Err(line) => return vec![line],
    };

    let total = result.max_results().unwrap_or(entries.len() as u64);
    if total == 0 {
        return vec![info_line(format!("{}: ain't got nothin' for '{}'.", nick, term))];
    }

    let shown = entries.len().min(state.config.max_display_results);
    let mut summary = format!(
        "{}: Displaying {} newest entries from {} results.",
        nick, shown, total
    );
    // Only link to the web UI when there is something left to see.
    if (shown as u64) < total {
        summary.push_str(&format!(
            " More: {}{}",
            state.config.search_url(),
            urlencoding::encode(term)
        ));
    }

    let mut lines = vec![info_line(summary)];
    lines.extend(entries.iter().take(shown).map(entry_line));
    lines
}

async fn latest(state: &AppState, invoker: &Invoker) -> Vec<String> {
    let nick = invoker.nick.as_str();
    let count = state.config.max_display_results;
    let result = state.client.fetch_latest(0, count).await;
    if !result.is_ok() {
        return vec![error_line(nick, &result.display_message(NO_DETAILS))];
    }

    match entries_or_error(&result, nick) {
        Ok(entries) if entries.is_empty() => {
            vec![info_line(format!("{}: No news entries are available right now.", nick))]
        }
        Ok(entries) => entries.iter().take(count).map(entry_line).collect(),
        Err(line) => vec![line],
    }
}

fn entries_or_error(result: &ApiResult, nick: &str) -> Result<Vec<Entry>, String> {
    result.entries().map_err(|e| {
        warn!("Unreadable entry list: {}", e);
        error_line(nick, &e.chat_message())
    })
}

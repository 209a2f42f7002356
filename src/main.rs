use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lowtech_news_bot::{config::Config, AppState, CommandLine, CommandTable, Invoker};

/// Runs lowtech news chat commands locally, printing what the bot would say.
#[derive(Parser)]
#[command(name = "lowtech-news-bot")]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "cli")]
    nick: String,

    #[arg(long, default_value = "cli")]
    user: String,

    /// Command prefix expected on stdin lines.
    #[arg(long, default_value = ".")]
    prefix: String,

    /// A single command to run, e.g. `n candy crush`. Reads stdin when absent.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries chat lines only
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let config = Config::load()?;
    info!("Using news API at {}", config.api_url());

    let table = CommandTable::new(AppState::new(config)?);
    let invoker = Invoker::new(cli.nick, cli.user);

    if let Some((name, args)) = cli.command.split_first() {
        run_line(&table, &invoker, name, &args.join(" ")).await;
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(parsed) = CommandLine::parse(&line, &cli.prefix) {
            run_line(&table, &invoker, parsed.name, parsed.args).await;
        }
    }

    Ok(())
}

async fn run_line(table: &CommandTable, invoker: &Invoker, name: &str, args: &str) {
    info!("{} ran '{}' with '{}'", invoker.nick, name, args);
    if name.eq_ignore_ascii_case("help") {
        for line in help_lines(args) {
            println!("{}", line);
        }
        return;
    }

    match table.dispatch(name, invoker, args).await {
        Some(output) => {
            for line in output {
                println!("{}", line);
            }
        }
        None => eprintln!("Unknown command '{}'. Try 'help'.", name),
    }
}

/// `help` lists every command, `help <name>` shows one usage example.
fn help_lines(args: &str) -> Vec<String> {
    let wanted = args.trim();
    if wanted.is_empty() {
        return CommandTable::registrations()
            .iter()
            .filter_map(|r| CommandTable::help(r.name))
            .map(str::to_string)
            .collect();
    }

    match CommandTable::help(wanted) {
        Some(example) => vec![example.to_string()],
        None => vec![format!("No such command '{}'.", wanted)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_registration() {
        assert_eq!(help_lines("").len(), CommandTable::registrations().len());
    }

    #[test]
    fn help_for_one_command() {
        let lines = help_lines(" vote ");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(".vote <topic(s)> [up|down]"));
        assert_eq!(help_lines("weather"), vec!["No such command 'weather'."]);
    }
}

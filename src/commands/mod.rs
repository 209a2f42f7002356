pub mod news;
pub mod trending;
pub mod vote;

use crate::AppState;

/// Who typed the command, as reported by the chat host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    pub nick: String,
    pub user: String,
}

impl Invoker {
    pub fn new(nick: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            user: user.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Trending,
    News,
    Vote,
}

impl Command {
    pub async fn run(self, state: &AppState, invoker: &Invoker, args: &str) -> Vec<String> {
        match self {
            Command::Trending => trending::run(state, invoker, args).await,
            Command::News => news::run(state, invoker, args).await,
            Command::Vote => vote::run(state, invoker, args).await,
        }
    }
}

pub struct Registration {
    pub name: &'static str,
    pub command: Command,
    pub example: &'static str,
}

const REGISTRATIONS: &[Registration] = &[
    Registration {
        name: "trending",
        command: Command::Trending,
        example: ".trending [num-hours] [num-words] - trending words from the news cycle (default 24 hours, 20 words)",
    },
    Registration {
        name: "n",
        command: Command::News,
        example: ".n [#id | search terms] - latest news, a specific entry, or a search",
    },
    Registration {
        name: "v",
        command: Command::Vote,
        example: ".v <topic(s)> [up|down] - vote topics up or down",
    },
    Registration {
        name: "vote",
        command: Command::Vote,
        example: ".vote <topic(s)> [up|down] - vote topics up or down",
    },
];

/// Name to handler table the chat host dispatches through.
#[derive(Clone)]
pub struct CommandTable {
    state: AppState,
}

impl CommandTable {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn registrations() -> &'static [Registration] {
        REGISTRATIONS
    }

    pub fn lookup(name: &str) -> Option<Command> {
        Self::find(name).map(|r| r.command)
    }

    pub fn help(name: &str) -> Option<&'static str> {
        Self::find(name).map(|r| r.example)
    }

    /// Runs `name` and returns the lines to say, or `None` if no such command.
    pub async fn dispatch(&self, name: &str, invoker: &Invoker, args: &str) -> Option<Vec<String>> {
        let command = Self::lookup(name)?;
        tracing::debug!("Dispatching {:?} for {}", command, invoker.nick);
        Some(command.run(&self.state, invoker, args).await)
    }

    fn find(name: &str) -> Option<&'static Registration> {
        REGISTRATIONS
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }
}

/// A chat message split into command name and trailing argument text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub name: &'a str,
    pub args: &'a str,
}

impl<'a> CommandLine<'a> {
    /// `".n candy crush"` with prefix `"."` gives `("n", "candy crush")`.
    pub fn parse(text: &'a str, prefix: &str) -> Option<Self> {
        let rest = text.trim().strip_prefix(prefix)?;
        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };
        if name.is_empty() {
            return None;
        }
        Some(Self { name, args })
    }
}

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod present;

use std::sync::Arc;
use api::ApiClient;
use config::Config;

pub use commands::{CommandLine, CommandTable, Invoker};

/// Everything a command handler needs, shared across invocations.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: ApiClient,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let client = ApiClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}

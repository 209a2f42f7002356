//! In-process stand-in for the news API.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::Router;
use lowtech_news_bot::config::{Config, DEFAULT_API_PATH};
use lowtech_news_bot::{AppState, CommandTable, Invoker};
use tokio::net::TcpListener;

#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: String,
    pub uri: String,
    pub body: String,
}

#[derive(Clone)]
struct MockState {
    routes: Arc<HashMap<String, (u16, String)>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

#[derive(Default)]
pub struct MockApiBuilder {
    routes: HashMap<String, (u16, String)>,
}

impl MockApiBuilder {
    /// `path` is relative to the API root, e.g. `/id/1`.
    pub fn route(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes
            .insert(format!("{}{}", DEFAULT_API_PATH, path), (status, body.into()));
        self
    }

    pub async fn start(self) -> MockApi {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            routes: Arc::new(self.routes),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockApi {
            base_url: format!("http://{}", addr),
            requests,
        }
    }
}

pub struct MockApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockApi {
    pub fn builder() -> MockApiBuilder {
        MockApiBuilder::default()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn table(&self) -> CommandTable {
        table_for(&self.base_url)
    }
}

pub fn table_for(base_url: &str) -> CommandTable {
    CommandTable::new(AppState::new(Config::with_base_url(base_url)).unwrap())
}

pub fn alice() -> Invoker {
    Invoker::new("alice", "~alice@example.net")
}

pub async fn say(table: &CommandTable, name: &str, args: &str) -> Vec<String> {
    table
        .dispatch(name, &alice(), args)
        .await
        .expect("command is registered")
}

async fn respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    body: String,
) -> (StatusCode, String) {
    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        uri: uri.to_string(),
        body,
    });

    match state.routes.get(uri.path()) {
        Some((status, body)) => (StatusCode::from_u16(*status).unwrap(), body.clone()),
        None => (StatusCode::NOT_FOUND, "no such route".to_string()),
    }
}

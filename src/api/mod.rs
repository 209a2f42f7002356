pub mod client;
pub mod models;
pub mod response;

pub use client::ApiClient;
pub use models::{Entry, TrendingWord, Vote, VotePayload};
pub use response::{normalize, ApiResult, RawResponse};

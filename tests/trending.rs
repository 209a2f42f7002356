mod helpers;

use helpers::{say, MockApi};
use lowtech_news_bot::commands::trending::TOO_MANY_VALUES;

const WORDS: &str = r#"{"code": 200, "payload": [{"word": "rust"}, {"word": "irc"}, {"word": "news"}]}"#;

#[tokio::test]
async fn trending_without_arguments_uses_defaults() {
    let api = MockApi::builder()
        .route("/info/word-cloud", 200, WORDS)
        .start()
        .await;

    let lines = say(&api.table(), "trending", "").await;

    assert_eq!(
        lines,
        vec!["alice: Trending 20 words over the last 24 hours: rust, irc, news"]
    );
    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].uri, "/api/v1/info/word-cloud?num_hours=24&num_words=20");
}

#[tokio::test]
async fn trending_with_two_values_overrides_both() {
    let api = MockApi::builder()
        .route("/info/word-cloud", 200, WORDS)
        .start()
        .await;

    let lines = say(&api.table(), "trending", "48 15").await;

    assert_eq!(
        lines,
        vec!["alice: Trending 15 words over the last 48 hours: rust, irc, news"]
    );
    assert_eq!(
        api.requests()[0].uri,
        "/api/v1/info/word-cloud?num_hours=48&num_words=15"
    );
}

#[tokio::test]
async fn trending_with_one_value_overrides_hours() {
    let api = MockApi::builder()
        .route("/info/word-cloud", 200, WORDS)
        .start()
        .await;

    say(&api.table(), "trending", "6").await;

    assert_eq!(
        api.requests()[0].uri,
        "/api/v1/info/word-cloud?num_hours=6&num_words=20"
    );
}

#[tokio::test]
async fn too_many_values_warns_then_uses_defaults() {
    let api = MockApi::builder()
        .route("/info/word-cloud", 200, WORDS)
        .start()
        .await;

    let lines = say(&api.table(), "trending", "1 2 3").await;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("alice: Error => {}", TOO_MANY_VALUES));
    assert_eq!(
        lines[1],
        "alice: Trending 20 words over the last 24 hours: rust, irc, news"
    );
    assert_eq!(
        api.requests()[0].uri,
        "/api/v1/info/word-cloud?num_hours=24&num_words=20"
    );
}

#[tokio::test]
async fn empty_word_cloud_is_not_an_error() {
    let api = MockApi::builder()
        .route("/info/word-cloud", 200, r#"{"code": 200, "payload": []}"#)
        .start()
        .await;

    let lines = say(&api.table(), "trending", "").await;

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("alice: No words were returned"));
    assert!(!lines[0].contains("Error =>"));
}

#[tokio::test]
async fn embedded_error_code_wins_over_http_200() {
    let api = MockApi::builder()
        .route(
            "/info/word-cloud",
            200,
            r#"{"code": 500, "payload": [{"word": "ignored"}], "metadata": {"message": "cloud is down"}}"#,
        )
        .start()
        .await;

    let lines = say(&api.table(), "trending", "").await;

    assert_eq!(lines, vec!["alice: Error => cloud is down"]);
}

#[tokio::test]
async fn empty_error_body_shows_status() {
    let api = MockApi::builder()
        .route("/info/word-cloud", 500, "")
        .start()
        .await;

    let lines = say(&api.table(), "trending", "").await;

    assert_eq!(
        lines,
        vec!["alice: Error => Error 500: No details were returned by the news API"]
    );
}

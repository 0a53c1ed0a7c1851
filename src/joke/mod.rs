pub mod client;
pub mod worker;

pub use client::{DEFAULT_JOKE_URL, HttpJokeSource, HttpReply, JokeSource};
pub use worker::spawn_joke_fetch;

use crate::logger;
use crate::models::{Joke, JokeDisplay};
use serde::Deserialize;
use thiserror::Error;

pub const FAILURE_MESSAGE: &str = "Failed to fetch a joke. Try again.";
pub const LOADING_MESSAGE: &str = "Loading...";

#[derive(Debug, Error)]
pub enum JokeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("joke service returned status {status}")]
    Status { status: u16 },

    #[error("joke response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("joke response is missing '{field}'")]
    MissingField { field: &'static str },

    #[error("joke fetching is unavailable")]
    Unavailable,
}

#[derive(Debug, Deserialize)]
struct RawJoke {
    setup: Option<String>,
    punchline: Option<String>,
}

/// Performs exactly one request and validates the body shape.
pub async fn fetch_joke(source: &dyn JokeSource) -> Result<Joke, JokeError> {
    let reply = source.get().await?;
    if !reply.is_success() {
        return Err(JokeError::Status {
            status: reply.status,
        });
    }
    parse_joke(&reply.body)
}

pub fn parse_joke(body: &str) -> Result<Joke, JokeError> {
    let raw: RawJoke = serde_json::from_str(body)?;
    Ok(Joke {
        setup: raw.setup.ok_or(JokeError::MissingField { field: "setup" })?,
        punchline: raw
            .punchline
            .ok_or(JokeError::MissingField { field: "punchline" })?,
    })
}

pub fn format_joke(joke: &Joke) -> String {
    format!("{} — {}", joke.setup, joke.punchline)
}

/// Turns a finished fetch into what the joke panel shows. Failures are logged
/// here and never reach the caller.
pub fn display_for(result: Result<Joke, JokeError>) -> JokeDisplay {
    match result {
        Ok(joke) => JokeDisplay::Shown(format_joke(&joke)),
        Err(e) => {
            logger::error(&format!("Fetch error: {}", e));
            JokeDisplay::Failed
        }
    }
}

impl JokeDisplay {
    pub fn text(&self) -> &str {
        match self {
            JokeDisplay::Idle => "",
            JokeDisplay::Loading => LOADING_MESSAGE,
            JokeDisplay::Shown(text) => text,
            JokeDisplay::Failed => FAILURE_MESSAGE,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays a fixed reply and counts how often it was asked.
    pub(crate) struct StaticSource {
        pub reply: HttpReply,
        pub calls: AtomicUsize,
    }

    impl StaticSource {
        pub(crate) fn new(status: u16, body: &str) -> Self {
            Self {
                reply: HttpReply {
                    status,
                    body: body.to_string(),
                },
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl JokeSource for StaticSource {
        async fn get(&self) -> Result<HttpReply, JokeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    /// Fails before any reply arrives, like a dropped connection.
    struct FailingSource;

    #[async_trait]
    impl JokeSource for FailingSource {
        async fn get(&self) -> Result<HttpReply, JokeError> {
            // An unparseable URL makes reqwest fail without touching the network
            let err = reqwest::Client::new()
                .get("http://")
                .send()
                .await
                .unwrap_err();
            Err(JokeError::Http(err))
        }
    }

    const GOOD_BODY: &str = r#"{"type":"general","setup":"Why did the scarecrow win an award?","punchline":"He was outstanding in his field.","id":1}"#;

    #[tokio::test]
    async fn test_fetch_success() {
        let source = StaticSource::new(200, GOOD_BODY);
        let joke = fetch_joke(&source).await.unwrap();
        assert_eq!(joke.setup, "Why did the scarecrow win an award?");
        assert_eq!(joke.punchline, "He was outstanding in his field.");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let source = StaticSource::new(503, GOOD_BODY);
        let result = fetch_joke(&source).await;
        assert!(matches!(result, Err(JokeError::Status { status: 503 })));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_success_displays_failure_message() {
        let source = StaticSource::new(404, "not found");
        let display = display_for(fetch_joke(&source).await);
        assert_eq!(display, JokeDisplay::Failed);
        assert_eq!(display.text(), FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_transport_error_displays_failure_message() {
        let result = fetch_joke(&FailingSource).await;
        assert!(matches!(result, Err(JokeError::Http(_))));

        let display = display_for(result);
        assert_eq!(display, JokeDisplay::Failed);
        assert_eq!(display.text(), FAILURE_MESSAGE);
    }

    #[test]
    fn test_unavailable_displays_failure_message() {
        let display = display_for(Err(JokeError::Unavailable));
        assert_eq!(display.text(), FAILURE_MESSAGE);
    }

    #[test]
    fn test_parse_missing_punchline() {
        let result = parse_joke(r#"{"setup":"Knock knock"}"#);
        assert!(matches!(
            result,
            Err(JokeError::MissingField { field: "punchline" })
        ));
    }

    #[test]
    fn test_parse_not_json() {
        assert!(matches!(parse_joke("<html>"), Err(JokeError::Decode(_))));
    }

    #[test]
    fn test_parse_wrong_field_type() {
        assert!(matches!(
            parse_joke(r#"{"setup":1,"punchline":"x"}"#),
            Err(JokeError::Decode(_))
        ));
    }

    #[test]
    fn test_display_for_success() {
        let joke = Joke {
            setup: "Setup".to_string(),
            punchline: "Punchline".to_string(),
        };
        let display = display_for(Ok(joke));
        assert_eq!(display.text(), "Setup — Punchline");
    }

    #[test]
    fn test_display_texts() {
        assert_eq!(JokeDisplay::Idle.text(), "");
        assert_eq!(JokeDisplay::Loading.text(), "Loading...");
    }
}

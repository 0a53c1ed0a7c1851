use super::{JokeError, JokeSource, fetch_joke};
use crate::logger;
use crate::models::Joke;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

pub type JokeResult = Result<Joke, JokeError>;

/// Runs one fetch on the runtime and hands the outcome back to the event
/// loop. Overlapping fetches are not cancelled; whichever finishes last is
/// what ends up on screen.
pub fn spawn_joke_fetch(
    source: Arc<dyn JokeSource>,
    tx: UnboundedSender<JokeResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        logger::info("Fetching joke");
        let result = fetch_joke(source.as_ref()).await;
        if tx.send(result).is_err() {
            logger::warn("Joke result dropped: event loop is gone");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joke::tests::StaticSource;
    use std::sync::atomic::Ordering;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_worker_delivers_result() {
        let source = Arc::new(StaticSource::new(
            200,
            r#"{"setup":"S","punchline":"P"}"#,
        ));
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_joke_fetch(source.clone(), tx).await.unwrap();

        let joke = rx.recv().await.unwrap().unwrap();
        assert_eq!(joke.setup, "S");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_worker_delivers_error() {
        let source = Arc::new(StaticSource::new(500, ""));
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_joke_fetch(source, tx).await.unwrap();

        assert!(matches!(
            rx.recv().await.unwrap(),
            Err(JokeError::Status { status: 500 })
        ));
    }

    #[tokio::test]
    async fn test_worker_survives_closed_channel() {
        let source = Arc::new(StaticSource::new(200, r#"{"setup":"S","punchline":"P"}"#));
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        spawn_joke_fetch(source, tx).await.unwrap();
    }

    #[tokio::test]
    async fn test_each_spawn_is_one_request() {
        let source = Arc::new(StaticSource::new(200, r#"{"setup":"S","punchline":"P"}"#));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let first = spawn_joke_fetch(source.clone(), tx.clone());
        let second = spawn_joke_fetch(source.clone(), tx);
        first.await.unwrap();
        second.await.unwrap();

        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}

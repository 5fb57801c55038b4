use std::time::Duration;

use futures_util::StreamExt;
use thiserror::Error;

use stocksense_ai::SuggestionKind;

use crate::frame::FrameBuffer;
use crate::state::InsightPhase;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ConsumeError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The server closed the stream without a `complete` or `error` frame.
    #[error("stream closed without a terminal event")]
    Incomplete,

    /// No terminal event arrived within the configured timeout.
    #[error("no terminal event within {0:?}")]
    TimedOut(Duration),
}

/// Fetches one suggestion stream and drives the state machine to a
/// terminal phase.
///
/// The whole exchange runs under a timeout so an upstream that never sends
/// a terminal frame yields an error instead of an indefinite `Loading`.
pub struct InsightClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl InsightClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch suggestions of one kind.
    ///
    /// Returns the terminal phase: `Success` with the raw suggestion array,
    /// or `Error` when the server reported a failure. Transport problems
    /// and missing terminal events surface as `ConsumeError`.
    pub async fn fetch(&self, kind: SuggestionKind) -> Result<InsightPhase, ConsumeError> {
        let mut phase = InsightPhase::Idle;
        phase.begin();

        match tokio::time::timeout(self.timeout, self.read_stream(kind, &mut phase)).await {
            Ok(Ok(())) if phase.is_terminal() => Ok(phase),
            Ok(Ok(())) => Err(ConsumeError::Incomplete),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(ConsumeError::TimedOut(self.timeout)),
        }
    }

    async fn read_stream(
        &self,
        kind: SuggestionKind,
        phase: &mut InsightPhase,
    ) -> Result<(), ConsumeError> {
        let url = format!("{}/api/ai/{}", self.base_url, kind.path_segment());

        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|source| ConsumeError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConsumeError::Status { url, status });
        }

        let mut buffer = FrameBuffer::new();
        let mut body = response.bytes_stream();

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|source| ConsumeError::Http {
                url: url.clone(),
                source,
            })?;

            for event in buffer.push(&String::from_utf8_lossy(&chunk)) {
                phase.apply(event);
                if phase.is_terminal() {
                    return Ok(());
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// Serve one canned HTTP response on an ephemeral port, then hold the
    /// connection open for `linger`.
    async fn one_shot_server(body_frames: &'static str, linger: Duration) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            // Drain the request so closing the socket sends FIN, not RST.
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            let head = "HTTP/1.1 200 OK\r\ncontent-type: text/event-stream\r\n\r\n";
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(body_frames.as_bytes()).await.unwrap();
            socket.flush().await.unwrap();
            tokio::time::sleep(linger).await;
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn terminal_complete_yields_success_phase() {
        let base_url = one_shot_server(
            "data: {\"type\":\"status\",\"message\":\"working\"}\n\n\
data: {\"type\":\"complete\",\"data\":[{\"product_id\":\"PRD001\"}]}\n\n",
            Duration::from_millis(0),
        )
        .await;

        let client = InsightClient::new(base_url);
        let phase = client.fetch(SuggestionKind::Restock).await.unwrap();
        match phase {
            InsightPhase::Success(data) => assert_eq!(data.len(), 1),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_event_yields_error_phase() {
        let base_url = one_shot_server(
            "data: {\"type\":\"error\",\"error\":\"provider unavailable\"}\n\n",
            Duration::from_millis(0),
        )
        .await;

        let client = InsightClient::new(base_url);
        let phase = client.fetch(SuggestionKind::Price).await.unwrap();
        assert_eq!(
            phase,
            InsightPhase::Error("provider unavailable".to_string())
        );
    }

    #[tokio::test]
    async fn stalled_stream_times_out_instead_of_loading_forever() {
        let base_url = one_shot_server(
            "data: {\"type\":\"status\",\"message\":\"working\"}\n\n",
            Duration::from_secs(5),
        )
        .await;

        let client =
            InsightClient::new(base_url).with_timeout(Duration::from_millis(200));
        let err = client.fetch(SuggestionKind::Trending).await.unwrap_err();
        assert!(matches!(err, ConsumeError::TimedOut(_)));
    }

    #[tokio::test]
    async fn closed_stream_without_terminal_is_incomplete() {
        let base_url = one_shot_server(
            "data: {\"type\":\"status\",\"message\":\"working\"}\n\n",
            Duration::from_millis(0),
        )
        .await;

        let client = InsightClient::new(base_url);
        let err = client.fetch(SuggestionKind::Restock).await.unwrap_err();
        assert!(matches!(err, ConsumeError::Incomplete));
    }
}

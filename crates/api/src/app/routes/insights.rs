//! AI suggestion endpoints: one POST SSE stream per suggestion kind.
//!
//! Per-request state machine: Started -> Analyzing -> {Completed | Failed}.
//! Every request emits one advisory `status` frame, then exactly one
//! terminal `complete` or `error` frame, then the channel closes.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::Extension,
    http::header,
    response::{
        IntoResponse,
        sse::{Event as SseEvent, KeepAlive, Sse},
    },
    routing::post,
};
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::Instrument;
use uuid::Uuid;

use stocksense_ai::{InsightError, StreamEvent, SuggestionKind};

use crate::app::state::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/restock", post(restock))
        .route("/price", post(price))
        .route("/trending", post(trending))
}

/// POST /api/ai/restock
pub async fn restock(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    stream_suggestions(state, SuggestionKind::Restock)
}

/// POST /api/ai/price
pub async fn price(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    stream_suggestions(state, SuggestionKind::Price)
}

/// POST /api/ai/trending
pub async fn trending(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    stream_suggestions(state, SuggestionKind::Trending)
}

/// Shared pipeline for all three kinds.
///
/// The handler returns immediately with the SSE response; the pipeline runs
/// in a spawned task that owns the sender, so the channel closes when the
/// task finishes. If the client disconnects mid-flight the provider call
/// still runs to completion (accepted resource cost, not mitigated).
fn stream_suggestions(state: Arc<AppState>, kind: SuggestionKind) -> axum::response::Response {
    let (tx, rx) = unbounded_channel::<Result<SseEvent, Infallible>>();

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("suggestion_request", %request_id, %kind);

    tokio::spawn(
        async move {
            send_event(
                &tx,
                &StreamEvent::Status {
                    message: kind.status_message().to_string(),
                },
            );

            let result = state
                .service
                .suggestions(kind, &state.datasets.inventory, &state.datasets.sales_history)
                .await;

            // Exactly one terminal event per request.
            match result {
                Ok(data) => {
                    tracing::info!(count = data.len(), "suggestions complete");
                    send_event(&tx, &StreamEvent::Complete { data });
                }
                Err(err) => {
                    tracing::error!(error = %err, "suggestion pipeline failed");
                    send_event(
                        &tx,
                        &StreamEvent::Error {
                            error: error_text(&err, kind),
                        },
                    );
                }
            }
        }
        .instrument(span),
    );

    let stream = UnboundedReceiverStream::new(rx);
    (
        [(header::CACHE_CONTROL, "no-cache")],
        Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15))),
    )
        .into_response()
}

fn send_event(tx: &UnboundedSender<Result<SseEvent, Infallible>>, event: &StreamEvent) {
    match serde_json::to_string(event) {
        Ok(json) => {
            // A send failure means the client disconnected; nothing to do.
            let _ = tx.send(Ok(SseEvent::default().data(json)));
        }
        Err(e) => tracing::warn!(error = %e, "failed to encode stream event"),
    }
}

/// The error's own message when it has one, else the kind's fallback string.
fn error_text(err: &InsightError, kind: SuggestionKind) -> String {
    let message = err.to_string();
    if message.is_empty() {
        kind.fallback_error().to_string()
    } else {
        message
    }
}

use stocksense_ai::StreamEvent;

/// Incremental decoder for a chunked SSE body.
///
/// Chunk boundaries do not align with frame boundaries, so partial lines
/// stay buffered until their newline arrives. Lines without the `data: `
/// prefix (blank separators, keep-alive comments) are skipped; a `data:`
/// line whose payload fails to decode is logged and skipped without
/// aborting the read.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    buf: String,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one body chunk; returns the events completed by it, in order.
    pub fn push(&mut self, chunk: &str) -> Vec<StreamEvent> {
        self.buf.push_str(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.buf.find('\n') {
            let line: String = self.buf.drain(..=pos).collect();
            let line = line.trim_end_matches(['\n', '\r']);

            let Some(payload) = line.strip_prefix("data: ") else {
                continue;
            };
            if payload.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<StreamEvent>(payload) {
                Ok(event) => events.push(event),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed stream frame");
                }
            }
        }
        events
    }
}

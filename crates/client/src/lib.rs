//! `stocksense-client` — consumer side of the suggestion push channel.
//!
//! Mirrors what the dashboard frontend does with a fetch-and-read loop:
//! buffer the chunked body, split SSE `data:` frames, drive a per-kind
//! `Idle -> Loading -> {Success | Error}` state machine, and give up after
//! a configurable timeout instead of sitting in `Loading` forever.

pub mod fetch;
pub mod frame;
pub mod state;

pub use fetch::{ConsumeError, InsightClient};
pub use frame::FrameBuffer;
pub use state::InsightPhase;

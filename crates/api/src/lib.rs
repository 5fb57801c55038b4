//! HTTP API: server, routing, and the SSE suggestion endpoints.

pub mod app;

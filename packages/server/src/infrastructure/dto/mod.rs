//! Data transfer objects for the HTTP and WebSocket surfaces.
//!
//! WebSocket event envelopes live in `madoguchi-shared` because the CLI
//! client speaks the same wire contract; only the conversions between those
//! payloads and the domain live here.

pub mod http;
pub mod websocket;

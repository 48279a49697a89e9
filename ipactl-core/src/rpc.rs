//! # JSON-RPC Wire Layer
//!
//! This module contains the envelopes exchanged with the `/session/json` endpoint.
//!
//! Unlike strongly typed API bindings, the components here work with generic
//! `serde_json::Value` trees. The service is the source of truth for which methods
//! exist and which options they accept, so nothing here validates call shapes.
pub mod attribute;
pub mod request;
pub mod response;

pub use attribute::FromAttribute;
pub use request::{API_VERSION, Request};
pub use response::{Message, ParseError, Response, RpcResult};

//! # Ipactl Core
//!
//! `ipactl-core` is the foundational library powering the Ipactl CLI. It provides an
//! authenticated client for the FreeIPA JSON-RPC API and a generic accessor layer over
//! the loosely-typed payloads the service returns.
//!
//! ## Key Components
//!
//! * **[`IpaClient`]:** The main entry point. It owns the HTTP session (cookie store and
//!   credentials), performs password or Kerberos logins and transparently re-authenticates
//!   once when the session cookie expires.
//! * **[`Request`] & [`Response`]:** The JSON-RPC envelopes. Requests carry positional
//!   arguments and keyword options; responses expose typed, key/index-addressed accessors
//!   that normalize the service's scalar-vs-list encoding and its `__base64__`/`__datetime__`
//!   tagged values.
//!
//! ## Errors
//!
//! * **[`errors`]:** Rejection-reason classification for `401` login answers and the
//!   formatting of API-level error envelopes.
//! * **[`codes`]:** The static catalog of numeric error codes published by the service.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ipactl_core::{Credentials, IpaClient, Request};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IpaClient::connect(
//!     "ipa.example.com",
//!     reqwest::Client::builder(),
//!     Credentials::password("admin", "secret"),
//! )
//! .await?;
//!
//! let response = client.call(&Request::new("user_show").arg("admin")).await?;
//! let uid = response.get_string("uid");
//! # Ok(())
//! # }
//! ```
pub mod client;
pub mod codes;
pub mod errors;
pub mod rpc;

pub use client::{
    Authenticated, CallError, ConnectError, Credentials, CredentialsError, Endpoint,
    EndpointError, IpaClient, KerberosCredentials, LoginError, SpnegoNegotiator,
    Unauthenticated,
};
pub use errors::{ApiError, Rejection};
pub use rpc::{API_VERSION, FromAttribute, Message, ParseError, Request, Response, RpcResult};

// Re-exports
pub use reqwest;
pub use serde_json;

/// Type alias for the standard boxed error used by external collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

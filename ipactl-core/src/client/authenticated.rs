//! # Client State: Authenticated
//!
//! This module defines how an authenticated `IpaClient` performs JSON-RPC calls, and
//! how it recovers from an expired session.
//!
//! A call that is answered with `401` triggers one re-login followed by one resend of
//! the same call. The outcome of the resend is final, even when it is another `401`.
//! Concurrent calls that hit the same expiry share a single re-login: whoever takes the
//! re-login guard first logs in, and the others only resend. A call skips its own re-login
//! only when the session was renewed after its `401` arrived.
use super::{Authenticated, IpaClient, LoginError};
use crate::rpc::{ParseError, Request, Response};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, REFERER};
use std::sync::atomic::Ordering;
use tracing::{debug, warn};

const APPLICATION_JSON: &str = "application/json";

/// Errors that can occur during a JSON-RPC call.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error("Failed to encode request: '{0}'")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to send request: '{0}'")]
    Transport(#[source] reqwest::Error),
    #[error("renewed login failed: {0}")]
    RenewedLogin(#[source] LoginError),
    #[error("unexpected http status code: {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),
    #[error(transparent)]
    Response(#[from] ParseError),
}

impl IpaClient<Authenticated> {
    /// Sends a JSON-RPC call and decodes its answer.
    ///
    /// # Returns
    ///
    /// * `Ok(Response)` - The server answered with a result.
    /// * `Err(CallError::Response)` - The server answered with an error envelope, or an
    ///   answer that could not be decoded.
    /// * `Err(CallError::RenewedLogin)` - The session had expired and logging in again failed.
    /// * `Err(CallError::UnexpectedStatus)` - Any other non-`200` answer, including a `401`
    ///   to the resent call.
    pub async fn call(&self, request: &Request) -> Result<Response, CallError> {
        let body = request.to_json().map_err(CallError::Encode)?;

        debug!(method = request.method(), "sending JSON-RPC call");

        let mut response = self.send(&body).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            let generation = self.session.generation.load(Ordering::Acquire);
            warn!(method = request.method(), "session rejected, logging in again");

            self.renew(generation).await.map_err(CallError::RenewedLogin)?;
            response = self.send(&body).await?;
        }

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CallError::UnexpectedStatus(status));
        }

        let bytes = response.bytes().await.map_err(CallError::Transport)?;
        Ok(Response::parse(&bytes)?)
    }

    /// Logs in again unless another call already did so since `generation` was observed.
    async fn renew(&self, generation: u64) -> Result<(), LoginError> {
        let _guard = self.session.relogin.lock().await;

        if self.session.generation.load(Ordering::Acquire) != generation {
            debug!("session already renewed by a concurrent call");
            return Ok(());
        }

        self.session.login().await?;
        self.session.generation.fetch_add(1, Ordering::Release);
        Ok(())
    }

    async fn send(&self, body: &[u8]) -> Result<reqwest::Response, CallError> {
        let endpoint = &self.session.endpoint;

        self.session
            .http
            .post(endpoint.json_url())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .header(REFERER, endpoint.base())
            .body(body.to_vec())
            .send()
            .await
            .map_err(CallError::Transport)
    }
}

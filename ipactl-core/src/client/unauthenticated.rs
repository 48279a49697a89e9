//! # Client State: Unauthenticated
//!
//! This module defines how an `IpaClient` is built and how it becomes authenticated.
use super::{
    Authenticated, Credentials, Endpoint, EndpointError, IpaClient, LoginError, Session,
    Unauthenticated,
};
use std::sync::Arc;

/// Errors that can occur when establishing a session.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error(transparent)]
    InvalidEndpoint(#[from] EndpointError),
    #[error("Failed to build the HTTP client: '{0}'")]
    HttpClient(#[source] reqwest::Error),
    #[error(transparent)]
    Login(#[from] LoginError),
}

impl IpaClient<Unauthenticated> {
    /// Creates an unauthenticated session.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The base URI of the server.
    /// * `transport` - Caller-configured HTTP client (TLS roots, timeouts, proxies). A cookie
    ///   store is attached to it before it is built.
    /// * `credentials` - The credential every login of this session uses.
    pub fn new(
        endpoint: Endpoint,
        transport: reqwest::ClientBuilder,
        credentials: Credentials,
    ) -> Result<Self, ConnectError> {
        let jar = Arc::new(reqwest::cookie::Jar::default());
        let http = transport
            .cookie_provider(jar)
            .build()
            .map_err(ConnectError::HttpClient)?;

        Ok(Self::with_session(Session::new(http, endpoint, credentials)))
    }

    /// Performs the initial login and transitions to the **Authenticated** state.
    pub async fn login(self) -> Result<IpaClient<Authenticated>, LoginError> {
        self.session.login().await?;
        Ok(IpaClient::with_session(self.session))
    }
}

impl IpaClient<Authenticated> {
    /// Creates a session against `https://{host}/ipa` and logs in.
    ///
    /// # Returns
    ///
    /// * `Ok(IpaClient<Authenticated>)` - The logged-in client.
    /// * `Err(ConnectError)` - If the host does not form a valid URL, the HTTP client
    ///   cannot be built, or the login fails.
    pub async fn connect(
        host: &str,
        transport: reqwest::ClientBuilder,
        credentials: Credentials,
    ) -> Result<Self, ConnectError> {
        let endpoint = Endpoint::from_host(host)?;
        Self::establish(endpoint, transport, credentials).await
    }

    /// Creates a session against an explicit base URI and logs in.
    pub async fn establish(
        endpoint: Endpoint,
        transport: reqwest::ClientBuilder,
        credentials: Credentials,
    ) -> Result<Self, ConnectError> {
        let client = IpaClient::<Unauthenticated>::new(endpoint, transport, credentials)?;
        Ok(client.login().await?)
    }
}

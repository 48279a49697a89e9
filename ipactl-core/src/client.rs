//! # Ipactl Client
//!
//! This module implements the session protocol spoken with the FreeIPA web service.
//!
//! The [`IpaClient`] uses a **Typestate Pattern** to make the session lifecycle explicit.
//! It has two possible states:
//!
//! 1. **[`Unauthenticated`]**: The HTTP session (transport + cookie store) exists, but no
//!    login has succeeded yet. The only thing it can do is [`IpaClient::login`].
//! 2. **[`Authenticated`]**: A login succeeded and the session cookie lives in the cookie
//!    store. JSON-RPC calls are made with [`IpaClient::call`].
//!
//! An authenticated session can still expire on the server. A `401` answer to a call is
//! absorbed exactly once: the client logs in again with the same credentials and resends
//! the call a single time. Anything else is reported to the caller.
//!
//! ## Example: State Transition
//!
//! ```rust,no_run
//! use ipactl_core::{Credentials, Endpoint, IpaClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Unauthenticated State
//! let endpoint = Endpoint::from_host("ipa.example.com")?;
//! let client = IpaClient::new(
//!     endpoint,
//!     reqwest::Client::builder(),
//!     Credentials::password("admin", "secret"),
//! )?;
//!
//! // 2. Transition to Authenticated
//! let client = client.login().await?;
//! # Ok(())
//! # }
//! ```
pub mod authenticated;
pub mod credentials;
pub mod endpoint;
pub mod login;
pub mod unauthenticated;

pub use authenticated::CallError;
pub use credentials::{Credentials, CredentialsError, KerberosCredentials, SpnegoNegotiator};
pub use endpoint::{Endpoint, EndpointError};
pub use login::LoginError;
pub use unauthenticated::ConnectError;

use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tokio::sync::Mutex;

/// The main client for the FreeIPA JSON-RPC API.
///
/// The generic parameter `T` represents the current state of the session.
#[derive(Clone, Debug)]
pub struct IpaClient<T> {
    session: Session,
    state: PhantomData<T>,
}

impl<T> IpaClient<T> {
    pub(crate) fn with_session(session: Session) -> Self {
        Self {
            session,
            state: PhantomData,
        }
    }

    /// The base URI every endpoint is derived from.
    pub fn endpoint(&self) -> &Endpoint {
        &self.session.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.session.credentials
    }
}

/// State: HTTP session created, no successful login yet.
#[derive(Debug, Clone, Copy)]
pub struct Unauthenticated;

/// State: logged in, the session cookie is held by the cookie store.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated;

/// Everything a session needs across state transitions.
///
/// Clones share the same cookie store and the same re-login guard.
#[derive(Clone, Debug)]
pub(crate) struct Session {
    http: reqwest::Client,
    endpoint: Endpoint,
    credentials: Arc<Credentials>,
    /// Held while a re-login is in flight.
    relogin: Arc<Mutex<()>>,
    /// Bumped after every successful re-login.
    generation: Arc<AtomicU64>,
}

impl Session {
    pub(crate) fn new(http: reqwest::Client, endpoint: Endpoint, credentials: Credentials) -> Self {
        Self {
            http,
            endpoint,
            credentials: Arc::new(credentials),
            relogin: Arc::new(Mutex::new(())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub(crate) async fn login(&self) -> Result<(), LoginError> {
        login::login(&self.http, &self.endpoint, &self.credentials).await
    }
}

//! # Login
//!
//! Both login flows end with the server setting the `ipa_session` cookie, which the
//! cookie store of the HTTP client picks up and sends on every following request.
//!
//! * **Password**: form POST of `user`/`password` to `/session/login_password`. A `401`
//!   carries a rejection reason header that is classified into a [`Rejection`].
//! * **Kerberos**: empty POST to `/session/login_kerberos` authenticated with a SPNEGO
//!   `Negotiate` token. Any non-`200` answer is an unexpected status.
use super::{Credentials, Endpoint, KerberosCredentials, SpnegoNegotiator};
use crate::{BoxError, errors::Rejection};
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, REFERER};
use secrecy::ExposeSecret;
use tracing::debug;

/// Errors that can occur while logging in.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Failed to send login request: '{0}'")]
    Transport(#[source] reqwest::Error),
    #[error(transparent)]
    Unauthorized(#[from] Rejection),
    #[error("unexpected http status code: {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),
    #[error("error logging in using Kerberos: {0}")]
    Negotiation(#[source] BoxError),
}

/// Logs in with whichever credential the session was built with.
pub(crate) async fn login(
    http: &reqwest::Client,
    endpoint: &Endpoint,
    credentials: &Credentials,
) -> Result<(), LoginError> {
    match credentials {
        Credentials::Password { user, password } => {
            login_password(http, endpoint, user, password.expose_secret()).await
        }
        Credentials::Kerberos {
            credentials,
            negotiator,
        } => login_kerberos(http, endpoint, credentials, negotiator.as_ref()).await,
    }
}

async fn login_password(
    http: &reqwest::Client,
    endpoint: &Endpoint,
    user: &str,
    password: &str,
) -> Result<(), LoginError> {
    debug!(user, "logging in with password");

    let response = http
        .post(endpoint.login_password_url())
        .form(&[("user", user), ("password", password)])
        .send()
        .await
        .map_err(LoginError::Transport)?;

    match response.status() {
        StatusCode::OK => Ok(()),
        StatusCode::UNAUTHORIZED => Err(Rejection::from_headers(response.headers()).into()),
        status => Err(LoginError::UnexpectedStatus(status)),
    }
}

async fn login_kerberos(
    http: &reqwest::Client,
    endpoint: &Endpoint,
    credentials: &KerberosCredentials,
    negotiator: &dyn SpnegoNegotiator,
) -> Result<(), LoginError> {
    debug!(principal = %credentials.principal, realm = %credentials.realm, "logging in with Kerberos");

    let token = negotiator
        .initial_token(credentials, endpoint.host())
        .await
        .map_err(LoginError::Negotiation)?;

    let response = http
        .post(endpoint.login_kerberos_url())
        .header(REFERER, endpoint.base())
        .header(AUTHORIZATION, format!("Negotiate {token}"))
        .send()
        .await
        .map_err(LoginError::Transport)?;

    match response.status() {
        StatusCode::OK => Ok(()),
        status => Err(LoginError::UnexpectedStatus(status)),
    }
}

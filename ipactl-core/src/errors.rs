//! # Error Classification
//!
//! Maps the failure signals of the service onto domain errors:
//!
//! * A `401` login answer carries an `X-Ipa-Rejection-Reason` header. [`Rejection`]
//!   classifies it into one of four known reasons and its numeric code.
//! * A `200` RPC answer may carry an error envelope instead of a result. [`ApiError`]
//!   reproduces its name, code and message verbatim.
use crate::{codes, rpc::Message};
use reqwest::header::HeaderMap;
use std::fmt;

/// Header naming the cause of a rejected login.
pub const REJECTION_REASON_HEADER: &str = "X-Ipa-Rejection-Reason";

/// The cause of a rejected login, as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    PasswordExpired,
    InvalidPassword,
    KrbPrincipalExpired,
    UserLocked,
    /// Any other header value, including a missing header (empty string).
    Other(String),
}

impl RejectionReason {
    pub fn parse(value: &str) -> Self {
        match value {
            "password-expired" => Self::PasswordExpired,
            "invalid-password" => Self::InvalidPassword,
            "krbprincipal-expired" => Self::KrbPrincipalExpired,
            "user-locked" => Self::UserLocked,
            other => Self::Other(other.to_string()),
        }
    }

    /// The header value this reason was read from.
    pub fn as_str(&self) -> &str {
        match self {
            Self::PasswordExpired => "password-expired",
            Self::InvalidPassword => "invalid-password",
            Self::KrbPrincipalExpired => "krbprincipal-expired",
            Self::UserLocked => "user-locked",
            Self::Other(value) => value,
        }
    }

    /// The catalog code for this reason. Unrecognized reasons map to [`codes::GENERIC_ERROR`].
    pub fn code(&self) -> i64 {
        match self {
            Self::PasswordExpired => codes::PASSWORD_EXPIRED,
            Self::InvalidPassword => codes::INVALID_SESSION_PASSWORD,
            Self::KrbPrincipalExpired => codes::KRB_PRINCIPAL_EXPIRED,
            Self::UserLocked => codes::USER_LOCKED,
            Self::Other(_) => codes::GENERIC_ERROR,
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `401` answer to a password login.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unauthorized response <{reason}> ({})", .reason.code())]
pub struct Rejection {
    pub reason: RejectionReason,
}

impl Rejection {
    /// Reads the rejection reason from the response headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let value = headers
            .get(REJECTION_REASON_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        Self {
            reason: RejectionReason::parse(value),
        }
    }

    pub fn code(&self) -> i64 {
        self.reason.code()
    }
}

/// An error envelope returned by the JSON-RPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{name} ({code}): {message}")]
pub struct ApiError {
    pub name: String,
    pub code: i64,
    pub message: String,
}

impl ApiError {
    /// Looks the code up in the published catalog.
    pub fn code_name(&self) -> Option<&'static str> {
        codes::name(self.code)
    }
}

impl From<Message> for ApiError {
    fn from(message: Message) -> Self {
        Self {
            name: message.name,
            code: message.code,
            message: message.message,
        }
    }
}

//! # Credentials
//!
//! A session logs in with exactly one kind of credential, chosen when the client is
//! built. Kerberos credentials carry the material an external SPNEGO implementation
//! needs; the negotiation itself is delegated to a [`SpnegoNegotiator`].
use crate::BoxError;
use async_trait::async_trait;
use secrecy::SecretString;
use std::fmt;
use std::io::Read;
use std::sync::Arc;

/// Leading byte of every keytab file.
const KEYTAB_MAGIC: u8 = 0x05;

/// Errors that can occur when loading Kerberos credentials.
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("error reading kerberos configuration: {0}")]
    ReadConfig(#[source] std::io::Error),
    #[error("error reading keytab: {0}")]
    ReadKeytab(#[source] std::io::Error),
    #[error("error parsing keytab: {0}")]
    InvalidKeytab(String),
}

/// Produces SPNEGO tokens for the Kerberos login endpoint.
///
/// Implementations wrap a GSSAPI or pure-Rust Kerberos stack. They receive the loaded
/// configuration and keytab, and must return the base64-encoded initial context token
/// for the `HTTP` service on `service_host`.
#[async_trait]
pub trait SpnegoNegotiator: Send + Sync {
    async fn initial_token(
        &self,
        credentials: &KerberosCredentials,
        service_host: &str,
    ) -> Result<String, BoxError>;
}

/// Kerberos material for unattended logins.
#[derive(Clone)]
pub struct KerberosCredentials {
    /// Contents of the `krb5.conf` describing realms and KDCs.
    pub config: String,
    /// Raw keytab bytes holding the principal's long-term keys.
    pub keytab: Vec<u8>,
    pub principal: String,
    pub realm: String,
}

impl KerberosCredentials {
    /// Reads the Kerberos configuration and keytab from the given readers.
    pub fn from_readers(
        mut config: impl Read,
        mut keytab: impl Read,
        principal: impl Into<String>,
        realm: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let mut config_text = String::new();
        config
            .read_to_string(&mut config_text)
            .map_err(CredentialsError::ReadConfig)?;

        let mut keytab_bytes = Vec::new();
        keytab
            .read_to_end(&mut keytab_bytes)
            .map_err(CredentialsError::ReadKeytab)?;

        validate_keytab(&keytab_bytes)?;

        Ok(Self {
            config: config_text,
            keytab: keytab_bytes,
            principal: principal.into(),
            realm: realm.into(),
        })
    }
}

impl fmt::Debug for KerberosCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KerberosCredentials")
            .field("principal", &self.principal)
            .field("realm", &self.realm)
            .field("keytab", &format_args!("[{} bytes]", self.keytab.len()))
            .finish_non_exhaustive()
    }
}

/// The credential a session logs in with.
#[derive(Clone)]
pub enum Credentials {
    Password {
        user: String,
        password: SecretString,
    },
    Kerberos {
        credentials: KerberosCredentials,
        negotiator: Arc<dyn SpnegoNegotiator>,
    },
}

impl Credentials {
    pub fn password(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password {
            user: user.into(),
            password: SecretString::new(password.into()),
        }
    }

    pub fn kerberos(credentials: KerberosCredentials, negotiator: Arc<dyn SpnegoNegotiator>) -> Self {
        Self::Kerberos {
            credentials,
            negotiator,
        }
    }

    /// The user or principal name the session logs in as.
    pub fn identity(&self) -> &str {
        match self {
            Self::Password { user, .. } => user,
            Self::Kerberos { credentials, .. } => &credentials.principal,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password { user, .. } => f
                .debug_struct("Password")
                .field("user", user)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::Kerberos { credentials, .. } => {
                f.debug_tuple("Kerberos").field(credentials).finish()
            }
        }
    }
}

fn validate_keytab(keytab: &[u8]) -> Result<(), CredentialsError> {
    match keytab {
        [KEYTAB_MAGIC, 0x01 | 0x02, ..] => Ok(()),
        [] => Err(CredentialsError::InvalidKeytab("keytab is empty".to_string())),
        [first, second, ..] => Err(CredentialsError::InvalidKeytab(format!(
            "unsupported keytab format {first:#04x}{second:02x}"
        ))),
        [_] => Err(CredentialsError::InvalidKeytab(
            "keytab is truncated".to_string(),
        )),
    }
}

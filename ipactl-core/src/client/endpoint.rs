use url::Url;

/// Errors that can occur when building the base URI of a server.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL '{0}' has no host")]
    MissingHost(String),
}

/// The base URI of a FreeIPA web service, e.g. `https://ipa.example.com/ipa`.
///
/// Every endpoint the client talks to lives under this base, and the base itself is sent
/// as the `Referer` the server requires for cross-site request protection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
    host: String,
}

impl Endpoint {
    /// Builds `https://{host}/ipa`. `host` may carry a port (`ipa.example.com:8443`).
    pub fn from_host(host: &str) -> Result<Self, EndpointError> {
        Self::parse(&format!("https://{host}/ipa"))
    }

    /// Uses an explicit base URI, for servers behind a proxy or on a non-standard path.
    pub fn parse(base: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(base).map_err(|source| EndpointError::InvalidUrl {
            url: base.to_string(),
            source,
        })?;

        let host = url
            .host_str()
            .ok_or_else(|| EndpointError::MissingHost(base.to_string()))?
            .to_string();

        Ok(Self {
            base: url.as_str().trim_end_matches('/').to_string(),
            host,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The server host name, without port. Kerberos service tickets are issued for it.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn login_password_url(&self) -> String {
        format!("{}/session/login_password", self.base)
    }

    pub fn login_kerberos_url(&self) -> String {
        format!("{}/session/login_kerberos", self.base)
    }

    pub fn json_url(&self) -> String {
        format!("{}/session/json", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_host() {
        let endpoint = Endpoint::from_host("ipa.example.com").unwrap();

        assert_eq!(endpoint.base(), "https://ipa.example.com/ipa");
        assert_eq!(endpoint.host(), "ipa.example.com");
        assert_eq!(
            endpoint.login_password_url(),
            "https://ipa.example.com/ipa/session/login_password"
        );
        assert_eq!(
            endpoint.login_kerberos_url(),
            "https://ipa.example.com/ipa/session/login_kerberos"
        );
        assert_eq!(endpoint.json_url(), "https://ipa.example.com/ipa/session/json");
    }

    #[test]
    fn test_from_host_with_port() {
        let endpoint = Endpoint::from_host("127.0.0.1:8831").unwrap();

        assert_eq!(endpoint.base(), "https://127.0.0.1:8831/ipa");
        assert_eq!(endpoint.host(), "127.0.0.1");
    }

    #[test]
    fn test_invalid_hosts() {
        assert!(matches!(
            Endpoint::from_host("bad host"),
            Err(EndpointError::InvalidUrl { .. })
        ));
        assert!(matches!(
            Endpoint::from_host("ipa.example.com:notaport"),
            Err(EndpointError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_parse_explicit_base() {
        let endpoint = Endpoint::parse("http://127.0.0.1:4000/ipa/").unwrap();
        assert_eq!(endpoint.json_url(), "http://127.0.0.1:4000/ipa/session/json");

        assert!(matches!(
            Endpoint::parse("mailto:admin@example.com"),
            Err(EndpointError::MissingHost(_))
        ));
    }
}

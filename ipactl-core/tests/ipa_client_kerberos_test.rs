use async_trait::async_trait;
use ipactl_core::{
    BoxError, ConnectError, Credentials, Endpoint, IpaClient, KerberosCredentials, LoginError,
    Request, SpnegoNegotiator,
};
use mock_ipa::MockIpa;
use std::sync::{Arc, Mutex};

const KRB5_CONF: &str = "[libdefaults]\n  default_realm = EXAMPLE.COM\n";
const KEYTAB: &[u8] = &[0x05, 0x02, 0x00, 0x00, 0x00, 0x46];
const TOKEN: &str = "YIIGhgYJKoZIhvcSAQICAQBuggZ1MIIGcaADAgEFoQMCAQ4=";

/// Hands out a fixed token and remembers who asked for it.
#[derive(Default)]
struct FixedNegotiator {
    requested_hosts: Mutex<Vec<String>>,
}

#[async_trait]
impl SpnegoNegotiator for FixedNegotiator {
    async fn initial_token(
        &self,
        credentials: &KerberosCredentials,
        service_host: &str,
    ) -> Result<String, BoxError> {
        assert_eq!(credentials.principal, "admin");
        assert_eq!(credentials.keytab, KEYTAB);

        self.requested_hosts
            .lock()
            .unwrap()
            .push(service_host.to_string());
        Ok(TOKEN.to_string())
    }
}

struct BrokenNegotiator;

#[async_trait]
impl SpnegoNegotiator for BrokenNegotiator {
    async fn initial_token(
        &self,
        _credentials: &KerberosCredentials,
        _service_host: &str,
    ) -> Result<String, BoxError> {
        Err("no KDC reachable for realm EXAMPLE.COM".into())
    }
}

fn kerberos_credentials(negotiator: Arc<dyn SpnegoNegotiator>) -> Credentials {
    let credentials =
        KerberosCredentials::from_readers(KRB5_CONF.as_bytes(), KEYTAB, "admin", "EXAMPLE.COM")
            .unwrap();

    Credentials::kerberos(credentials, negotiator)
}

#[tokio::test]
async fn test_kerberos_login() {
    let mock = MockIpa::start().await;
    mock.mount_kerberos_login(TOKEN).await;
    mock.mount_json_api().await;

    let negotiator = Arc::new(FixedNegotiator::default());
    let endpoint = Endpoint::parse(&mock.base_url()).unwrap();

    let client = IpaClient::establish(
        endpoint,
        reqwest::Client::builder(),
        kerberos_credentials(negotiator.clone()),
    )
    .await
    .unwrap();

    let response = client.call(&Request::new("user_find")).await.unwrap();
    assert_eq!(response.count_results(), 2);

    assert_eq!(*negotiator.requested_hosts.lock().unwrap(), ["127.0.0.1"]);
    assert_eq!(client.credentials().identity(), "admin");
}

#[tokio::test]
async fn test_kerberos_login_rejected() {
    let mock = MockIpa::start().await;
    mock.mount_kerberos_login("some-other-token").await;

    let endpoint = Endpoint::parse(&mock.base_url()).unwrap();
    let err = IpaClient::establish(
        endpoint,
        reqwest::Client::builder(),
        kerberos_credentials(Arc::new(FixedNegotiator::default())),
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "unexpected http status code: 401");
    assert!(matches!(
        err,
        ConnectError::Login(LoginError::UnexpectedStatus(_))
    ));
}

#[tokio::test]
async fn test_negotiation_failure() {
    let mock = MockIpa::start().await;
    mock.mount_kerberos_login(TOKEN).await;

    let endpoint = Endpoint::parse(&mock.base_url()).unwrap();
    let err = IpaClient::establish(
        endpoint,
        reqwest::Client::builder(),
        kerberos_credentials(Arc::new(BrokenNegotiator)),
    )
    .await
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "error logging in using Kerberos: no KDC reachable for realm EXAMPLE.COM"
    );
    assert!(matches!(err, ConnectError::Login(LoginError::Negotiation(_))));
    assert!(mock.server().received_requests().await.unwrap().is_empty());
}

//! # Mock IPA
//!
//! **INTERNAL USE ONLY**: This crate exists solely to provide a fake FreeIPA web service
//! and recorded responses for integration testing `ipactl_core` and the `ipactl` CLI.
//! It is not intended for production use.
//!
//! The fake server accepts `test`/`testpassword` on the password login endpoint, sets the
//! session cookie on success, and only answers JSON-RPC calls that carry that cookie.
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USER_ADD_RESPONSE: &str = include_str!("../fixtures/user_add_response.json");
pub const USER_FIND_RESPONSE: &str = include_str!("../fixtures/user_find_response.json");
pub const PING_RESPONSE: &str = include_str!("../fixtures/ping_response.json");
pub const INVALID_JSON_RESPONSE: &str = include_str!("../fixtures/invalid_json.json");

pub const TEST_USER: &str = "test";
pub const TEST_PASSWORD: &str = "testpassword";

/// The `Cookie` header a logged-in client sends.
pub const SESSION_COOKIE: &str = "ipa_session=correct-session-secret";

pub const LOGIN_PASSWORD_PATH: &str = "/ipa/session/login_password";
pub const LOGIN_KERBEROS_PATH: &str = "/ipa/session/login_kerberos";
pub const JSON_PATH: &str = "/ipa/session/json";

/// A fake FreeIPA server listening on a random local port.
pub struct MockIpa {
    server: MockServer,
}

impl MockIpa {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// The base URI clients should be pointed at, e.g. `http://127.0.0.1:41234/ipa`.
    pub fn base_url(&self) -> String {
        format!("{}/ipa", self.server.uri())
    }

    /// The underlying server, for tests that mount their own mocks or inspect requests.
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Password login: the test credentials get a session, anything else is rejected
    /// as `invalid-password`.
    pub async fn mount_password_login(&self) {
        Mock::given(method("POST"))
            .and(path(LOGIN_PASSWORD_PATH))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string(format!(
                "user={TEST_USER}&password={TEST_PASSWORD}"
            )))
            .respond_with(session_established())
            .with_priority(1)
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path(LOGIN_PASSWORD_PATH))
            .respond_with(rejected("invalid-password"))
            .with_priority(2)
            .mount(&self.server)
            .await;
    }

    /// Kerberos login: a request carrying `Negotiate {token}` and the base URI as referer
    /// gets a session, anything else is answered with `401`.
    pub async fn mount_kerberos_login(&self, token: &str) {
        Mock::given(method("POST"))
            .and(path(LOGIN_KERBEROS_PATH))
            .and(header("authorization", format!("Negotiate {token}").as_str()))
            .and(header("referer", self.base_url().as_str()))
            .respond_with(session_established())
            .with_priority(1)
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path(LOGIN_KERBEROS_PATH))
            .respond_with(ResponseTemplate::new(401))
            .with_priority(2)
            .mount(&self.server)
            .await;
    }

    /// JSON-RPC endpoint with recorded answers for `user_add`, `user_find` and `ping`.
    ///
    /// Any other method sent with a valid session is answered with the `JSONError`
    /// envelope, and calls without the session cookie are answered with `401`.
    pub async fn mount_json_api(&self) {
        for (rpc_method, body) in [
            ("user_add", USER_ADD_RESPONSE),
            ("user_find", USER_FIND_RESPONSE),
            ("ping", PING_RESPONSE),
        ] {
            self.authorized_call()
                .and(body_partial_json(json!({ "method": rpc_method })))
                .respond_with(fixture(body))
                .with_priority(1)
                .mount(&self.server)
                .await;
        }

        self.authorized_call()
            .respond_with(fixture(INVALID_JSON_RESPONSE))
            .with_priority(2)
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path(JSON_PATH))
            .respond_with(ResponseTemplate::new(401))
            .with_priority(3)
            .mount(&self.server)
            .await;
    }

    /// Matches a well-formed JSON-RPC call sent within the session.
    fn authorized_call(&self) -> wiremock::MockBuilder {
        Mock::given(method("POST"))
            .and(path(JSON_PATH))
            .and(header("cookie", SESSION_COOKIE))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(header("referer", self.base_url().as_str()))
    }
}

/// A `200` that hands out the session cookie.
pub fn session_established() -> ResponseTemplate {
    ResponseTemplate::new(200).insert_header(
        "set-cookie",
        format!("{SESSION_COOKIE}; Path=/ipa; HttpOnly").as_str(),
    )
}

/// A `401` carrying the given rejection reason.
pub fn rejected(reason: &str) -> ResponseTemplate {
    ResponseTemplate::new(401).insert_header("x-ipa-rejection-reason", reason)
}

/// A `200` with a JSON body.
pub fn fixture(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

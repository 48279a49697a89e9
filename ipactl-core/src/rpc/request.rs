use serde::Serialize;
use serde_json::{Map, Value};

/// API version announced with every call.
///
/// The service answers calls from newer clients with a `VersionError`, so this stays
/// pinned to a release it is known to accept.
pub const API_VERSION: &str = "2.237";

const VERSION_KEY: &str = "version";

/// A single JSON-RPC call.
///
/// On the wire this serializes as
/// `{"method": "...", "params": [[args...], {options..., "version": API_VERSION}]}`.
/// The `version` option is always present and always equals [`API_VERSION`], whatever
/// the caller tried to put there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    method: String,
    params: (Vec<Value>, Map<String, Value>),
}

impl Request {
    /// Creates a call to `method` with no arguments and no options.
    ///
    /// Arguments and options can be chained with [`Request::arg`] and [`Request::option`].
    pub fn new(method: impl Into<String>) -> Self {
        Self::build(method, Vec::new(), Map::new())
    }

    /// Creates a call from a full positional argument list and keyword option map.
    ///
    /// A caller-supplied `version` option is overwritten with [`API_VERSION`].
    pub fn build(method: impl Into<String>, args: Vec<Value>, mut options: Map<String, Value>) -> Self {
        options.insert(VERSION_KEY.to_string(), Value::from(API_VERSION));

        Self {
            method: method.into(),
            params: (args, options),
        }
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.params.0.push(value.into());
        self
    }

    /// Sets a keyword option. Setting `version` is a no-op.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != VERSION_KEY {
            self.params.1.insert(key, value.into());
        }
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn args(&self) -> &[Value] {
        &self.params.0
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.params.1
    }

    /// Encodes the call into its JSON body.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire(request: &Request) -> Value {
        serde_json::from_slice(&request.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_wire_shape() {
        let mut options = Map::new();
        options.insert("givenname".to_string(), json!("FreeIPA"));
        options.insert("sn".to_string(), json!("Test"));

        let request = Request::build("user_add", vec![json!("username")], options);

        assert_eq!(
            wire(&request),
            json!({
                "method": "user_add",
                "params": [
                    ["username"],
                    { "givenname": "FreeIPA", "sn": "Test", "version": API_VERSION }
                ]
            })
        );
    }

    #[test]
    fn test_params_always_has_two_elements() {
        for request in [
            Request::new("ping"),
            Request::new("user_find").arg(""),
            Request::new("group_add_member").arg("admins").arg(json!(["a", "b"])),
        ] {
            let params = wire(&request)["params"].clone();
            let params = params.as_array().unwrap();

            assert_eq!(params.len(), 2);
            assert!(params[0].is_array());
            assert_eq!(params[1]["version"], API_VERSION);
        }
    }

    #[test]
    fn test_caller_version_is_overridden() {
        let mut options = Map::new();
        options.insert("version".to_string(), json!("1.0"));

        let request = Request::build("ping", vec![], options);
        assert_eq!(request.options()["version"], API_VERSION);

        let request = request.option("version", "9.99").option("all", true);
        assert_eq!(request.options()["version"], API_VERSION);
        assert_eq!(request.options()["all"], true);
    }

    #[test]
    fn test_chained_arguments_keep_order() {
        let request = Request::new("user_mod").arg("jdoe").arg(42).option("sn", "Doe");

        assert_eq!(request.method(), "user_mod");
        assert_eq!(request.args(), &[json!("jdoe"), json!(42)]);
        assert_eq!(request.options().len(), 2);
    }
}

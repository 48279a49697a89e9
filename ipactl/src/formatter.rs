use crate::config::Profile;
use colored::*;
use ipactl_core::{CallError, ConnectError, ParseError, Response};
use std::fmt::Display;

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

pub struct ProfileList(pub Vec<Profile>);

/// Selected attributes of a single entity, in the order they were asked for.
pub struct AttributeList(pub Vec<(String, Option<Vec<String>>)>);

pub struct GenericError<T: Display>(pub &'static str, pub T);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<&Response> for FormattedString {
    fn from(response: &Response) -> Self {
        let mut out = String::new();

        if let Some(summary) = response.summary() {
            out.push_str(&format!("{}\n", summary.green().bold()));
        }

        for message in response.messages() {
            out.push_str(&format!(
                "{} {} ({}): {}\n",
                format!("{}:", message.kind).yellow(),
                message.name,
                message.code,
                message.message
            ));
        }

        if !out.is_empty() {
            out.push('\n');
        }

        let payload = response.payload();
        out.push_str(
            &serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string()),
        );

        FormattedString(out)
    }
}

impl From<ConnectError> for FormattedString {
    fn from(err: ConnectError) -> Self {
        FormattedString(format!("{}\n\n'{}'", "Connection Error:".red().bold(), err))
    }
}

impl From<CallError> for FormattedString {
    fn from(err: CallError) -> Self {
        let mut out = format!("{}\n\n'{}'", "Call Failed:".red().bold(), err);

        if let CallError::Response(ParseError::Api(api_error)) = &err
            && let Some(name) = api_error.code_name()
        {
            out.push_str(&format!(
                "\n\n{} {} = {}",
                "code".cyan(),
                api_error.code.to_string().purple(),
                name.yellow()
            ));
        }

        FormattedString(out)
    }
}

impl<T: Display> From<GenericError<T>> for FormattedString {
    fn from(GenericError(msg, err): GenericError<T>) -> Self {
        FormattedString(format!("{}:\n\n'{}'", msg.red().bold(), err))
    }
}

impl From<ProfileList> for FormattedString {
    fn from(ProfileList(profiles): ProfileList) -> Self {
        if profiles.is_empty() {
            return FormattedString("No profiles saved.".yellow().to_string());
        }

        let mut out = String::new();
        out.push_str("Saved Profiles:\n");
        for profile in profiles {
            out.push_str(&format!(
                "  - {} {}@{}",
                profile.name.green(),
                profile.user,
                profile.host.cyan()
            ));
            if profile.insecure {
                out.push_str(&format!(" {}", "(insecure)".red()));
            }
            if let Some(ca_cert) = &profile.ca_cert {
                out.push_str(&format!(" ca={}", ca_cert.display()));
            }
            out.push('\n');
        }
        FormattedString(out.trim_end().to_string())
    }
}

impl From<AttributeList> for FormattedString {
    fn from(AttributeList(attributes): AttributeList) -> Self {
        let mut out = String::new();

        for (name, values) in attributes {
            match values {
                Some(values) => {
                    for value in values {
                        out.push_str(&format!("{}: {}\n", name.cyan(), value));
                    }
                }
                None => out.push_str(&format!("{}: {}\n", name.cyan(), "<not set>".dimmed())),
            }
        }

        FormattedString(out.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn plain(format: impl FnOnce() -> FormattedString) -> String {
        colored::control::set_override(false);
        format().0
    }

    #[test]
    fn test_response_output() {
        let response = Response::parse(mock_ipa::PING_RESPONSE.as_bytes()).unwrap();
        let out = plain(|| FormattedString::from(&response));

        assert!(out.starts_with("IPA server version 4.10.1. API version 2.251\n"));
        assert!(out.contains("warning: VersionMissing (13001): API Version number was not sent"));
        assert!(out.trim_end().ends_with("null"));
    }

    #[test]
    fn test_entity_response_output() {
        let response = Response::parse(mock_ipa::USER_ADD_RESPONSE.as_bytes()).unwrap();
        let out = plain(|| FormattedString::from(&response));

        assert!(out.starts_with("Added user \"username\"\n"));
        assert!(out.contains("\n  \"dn\": \"uid=username,cn=users,cn=accounts,dc=example,dc=com\""));
        assert!(out.trim_end().ends_with('}'));
    }

    #[test]
    fn test_api_error_shows_code_name() {
        let err = Response::parse(mock_ipa::INVALID_JSON_RESPONSE.as_bytes()).unwrap_err();
        let out = plain(|| FormattedString::from(CallError::from(err)));

        assert!(out.contains("'JSONError (909): Invalid JSON-RPC request"));
        assert!(out.ends_with("code 909 = JSONError"));
    }

    #[test]
    fn test_profile_list() {
        let out = plain(|| FormattedString::from(ProfileList(vec![Profile {
            name: "lab".to_string(),
            host: "ipa.lab.example.com".to_string(),
            user: "admin".to_string(),
            insecure: true,
            ca_cert: Some(PathBuf::from("/etc/ipa/ca.crt")),
        }])));

        assert_eq!(
            out,
            "Saved Profiles:\n  - lab admin@ipa.lab.example.com (insecure) ca=/etc/ipa/ca.crt"
        );
        assert_eq!(
            plain(|| FormattedString::from(ProfileList(vec![]))),
            "No profiles saved."
        );
    }

    #[test]
    fn test_attribute_list() {
        let out = plain(|| FormattedString::from(AttributeList(vec![
            ("uid".to_string(), Some(vec!["admin".to_string()])),
            ("mail".to_string(), None),
        ])));

        assert_eq!(out, "uid: admin\nmail: <not set>");
    }
}

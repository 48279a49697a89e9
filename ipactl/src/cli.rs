//! # CLI
//!
//! This module defines the command-line interface of `ipactl` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring options are `key=value`).
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ipactl", version, about = "FreeIPA JSON-RPC CLI")]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Log session activity (logins, calls, re-logins) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to connect and who to log in as. Flags override the selected profile.
#[derive(Args, Clone, Debug, Default)]
pub struct ConnectionArgs {
    /// Saved profile to take connection settings from
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Server host (e.g. ipa.example.com), or a full base URI (e.g. https://proxy.local/ipa)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// User to log in as
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    #[arg(long, env = "IPA_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long, global = true)]
    pub insecure: bool,

    /// PEM file with an additional CA certificate to trust (e.g. /etc/ipa/ca.crt)
    #[arg(long, global = true)]
    pub ca_cert: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Perform a JSON-RPC call
    ///
    /// Arguments and option values are sent as JSON when they parse as JSON, and as
    /// plain strings otherwise.
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// ipactl --host ipa.example.com call user_find --option sizelimit=5
    /// ipactl --profile prod call user_add jdoe -o givenname=John -o sn=Doe
    /// ```
    Call {
        /// Command name (e.g. user_show)
        method: String,

        /// Positional arguments
        #[arg(value_parser = parse_value)]
        args: Vec<serde_json::Value>,

        #[arg(short = 'o', long = "option", value_parser = parse_option)]
        options: Vec<(String, serde_json::Value)>,
    },

    /// Check that the server is reachable and the login works
    Ping,

    /// Print selected attributes of a single entity
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// ipactl show user_show admin --attr uid --attr memberof_group
    /// ```
    Show {
        /// Command name (e.g. user_show)
        method: String,

        /// Primary key of the entity
        arg: String,

        /// Attributes to print, in order
        #[arg(long = "attr", required = true)]
        attrs: Vec<String>,
    },

    /// Manage saved connection profiles
    Profile {
        #[command(subcommand)]
        sub: ProfileCommands,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Save a profile, replacing any profile with the same name
    Add {
        name: String,

        #[arg(long)]
        host: String,

        #[arg(long)]
        user: String,

        #[arg(long)]
        insecure: bool,

        #[arg(long)]
        ca_cert: Option<PathBuf>,
    },
    /// List saved profiles
    List,
    /// Remove a saved profile
    Remove { name: String },
}

fn parse_option(s: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| "Format must be 'key=value'".to_string())?;

    let key = key.trim();
    if key.is_empty() {
        return Err("Option name cannot be empty".to_string());
    }

    Ok((key.to_string(), parse_value(value)?))
}

fn parse_value(value: &str) -> Result<serde_json::Value, String> {
    Ok(serde_json::from_str(value).unwrap_or_else(|_| serde_json::Value::from(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("10").unwrap(), json!(10));
        assert_eq!(parse_value("true").unwrap(), json!(true));
        assert_eq!(parse_value("[\"a\",\"b\"]").unwrap(), json!(["a", "b"]));
        assert_eq!(parse_value("admin").unwrap(), json!("admin"));
        assert_eq!(parse_value("").unwrap(), json!(""));
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(
            parse_option("sizelimit=5").unwrap(),
            ("sizelimit".to_string(), json!(5))
        );
        assert_eq!(
            parse_option("description=a=b").unwrap(),
            ("description".to_string(), json!("a=b"))
        );
        assert!(parse_option("sizelimit").is_err());
        assert!(parse_option("=5").is_err());
    }

    #[test]
    fn test_parse_call() {
        let cli = Cli::try_parse_from([
            "ipactl", "--host", "ipa.example.com", "call", "user_add", "jdoe", "-o", "sn=Doe",
        ])
        .unwrap();

        assert_eq!(cli.connection.host.as_deref(), Some("ipa.example.com"));
        match cli.command {
            Commands::Call {
                method,
                args,
                options,
            } => {
                assert_eq!(method, "user_add");
                assert_eq!(args, vec![json!("jdoe")]);
                assert_eq!(options, vec![("sn".to_string(), json!("Doe"))]);
            }
            _ => panic!("Expected a call command"),
        }
    }

    #[test]
    fn test_show_requires_attributes() {
        assert!(Cli::try_parse_from(["ipactl", "show", "user_show", "admin"]).is_err());
    }
}

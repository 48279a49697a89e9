//! # Ipactl CLI Entry Point
//!
//! The main executable for the Ipactl tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Parses command-line arguments using [`cli::Cli`] and installs the log subscriber.
//! 2. **Configuration**: Merges the selected profile with the command-line flags.
//! 3. **Connection**: Logs in to the target server via `ipactl_core`.
//! 4. **Execution**: Delegates the JSON-RPC call to the `IpaClient`.
//! 5. **Presentation**: Formats and prints the resulting data or error to standard output/error.

mod cli;
mod config;
mod formatter;

use clap::Parser;
use cli::{Cli, Commands, ConnectionArgs, ProfileCommands};
use config::{ConfigManager, Connection, Profile, parse_endpoint};
use formatter::{AttributeList, FormattedString, GenericError, ProfileList};
use ipactl_core::{Authenticated, IpaClient, Request, Response};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Call {
            method,
            args: call_args,
            options,
        } => {
            let request = Request::build(method, call_args, options.into_iter().collect());
            run_call(&args.connection, request).await;
        }
        Commands::Ping => run_ping(&args.connection).await,
        Commands::Show { method, arg, attrs } => {
            run_show(&args.connection, &method, &arg, &attrs).await
        }
        Commands::Profile { sub } => run_profile(sub),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,ipactl_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_error(err: anyhow::Error) -> ! {
    eprintln!(
        "{}",
        FormattedString::from(GenericError("Configuration Error", format!("{err:#}")))
    );
    process::exit(1);
}

fn config_manager_or_exit() -> ConfigManager {
    ConfigManager::new().unwrap_or_else(|err| config_error(err))
}

fn load_connection(args: &ConnectionArgs) -> anyhow::Result<(Connection, reqwest::ClientBuilder)> {
    let config = if args.profile.is_some() {
        config_manager_or_exit().load()?
    } else {
        Default::default()
    };

    let connection = Connection::resolve(args, &config)?;
    let transport = connection.transport()?;
    Ok((connection, transport))
}

async fn connect_or_exit(args: &ConnectionArgs) -> IpaClient<Authenticated> {
    let (connection, transport) = load_connection(args).unwrap_or_else(|err| config_error(err));

    debug!(
        endpoint = connection.endpoint.base(),
        user = %connection.user,
        "connecting"
    );

    match IpaClient::establish(connection.endpoint.clone(), transport, connection.credentials()).await
    {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn call_or_exit(client: &IpaClient<Authenticated>, request: &Request) -> Response {
    match client.call(request).await {
        Ok(response) => response,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn run_call(args: &ConnectionArgs, request: Request) {
    let client = connect_or_exit(args).await;
    let response = call_or_exit(&client, &request).await;

    println!("{}", FormattedString::from(&response));
}

async fn run_ping(args: &ConnectionArgs) {
    let client = connect_or_exit(args).await;
    let response = call_or_exit(&client, &Request::new("ping")).await;

    let summary = response.summary().unwrap_or("pong").to_string();
    println!("{}", FormattedString(summary));
}

async fn run_show(args: &ConnectionArgs, method: &str, arg: &str, attrs: &[String]) {
    let client = connect_or_exit(args).await;
    let response = call_or_exit(&client, &Request::new(method).arg(arg)).await;

    if response.dict().is_none() {
        eprintln!(
            "{}",
            FormattedString::from(GenericError(
                "Unexpected Result",
                format!("'{method}' did not return a single entry"),
            ))
        );
        process::exit(1);
    }

    println!("{}", FormattedString::from(select_attributes(&response, attrs)));
}

/// Renders the values of each attribute as text.
///
/// Tagged binary and timestamp values are decoded, anything else that is not a string is
/// printed as JSON.
fn select_attributes(response: &Response, attrs: &[String]) -> AttributeList {
    let attributes = attrs
        .iter()
        .map(|attr| {
            let values = response
                .get_strings(attr)
                .or_else(|| {
                    response
                        .get_datetimes(attr)
                        .map(|times| times.iter().map(|time| time.to_rfc3339()).collect())
                })
                .or_else(|| {
                    response.get_binaries(attr).map(|blobs| {
                        blobs
                            .iter()
                            .map(|blob| format!("<{} bytes>", blob.len()))
                            .collect()
                    })
                })
                .or_else(|| {
                    response
                        .get(attr)
                        .map(|values| values.iter().map(|value| value.to_string()).collect())
                });

            (attr.clone(), values)
        })
        .collect();

    AttributeList(attributes)
}

fn run_profile(command: ProfileCommands) {
    let manager = config_manager_or_exit();

    let result = match command {
        ProfileCommands::Add {
            name,
            host,
            user,
            insecure,
            ca_cert,
        } => add_profile(
            &manager,
            Profile {
                name,
                host,
                user,
                insecure,
                ca_cert,
            },
        ),
        ProfileCommands::List => manager
            .load()
            .map(|config| FormattedString::from(ProfileList(config.profiles))),
        ProfileCommands::Remove { name } => remove_profile(&manager, &name),
    };

    match result {
        Ok(out) => println!("{out}"),
        Err(err) => config_error(err),
    }
}

fn add_profile(manager: &ConfigManager, profile: Profile) -> anyhow::Result<FormattedString> {
    parse_endpoint(&profile.host)?;

    let mut config = manager.load()?;
    let name = profile.name.clone();
    config.upsert(profile);
    manager.save(&config)?;

    Ok(FormattedString(format!("Saved profile '{name}'")))
}

fn remove_profile(manager: &ConfigManager, name: &str) -> anyhow::Result<FormattedString> {
    let mut config = manager.load()?;

    if !config.remove(name) {
        anyhow::bail!("Unknown profile '{name}'");
    }
    manager.save(&config)?;

    Ok(FormattedString(format!("Removed profile '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_ipa::{MockIpa, TEST_PASSWORD, TEST_USER};

    async fn connect(
        mock: &MockIpa,
        password: &str,
    ) -> Result<IpaClient<Authenticated>, ipactl_core::ConnectError> {
        let args = ConnectionArgs {
            host: Some(mock.base_url()),
            user: Some(TEST_USER.to_string()),
            password: Some(password.to_string()),
            ..Default::default()
        };
        let (connection, transport) = load_connection(&args).unwrap();

        IpaClient::establish(connection.endpoint.clone(), transport, connection.credentials()).await
    }

    async fn setup_server() -> MockIpa {
        let mock = MockIpa::start().await;
        mock.mount_password_login().await;
        mock.mount_json_api().await;
        mock
    }

    #[tokio::test]
    async fn test_show_attributes() {
        let mock = setup_server().await;
        let client = connect(&mock, TEST_PASSWORD).await.unwrap();

        let response = client
            .call(&Request::new("user_add").arg("username"))
            .await
            .unwrap();

        let attrs = ["uid", "krblastpwdchange", "krbextradata", "has_keytab", "mail", "title"]
            .map(String::from);
        let AttributeList(attributes) = select_attributes(&response, &attrs);

        let rendered: Vec<_> = attributes
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_deref()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("uid", Some(&["username".to_string()][..])),
                ("krblastpwdchange", Some(&["2023-08-10T17:20:00+00:00".to_string()][..])),
                ("krbextradata", Some(&["<27 bytes>".to_string()][..])),
                ("has_keytab", Some(&["true".to_string()][..])),
                ("mail", Some(&["username@example.com".to_string()][..])),
                ("title", None),
            ]
        );
    }

    #[tokio::test]
    async fn test_connect_with_wrong_password() {
        let mock = setup_server().await;

        let err = connect(&mock, "wrong-password").await.unwrap_err();

        assert_eq!(err.to_string(), "unauthorized response <invalid-password> (1201)");
    }
}

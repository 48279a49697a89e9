//! # Configuration
//!
//! Connection profiles saved as JSON under the platform config directory, and the
//! merge of a profile with command-line flags into the settings of one session.
use crate::cli::ConnectionArgs;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use ipactl_core::{Credentials, Endpoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub profiles: Vec<Profile>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: String,
    pub host: String,
    pub user: String,
    #[serde(default)]
    pub insecure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,
}

impl AppConfig {
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    /// Adds `profile`, replacing any profile with the same name in place.
    pub fn upsert(&mut self, profile: Profile) {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    /// Returns whether a profile was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|profile| profile.name != name);
        self.profiles.len() != before
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("com", "ipactl", "ipactl")
            .context("Could not determine config directory")?;

        Ok(Self::with_path(proj_dirs.config_dir().join("config.json")))
    }

    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(&self.config_path)?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.config_path.display()))?;
        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(config_dir) = self.config_path.parent() {
            fs::create_dir_all(config_dir)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, content)?;
        Ok(())
    }
}

/// Everything needed to open one session.
pub struct Connection {
    pub endpoint: Endpoint,
    pub user: String,
    pub password: String,
    pub insecure: bool,
    pub ca_cert: Option<PathBuf>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("endpoint", &self.endpoint)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("insecure", &self.insecure)
            .field("ca_cert", &self.ca_cert)
            .finish()
    }
}

impl Connection {
    /// Merges the flags with the selected profile. Flags win.
    pub fn resolve(args: &ConnectionArgs, config: &AppConfig) -> Result<Self> {
        let profile = match &args.profile {
            Some(name) => Some(
                config
                    .profile(name)
                    .with_context(|| format!("Unknown profile '{name}'"))?,
            ),
            None => None,
        };

        let host = args
            .host
            .clone()
            .or_else(|| profile.map(|p| p.host.clone()))
            .context("No server given: pass --host or --profile")?;

        let user = args
            .user
            .clone()
            .or_else(|| profile.map(|p| p.user.clone()))
            .context("No user given: pass --user or --profile")?;

        let password = args
            .password
            .clone()
            .context("No password given: pass --password or set IPA_PASSWORD")?;

        Ok(Self {
            endpoint: parse_endpoint(&host)?,
            user,
            password,
            insecure: args.insecure || profile.is_some_and(|p| p.insecure),
            ca_cert: args
                .ca_cert
                .clone()
                .or_else(|| profile.and_then(|p| p.ca_cert.clone())),
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::password(self.user.clone(), self.password.clone())
    }

    /// The HTTP client configuration for this server.
    pub fn transport(&self) -> Result<reqwest::ClientBuilder> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("ipactl/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(self.insecure);

        if let Some(path) = &self.ca_cert {
            let pem = fs::read(path)
                .with_context(|| format!("Failed to read CA certificate {}", path.display()))?;
            let certificate = reqwest::Certificate::from_pem(&pem)
                .with_context(|| format!("Invalid CA certificate {}", path.display()))?;
            builder = builder.add_root_certificate(certificate);
        }

        Ok(builder)
    }
}

/// A bare host gets the default `https://{host}/ipa` base, a URI is taken as the base.
pub fn parse_endpoint(host: &str) -> Result<Endpoint> {
    let endpoint = if host.contains("://") {
        Endpoint::parse(host)?
    } else {
        Endpoint::from_host(host)?
    };
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, host: &str) -> Profile {
        Profile {
            name: name.to_string(),
            host: host.to_string(),
            user: "admin".to_string(),
            insecure: false,
            ca_cert: None,
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("config.json"));

        assert_eq!(manager.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("nested").join("config.json"));

        let mut config = AppConfig::default();
        config.upsert(profile("lab", "ipa.lab.example.com"));
        config.upsert(Profile {
            ca_cert: Some(PathBuf::from("/etc/ipa/ca.crt")),
            ..profile("prod", "ipa.example.com")
        });
        manager.save(&config).unwrap();

        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ConfigManager::with_path(path).load().unwrap_err();
        assert!(err.to_string().starts_with("Invalid config file"));
    }

    #[test]
    fn test_upsert_and_remove() {
        let mut config = AppConfig::default();
        config.upsert(profile("lab", "ipa.lab.example.com"));
        config.upsert(profile("prod", "ipa.example.com"));
        config.upsert(profile("lab", "ipa2.lab.example.com"));

        assert_eq!(config.profiles.len(), 2);
        assert_eq!(config.profiles[0].host, "ipa2.lab.example.com");

        assert!(config.remove("lab"));
        assert!(!config.remove("lab"));
        assert_eq!(config.profile("prod").unwrap().host, "ipa.example.com");
    }

    #[test]
    fn test_resolve_flags_override_profile() {
        let mut config = AppConfig::default();
        config.upsert(Profile {
            insecure: true,
            ..profile("lab", "ipa.lab.example.com")
        });

        let args = ConnectionArgs {
            profile: Some("lab".to_string()),
            user: Some("operator".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        let connection = Connection::resolve(&args, &config).unwrap();

        assert_eq!(connection.endpoint.base(), "https://ipa.lab.example.com/ipa");
        assert_eq!(connection.user, "operator");
        assert!(connection.insecure);
    }

    #[test]
    fn test_resolve_explicit_base() {
        let args = ConnectionArgs {
            host: Some("http://127.0.0.1:8080/ipa".to_string()),
            user: Some("admin".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        let connection = Connection::resolve(&args, &AppConfig::default()).unwrap();

        assert_eq!(connection.endpoint.json_url(), "http://127.0.0.1:8080/ipa/session/json");
    }

    #[test]
    fn test_resolve_missing_settings() {
        let config = AppConfig::default();

        let unknown = ConnectionArgs {
            profile: Some("ghost".to_string()),
            ..Default::default()
        };
        let err = Connection::resolve(&unknown, &config).unwrap_err();
        assert_eq!(err.to_string(), "Unknown profile 'ghost'");

        let no_password = ConnectionArgs {
            host: Some("ipa.example.com".to_string()),
            user: Some("admin".to_string()),
            ..Default::default()
        };
        let err = Connection::resolve(&no_password, &config).unwrap_err();
        assert!(err.to_string().starts_with("No password given"));
    }

    #[test]
    fn test_missing_ca_certificate() {
        let dir = tempfile::tempdir().unwrap();
        let connection = Connection {
            endpoint: Endpoint::from_host("ipa.example.com").unwrap(),
            user: "admin".to_string(),
            password: "secret".to_string(),
            insecure: false,
            ca_cert: Some(dir.path().join("missing.pem")),
        };

        let err = connection.transport().unwrap_err();
        assert!(err.to_string().starts_with("Failed to read CA certificate"));
    }
}

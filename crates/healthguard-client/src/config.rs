use serde::Deserialize;
use std::path::PathBuf;

use healthguard_protocol::Credentials;

use crate::network::DEFAULT_API_URL;
use crate::state::{FileConsultationLog, FileStorage};

const ENV_PREFIX: &str = "HEALTHGUARD";

/// Client configuration, read from `HEALTHGUARD_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub api_url: String,
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
    #[serde(default)]
    pub consultations_path: Option<PathBuf>,
    #[serde(default)]
    pub auto_login_email: Option<String>,
    #[serde(default)]
    pub auto_login_password: Option<String>,
}

impl ClientConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(environment: config::Environment) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .add_source(environment)
            .build()?;

        let mut config: ClientConfig = settings.try_deserialize()?;
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Where local storage lives, if a location can be determined
    pub fn storage_path(&self) -> Option<PathBuf> {
        self.storage_path.clone().or_else(FileStorage::default_path)
    }

    /// Where Contact Doctor requests are recorded
    pub fn consultations_path(&self) -> Option<PathBuf> {
        self.consultations_path
            .clone()
            .or_else(FileConsultationLog::default_path)
    }

    /// Credentials for a startup login, when both halves are configured
    pub fn auto_login(&self) -> Option<Credentials> {
        match (&self.auto_login_email, &self.auto_login_password) {
            (Some(email), Some(password)) => Some(Credentials {
                email: email.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}

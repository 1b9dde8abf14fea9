use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionFilePath(pub String);

impl Default for SessionFilePath {
    fn default() -> Self {
        Self("qrposter.session.json".to_owned())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub session_file_path: SessionFilePath,

    #[serde(default)]
    pub proxy: ProxyConfig,
    #[serde(default)]
    pub qr: QrConfig,
}

impl AppConfig {
    pub fn try_read(file_path: &Path) -> anyhow::Result<AppConfig> {
        let json = &std::fs::read_to_string(file_path)
            .with_context(|| format!("Reading config file {file_path:?}"))?;
        serde_json::from_str::<AppConfig>(json)
            .with_context(|| format!("Parsing JSON config file {file_path:?}"))
    }

    /// Load the config from the explicitly given path, else from the path in the
    /// `QRPOSTER_CONFIG_FILE` environment variable, else fall back to the defaults.
    /// A config file that is named but missing or malformed is an error.
    pub fn load(explicit_path: Option<&Path>) -> anyhow::Result<AppConfig> {
        if let Some(path) = explicit_path {
            return Self::try_read(path);
        }

        match std::env::var("QRPOSTER_CONFIG_FILE") {
            Ok(env_path) => Self::try_read(Path::new(&env_path)),
            Err(std::env::VarError::NotPresent) => Ok(AppConfig::default()),
            Err(err) => Err(err).context("Reading QRPOSTER_CONFIG_FILE"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfig {
    pub root_url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            root_url: "https://api.allorigins.win/get".to_owned(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrConfig {
    pub root_url: String,
    pub size: u32,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            root_url: "https://api.qrserver.com/v1/create-qr-code/".to_owned(),
            size: 200,
        }
    }
}

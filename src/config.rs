use crate::error::{GitfullstoryError, Result};
use crate::selector::Selector;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct AuthConfig {
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DefaultsConfig {
    pub orgs: Option<Vec<String>>,
    pub projects: Option<Vec<String>>,
    pub users: Option<Vec<String>>,
}

/// Raw values collected from flags and environment variables.
#[derive(Debug, Default)]
pub struct Overrides {
    pub token: Option<String>,
    pub fallback_token: Option<String>,
    pub orgs: Option<String>,
    pub projects: Option<String>,
    pub users: Option<String>,
}

/// Fully resolved settings for a single run.
#[derive(Debug)]
pub struct Settings {
    pub token: String,
    pub orgs: Selector,
    pub projects: Selector,
    pub users: Selector,
}

impl Settings {
    pub fn resolve(overrides: Overrides, config: Config) -> Result<Self> {
        let token = [
            overrides.token,
            overrides.fallback_token,
            config.auth.token,
        ]
        .into_iter()
        .flatten()
        .map(|t| t.trim().to_string())
        .find(|t| !t.is_empty())
        .ok_or(GitfullstoryError::MissingToken)?;

        Ok(Self {
            token,
            orgs: pick_selector(overrides.orgs, config.defaults.orgs),
            projects: pick_selector(overrides.projects, config.defaults.projects),
            users: pick_selector(overrides.users, config.defaults.users),
        })
    }
}

fn pick_selector(raw: Option<String>, fallback: Option<Vec<String>>) -> Selector {
    let selector = raw.as_deref().map(Selector::parse).unwrap_or_default();
    if !selector.is_empty() {
        return selector;
    }
    fallback.map(Selector::from_values).unwrap_or_default()
}

pub fn config_path() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("gitfullstory").join("config.toml");
        return Ok(path);
    }

    let home = dirs::home_dir()
        .ok_or_else(|| GitfullstoryError::Config("Cannot find home directory".into()))?;
    Ok(home.join(".config").join("gitfullstory").join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

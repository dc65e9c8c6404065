use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookmarks-api")]
#[command(about = "Runs the bookmarks service", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bookmarks")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.yaml")
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct App {
    port: u16,
    api_token: String,
    #[serde(default)]
    database: Option<String>,
    #[serde(default)]
    public_url: Option<String>,
    #[serde(default)]
    pub turso_url: Option<String>,
    #[serde(default)]
    pub turso_auth_token: Option<String>,
    #[serde(default = "default_sync_interval")]
    pub sync_interval_seconds: u64,
}

fn default_sync_interval() -> u64 {
    60
}

impl App {
    /// `None` (or an empty value) runs the service on the in-process store.
    pub fn get_db(&self) -> Option<&str> {
        self.database.as_deref().filter(|d| !d.trim().is_empty())
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub fn get_api_token(&self) -> &str {
        &self.api_token
    }

    /// Base used for `Location` headers of created bookmarks.
    pub fn get_public_url(&self) -> String {
        match self.public_url.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub app: App,
}

impl Config {
    pub fn new(path: &str) -> Result<Self> {
        let cfg = Config::load_config(path)?;
        Ok(cfg)
    }

    fn load_config(path: &str) -> Result<Config> {
        let yaml_str = fs::read_to_string(path)?;
        Config::from_yaml(&yaml_str)
    }

    pub fn from_yaml(yaml_str: &str) -> Result<Config> {
        let yaml_with_env = Config::substitute_env_vars(yaml_str)?;
        let config: Config = serde_yaml::from_str(&yaml_with_env)?;
        Ok(config)
    }

    fn substitute_env_vars(yaml_str: &str) -> Result<String> {
        let mut result = yaml_str.to_string();
        let mut offset = 0;

        while let Some(start) = result[offset..].find("${") {
            let actual_start = offset + start;
            if let Some(end) = result[actual_start..].find("}") {
                let var_name = &result[actual_start + 2..actual_start + end];

                // ${VAR:-default}
                let env_value = if let Some(default_start) = var_name.find(":-") {
                    let actual_var = &var_name[..default_start];
                    let default_val = &var_name[default_start + 2..];
                    env::var(actual_var).unwrap_or_else(|_| default_val.to_string())
                } else {
                    env::var(var_name).unwrap_or_else(|_| {
                        tracing::warn!("environment variable '{}' not found", var_name);
                        String::new()
                    })
                };

                result.replace_range(actual_start..actual_start + end + 1, &env_value);
                offset = actual_start + env_value.len();
            } else {
                break;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let cfg = Config::from_yaml(
            r#"
app:
  port: 8000
  api_token: secret
"#,
        )
        .unwrap();

        assert_eq!(cfg.app.get_port(), 8000);
        assert_eq!(cfg.app.get_api_token(), "secret");
        assert_eq!(cfg.app.get_db(), None);
        assert_eq!(cfg.app.get_public_url(), "http://localhost:8000");
        assert_eq!(cfg.app.sync_interval_seconds, 60);
    }

    #[test]
    fn public_url_and_database_are_optional_overrides() {
        let cfg = Config::from_yaml(
            r#"
app:
  port: 9000
  api_token: secret
  database: bookmarks.db
  public_url: https://bookmarks.example.com/
"#,
        )
        .unwrap();

        assert_eq!(cfg.app.get_db(), Some("bookmarks.db"));
        assert_eq!(cfg.app.get_public_url(), "https://bookmarks.example.com");
    }

    #[test]
    fn substitutes_defaults_for_unset_variables() {
        let yaml = "port: ${BOOKMARKS_TEST_SURELY_UNSET_PORT:-8123}\ntoken: ${BOOKMARKS_TEST_SURELY_UNSET_TOKEN}";
        let out = Config::substitute_env_vars(yaml).unwrap();
        assert_eq!(out, "port: 8123\ntoken: ");
    }

    #[test]
    fn missing_api_token_is_an_error() {
        assert!(Config::from_yaml("app:\n  port: 8000\n").is_err());
    }
}

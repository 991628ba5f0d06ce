use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/icongen/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcongenConfig {
    /// User-Agent sent on every request. The GitHub API rejects requests
    /// without one.
    pub user_agent: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Optional GitHub API token (raises the unauthenticated rate limit).
    #[serde(default)]
    pub github_token: Option<String>,
    /// Optional output root the per-target directories are joined onto.
    /// Absent = current working directory.
    #[serde(default)]
    pub output_root: Option<PathBuf>,
}

impl Default for IcongenConfig {
    fn default() -> Self {
        Self {
            user_agent: "icongen/0.1".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 60,
            github_token: None,
            output_root: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("icongen")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<IcongenConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = IcongenConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: IcongenConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = IcongenConfig::default();
        assert_eq!(cfg.user_agent, "icongen/0.1");
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 60);
        assert!(cfg.github_token.is_none());
        assert!(cfg.output_root.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = IcongenConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: IcongenConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.user_agent, cfg.user_agent);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            user_agent = "acme-icons/2.0"
            connect_timeout_secs = 5
            request_timeout_secs = 20
        "#;
        let cfg: IcongenConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.user_agent, "acme-icons/2.0");
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.request_timeout_secs, 20);
        assert!(cfg.github_token.is_none());
        assert!(cfg.output_root.is_none());
    }

    #[test]
    fn config_toml_token_and_output_root() {
        let toml = r#"
            user_agent = "icongen/0.1"
            connect_timeout_secs = 15
            request_timeout_secs = 60
            github_token = "ghp_example"
            output_root = "/tmp/icons"
        "#;
        let cfg: IcongenConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.github_token.as_deref(), Some("ghp_example"));
        assert_eq!(
            cfg.output_root.as_deref(),
            Some(std::path::Path::new("/tmp/icons"))
        );
    }
}

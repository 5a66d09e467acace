use std::path::{Path, PathBuf};

use color_eyre::{Result, eyre::eyre};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub mod cli;

pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

/// Picks the credential from the CLI flag, the environment, or the config
/// file, in that order. Called before any HTTP client is built, so a missing
/// key never causes a request.
pub fn resolve_api_key(
    flag: Option<String>,
    env: Option<String>,
    config: &Config,
) -> Result<String> {
    flag.or(env).or_else(|| config.api_key.clone()).ok_or_else(|| {
        eyre!(
            "No API key found. Pass --api-key, set {API_KEY_ENV_VAR}, \
             or run `post_forge configure --api-key <KEY>`"
        )
    })
}

pub fn load_ron_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let src = std::fs::read_to_string(path)?;
    Ok(ron::from_str(&src)?)
}

pub fn save_ron_file<T: Serialize>(path: &Path, x: &T) -> Result<()> {
    Ok(std::fs::write(path, &ron::to_string(x)?)?)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(dirs::config_local_dir()
        .ok_or(eyre!("Couldn't get config dir"))?
        .join("post_forge.ron"))
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        Ok(None)
    } else {
        load_ron_file(&path).map(Some)
    }
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let path = config_path()?;
    save_ron_file(&path, cfg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> Config {
        Config {
            api_key: Some(key.into()),
            ..Config::default()
        }
    }

    #[test]
    fn flag_wins_over_everything() {
        let key = resolve_api_key(
            Some("from-flag".into()),
            Some("from-env".into()),
            &config_with_key("from-config"),
        )
        .unwrap();
        assert_eq!(key, "from-flag");
    }

    #[test]
    fn env_wins_over_config() {
        let key = resolve_api_key(
            None,
            Some("from-env".into()),
            &config_with_key("from-config"),
        )
        .unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn config_is_the_last_resort() {
        let key = resolve_api_key(None, None, &config_with_key("from-config")).unwrap();
        assert_eq!(key, "from-config");
    }

    #[test]
    fn no_key_anywhere_is_fatal() {
        let err = resolve_api_key(None, None, &Config::default()).unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV_VAR));
    }

    #[test]
    fn config_round_trips_through_ron() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let cfg = Config {
            api_key: Some("key".into()),
            endpoint: Some("https://api.example.com/v1/generate".into()),
            model: None,
        };

        save_ron_file(tmp.path(), &cfg).unwrap();
        let read: Config = load_ron_file(tmp.path()).unwrap();
        assert_eq!(read.api_key.as_deref(), Some("key"));
        assert_eq!(read.endpoint, cfg.endpoint);
        assert_eq!(read.model, None);
    }
}

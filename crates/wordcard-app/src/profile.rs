use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use wordcard_config::Config;

/// Load the config file, then apply `WORDCARD_*` overrides.
///
/// An explicit path must exist. The default location is optional and falls
/// back to built-in defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => read_config(path)?,
        None => {
            let default_path = Config::default_path();
            if default_path.exists() {
                read_config(&default_path)?
            } else {
                tracing::debug!("No config at {}, using defaults", default_path.display());
                Config::default()
            }
        }
    };

    Ok(config.with_env_overrides())
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn explicit_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"extract": {"max_candidates": 20}, "speech": {"enabled": true}}"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.extract.max_candidates, 20);
        assert!(config.speech.enabled);
        assert_eq!(config.speech.command, "espeak");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.json"))).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{\"lookup\": ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }
}

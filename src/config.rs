use crate::error::AppError;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

pub const PLACEHOLDER_API_KEY: &str = "YOUR_RIOT_API_KEY_HERE";

pub const DEFAULT_REGIONS: &str = "br1";
pub const DEFAULT_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Where environment variables are looked up. The process environment in
/// production, a plain map in tests.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub riot_api_key: Option<String>,
    pub regions: Option<String>,
    pub window_days: Option<i64>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub regions: Vec<String>,
    pub window_days: i64,
    pub output_dir: String,
}

impl ResolvedConfig {
    /// Resolve every field as flag, then environment, then default.
    ///
    /// Only the credential is validated. The window is taken as given,
    /// zero and negative values included.
    pub fn resolve(overrides: &Overrides, env: &impl EnvSource) -> Result<Self, AppError> {
        // WINDOW_DAYS is parsed before the credential is checked.
        let window_days = match overrides.window_days {
            Some(days) => days,
            None => match env.get("WINDOW_DAYS") {
                Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
                    AppError::ConfigError(format!("WINDOW_DAYS must be an integer, got {:?}", raw))
                })?,
                None => DEFAULT_WINDOW_DAYS,
            },
        };

        let api_key = overrides
            .riot_api_key
            .clone()
            .or_else(|| env.get("RIOT_API_KEY"))
            .unwrap_or_default();

        if api_key.is_empty() || api_key == PLACEHOLDER_API_KEY {
            return Err(AppError::MissingCredential);
        }

        let raw_regions = overrides
            .regions
            .clone()
            .or_else(|| env.get("REGIONS"))
            .unwrap_or_else(|| DEFAULT_REGIONS.to_string());

        let output_dir = overrides
            .output
            .clone()
            .or_else(|| env.get("OUTPUT_DIR"))
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        Ok(ResolvedConfig {
            api_key,
            regions: split_list(&raw_regions),
            window_days,
            output_dir,
        })
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

/// Create the output directory and its parents. Succeeds if it already exists.
pub fn ensure_output_dir(config: &ResolvedConfig) -> Result<(), AppError> {
    let path = Path::new(&config.output_dir);
    fs::create_dir_all(path).map_err(|source| AppError::DirectoryCreation {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "output directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    fn with_key(key: &str) -> Overrides {
        Overrides {
            riot_api_key: Some(key.to_string()),
            ..Overrides::default()
        }
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ResolvedConfig::resolve(&with_key("RGAPI-abc"), &no_env()).unwrap();
        assert_eq!(config.api_key, "RGAPI-abc");
        assert_eq!(config.regions, vec!["br1"]);
        assert_eq!(config.window_days, 30);
        assert_eq!(config.output_dir, "out");
    }

    #[test]
    fn environment_fills_missing_flags() {
        let env = env_of(&[
            ("RIOT_API_KEY", "from-env"),
            ("REGIONS", "euw1,kr"),
            ("WINDOW_DAYS", "7"),
            ("OUTPUT_DIR", "data"),
        ]);
        let config = ResolvedConfig::resolve(&Overrides::default(), &env).unwrap();
        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.regions, vec!["euw1", "kr"]);
        assert_eq!(config.window_days, 7);
        assert_eq!(config.output_dir, "data");
    }

    #[test]
    fn flags_win_over_environment() {
        let env = env_of(&[
            ("RIOT_API_KEY", "from-env"),
            ("REGIONS", "euw1"),
            ("WINDOW_DAYS", "7"),
            ("OUTPUT_DIR", "data"),
        ]);
        let overrides = Overrides {
            riot_api_key: Some("from-flag".to_string()),
            regions: Some("na1".to_string()),
            window_days: Some(90),
            output: Some("elsewhere".to_string()),
        };
        let config = ResolvedConfig::resolve(&overrides, &env).unwrap();
        assert_eq!(config.api_key, "from-flag");
        assert_eq!(config.regions, vec!["na1"]);
        assert_eq!(config.window_days, 90);
        assert_eq!(config.output_dir, "elsewhere");
    }

    #[test]
    fn missing_or_placeholder_credential_is_rejected() {
        let none = ResolvedConfig::resolve(&Overrides::default(), &no_env());
        assert!(matches!(none, Err(AppError::MissingCredential)));

        let empty = ResolvedConfig::resolve(&with_key(""), &no_env());
        assert!(matches!(empty, Err(AppError::MissingCredential)));

        let placeholder = ResolvedConfig::resolve(&with_key(PLACEHOLDER_API_KEY), &no_env());
        assert!(matches!(placeholder, Err(AppError::MissingCredential)));

        let env = env_of(&[("RIOT_API_KEY", PLACEHOLDER_API_KEY)]);
        let from_env = ResolvedConfig::resolve(&Overrides::default(), &env);
        assert!(matches!(from_env, Err(AppError::MissingCredential)));
    }

    #[test]
    fn explicit_empty_key_does_not_fall_back_to_environment() {
        let env = env_of(&[("RIOT_API_KEY", "from-env")]);
        let result = ResolvedConfig::resolve(&with_key(""), &env);
        assert!(matches!(result, Err(AppError::MissingCredential)));
    }

    #[test]
    fn regions_are_trimmed_and_empty_entries_dropped() {
        assert_eq!(split_list("br1, na1,  , kr"), vec!["br1", "na1", "kr"]);
        assert_eq!(split_list("kr,kr,br1"), vec!["kr", "kr", "br1"]);
        assert!(split_list(" , ,").is_empty());
        assert!(split_list("").is_empty());
    }

    #[test]
    fn window_days_is_not_range_checked() {
        let overrides = Overrides {
            window_days: Some(-5),
            ..with_key("k")
        };
        let config = ResolvedConfig::resolve(&overrides, &no_env()).unwrap();
        assert_eq!(config.window_days, -5);

        let env = env_of(&[("WINDOW_DAYS", "0")]);
        let config = ResolvedConfig::resolve(&with_key("k"), &env).unwrap();
        assert_eq!(config.window_days, 0);
    }

    #[test]
    fn malformed_window_days_is_reported_before_missing_key() {
        let env = env_of(&[("WINDOW_DAYS", "soon")]);
        let result = ResolvedConfig::resolve(&Overrides::default(), &env);
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn malformed_window_days_in_environment_is_a_config_error() {
        let env = env_of(&[("WINDOW_DAYS", "thirty")]);
        let result = ResolvedConfig::resolve(&with_key("k"), &env);
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn output_dir_is_created_and_creation_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("out").join("run1");
        let config = ResolvedConfig {
            api_key: "k".to_string(),
            regions: vec![],
            window_days: 30,
            output_dir: target.to_string_lossy().into_owned(),
        };

        ensure_output_dir(&config).unwrap();
        assert!(target.is_dir());
        ensure_output_dir(&config).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn output_dir_under_a_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("occupied");
        fs::write(&file, b"x").unwrap();
        let config = ResolvedConfig {
            api_key: "k".to_string(),
            regions: vec![],
            window_days: 30,
            output_dir: file.join("nested").to_string_lossy().into_owned(),
        };

        let result = ensure_output_dir(&config);
        assert!(matches!(result, Err(AppError::DirectoryCreation { .. })));
    }
}

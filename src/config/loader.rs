//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::env::apply_runtime_env_overrides;
use super::sources::{config_root_dir, read_config_text_with_sources};
use super::Config;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    debug!("config source: {}", source.describe());
    let mut config: Config = toml::from_str(&config_text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let config =
            load_config_with_sources_for_test(None, BTreeMap::new(), BTreeMap::new(), None)
                .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_path_wins_over_local_and_global() {
        let mut files = BTreeMap::new();
        files.insert(
            "/tmp/custom.toml".to_string(),
            "[render]\nmax_image_width = 111\n".to_string(),
        );
        files.insert(
            "ansimark.toml".to_string(),
            "[render]\nmax_image_width = 222\n".to_string(),
        );
        files.insert(
            "/cfg/ansimark/ansimark.toml".to_string(),
            "[render]\nmax_image_width = 333\n".to_string(),
        );

        let config = load_config_with_sources_for_test(
            Some("/tmp/custom.toml"),
            files,
            BTreeMap::new(),
            Some(PathBuf::from("/cfg")),
        )
        .unwrap();
        assert_eq!(config.render.max_image_width, 111);
    }

    #[test]
    fn local_file_wins_over_global() {
        let mut files = BTreeMap::new();
        files.insert(
            "ansimark.toml".to_string(),
            "[render]\nhyperlinks = false\n".to_string(),
        );
        files.insert(
            "/cfg/ansimark/ansimark.toml".to_string(),
            "[render]\nmax_image_width = 333\n".to_string(),
        );
        let config = load_config_with_sources_for_test(
            None,
            files,
            BTreeMap::new(),
            Some(PathBuf::from("/cfg")),
        )
        .unwrap();
        assert!(!config.render.hyperlinks);
        assert_eq!(config.render.max_image_width, 500);
    }

    #[test]
    fn global_file_is_used_when_no_local_file() {
        let mut files = BTreeMap::new();
        files.insert(
            "/cfg/ansimark/ansimark.toml".to_string(),
            "[network]\nfetch_timeout_secs = 9\n".to_string(),
        );
        let config = load_config_with_sources_for_test(
            None,
            files,
            BTreeMap::new(),
            Some(PathBuf::from("/cfg")),
        )
        .unwrap();
        assert_eq!(config.network.fetch_timeout_secs, Some(9));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_config_with_sources_for_test(
            Some("/nope.toml"),
            BTreeMap::new(),
            BTreeMap::new(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "got: {err}");
    }

    #[test]
    fn env_overrides_file_values() {
        let mut files = BTreeMap::new();
        files.insert(
            "ansimark.toml".to_string(),
            "[render]\nmax_image_width = 222\n".to_string(),
        );
        let mut env = BTreeMap::new();
        env.insert("ANSIMARK_MAX_IMAGE_WIDTH".to_string(), "400".to_string());
        env.insert("ANSIMARK_FETCH_TIMEOUT_SECS".to_string(), "0".to_string());
        env.insert("NO_COLOR".to_string(), "1".to_string());

        let config = load_config_with_sources_for_test(None, files, env, None).unwrap();
        assert_eq!(config.render.max_image_width, 400);
        assert_eq!(config.network.fetch_timeout_secs, Some(1));
        assert!(!config.display.color);
    }

    #[test]
    fn empty_no_color_keeps_color() {
        let mut env = BTreeMap::new();
        env.insert("NO_COLOR".to_string(), String::new());
        let config = load_config_with_sources_for_test(None, BTreeMap::new(), env, None).unwrap();
        assert!(config.display.color);
    }

    #[test]
    fn invalid_env_width_is_rejected() {
        for bad in ["wide", "0", "-5"] {
            let mut env = BTreeMap::new();
            env.insert("ANSIMARK_MAX_IMAGE_WIDTH".to_string(), bad.to_string());
            let err =
                load_config_with_sources_for_test(None, BTreeMap::new(), env, None).unwrap_err();
            assert!(
                err.to_string().contains("ANSIMARK_MAX_IMAGE_WIDTH"),
                "got: {err}"
            );
        }
    }

    #[test]
    fn malformed_toml_is_reported() {
        let mut files = BTreeMap::new();
        files.insert("ansimark.toml".to_string(), "[render\n".to_string());
        let err =
            load_config_with_sources_for_test(None, files, BTreeMap::new(), None).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "got: {err}");
    }

    #[test]
    fn zero_width_in_file_is_rejected() {
        let mut files = BTreeMap::new();
        files.insert(
            "ansimark.toml".to_string(),
            "[render]\nmax_image_width = 0\n".to_string(),
        );
        let err =
            load_config_with_sources_for_test(None, files, BTreeMap::new(), None).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");
    }

    fn load_config_with_sources_for_test(
        path_override: Option<&str>,
        files: BTreeMap<String, String>,
        env: BTreeMap<String, String>,
        config_root: Option<PathBuf>,
    ) -> Result<Config, ConfigError> {
        load_config_from_sources(
            path_override,
            move |path| {
                let key = path.to_string_lossy().into_owned();
                files
                    .get(&key)
                    .cloned()
                    .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, key))
            },
            move |name| env.get(name).cloned(),
            move || config_root.clone(),
        )
    }
}

//! Environment overrides.

use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_MAX_IMAGE_WIDTH: &str = "ANSIMARK_MAX_IMAGE_WIDTH";
pub(super) const ENV_FETCH_TIMEOUT_SECS: &str = "ANSIMARK_FETCH_TIMEOUT_SECS";
/// Any non-empty value disables color (<https://no-color.org>).
pub(super) const ENV_NO_COLOR: &str = "NO_COLOR";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(width) = non_empty(env_lookup, ENV_MAX_IMAGE_WIDTH) {
        let parsed = width.trim().parse::<u32>().ok().filter(|w| *w > 0);
        config.render.max_image_width = parsed.ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid {ENV_MAX_IMAGE_WIDTH} value `{width}`: expected positive integer pixels"
            ))
        })?;
    }
    if let Some(timeout) = non_empty(env_lookup, ENV_FETCH_TIMEOUT_SECS) {
        let parsed = timeout.trim().parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_FETCH_TIMEOUT_SECS} value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        // Clamp to at least 1 second; zero would mean "fail immediately".
        config.network.fetch_timeout_secs = Some(parsed.max(1));
    }
    if non_empty(env_lookup, ENV_NO_COLOR).is_some() {
        config.display.color = false;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name).filter(|value| !value.trim().is_empty())
}

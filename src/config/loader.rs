//! Configuration loader with XDG-compliant path resolution
//!
//! Loads configuration from multiple locations with layered priority:
//! 1. `/etc/projcycle/config.toml` (lowest priority)
//! 2. `~/.config/projcycle/config.toml`
//! 3. `~/.projcycle.toml`
//! 4. `./.projcycle.toml` (highest priority)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use super::interpolate::interpolate_config;
use super::model::Config;

/// Application name used for XDG directories
const APP_NAME: &str = "projcycle";

/// Prefix for environment overrides
const ENV_PREFIX: &str = "PROJCYCLE_";

/// Get XDG config search paths in priority order (lowest to highest)
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from(format!("/etc/{}/config.toml", APP_NAME)));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{}.toml", APP_NAME)));
    }

    paths.push(PathBuf::from(format!(".{}.toml", APP_NAME)));

    paths
}

/// Load configuration with XDG layering
///
/// Configurations are merged in priority order, with later files
/// overriding earlier ones. Environment variables with prefix
/// `PROJCYCLE_` override all file-based configuration. Path-like
/// values are interpolated after merging.
///
/// # Arguments
/// * `override_path` - Optional path to a config file that takes highest file priority
pub fn load_config(override_path: Option<&Path>) -> Result<Config> {
    let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

    for path in config_paths() {
        if path.exists() {
            tracing::debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }
    }

    if let Some(path) = override_path {
        if path.exists() {
            tracing::debug!("Loading override config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        } else {
            tracing::warn!("Override config not found: {}", path.display());
        }
    }

    // Format: PROJCYCLE_GENERATOR__BACKEND=Ninja
    // Maps to: generator.backend = "Ninja"
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    let mut config: Config = figment.extract().context("Failed to load configuration")?;
    interpolate_config(&mut config);
    Ok(config)
}

/// Find all existing config files (for debugging/introspection)
pub fn find_config_files() -> Vec<PathBuf> {
    config_paths().into_iter().filter(|p| p.exists()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_paths_returns_expected_paths() {
        let paths = config_paths();

        assert!(paths.len() >= 2);
        assert!(paths[0].to_string_lossy().contains("/etc/"));
        assert!(paths
            .last()
            .unwrap()
            .to_string_lossy()
            .contains(".projcycle.toml"));
    }

    #[test]
    fn test_load_config_from_override() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("test-config.toml");

        fs::write(
            &config_path,
            r#"
            [project]
            output_dir = "out"

            [artifact]
            executable = "demo"
            "#,
        )
        .unwrap();

        let config = load_config(Some(&config_path)).unwrap();

        assert_eq!(config.project.output_dir, "out");
        assert_eq!(config.artifact.executable, "demo");
    }

    #[test]
    fn test_load_config_interpolates_root() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("test-config.toml");

        std::env::set_var("CHECKOUT_TEST_BASE_DIR", "/srv/perlin");
        fs::write(
            &config_path,
            r#"
            [project]
            root = "${CHECKOUT_TEST_BASE_DIR}/checkout"
            "#,
        )
        .unwrap();

        let config = load_config(Some(&config_path)).unwrap();
        std::env::remove_var("CHECKOUT_TEST_BASE_DIR");

        assert_eq!(config.project.root, Some("/srv/perlin/checkout".to_string()));
    }

    #[test]
    fn test_find_config_files_does_not_panic() {
        let _files = find_config_files();
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("PROJCYCLE_ARTIFACT__PROFILE_DIR", "source/Release");

        let config = load_config(None).unwrap();

        // Clean up BEFORE assertion to ensure cleanup happens
        std::env::remove_var("PROJCYCLE_ARTIFACT__PROFILE_DIR");

        assert_eq!(config.artifact.profile_dir, "source/Release");
    }

    #[test]
    fn test_missing_override_file_uses_defaults() {
        let config = load_config(Some(Path::new("/nonexistent/config.toml"))).unwrap();

        assert_eq!(config.generator.program, "cmake");
    }
}

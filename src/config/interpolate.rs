//! Configuration value interpolation
//!
//! Supports expansion in path-like config values:
//! - `~` or `~/...` - Home directory
//! - `$VAR` or `${VAR}` - Environment variable substitution
//! - `$(command)` - Shell command execution
//!
//! # Security Note
//!
//! Shell command execution runs with the current user's permissions.
//! Config files should have restricted permissions (600) to prevent
//! unauthorized command execution.

use std::process::Command;

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::Config;

static CMD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\(([^)]+)\)").unwrap());

static BRACKETED_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

// Variable names must not start with a digit, so `$100` is left alone
static SIMPLE_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Interpolate a string with home directory, environment variables and shell commands
///
/// # Examples
///
/// ```
/// use projcycle::config::interpolate::interpolate_string;
///
/// std::env::set_var("MY_OUTPUT", "build");
/// let result = interpolate_string("out/$MY_OUTPUT");
/// assert_eq!(result, "out/build");
/// std::env::remove_var("MY_OUTPUT");
/// ```
pub fn interpolate_string(s: &str) -> String {
    // Commands first so their output is never reinterpreted as variables
    let result = interpolate_commands(s);
    let result = interpolate_env_vars(&result);
    shellexpand::tilde(&result).into_owned()
}

/// Interpolate shell commands: $(command)
fn interpolate_commands(s: &str) -> String {
    CMD_RE
        .replace_all(s, |caps: &regex::Captures| {
            let cmd = &caps[1];
            match execute_shell_command(cmd) {
                Ok(output) => output,
                Err(e) => {
                    tracing::warn!("Failed to execute config command '{}': {}", cmd, e);
                    // Keep it visible in the resulting path
                    format!("$({})_ERROR", cmd)
                }
            }
        })
        .to_string()
}

/// Interpolate environment variables: $VAR or ${VAR}
fn interpolate_env_vars(s: &str) -> String {
    let result = BRACKETED_VAR_RE.replace_all(s, lookup_env_var).to_string();
    SIMPLE_VAR_RE.replace_all(&result, lookup_env_var).to_string()
}

fn lookup_env_var(caps: &regex::Captures) -> String {
    let var = &caps[1];
    std::env::var(var).unwrap_or_else(|_| {
        tracing::debug!("Environment variable '{}' not set", var);
        String::new()
    })
}

/// Execute a shell command and return its trimmed stdout
fn execute_shell_command(cmd: &str) -> Result<String, std::io::Error> {
    let output = Command::new("sh").arg("-c").arg(cmd).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(std::io::Error::other(format!("Command failed: {}", stderr)))
    }
}

/// Interpolate the path-like values of a Config
pub fn interpolate_config(config: &mut Config) {
    if let Some(ref mut root) = config.project.root {
        *root = interpolate_string(root);
    }
    config.project.output_dir = interpolate_string(&config.project.output_dir);
    config.generator.program = interpolate_string(&config.generator.program);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_simple_env_var() {
        std::env::set_var("TEST_SIMPLE_VAR", "hello");

        let result = interpolate_string("Value: $TEST_SIMPLE_VAR");
        assert_eq!(result, "Value: hello");

        std::env::remove_var("TEST_SIMPLE_VAR");
    }

    #[test]
    fn test_interpolate_bracketed_env_var() {
        std::env::set_var("TEST_BRACKET_VAR", "world");

        let result = interpolate_string("Value: ${TEST_BRACKET_VAR}!");
        assert_eq!(result, "Value: world!");

        std::env::remove_var("TEST_BRACKET_VAR");
    }

    #[test]
    fn test_interpolate_missing_var() {
        let result = interpolate_string("Value: $NONEXISTENT_VAR_12345");
        assert_eq!(result, "Value: ");
    }

    #[test]
    fn test_interpolate_shell_command() {
        let result = interpolate_string("$(echo /srv/checkout)/build");
        assert_eq!(result, "/srv/checkout/build");
    }

    #[test]
    fn test_interpolate_failed_command() {
        let result = interpolate_string("$(nonexistent_command_12345)");
        assert!(result.contains("_ERROR"));
    }

    #[test]
    fn test_interpolate_tilde() {
        if let Some(home) = dirs::home_dir() {
            let result = interpolate_string("~/src/perlin");
            assert_eq!(result, format!("{}/src/perlin", home.display()));
        }
    }

    #[test]
    fn test_interpolate_tilde_only_at_start() {
        let result = interpolate_string("build/~cache");
        assert_eq!(result, "build/~cache");
    }

    #[test]
    fn test_interpolate_preserves_non_var_dollar() {
        let result = interpolate_string("out$100");
        assert_eq!(result, "out$100");
    }

    #[test]
    fn test_interpolate_no_vars() {
        let result = interpolate_string("build");
        assert_eq!(result, "build");
    }

    #[test]
    fn test_interpolate_config() {
        std::env::set_var("TEST_INTERP_CMAKE", "/opt/cmake/bin/cmake");

        let mut config = Config::default();
        config.project.root = Some("$(echo /srv)/perlin".to_string());
        config.generator.program = "${TEST_INTERP_CMAKE}".to_string();

        interpolate_config(&mut config);
        std::env::remove_var("TEST_INTERP_CMAKE");

        assert_eq!(config.project.root, Some("/srv/perlin".to_string()));
        assert_eq!(config.generator.program, "/opt/cmake/bin/cmake");
        assert_eq!(config.project.output_dir, "build");
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::ignore::default_ignore_pattern;
use crate::domain::issue_key::DEFAULT_ISSUE_KEY_PATTERN;
use crate::domain::{IgnoreSpec, IssueKeyPattern};
use crate::error::{IssueKeyError, Result};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "issuekey.toml";

/// Config file looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".issuekey.toml";

/// Represents the complete configuration for issue-key-hook.
///
/// Every key is optional; missing keys fall back to the built-in defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Regex locating the issue key in the branch name
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Fail the commit when the branch is ignored or carries no key
    #[serde(default)]
    pub required: bool,

    /// Prefix the commit message with the key
    #[serde(default = "default_add_issue_key")]
    pub add_issue_key: bool,

    /// Report every decision on the console
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub ignore: IgnoreConfig,
}

fn default_pattern() -> String {
    DEFAULT_ISSUE_KEY_PATTERN.to_string()
}

fn default_add_issue_key() -> bool {
    true
}

/// Branches exempt from the issue key requirement.
///
/// At most one of `pattern` and `branches` may be set. With neither set the
/// default ignore pattern applies.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct IgnoreConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<String>>,
}

impl IgnoreConfig {
    /// Compile into the policy the hook applies
    pub fn to_spec(&self) -> Result<IgnoreSpec> {
        match (&self.pattern, &self.branches) {
            (Some(_), Some(_)) => Err(IssueKeyError::config(
                "[ignore] accepts either `pattern` or `branches`, not both",
            )),
            (Some(pattern), None) => IgnoreSpec::pattern(pattern),
            (None, Some(branches)) => Ok(IgnoreSpec::exact(branches.iter().cloned())),
            (None, None) => IgnoreSpec::pattern(&default_ignore_pattern()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pattern: default_pattern(),
            required: false,
            add_issue_key: default_add_issue_key(),
            verbose: false,
            ignore: IgnoreConfig::default(),
        }
    }
}

impl Config {
    /// Compile patterns and resolve the ignore policy
    pub fn settings(&self) -> Result<Settings> {
        Ok(Settings {
            issue_pattern: IssueKeyPattern::new(&self.pattern)?,
            ignore: self.ignore.to_spec()?,
            required: self.required,
            add_issue_key: self.add_issue_key,
        })
    }
}

/// Resolved, compiled form of [Config] consumed by the hook controller
#[derive(Debug, Clone)]
pub struct Settings {
    pub issue_pattern: IssueKeyPattern,
    pub ignore: IgnoreSpec,
    pub required: bool,
    pub add_issue_key: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            issue_pattern: IssueKeyPattern::default(),
            ignore: IgnoreSpec::default(),
            required: false,
            add_issue_key: true,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `issuekey.toml` in current directory
/// 3. `.issuekey.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| IssueKeyError::config(e.to_string()))
}

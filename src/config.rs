use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".bundlelintrc.json";

/// A forbidden substring and its suggested replacement.
///
/// Rules are literal substring matches (case-sensitive, Unicode-aware), not
/// regular expressions. They are only meaningful for the language of the
/// driving bundle, so the scanner runs against the driving bundle alone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRule {
    pub forbidden: String,
    pub replacement: String,
}

impl PolicyRule {
    pub fn new(forbidden: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            forbidden: forbidden.into(),
            replacement: replacement.into(),
        }
    }
}

/// Validation run configuration: which bundle drives the key set, which
/// bundles must contain every driving key, and the content-policy rules.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// The most specific locale bundle; its keys are authoritative.
    #[serde(default = "default_driving")]
    pub driving: String,
    /// Bundles checked for completeness against the driving bundle,
    /// in the order they should be reported.
    #[serde(default = "default_references")]
    pub references: Vec<String>,
    /// Forbidden-substring rules applied to the driving bundle's values.
    #[serde(default = "default_rules")]
    pub rules: Vec<PolicyRule>,
}

fn default_driving() -> String {
    "assets/lang/I18N_zh_CN.properties".to_string()
}

fn default_references() -> Vec<String> {
    vec![
        "assets/lang/I18N.properties".to_string(),
        "assets/lang/I18N_zh.properties".to_string(),
    ]
}

fn default_rules() -> Vec<PolicyRule> {
    vec![
        PolicyRule::new("帐户", "账户"),
        PolicyRule::new("其它", "其他"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            driving: default_driving(),
            references: default_references(),
            rules: default_rules(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if no reference bundle is configured or a rule has an
    /// empty forbidden substring (which would match every value).
    pub fn validate(&self) -> Result<()> {
        if self.references.is_empty() {
            bail!("At least one reference bundle is required");
        }

        for rule in &self.rules {
            if rule.forbidden.is_empty() {
                bail!(
                    "Empty forbidden substring in rule (replacement: \"{}\")",
                    rule.replacement
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

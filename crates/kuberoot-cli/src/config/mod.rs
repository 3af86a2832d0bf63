//! Configuration management.

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use directories::ProjectDirs;
use kuberoot_audit::{IdentityProbe, NumericUid, UidMarker};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Kubeconfig path; `~` is expanded.
    pub kubeconfig: Option<String>,

    /// Kubeconfig context.
    pub context: Option<String>,

    /// Per-exec timeout in seconds, 0 for none.
    #[serde(default = "default_exec_timeout")]
    pub exec_timeout_secs: u64,

    /// Containers probed at once.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Root classification rule.
    #[serde(default)]
    pub classifier: Classifier,

    /// Disable colored output.
    #[serde(default)]
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kubeconfig: None,
            context: None,
            exec_timeout_secs: default_exec_timeout(),
            concurrency: default_concurrency(),
            classifier: Classifier::default(),
            no_color: false,
        }
    }
}

const fn default_exec_timeout() -> u64 {
    30
}

const fn default_concurrency() -> usize {
    1
}

impl Config {
    /// Get the default config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "kuberoot", "kuberoot")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file; a missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;

        Ok(config)
    }
}

/// Available root classification rules.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Classifier {
    /// Output contains `uid=0(root)`
    #[default]
    Marker,
    /// Numeric `uid=` field is 0, whatever the account name
    NumericUid,
}

impl Classifier {
    /// Install this rule on a probe.
    #[must_use]
    pub fn apply(self, probe: IdentityProbe) -> IdentityProbe {
        match self {
            Self::Marker => probe.with_predicate(UidMarker),
            Self::NumericUid => probe.with_predicate(NumericUid),
        }
    }
}

impl std::fmt::Display for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Marker => write!(f, "marker"),
            Self::NumericUid => write!(f, "numeric-uid"),
        }
    }
}

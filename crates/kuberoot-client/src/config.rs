//! Client configuration types.

use std::path::PathBuf;

/// Where cluster credentials come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Explicit kubeconfig path; `None` uses `KUBECONFIG` or `~/.kube/config`
    pub kubeconfig: Option<PathBuf>,

    /// Context to use; `None` uses the kubeconfig's current-context
    pub context: Option<String>,
}

impl ClientConfig {
    /// Create a configuration that uses the conventional kubeconfig location
    #[must_use]
    pub const fn new() -> Self {
        Self {
            kubeconfig: None,
            context: None,
        }
    }

    /// Read credentials from a specific kubeconfig file
    #[must_use]
    pub fn kubeconfig(mut self, path: impl Into<PathBuf>) -> Self {
        self.kubeconfig = Some(path.into());
        self
    }

    /// Select a kubeconfig context
    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

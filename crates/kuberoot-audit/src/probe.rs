//! Remote identity probe: run `id` in a container and classify the output.

use std::sync::Arc;
use std::time::Duration;

use kuberoot_core::{Cluster, ContainerTarget, KubeRootError, ProbeResult, Result};
use tracing::debug;

use crate::classify::{RootPredicate, UidMarker};

/// Command that reports the calling identity.
pub const ID_COMMAND: &[&str] = &["id"];

/// Default bound on a single exec call.
pub const DEFAULT_EXEC_TIMEOUT: Duration = Duration::from_secs(30);

/// Executes the identity command in one container at a time.
#[derive(Debug, Clone)]
pub struct IdentityProbe {
    command: Vec<String>,
    predicate: Arc<dyn RootPredicate>,
    timeout: Option<Duration>,
}

impl Default for IdentityProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProbe {
    /// Probe with `id`, the `uid=0(root)` marker and the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            command: ID_COMMAND.iter().map(ToString::to_string).collect(),
            predicate: Arc::new(UidMarker),
            timeout: Some(DEFAULT_EXEC_TIMEOUT),
        }
    }

    /// Swap the classification rule.
    #[must_use]
    pub fn with_predicate(mut self, predicate: impl RootPredicate + 'static) -> Self {
        self.predicate = Arc::new(predicate);
        self
    }

    /// Bound each exec call; `None` waits forever.
    #[must_use]
    pub const fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Active classification rule.
    #[must_use]
    pub fn predicate(&self) -> &dyn RootPredicate {
        self.predicate.as_ref()
    }

    /// Run the identity command in `target` and classify what it printed.
    ///
    /// Only channel failures and timeouts are errors. Whatever the command
    /// printed, including nothing, is classified.
    pub async fn probe<C: Cluster + ?Sized>(
        &self,
        cluster: &C,
        target: &ContainerTarget,
    ) -> Result<ProbeResult> {
        let exec = cluster.exec(target, &self.command);
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, exec).await.map_err(|_| {
                KubeRootError::ExecTimeout {
                    target: target.clone(),
                    seconds: limit.as_secs(),
                }
            })??,
            None => exec.await?,
        };

        let is_root = self.predicate.is_root(&output.stdout);
        debug!(
            %target,
            is_root,
            exit_code = ?output.exit_code,
            succeeded = output.succeeded(),
            predicate = self.predicate.name(),
            "container probed"
        );

        Ok(ProbeResult {
            is_root,
            stdout: output.stdout,
            exit_code: output.exit_code,
        })
    }
}

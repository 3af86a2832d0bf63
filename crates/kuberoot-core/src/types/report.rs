//! Audit report -- point-in-time privilege findings for a cluster.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::workload::{ContainerTarget, ResolvedOwner};

/// Complete result of one audit pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// When the audit started
    pub started_at: DateTime<Utc>,
    /// When the audit finished
    pub finished_at: DateTime<Utc>,
    /// One entry per container found running as root, in enumeration order
    pub findings: Vec<Finding>,
    /// Containers that could not be probed
    pub failures: Vec<ProbeFailure>,
    /// Running counters
    pub summary: AuditSummary,
}

impl AuditReport {
    /// Start an empty report stamped with the current time.
    #[must_use]
    pub fn begin() -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            finished_at: now,
            findings: Vec::new(),
            failures: Vec::new(),
            summary: AuditSummary::default(),
        }
    }

    /// Stamp the finish time.
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    /// Wall-clock time the audit took.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.finished_at - self.started_at
    }

    /// Returns true if any privileged container was found.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// A container observed running as the superuser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Namespace of the workload
    pub namespace: String,
    /// Workload name
    pub workload: String,
    /// Container name
    pub container: String,
    /// Resolved controller, absent when the workload has no owners
    pub owner: Option<ResolvedOwner>,
}

impl Finding {
    /// Build a finding for a probed container.
    #[must_use]
    pub fn new(target: &ContainerTarget, owner: Option<ResolvedOwner>) -> Self {
        Self {
            namespace: target.namespace.clone(),
            workload: target.workload.clone(),
            container: target.container.clone(),
            owner,
        }
    }
}

/// A container skipped because its exec channel failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeFailure {
    /// Namespace of the workload
    pub namespace: String,
    /// Workload name
    pub workload: String,
    /// Container name
    pub container: String,
    /// Why the probe failed
    pub reason: String,
}

impl ProbeFailure {
    /// Build a failure record for a container.
    #[must_use]
    pub fn new(target: &ContainerTarget, reason: impl Into<String>) -> Self {
        Self {
            namespace: target.namespace.clone(),
            workload: target.workload.clone(),
            container: target.container.clone(),
            reason: reason.into(),
        }
    }
}

/// Counters accumulated over an audit pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Workloads returned by enumeration
    pub total_workloads: usize,
    /// Containers whose probe completed
    pub total_containers: usize,
    /// Containers classified as root
    pub privileged_containers: usize,
    /// Workloads with at least one root container
    pub privileged_workloads: usize,
    /// Containers whose probe failed
    pub skipped_containers: usize,
}

impl AuditSummary {
    /// Returns true if the privileged counters never exceed their totals.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.privileged_containers <= self.total_containers
            && self.privileged_workloads <= self.total_workloads
    }
}

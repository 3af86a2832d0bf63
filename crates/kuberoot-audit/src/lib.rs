//! # kuberoot-audit
//!
//! Finds workloads whose containers execute as the superuser.
//!
//! ## Data Flow
//!
//! ```text
//! enumerate::list_workloads()          one cluster-wide pod list
//!   -> for each container:
//!        IdentityProbe::probe()        exec `id`, classify stdout
//!   -> on a root verdict:
//!        resolve::resolve_owner()      pod -> ReplicaSet -> Deployment
//!   -> AuditReport                     findings + counters
//! ```
//!
//! Listing and owner lookups are fatal when they fail. A failed exec only
//! skips that container.

pub mod classify;
pub mod enumerate;
pub mod orchestrator;
pub mod probe;
pub mod resolve;

#[cfg(test)]
pub(crate) mod testing;

pub use classify::{NumericUid, RootPredicate, UidMarker, ROOT_MARKER};
pub use orchestrator::{AuditOptions, Auditor};
pub use probe::{IdentityProbe, DEFAULT_EXEC_TIMEOUT, ID_COMMAND};

use kuberoot_core::{AuditReport, Cluster, Result};

/// Audit a cluster with the default probe, sequentially.
///
/// # Errors
///
/// Returns an error if the workload listing or an owner lookup fails.
pub async fn run_audit<C: Cluster>(cluster: C) -> Result<AuditReport> {
    Auditor::new(cluster).run().await
}

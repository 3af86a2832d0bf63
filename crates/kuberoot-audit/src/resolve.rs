//! Ownership resolution -- which controller is responsible for a workload.
//!
//! Only the first owner reference is consulted. When it is a `ReplicaSet`,
//! one extra lookup finds the controller above it (typically a
//! `Deployment`). Deeper chains are not walked.

use kuberoot_core::{Cluster, ResolvedOwner, Result, Workload};
use tracing::debug;

/// Resolve a workload to its top-level owner.
///
/// Returns `Ok(None)` without touching the cluster when the workload has
/// no owner references.
///
/// # Errors
///
/// Fails if the intermediate replica set cannot be fetched. Callers treat
/// this as fatal.
pub async fn resolve_owner<C: Cluster + ?Sized>(
    cluster: &C,
    workload: &Workload,
) -> Result<Option<ResolvedOwner>> {
    let Some(owner) = workload.first_owner() else {
        return Ok(None);
    };

    if !owner.is_replica_set() {
        return Ok(Some(ResolvedOwner::direct(owner)));
    }

    let upstream = cluster
        .controller_owners(&workload.namespace, &owner.name)
        .await?;

    let resolved = upstream
        .first()
        .map_or_else(|| ResolvedOwner::direct(owner), ResolvedOwner::upstream);
    debug!(
        workload = %workload,
        owner = %resolved.name,
        kind = %resolved.kind,
        hops = resolved.hops,
        "owner resolved"
    );

    Ok(Some(resolved))
}

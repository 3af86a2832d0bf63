//! Workload enumeration.

use kuberoot_core::{Cluster, Result, Workload};
use tracing::info;

/// List every workload in the cluster, in the order the API server returns
/// them.
///
/// # Errors
///
/// Propagates the listing failure with its cause. The audit cannot run
/// without it.
pub async fn list_workloads<C: Cluster + ?Sized>(cluster: &C) -> Result<Vec<Workload>> {
    let workloads = cluster.list_workloads().await?;
    let containers: usize = workloads.iter().map(|w| w.containers.len()).sum();
    info!(workloads = workloads.len(), containers, "workloads enumerated");
    Ok(workloads)
}

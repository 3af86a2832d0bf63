//! The seam between the audit pipeline and a cluster.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::types::{ContainerTarget, ExecOutput, OwnerReference, Workload};

/// Read-only view of a cluster control plane
///
/// Implemented by the kube-backed client and by in-memory fakes in tests.
#[async_trait]
pub trait Cluster: Send + Sync {
    /// List every workload across all namespaces in one unfiltered query
    async fn list_workloads(&self) -> Result<Vec<Workload>>;

    /// Fetch a replica set by name and return its owner references
    async fn controller_owners(&self, namespace: &str, name: &str) -> Result<Vec<OwnerReference>>;

    /// Run `command` inside a container with stdout and stderr captured,
    /// no stdin and no terminal
    async fn exec(&self, target: &ContainerTarget, command: &[String]) -> Result<ExecOutput>;
}

#[async_trait]
impl<T: Cluster + ?Sized> Cluster for &T {
    async fn list_workloads(&self) -> Result<Vec<Workload>> {
        (**self).list_workloads().await
    }

    async fn controller_owners(&self, namespace: &str, name: &str) -> Result<Vec<OwnerReference>> {
        (**self).controller_owners(namespace, name).await
    }

    async fn exec(&self, target: &ContainerTarget, command: &[String]) -> Result<ExecOutput> {
        (**self).exec(target, command).await
    }
}

#[async_trait]
impl<T: Cluster + ?Sized> Cluster for Arc<T> {
    async fn list_workloads(&self) -> Result<Vec<Workload>> {
        (**self).list_workloads().await
    }

    async fn controller_owners(&self, namespace: &str, name: &str) -> Result<Vec<OwnerReference>> {
        (**self).controller_owners(namespace, name).await
    }

    async fn exec(&self, target: &ContainerTarget, command: &[String]) -> Result<ExecOutput> {
        (**self).exec(target, command).await
    }
}

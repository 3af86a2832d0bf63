//! Replica set lookups.

use crate::KubeClient;
use k8s_openapi::api::apps::v1::ReplicaSet;
use kube::api::Api;
use kuberoot_core::{KubeRootError, OwnerReference, Result, REPLICA_SET_KIND};
use tracing::debug;

/// Replica set endpoints
pub struct ReplicaSetApi<'a> {
    client: &'a KubeClient,
}

impl<'a> ReplicaSetApi<'a> {
    pub(crate) const fn new(client: &'a KubeClient) -> Self {
        Self { client }
    }

    /// Fetch a replica set and return its owner references in declaration order
    pub async fn owners(&self, namespace: &str, name: &str) -> Result<Vec<OwnerReference>> {
        let api: Api<ReplicaSet> = Api::namespaced(self.client.kube(), namespace);
        debug!(namespace, name, "fetching replica set");

        let replica_set = api.get(name).await.map_err(|e| match e {
            kube::Error::Api(ref resp) if resp.code == 404 => KubeRootError::NotFound {
                kind: REPLICA_SET_KIND.to_string(),
                namespace: namespace.to_string(),
                name: name.to_string(),
            },
            other => KubeRootError::query(format!("get replica set {namespace}/{name}"), other),
        })?;

        Ok(replica_set
            .metadata
            .owner_references
            .unwrap_or_default()
            .into_iter()
            .map(|o| OwnerReference::new(o.name, o.kind))
            .collect())
    }
}

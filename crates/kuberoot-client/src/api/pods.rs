//! Pod listing endpoints.

use crate::KubeClient;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, ListParams};
use kuberoot_core::{Container, KubeRootError, OwnerReference, Result, Workload};
use tracing::debug;

/// Pod endpoints
pub struct PodApi<'a> {
    client: &'a KubeClient,
}

impl<'a> PodApi<'a> {
    pub(crate) const fn new(client: &'a KubeClient) -> Self {
        Self { client }
    }

    /// List every pod in every namespace as a workload
    ///
    /// One unfiltered request; continuation tokens are not followed.
    pub async fn list_all(&self) -> Result<Vec<Workload>> {
        let api: Api<Pod> = Api::all(self.client.kube());
        debug!("listing pods in all namespaces");

        let pods = api
            .list(&ListParams::default())
            .await
            .map_err(|e| KubeRootError::query("list pods in all namespaces", e))?;

        debug!(count = pods.items.len(), "pods listed");
        Ok(pods.items.into_iter().map(workload_from_pod).collect())
    }
}

/// Snapshot the parts of a pod the audit needs
pub(crate) fn workload_from_pod(pod: Pod) -> Workload {
    let containers = pod
        .spec
        .map(|spec| {
            spec.containers
                .into_iter()
                .map(|c| Container::new(c.name))
                .collect()
        })
        .unwrap_or_default();

    let owner_references = pod
        .metadata
        .owner_references
        .unwrap_or_default()
        .into_iter()
        .map(|o| OwnerReference::new(o.name, o.kind))
        .collect();

    Workload {
        namespace: pod.metadata.namespace.unwrap_or_default(),
        name: pod.metadata.name.unwrap_or_default(),
        containers,
        owner_references,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::{Container as PodContainer, PodSpec};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::{
        ObjectMeta, OwnerReference as MetaOwnerReference,
    };

    fn owner(name: &str, kind: &str) -> MetaOwnerReference {
        MetaOwnerReference {
            api_version: "apps/v1".to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
            uid: format!("{name}-uid"),
            ..Default::default()
        }
    }

    fn container(name: &str) -> PodContainer {
        PodContainer {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_workload_from_pod() {
        let pod = Pod {
            metadata: ObjectMeta {
                name: Some("web-1".to_string()),
                namespace: Some("ns1".to_string()),
                owner_references: Some(vec![owner("web-rs", "ReplicaSet")]),
                ..Default::default()
            },
            spec: Some(PodSpec {
                containers: vec![container("app"), container("sidecar")],
                ..Default::default()
            }),
            ..Default::default()
        };

        let workload = workload_from_pod(pod);
        assert_eq!(workload.namespace, "ns1");
        assert_eq!(workload.name, "web-1");
        let names: Vec<&str> = workload.containers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["app", "sidecar"]);
        assert_eq!(
            workload.owner_references,
            vec![OwnerReference::new("web-rs", "ReplicaSet")]
        );
    }

    #[test]
    fn test_workload_from_bare_pod() {
        let pod = Pod {
            metadata: ObjectMeta {
                name: Some("static".to_string()),
                namespace: Some("kube-system".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let workload = workload_from_pod(pod);
        assert!(workload.containers.is_empty());
        assert!(workload.owner_references.is_empty());
    }
}

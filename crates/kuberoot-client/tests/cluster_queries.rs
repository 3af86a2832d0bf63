//! Control-plane queries against a mock API server.

use kuberoot_client::{KubeClient, KubeRootError};
use kuberoot_core::{Cluster, ErrorClass, OwnerReference};
use serde_json::json;
use std::io::Write;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> KubeClient {
    let config = kube::Config::new(server.uri().parse().unwrap());
    KubeClient::from_config(config).unwrap()
}

fn pod(
    namespace: &str,
    name: &str,
    containers: &[&str],
    owners: serde_json::Value,
) -> serde_json::Value {
    json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "ownerReferences": owners,
        },
        "spec": {
            "containers": containers
                .iter()
                .map(|c| json!({ "name": c, "image": "busybox" }))
                .collect::<Vec<_>>(),
        },
    })
}

fn owner(name: &str, kind: &str) -> serde_json::Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": kind,
        "name": name,
        "uid": format!("{name}-uid"),
        "controller": true,
    })
}

fn status(code: u16, reason: &str, message: &str) -> serde_json::Value {
    json!({
        "apiVersion": "v1",
        "kind": "Status",
        "metadata": {},
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code,
    })
}

#[tokio::test]
async fn test_list_workloads_across_namespaces() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pods"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiVersion": "v1",
            "kind": "PodList",
            "metadata": { "resourceVersion": "1" },
            "items": [
                pod("ns1", "web-1", &["app", "sidecar"], json!([owner("web-rs", "ReplicaSet")])),
                pod("kube-system", "etcd-node", &["etcd"], json!([])),
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let workloads = assert_ok!(client.list_workloads().await);

    assert_eq!(workloads.len(), 2);
    assert_eq!(workloads[0].namespace, "ns1");
    assert_eq!(workloads[0].name, "web-1");
    assert_eq!(workloads[0].containers.len(), 2);
    assert_eq!(
        workloads[0].first_owner(),
        Some(&OwnerReference::new("web-rs", "ReplicaSet"))
    );
    assert_eq!(workloads[1].name, "etcd-node");
    assert!(workloads[1].owner_references.is_empty());
}

#[tokio::test]
async fn test_list_workloads_forbidden_is_cluster_query_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pods"))
        .respond_with(ResponseTemplate::new(403).set_body_json(status(
            403,
            "Forbidden",
            "pods is forbidden: User \"dev\" cannot list resource \"pods\"",
        )))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_workloads().await.unwrap_err();

    assert_eq!(err.class(), ErrorClass::ClusterQuery);
    assert!(err.is_fatal());
    assert!(err.to_string().contains("list pods"));
}

#[tokio::test]
async fn test_replica_set_owners() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apis/apps/v1/namespaces/ns1/replicasets/web-rs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiVersion": "apps/v1",
            "kind": "ReplicaSet",
            "metadata": {
                "name": "web-rs",
                "namespace": "ns1",
                "ownerReferences": [owner("web", "Deployment")],
            },
            "spec": {
                "selector": { "matchLabels": { "app": "web" } },
            },
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let owners = assert_ok!(client.controller_owners("ns1", "web-rs").await);

    assert_eq!(owners, vec![OwnerReference::new("web", "Deployment")]);
}

#[tokio::test]
async fn test_missing_replica_set_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apis/apps/v1/namespaces/ns1/replicasets/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(status(
            404,
            "NotFound",
            "replicasets.apps \"gone\" not found",
        )))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.controller_owners("ns1", "gone").await.unwrap_err();

    assert!(matches!(
        err,
        KubeRootError::NotFound { ref kind, ref name, .. } if kind == "ReplicaSet" && name == "gone"
    ));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_builder_reads_kubeconfig_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r"apiVersion: v1
kind: Config
clusters:
- name: lab
  cluster:
    server: http://127.0.0.1:6443
users:
- name: auditor
  user:
    token: test-token
contexts:
- name: lab
  context:
    cluster: lab
    user: auditor
current-context: lab
"
    )
    .unwrap();

    let client = KubeClient::builder()
        .kubeconfig(file.path())
        .build()
        .await
        .unwrap();
    assert!(client.cluster_url().starts_with("http://127.0.0.1:6443"));

    let err = KubeClient::builder()
        .kubeconfig(file.path())
        .context("missing")
        .build()
        .await
        .err()
        .unwrap();
    assert_eq!(err.class(), ErrorClass::Setup);
}

#[tokio::test]
async fn test_builder_missing_kubeconfig_is_setup_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = KubeClient::builder()
        .kubeconfig(dir.path().join("nope"))
        .build()
        .await
        .err()
        .unwrap();

    assert!(matches!(err, KubeRootError::Kubeconfig(_)));
    assert_eq!(err.class(), ErrorClass::Setup);
}

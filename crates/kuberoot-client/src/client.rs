//! Main cluster client implementation.

use crate::api::{ExecApi, PodApi, ReplicaSetApi};
use crate::config::ClientConfig;
use async_trait::async_trait;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kuberoot_core::{
    Cluster, ContainerTarget, ExecOutput, KubeRootError, OwnerReference, Result, Workload,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Kubernetes client used by the audit
#[derive(Clone)]
pub struct KubeClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    kube: kube::Client,
    cluster_url: String,
}

impl KubeClient {
    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> KubeClientBuilder {
        KubeClientBuilder::new()
    }

    /// Build a client from an already resolved kube configuration
    pub fn from_config(config: kube::Config) -> Result<Self> {
        let cluster_url = config.cluster_url.to_string();
        let kube = kube::Client::try_from(config)
            .map_err(|e| KubeRootError::ClientInit(e.to_string()))?;
        debug!(cluster = %cluster_url, "cluster client ready");

        Ok(Self {
            inner: Arc::new(ClientInner { kube, cluster_url }),
        })
    }

    /// API server this client talks to
    #[must_use]
    pub fn cluster_url(&self) -> &str {
        &self.inner.cluster_url
    }

    /// Access pod endpoints
    #[must_use]
    pub fn pods(&self) -> PodApi<'_> {
        PodApi::new(self)
    }

    /// Access replica set endpoints
    #[must_use]
    pub fn replica_sets(&self) -> ReplicaSetApi<'_> {
        ReplicaSetApi::new(self)
    }

    /// Access the exec sub-protocol
    #[must_use]
    pub fn exec_channel(&self) -> ExecApi<'_> {
        ExecApi::new(self)
    }

    /// Underlying kube client
    pub(crate) fn kube(&self) -> kube::Client {
        self.inner.kube.clone()
    }
}

#[async_trait]
impl Cluster for KubeClient {
    async fn list_workloads(&self) -> Result<Vec<Workload>> {
        self.pods().list_all().await
    }

    async fn controller_owners(&self, namespace: &str, name: &str) -> Result<Vec<OwnerReference>> {
        self.replica_sets().owners(namespace, name).await
    }

    async fn exec(&self, target: &ContainerTarget, command: &[String]) -> Result<ExecOutput> {
        self.exec_channel().run(target, command).await
    }
}

/// Builder for configuring a [`KubeClient`]
#[derive(Debug, Default)]
pub struct KubeClientBuilder {
    config: ClientConfig,
}

impl KubeClientBuilder {
    /// Create a new builder using the conventional kubeconfig location
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing client configuration
    #[must_use]
    pub const fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Read credentials from a specific kubeconfig file
    #[must_use]
    pub fn kubeconfig(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = self.config.kubeconfig(path);
        self
    }

    /// Select a kubeconfig context
    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.config = self.config.context(context);
        self
    }

    /// Load the kubeconfig and build the client
    pub async fn build(self) -> Result<KubeClient> {
        let kubeconfig = match &self.config.kubeconfig {
            Some(path) => {
                debug!(path = %path.display(), "reading kubeconfig");
                Kubeconfig::read_from(path).map_err(|e| {
                    KubeRootError::Kubeconfig(format!("{}: {e}", path.display()))
                })?
            }
            None => Kubeconfig::read().map_err(|e| KubeRootError::Kubeconfig(e.to_string()))?,
        };

        let options = KubeConfigOptions {
            context: self.config.context.clone(),
            ..KubeConfigOptions::default()
        };

        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &options)
            .await
            .map_err(|e| KubeRootError::Kubeconfig(e.to_string()))?;

        KubeClient::from_config(config)
    }
}

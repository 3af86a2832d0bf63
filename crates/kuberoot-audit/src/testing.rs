//! In-memory cluster used by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use kuberoot_core::{
    Cluster, ContainerTarget, ExecOutput, KubeRootError, OwnerReference, Result, Workload,
    REPLICA_SET_KIND,
};

/// Scripted behaviour of one container's exec channel
#[derive(Debug, Clone)]
pub enum FakeExec {
    Output(ExecOutput),
    Fail(String),
    Hang,
}

impl FakeExec {
    pub fn stdout(stdout: &str) -> Self {
        Self::Output(ExecOutput::success(stdout))
    }
}

#[derive(Debug, Default)]
pub struct FakeCluster {
    workloads: Vec<Workload>,
    list_error: Option<String>,
    replica_sets: HashMap<(String, String), Vec<OwnerReference>>,
    execs: HashMap<ContainerTarget, FakeExec>,
    lookups: AtomicUsize,
    exec_log: Mutex<Vec<(ContainerTarget, Vec<String>)>>,
}

impl FakeCluster {
    pub fn new(workloads: Vec<Workload>) -> Self {
        Self {
            workloads,
            ..Self::default()
        }
    }

    pub fn unreachable(message: &str) -> Self {
        Self {
            list_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_exec(mut self, target: &ContainerTarget, exec: FakeExec) -> Self {
        self.execs.insert(target.clone(), exec);
        self
    }

    /// Script every container of every workload with the same output
    pub fn with_all_execs(mut self, exec: &FakeExec) -> Self {
        for workload in &self.workloads {
            for container in &workload.containers {
                self.execs
                    .insert(workload.container_target(container), exec.clone());
            }
        }
        self
    }

    pub fn with_replica_set(
        mut self,
        namespace: &str,
        name: &str,
        owners: Vec<OwnerReference>,
    ) -> Self {
        self.replica_sets.insert((namespace.to_string(), name.to_string()), owners);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn exec_targets(&self) -> Vec<ContainerTarget> {
        self.exec_log
            .lock()
            .unwrap()
            .iter()
            .map(|(target, _)| target.clone())
            .collect()
    }

    pub fn exec_commands(&self) -> Vec<Vec<String>> {
        self.exec_log
            .lock()
            .unwrap()
            .iter()
            .map(|(_, command)| command.clone())
            .collect()
    }
}

#[async_trait]
impl Cluster for FakeCluster {
    async fn list_workloads(&self) -> Result<Vec<Workload>> {
        match &self.list_error {
            Some(message) => Err(KubeRootError::query(
                "list pods in all namespaces",
                message.clone(),
            )),
            None => Ok(self.workloads.clone()),
        }
    }

    async fn controller_owners(&self, namespace: &str, name: &str) -> Result<Vec<OwnerReference>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.replica_sets
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| KubeRootError::NotFound {
                kind: REPLICA_SET_KIND.to_string(),
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }

    async fn exec(&self, target: &ContainerTarget, command: &[String]) -> Result<ExecOutput> {
        self.exec_log
            .lock()
            .unwrap()
            .push((target.clone(), command.to_vec()));

        match self.execs.get(target).cloned() {
            Some(FakeExec::Output(output)) => Ok(output),
            Some(FakeExec::Fail(message)) => Err(KubeRootError::exec(target, message)),
            Some(FakeExec::Hang) => std::future::pending().await,
            None => Ok(ExecOutput::default()),
        }
    }
}

//! Audit orchestration: probe every container and aggregate the results.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use futures_util::stream::{self, StreamExt};
use kuberoot_core::{AuditReport, Cluster, Finding, ProbeFailure, ResolvedOwner, Result};
use tracing::{info, warn};

use crate::enumerate;
use crate::probe::IdentityProbe;
use crate::resolve;

/// Knobs for an audit pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditOptions {
    /// Containers probed at once. 1 means strictly sequential.
    pub concurrency: usize,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

/// Runs a full audit pass against a cluster
#[derive(Debug)]
pub struct Auditor<C> {
    cluster: C,
    probe: IdentityProbe,
    options: AuditOptions,
}

impl<C: Cluster> Auditor<C> {
    /// Auditor with the default probe, probing one container at a time
    pub fn new(cluster: C) -> Self {
        Self {
            cluster,
            probe: IdentityProbe::default(),
            options: AuditOptions::default(),
        }
    }

    /// Use a custom probe
    #[must_use]
    pub fn with_probe(mut self, probe: IdentityProbe) -> Self {
        self.probe = probe;
        self
    }

    /// Use custom options
    #[must_use]
    pub const fn with_options(mut self, options: AuditOptions) -> Self {
        self.options = options;
        self
    }

    /// Audit every container of every workload.
    ///
    /// Findings come out in enumeration order whatever the concurrency:
    /// probes may overlap, but their results are consumed in order by this
    /// single loop, which owns all counters.
    ///
    /// # Errors
    ///
    /// Fails if the workload listing or an owner lookup fails. Exec
    /// failures are recorded in the report and the audit continues.
    pub async fn run(&self) -> Result<AuditReport> {
        let mut report = AuditReport::begin();
        let workloads = enumerate::list_workloads(&self.cluster).await?;
        report.summary.total_workloads = workloads.len();

        let targets = workloads.iter().enumerate().flat_map(|(index, workload)| {
            workload
                .containers
                .iter()
                .map(move |container| (index, workload.container_target(container)))
        });

        let mut outcomes = stream::iter(targets)
            .map(|(index, target)| async move {
                let outcome = self.probe.probe(&self.cluster, &target).await;
                (index, target, outcome)
            })
            .buffered(self.options.concurrency.max(1));

        // Resolved owner per privileged workload; presence marks it counted.
        let mut privileged: HashMap<usize, Option<ResolvedOwner>> = HashMap::new();

        while let Some((index, target, outcome)) = outcomes.next().await {
            let result = match outcome {
                Ok(result) => result,
                Err(err) if err.is_execution() => {
                    warn!(
                        namespace = %target.namespace,
                        workload = %target.workload,
                        container = %target.container,
                        error = %err,
                        "could not verify container"
                    );
                    report.summary.skipped_containers += 1;
                    report.failures.push(ProbeFailure::new(&target, err.to_string()));
                    continue;
                }
                Err(err) => return Err(err),
            };

            report.summary.total_containers += 1;
            if !result.is_root {
                continue;
            }
            report.summary.privileged_containers += 1;

            let owner = match privileged.entry(index) {
                Entry::Occupied(entry) => entry.get().clone(),
                Entry::Vacant(entry) => {
                    report.summary.privileged_workloads += 1;
                    let owner = resolve::resolve_owner(&self.cluster, &workloads[index]).await?;
                    entry.insert(owner).clone()
                }
            };

            info!(%target, owner = ?owner.as_ref().map(|o| &o.name), "container runs as root");
            report.findings.push(Finding::new(&target, owner));
        }

        let report = report.finish();
        info!(
            workloads = report.summary.total_workloads,
            containers = report.summary.total_containers,
            privileged_containers = report.summary.privileged_containers,
            privileged_workloads = report.summary.privileged_workloads,
            skipped = report.summary.skipped_containers,
            "audit complete"
        );
        Ok(report)
    }
}

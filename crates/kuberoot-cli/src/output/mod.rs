//! Console rendering of audit reports.

use colored::Colorize;
use kuberoot_core::{AuditReport, AuditSummary, Finding, ProbeFailure};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "Namespace")]
    namespace: String,
    #[tabled(rename = "Pod name")]
    pod: String,
    #[tabled(rename = "Container")]
    container: String,
    #[tabled(rename = "Owner Name")]
    owner_name: String,
    #[tabled(rename = "Owner Kind")]
    owner_kind: String,
}

impl From<&Finding> for FindingRow {
    fn from(finding: &Finding) -> Self {
        let (owner_name, owner_kind) = finding
            .owner
            .as_ref()
            .map(|o| (o.name.clone(), o.kind.clone()))
            .unwrap_or_default();

        Self {
            namespace: finding.namespace.clone(),
            pod: finding.workload.clone(),
            container: finding.container.clone(),
            owner_name,
            owner_kind,
        }
    }
}

/// Render the whole report: findings, skipped containers, summary.
#[must_use]
pub fn render_report(report: &AuditReport) -> String {
    let mut out = render_findings(&report.findings);
    out.push('\n');

    if !report.failures.is_empty() {
        out.push('\n');
        out.push_str(&render_failures(&report.failures));
    }

    out.push('\n');
    out.push_str(&render_summary(&report.summary));

    let elapsed = report.duration().num_milliseconds().max(0);
    #[allow(clippy::cast_precision_loss)]
    let secs = elapsed as f64 / 1000.0;
    out.push_str(&format!("{}\n", format!("Completed in {secs:.2}s").dimmed()));
    out
}

/// Fixed-width table of privileged containers, header always present.
#[must_use]
pub fn render_findings(findings: &[Finding]) -> String {
    let rows: Vec<FindingRow> = findings.iter().map(FindingRow::from).collect();
    Table::new(&rows).with(Style::blank()).to_string()
}

/// Containers that could not be verified, with reasons.
#[must_use]
pub fn render_failures(failures: &[ProbeFailure]) -> String {
    let mut out = format!(
        "{}\n",
        format!("Could not verify {} container(s):", failures.len())
            .yellow()
            .bold()
    );
    for failure in failures {
        out.push_str(&format!("  {}\n", failure.reason.dimmed()));
    }
    out
}

/// Human-readable counter block.
#[must_use]
pub fn render_summary(summary: &AuditSummary) -> String {
    let privileged_containers = if summary.privileged_containers > 0 {
        summary.privileged_containers.to_string().red().bold()
    } else {
        summary.privileged_containers.to_string().green()
    };
    let privileged_workloads = if summary.privileged_workloads > 0 {
        summary.privileged_workloads.to_string().red().bold()
    } else {
        summary.privileged_workloads.to_string().green()
    };

    let mut out = format!("{}\n", "Summary".bold().underline());
    out.push_str(&format!("  Total pods:            {}\n", summary.total_workloads));
    out.push_str(&format!("  Total containers:      {}\n", summary.total_containers));
    if summary.skipped_containers > 0 {
        out.push_str(&format!(
            "  Containers skipped:    {}\n",
            summary.skipped_containers.to_string().yellow()
        ));
    }
    out.push_str(&format!("  Containers as root:    {privileged_containers}\n"));
    out.push_str(&format!("  Pods vulnerable:       {privileged_workloads}\n"));
    out
}

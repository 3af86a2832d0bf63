//! Core types and traits for the kuberoot cluster privilege audit.
//!
//! This crate provides the foundational pieces shared across the workspace:
//!
//! - **Types**: workloads, owner references, exec output and the audit report
//! - **Errors**: the audit error taxonomy in [`KubeRootError`]
//! - **Cluster**: the [`Cluster`] trait every audit stage talks through
//!
//! # Example
//!
//! ```rust,ignore
//! use kuberoot_core::{Cluster, Result};
//!
//! async fn count_containers(cluster: &impl Cluster) -> Result<usize> {
//!     let workloads = cluster.list_workloads().await?;
//!     Ok(workloads.iter().map(|w| w.containers.len()).sum())
//! }
//! ```

mod cluster;
mod error;
pub mod types;

pub use cluster::Cluster;
pub use error::{BoxError, ErrorClass, KubeRootError, Result};
pub use types::*;

//! Kubernetes client for kuberoot.
//!
//! This crate provides [`KubeClient`], the kube-backed implementation of
//! [`kuberoot_core::Cluster`]: workload listing, replica-set lookups and the
//! exec sub-protocol over a WebSocket upgrade.

mod client;
mod config;
pub mod api;

pub use client::{KubeClient, KubeClientBuilder};
pub use config::*;
pub use kuberoot_core::{KubeRootError, Result};

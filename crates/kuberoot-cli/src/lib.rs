//! # kuberoot-cli
//!
//! Command-line front end for the kuberoot privilege audit.
//!
//! ## Features
//!
//! - **Cluster-wide scan**: exec `id` in every container, report the ones running as root
//! - **Owner resolution**: pods are attributed to their Deployment (or other controller)
//! - **Read-only**: nothing in the cluster or on disk is modified

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;

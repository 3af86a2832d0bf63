//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Classifier;

/// Find containers running as root in a Kubernetes cluster
///
/// Runs `id` inside every container of every pod and reports the ones
/// whose identity is uid=0(root), together with the controller that owns
/// the pod. Nothing in the cluster is modified.
#[derive(Parser, Debug)]
#[command(name = "kuberoot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, env = "KUBEROOT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the cluster for containers running as root (default)
    Scan(ScanArgs),

    /// Inspect CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Scan command
// ============================================================================

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Path to the kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Kubeconfig context to use
    #[arg(long)]
    pub context: Option<String>,

    /// Seconds to wait for each exec before skipping the container (0 = no limit)
    #[arg(long, value_name = "SECS")]
    pub exec_timeout: Option<u64>,

    /// Number of containers probed at once
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Rule deciding whether `id` output means root
    #[arg(long, value_enum)]
    pub classifier: Option<Classifier>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Show config file path
    Path,
}

//! kuberoot - find containers running as root in a Kubernetes cluster.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    kuberoot_cli::run().await
}

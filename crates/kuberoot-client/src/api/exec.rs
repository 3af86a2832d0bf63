//! Remote command execution inside containers.
//!
//! The exec sub-protocol upgrades the API server connection to a multiplexed
//! WebSocket stream carrying the command's stdout and stderr, followed by a
//! final status frame.

use crate::KubeClient;
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Status;
use kube::api::{Api, AttachParams};
use kuberoot_core::{ContainerTarget, ExecOutput, KubeRootError, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

/// Exec endpoints
pub struct ExecApi<'a> {
    client: &'a KubeClient,
}

impl<'a> ExecApi<'a> {
    pub(crate) const fn new(client: &'a KubeClient) -> Self {
        Self { client }
    }

    /// Run `command` in the target container and wait for it to finish.
    ///
    /// Only channel failures are errors. A command that runs and exits
    /// non-zero yields an [`ExecOutput`] with that exit code.
    pub async fn run(&self, target: &ContainerTarget, command: &[String]) -> Result<ExecOutput> {
        let api: Api<Pod> = Api::namespaced(self.client.kube(), &target.namespace);
        let params = AttachParams::default()
            .container(target.container.clone())
            .stdin(false)
            .stdout(true)
            .stderr(true)
            .tty(false);

        debug!(%target, ?command, "opening exec channel");
        let mut attached = api
            .exec(&target.workload, command.to_vec(), &params)
            .await
            .map_err(|e| KubeRootError::exec(target, e.to_string()))?;

        let status = attached.take_status();
        let stdout_stream = attached.stdout();
        let stderr_stream = attached.stderr();
        let (stdout, stderr) = tokio::join!(drain(stdout_stream), drain(stderr_stream));
        let stdout = stdout.map_err(|e| KubeRootError::exec(target, e.to_string()))?;
        let stderr = stderr.map_err(|e| KubeRootError::exec(target, e.to_string()))?;

        let exit_code = match status {
            Some(status) => status.await.as_ref().and_then(exit_code),
            None => None,
        };

        attached
            .join()
            .await
            .map_err(|e| KubeRootError::exec(target, e.to_string()))?;

        debug!(%target, ?exit_code, "exec channel closed");
        Ok(ExecOutput {
            stdout,
            stderr,
            exit_code,
        })
    }
}

async fn drain<R: AsyncRead + Unpin>(reader: Option<R>) -> std::io::Result<String> {
    let mut buf = Vec::new();
    if let Some(mut reader) = reader {
        reader.read_to_end(&mut buf).await?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Exit code carried by the final status frame of an exec stream
pub(crate) fn exit_code(status: &Status) -> Option<i32> {
    if status.status.as_deref() == Some("Success") {
        return Some(0);
    }

    status
        .details
        .as_ref()?
        .causes
        .as_ref()?
        .iter()
        .find(|cause| cause.reason.as_deref() == Some("ExitCode"))
        .and_then(|cause| cause.message.as_deref())
        .and_then(|message| message.trim().parse().ok())
}

use serde::{Deserialize, Serialize};

/// Captured result of a command run over an exec channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecOutput {
    /// Standard output, lossily decoded as UTF-8
    pub stdout: String,

    /// Standard error, lossily decoded as UTF-8
    pub stderr: String,

    /// Process exit code, when the final status frame reported one
    pub exit_code: Option<i32>,
}

impl ExecOutput {
    /// Output of a command that printed `stdout` and exited 0
    #[must_use]
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: Some(0),
        }
    }

    /// Returns true if the command is known to have exited 0
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Verdict of an identity probe against one container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Whether the container runs as the superuser
    pub is_root: bool,

    /// Raw standard output the verdict was based on
    pub stdout: String,

    /// Exit code of the probe command, if known
    pub exit_code: Option<i32>,
}

use thiserror::Error;

use crate::types::ContainerTarget;

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, KubeRootError>;

/// Boxed underlying cause carried by cluster query errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while auditing a cluster
#[derive(Error, Debug)]
pub enum KubeRootError {
    /// The kubeconfig could not be located, read or parsed
    #[error("kubeconfig error: {0}")]
    Kubeconfig(String),

    /// The cluster client could not be constructed
    #[error("failed to build cluster client: {0}")]
    ClientInit(String),

    /// Local configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// A control-plane query failed
    #[error("cluster query failed ({operation}): {source}")]
    ClusterQuery {
        /// What was being asked of the API server
        operation: String,
        /// Underlying transport or API error
        #[source]
        source: BoxError,
    },

    /// A looked-up object does not exist
    #[error("{kind} {namespace}/{name} not found")]
    NotFound {
        /// Object kind
        kind: String,
        /// Namespace searched
        namespace: String,
        /// Object name
        name: String,
    },

    /// The exec channel into a container failed to open or stream
    #[error("exec into {target} failed: {message}")]
    Exec {
        /// Container the command was sent to
        target: ContainerTarget,
        /// Failure description
        message: String,
    },

    /// The exec channel did not complete in time and was cancelled
    #[error("exec into {target} timed out after {seconds} seconds")]
    ExecTimeout {
        /// Container the command was sent to
        target: ContainerTarget,
        /// Timeout that elapsed
        seconds: u64,
    },
}

/// Coarse classification used to decide whether an audit can continue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Credentials or client construction; nothing can run
    Setup,
    /// Listing or lookup failed; results would be untrustworthy
    ClusterQuery,
    /// A single container could not be probed
    Execution,
}

impl KubeRootError {
    /// Wrap a control-plane failure with the operation that caused it
    pub fn query(operation: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::ClusterQuery {
            operation: operation.into(),
            source: source.into(),
        }
    }

    /// Build an exec failure for the given container
    pub fn exec(target: &ContainerTarget, message: impl Into<String>) -> Self {
        Self::Exec {
            target: target.clone(),
            message: message.into(),
        }
    }

    /// Returns the class of this error
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Kubeconfig(_) | Self::ClientInit(_) | Self::Config(_) => ErrorClass::Setup,
            Self::ClusterQuery { .. } | Self::NotFound { .. } => ErrorClass::ClusterQuery,
            Self::Exec { .. } | Self::ExecTimeout { .. } => ErrorClass::Execution,
        }
    }

    /// Returns true if the error must abort the whole audit
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.is_execution()
    }

    /// Returns true if the error only affects one container
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self.class(), ErrorClass::Execution)
    }
}

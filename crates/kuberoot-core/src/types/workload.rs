use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of the pod-template replication controller that usually sits
/// between a pod and its higher-level controller.
pub const REPLICA_SET_KIND: &str = "ReplicaSet";

/// A deployable unit (pod) as seen at enumeration time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Namespace the workload lives in
    pub namespace: String,

    /// Workload name
    pub name: String,

    /// Containers in declaration order
    #[serde(default)]
    pub containers: Vec<Container>,

    /// Owner references in declaration order
    #[serde(default)]
    pub owner_references: Vec<OwnerReference>,
}

impl Workload {
    /// Create a workload with no containers and no owners
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a container
    #[must_use]
    pub fn with_container(mut self, name: impl Into<String>) -> Self {
        self.containers.push(Container::new(name));
        self
    }

    /// Add an owner reference
    #[must_use]
    pub fn with_owner(mut self, name: impl Into<String>, kind: impl Into<String>) -> Self {
        self.owner_references.push(OwnerReference::new(name, kind));
        self
    }

    /// The owner consulted for resolution. Only the first reference counts.
    #[must_use]
    pub fn first_owner(&self) -> Option<&OwnerReference> {
        self.owner_references.first()
    }

    /// Exec address of one of this workload's containers
    #[must_use]
    pub fn container_target(&self, container: &Container) -> ContainerTarget {
        ContainerTarget::new(&self.namespace, &self.name, &container.name)
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// A container inside a workload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Container name, unique within its workload
    pub name: String,
}

impl Container {
    /// Create a container with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Back reference from a managed object to the controller that owns it
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerReference {
    /// Controller name
    pub name: String,

    /// Controller kind (e.g. `ReplicaSet`, `Deployment`, `DaemonSet`)
    pub kind: String,
}

impl OwnerReference {
    /// Create an owner reference
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Returns true if this owner is a replica set
    #[must_use]
    pub fn is_replica_set(&self) -> bool {
        self.kind == REPLICA_SET_KIND
    }
}

/// Top-level controller a workload was resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOwner {
    /// Controller name
    pub name: String,

    /// Controller kind
    pub kind: String,

    /// Ownership links followed beyond the immediate owner (0 or 1)
    pub hops: u8,
}

impl ResolvedOwner {
    /// The immediate owner, returned unchanged
    #[must_use]
    pub fn direct(owner: &OwnerReference) -> Self {
        Self {
            name: owner.name.clone(),
            kind: owner.kind.clone(),
            hops: 0,
        }
    }

    /// An owner reached through one intermediate controller
    #[must_use]
    pub fn upstream(owner: &OwnerReference) -> Self {
        Self {
            name: owner.name.clone(),
            kind: owner.kind.clone(),
            hops: 1,
        }
    }
}

/// Address of a single container for remote execution
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerTarget {
    /// Namespace of the workload
    pub namespace: String,

    /// Workload name
    pub workload: String,

    /// Container name
    pub container: String,
}

impl ContainerTarget {
    /// Create a container address
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        workload: impl Into<String>,
        container: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            workload: workload.into(),
            container: container.into(),
        }
    }
}

impl fmt::Display for ContainerTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}[{}]", self.namespace, self.workload, self.container)
    }
}

//! API endpoint modules.

mod exec;
mod pods;
mod replica_sets;

pub use exec::ExecApi;
pub use pods::PodApi;
pub use replica_sets::ReplicaSetApi;

mod exec;
mod report;
mod workload;

pub use exec::*;
pub use report::*;
pub use workload::*;

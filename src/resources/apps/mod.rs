//! Apps resources (apps/v1)

pub mod daemonset;
pub mod replicaset;
pub mod statefulset;

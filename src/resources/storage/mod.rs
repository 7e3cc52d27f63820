//! Storage resources (storage.k8s.io/v1)

pub mod csidriver;
pub mod csinode;

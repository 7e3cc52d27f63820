//! Core Kubernetes resources (v1)

pub mod pod;
pub mod pod_status;
pub mod replication_controller;
pub mod service;

//! Batch resources (batch/v1)

pub mod cronjob;

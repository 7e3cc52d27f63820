//! kubeprint - converts Kubernetes objects into kubectl-style table rows
//!
//! ```no_run
//! use k8s_openapi::api::core::v1::Pod;
//! use kubeprint::resources::REGISTRY;
//!
//! let pod = Pod::default();
//! let row = REGISTRY.convert(&pod)?;
//! println!("{}", row.get_str("Status").unwrap_or_default());
//! # Ok::<(), kubeprint::error::PrintError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod resources;

pub use error::{PrintError, Result};
pub use resources::{Cell, Object, ResourceIdentity, Row, REGISTRY};

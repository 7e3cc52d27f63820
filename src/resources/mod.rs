//! Kubernetes resource types, row conversion and the converter registry

pub mod apps;
pub mod batch;
pub mod core;
pub mod format;
pub mod identity;
pub mod networking;
pub mod registry;
pub mod row;
pub mod storage;
pub mod traits;

pub use identity::ResourceIdentity;
pub use registry::{Converter, Registry, RegistryBuilder, REGISTRY};
pub use row::{Cell, Row};
pub use traits::*;

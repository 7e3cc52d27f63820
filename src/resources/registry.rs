//! Converter registry for dispatching objects to their row converter

use crate::error::{PrintError, Result};
use crate::resources::traits::typed_object;
use crate::resources::{Cell, KubeResource, Object, Printable, ResourceIdentity, Row};
use k8s_openapi::api::apps::v1::{DaemonSet, ReplicaSet, StatefulSet};
use k8s_openapi::api::batch::v1::CronJob;
use k8s_openapi::api::core::v1::{Pod, ReplicationController, Service};
use k8s_openapi::api::networking::v1::{Ingress, IngressClass};
use k8s_openapi::api::storage::v1::{CSIDriver, CSINode};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Global registry, populated with every built-in converter on first use
pub static REGISTRY: LazyLock<Registry> =
    LazyLock::new(|| RegistryBuilder::with_defaults().build());

/// One converter per supported kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Converter {
    CronJob,
    CsiDriver,
    CsiNode,
    DaemonSet,
    Ingress,
    IngressClass,
    Pod,
    ReplicaSet,
    ReplicationController,
    Service,
    StatefulSet,
}

impl Converter {
    pub const ALL: &'static [Converter] = &[
        Converter::CronJob,
        Converter::CsiDriver,
        Converter::CsiNode,
        Converter::DaemonSet,
        Converter::Ingress,
        Converter::IngressClass,
        Converter::Pod,
        Converter::ReplicaSet,
        Converter::ReplicationController,
        Converter::Service,
        Converter::StatefulSet,
    ];

    /// The identity of the objects this converter accepts
    pub fn identity(&self) -> ResourceIdentity {
        match self {
            Converter::CronJob => CronJob::resource_identity(),
            Converter::CsiDriver => CSIDriver::resource_identity(),
            Converter::CsiNode => CSINode::resource_identity(),
            Converter::DaemonSet => DaemonSet::resource_identity(),
            Converter::Ingress => Ingress::resource_identity(),
            Converter::IngressClass => IngressClass::resource_identity(),
            Converter::Pod => Pod::resource_identity(),
            Converter::ReplicaSet => ReplicaSet::resource_identity(),
            Converter::ReplicationController => ReplicationController::resource_identity(),
            Converter::Service => Service::resource_identity(),
            Converter::StatefulSet => StatefulSet::resource_identity(),
        }
    }

    /// Every column a successful conversion fills in
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Converter::CronJob => CronJob::columns(),
            Converter::CsiDriver => CSIDriver::columns(),
            Converter::CsiNode => CSINode::columns(),
            Converter::DaemonSet => DaemonSet::columns(),
            Converter::Ingress => Ingress::columns(),
            Converter::IngressClass => IngressClass::columns(),
            Converter::Pod => Pod::columns(),
            Converter::ReplicaSet => ReplicaSet::columns(),
            Converter::ReplicationController => ReplicationController::columns(),
            Converter::Service => Service::columns(),
            Converter::StatefulSet => StatefulSet::columns(),
        }
    }

    /// Convert an object of this converter's kind.
    ///
    /// Fails with [`PrintError::TypeMismatch`] when the object is of another kind.
    pub fn convert(&self, object: &dyn Object) -> Result<Row> {
        match self {
            Converter::CronJob => row_of::<CronJob>(object),
            Converter::CsiDriver => row_of::<CSIDriver>(object),
            Converter::CsiNode => row_of::<CSINode>(object),
            Converter::DaemonSet => row_of::<DaemonSet>(object),
            Converter::Ingress => row_of::<Ingress>(object),
            Converter::IngressClass => row_of::<IngressClass>(object),
            Converter::Pod => row_of::<Pod>(object),
            Converter::ReplicaSet => row_of::<ReplicaSet>(object),
            Converter::ReplicationController => row_of::<ReplicationController>(object),
            Converter::Service => row_of::<Service>(object),
            Converter::StatefulSet => row_of::<StatefulSet>(object),
        }
    }
}

fn row_of<K: Printable>(object: &dyn Object) -> Result<Row> {
    Ok(typed_object::<K>(object)?.to_row())
}

/// Collects converters before the registry is frozen
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    converters: HashMap<ResourceIdentity, Converter>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder holding every built-in converter under its own identity
    pub fn with_defaults() -> Self {
        let mut builder = Self::new();
        for converter in Converter::ALL {
            builder.register(converter.identity(), *converter);
        }
        builder
    }

    /// Store `converter` under `identity`. A later registration for the
    /// same identity replaces the earlier one.
    pub fn register(&mut self, identity: ResourceIdentity, converter: Converter) -> &mut Self {
        if let Some(previous) = self.converters.insert(identity.clone(), converter) {
            tracing::warn!(
                %identity,
                ?previous,
                replacement = ?converter,
                "converter registered twice, keeping the last one"
            );
        }
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            converters: self.converters,
        }
    }
}

/// Read-only mapping from resource identity to converter
#[derive(Debug)]
pub struct Registry {
    converters: HashMap<ResourceIdentity, Converter>,
}

impl Registry {
    /// Convert `object` with the converter registered for its identity
    pub fn convert(&self, object: &dyn Object) -> Result<Row> {
        let identity = object.identity();
        let converter = self.lookup(&identity)?;
        tracing::debug!(%identity, ?converter, "converting object");
        converter.convert(object)
    }

    /// A single cell of the converted row; `None` when the kind has no such column
    pub fn convert_column(&self, object: &dyn Object, column: &str) -> Result<Option<Cell>> {
        Ok(self.convert(object)?.take(column))
    }

    pub fn converter_for(&self, identity: &ResourceIdentity) -> Option<Converter> {
        self.converters.get(identity).copied()
    }

    /// Registered identities, sorted
    pub fn identities(&self) -> Vec<&ResourceIdentity> {
        let mut identities: Vec<_> = self.converters.keys().collect();
        identities.sort();
        identities
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    fn lookup(&self, identity: &ResourceIdentity) -> Result<Converter> {
        self.converter_for(identity)
            .ok_or_else(|| PrintError::UnsupportedKind {
                identity: identity.clone(),
            })
    }
}

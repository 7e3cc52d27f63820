//! Core traits for Kubernetes resources

use crate::error::{PrintError, Result};
use crate::resources::format::translate_timestamp_since;
use crate::resources::{ResourceIdentity, Row};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::DynamicObject;
use serde::{de::DeserializeOwned, Serialize};
use std::any::Any;
use std::borrow::Cow;
use std::fmt::Debug;

/// Core trait that all supported Kubernetes resources implement
pub trait KubeResource:
    Clone + Debug + DeserializeOwned + Serialize + Send + Sync + 'static
{
    /// The Kubernetes API kind (e.g., "Pod", "DaemonSet")
    const KIND: &'static str;

    /// The API group (e.g., "", "apps", "storage.k8s.io")
    const GROUP: &'static str;

    /// The API version (e.g., "v1")
    const VERSION: &'static str;

    /// Get object metadata
    fn metadata(&self) -> &ObjectMeta;

    /// Identity shared by every object of this type
    fn resource_identity() -> ResourceIdentity {
        ResourceIdentity::new(Self::GROUP, Self::VERSION, Self::KIND)
    }

    /// Get the resource name
    fn name(&self) -> &str {
        self.metadata().name.as_deref().unwrap_or("")
    }

    /// Get the creation timestamp as a human-readable age string
    fn age(&self) -> String {
        translate_timestamp_since(self.metadata().creation_timestamp.as_ref())
    }
}

/// Resources with a table row representation
pub trait Printable: KubeResource {
    /// Every column `to_row` fills in
    fn columns() -> &'static [&'static str];

    /// Row values keyed by column name
    fn to_row(&self) -> Row;
}

/// Runtime view of an object handed to the registry.
///
/// Every [`KubeResource`] is an `Object`, and so is an untyped
/// [`DynamicObject`], whose identity is read from its type meta.
pub trait Object: Any + Send + Sync {
    fn identity(&self) -> ResourceIdentity;

    fn as_any(&self) -> &dyn Any;
}

impl<T: KubeResource> Object for T {
    fn identity(&self) -> ResourceIdentity {
        T::resource_identity()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Object for DynamicObject {
    fn identity(&self) -> ResourceIdentity {
        match &self.types {
            Some(types) => ResourceIdentity::from_api_version(&types.api_version, &types.kind),
            None => ResourceIdentity::new("", "", ""),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Borrow `object` as `K`, decoding it first when it arrived as a
/// `DynamicObject` of the same identity.
pub fn typed_object<K: KubeResource>(object: &dyn Object) -> Result<Cow<'_, K>> {
    if let Some(typed) = object.as_any().downcast_ref::<K>() {
        return Ok(Cow::Borrowed(typed));
    }

    let expected = K::resource_identity();
    let found = object.identity();
    let mismatch = |found: ResourceIdentity| PrintError::TypeMismatch {
        expected: expected.clone(),
        found,
    };

    let dynamic = match object.as_any().downcast_ref::<DynamicObject>() {
        Some(d) if found == expected => d,
        _ => return Err(mismatch(found)),
    };

    tracing::debug!(identity = %found, "decoding dynamic object");
    serde_json::to_value(dynamic)
        .and_then(serde_json::from_value::<K>)
        .map(Cow::Owned)
        .map_err(|e| {
            tracing::debug!(identity = %found, error = %e, "dynamic object does not match its kind");
            mismatch(found)
        })
}

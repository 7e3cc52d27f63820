//! IngressClass resource implementation

use crate::resources::format::NONE;
use crate::resources::{KubeResource, Printable, Row};
use k8s_openapi::api::networking::v1::{IngressClass, IngressClassParametersReference};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for IngressClass {
    const KIND: &'static str = "IngressClass";
    const GROUP: &'static str = "networking.k8s.io";
    const VERSION: &'static str = "v1";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Printable for IngressClass {
    fn columns() -> &'static [&'static str] {
        &["Name", "Controller", "Parameters", "Age"]
    }

    fn to_row(&self) -> Row {
        let spec = self.spec.as_ref();
        let parameters = spec
            .and_then(|s| s.parameters.as_ref())
            .map(format_parameters)
            .unwrap_or_else(|| NONE.to_string());

        let mut row = Row::new();
        row.set("Name", self.name());
        row.set(
            "Controller",
            spec.and_then(|s| s.controller.as_deref()).unwrap_or(""),
        );
        row.set("Parameters", parameters);
        row.set("Age", self.age());
        row
    }
}

/// `Kind.apiGroup/name`, without the group for core kinds
fn format_parameters(params: &IngressClassParametersReference) -> String {
    match &params.api_group {
        Some(group) => format!("{}.{}/{}", params.kind, group, params.name),
        None => format!("{}/{}", params.kind, params.name),
    }
}

//! StatefulSet resource implementation

use crate::resources::format::layout_container_cells;
use crate::resources::{KubeResource, Printable, Row};
use k8s_openapi::api::apps::v1::StatefulSet;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for StatefulSet {
    const KIND: &'static str = "StatefulSet";
    const GROUP: &'static str = "apps";
    const VERSION: &'static str = "v1";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Printable for StatefulSet {
    fn columns() -> &'static [&'static str] {
        &["Name", "Ready", "Age", "Containers", "Images"]
    }

    fn to_row(&self) -> Row {
        let spec = self.spec.as_ref();
        let desired = spec.and_then(|s| s.replicas).unwrap_or(0);
        let ready = self.status.as_ref().and_then(|s| s.ready_replicas).unwrap_or(0);

        let containers = spec
            .and_then(|s| s.template.spec.as_ref())
            .map(|p| p.containers.as_slice())
            .unwrap_or_default();
        let (names, images) = layout_container_cells(containers);

        let mut row = Row::new();
        row.set("Name", self.name());
        row.set("Ready", format!("{}/{}", ready, desired));
        row.set("Age", self.age());
        row.set("Containers", names);
        row.set("Images", images);
        row
    }
}

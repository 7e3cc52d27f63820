//! ReplicationController resource implementation

use crate::resources::format::{format_labels, layout_container_cells};
use crate::resources::{KubeResource, Printable, Row};
use k8s_openapi::api::core::v1::ReplicationController;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for ReplicationController {
    const KIND: &'static str = "ReplicationController";
    const GROUP: &'static str = "";
    const VERSION: &'static str = "v1";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Printable for ReplicationController {
    fn columns() -> &'static [&'static str] {
        &[
            "Name",
            "Desired",
            "Current",
            "Ready",
            "Age",
            "Containers",
            "Images",
            "Selector",
        ]
    }

    fn to_row(&self) -> Row {
        let spec = self.spec.as_ref();
        let status = self.status.as_ref();

        let desired = spec.and_then(|s| s.replicas).unwrap_or(0);
        let current = status.map(|s| s.replicas).unwrap_or(0);
        let ready = status.and_then(|s| s.ready_replicas).unwrap_or(0);

        let containers = spec
            .and_then(|s| s.template.as_ref())
            .and_then(|t| t.spec.as_ref())
            .map(|p| p.containers.as_slice())
            .unwrap_or_default();
        let (names, images) = layout_container_cells(containers);

        let mut row = Row::new();
        row.set("Name", self.name());
        row.set("Desired", desired);
        row.set("Current", current);
        row.set("Ready", ready);
        row.set("Age", self.age());
        row.set("Containers", names);
        row.set("Images", images);
        row.set("Selector", format_labels(spec.and_then(|s| s.selector.as_ref())));
        row
    }
}

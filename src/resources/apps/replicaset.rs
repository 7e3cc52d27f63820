//! ReplicaSet resource implementation

use crate::resources::format::{format_label_selector, layout_container_cells};
use crate::resources::{KubeResource, Printable, Row};
use k8s_openapi::api::apps::v1::ReplicaSet;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for ReplicaSet {
    const KIND: &'static str = "ReplicaSet";
    const GROUP: &'static str = "apps";
    const VERSION: &'static str = "v1";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Printable for ReplicaSet {
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
        row.set("Selector", format_label_selector(spec.map(|s| &s.selector)));
        row
    }
}

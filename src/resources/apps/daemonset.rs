//! DaemonSet resource implementation

use crate::resources::format::{format_label_selector, format_labels, layout_container_cells};
use crate::resources::{KubeResource, Printable, Row};
use k8s_openapi::api::apps::v1::DaemonSet;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for DaemonSet {
    const KIND: &'static str = "DaemonSet";
    const GROUP: &'static str = "apps";
    const VERSION: &'static str = "v1";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Printable for DaemonSet {
    fn columns() -> &'static [&'static str] {
        &[
            "Name",
            "Desired",
            "Current",
            "Ready",
            "Up-to-date",
            "Available",
            "Node Selector",
            "Age",
            "Containers",
            "Images",
            "Selector",
        ]
    }

    fn to_row(&self) -> Row {
        let status = self.status.as_ref();
        let spec = self.spec.as_ref();

        let desired = status.map(|s| s.desired_number_scheduled).unwrap_or(0);
        let current = status.map(|s| s.current_number_scheduled).unwrap_or(0);
        let ready = status.map(|s| s.number_ready).unwrap_or(0);
        let updated = status.and_then(|s| s.updated_number_scheduled).unwrap_or(0);
        let available = status.and_then(|s| s.number_available).unwrap_or(0);

        let pod_spec = spec.and_then(|s| s.template.spec.as_ref());
        let (names, images) =
            layout_container_cells(pod_spec.map(|p| p.containers.as_slice()).unwrap_or_default());

        let mut row = Row::new();
        row.set("Name", self.name());
        row.set("Desired", desired);
        row.set("Current", current);
        row.set("Ready", ready);
        row.set("Up-to-date", updated);
        row.set("Available", available);
        row.set(
            "Node Selector",
            format_labels(pod_spec.and_then(|p| p.node_selector.as_ref())),
        );
        row.set("Age", self.age());
        row.set("Containers", names);
        row.set("Images", images);
        row.set("Selector", format_label_selector(spec.map(|s| &s.selector)));
        row
    }
}

//! CSINode resource implementation

use crate::resources::{KubeResource, Printable, Row};
use k8s_openapi::api::storage::v1::CSINode;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for CSINode {
    const KIND: &'static str = "CSINode";
    const GROUP: &'static str = "storage.k8s.io";
    const VERSION: &'static str = "v1";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Printable for CSINode {
    fn columns() -> &'static [&'static str] {
        &["Name", "Drivers", "Age"]
    }

    fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.set("Name", self.name());
        row.set("Drivers", self.spec.drivers.len());
        row.set("Age", self.age());
        row
    }
}

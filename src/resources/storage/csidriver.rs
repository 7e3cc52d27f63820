//! CSIDriver resource implementation

use crate::resources::format::{NONE, UNSET};
use crate::resources::{KubeResource, Printable, Row};
use k8s_openapi::api::storage::v1::CSIDriver;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for CSIDriver {
    const KIND: &'static str = "CSIDriver";
    const GROUP: &'static str = "storage.k8s.io";
    const VERSION: &'static str = "v1";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Printable for CSIDriver {
    fn columns() -> &'static [&'static str] {
        &[
            "Name",
            "AttachRequired",
            "PodInfoOnMount",
            "StorageCapacity",
            "TokenRequests",
            "RequiresRepublish",
            "Modes",
            "Age",
        ]
    }

    fn to_row(&self) -> Row {
        let spec = &self.spec;

        // token requests distinguish "never set" from "set to nothing"
        let token_requests = spec
            .token_requests
            .as_ref()
            .map(|requests| {
                requests
                    .iter()
                    .map(|t| t.audience.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_else(|| UNSET.to_string());

        let modes = spec
            .volume_lifecycle_modes
            .as_ref()
            .map(|m| m.join(","))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| NONE.to_string());

        let mut row = Row::new();
        row.set("Name", self.name());
        row.set("AttachRequired", spec.attach_required.unwrap_or(true));
        row.set("PodInfoOnMount", spec.pod_info_on_mount.unwrap_or(false));
        row.set("StorageCapacity", spec.storage_capacity.unwrap_or(false));
        row.set("TokenRequests", token_requests);
        row.set("RequiresRepublish", spec.requires_republish.unwrap_or(false));
        row.set("Modes", modes);
        row.set("Age", self.age());
        row
    }
}

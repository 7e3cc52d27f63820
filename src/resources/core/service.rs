//! Service resource implementation

use crate::resources::format::{
    format_labels, make_port_string, service_external_ip, service_type, NONE,
};
use crate::resources::{KubeResource, Printable, Row};
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for Service {
    const KIND: &'static str = "Service";
    const GROUP: &'static str = "";
    const VERSION: &'static str = "v1";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Printable for Service {
    fn columns() -> &'static [&'static str] {
        &[
            "Name",
            "Type",
            "Cluster-IP",
            "External-IP",
            "Port(s)",
            "Age",
            "Selector",
        ]
    }

    fn to_row(&self) -> Row {
        let spec = self.spec.as_ref();

        let cluster_ip = spec
            .and_then(|s| {
                s.cluster_ips
                    .as_ref()
                    .and_then(|ips| ips.first())
                    .or(s.cluster_ip.as_ref())
            })
            .map(String::as_str)
            .unwrap_or(NONE);

        let ports = spec
            .and_then(|s| s.ports.as_deref())
            .map(make_port_string)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| NONE.to_string());

        let mut row = Row::new();
        row.set("Name", self.name());
        row.set("Type", service_type(self));
        row.set("Cluster-IP", cluster_ip);
        row.set("External-IP", service_external_ip(self));
        row.set("Port(s)", ports);
        row.set("Age", self.age());
        row.set("Selector", format_labels(spec.and_then(|s| s.selector.as_ref())));
        row
    }
}

//! Ingress resource implementation

use crate::resources::format::{format_hosts, format_ingress_ports, load_balancer_addresses, NONE};
use crate::resources::{KubeResource, Printable, Row};
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for Ingress {
    const KIND: &'static str = "Ingress";
    const GROUP: &'static str = "networking.k8s.io";
    const VERSION: &'static str = "v1";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Printable for Ingress {
    fn columns() -> &'static [&'static str] {
        &["Name", "Class", "Hosts", "Address", "Ports", "Age"]
    }

    fn to_row(&self) -> Row {
        let spec = self.spec.as_ref();

        let class = spec
            .and_then(|s| s.ingress_class_name.as_deref())
            .unwrap_or(NONE);

        let hosts: Vec<&str> = spec
            .and_then(|s| s.rules.as_ref())
            .map(|rules| {
                rules
                    .iter()
                    .map(|r| r.host.as_deref().unwrap_or(""))
                    .collect()
            })
            .unwrap_or_default();

        let address = self
            .status
            .as_ref()
            .and_then(|s| s.load_balancer.as_ref())
            .and_then(|lb| lb.ingress.as_ref())
            .map(|entries| {
                load_balancer_addresses(
                    entries
                        .iter()
                        .map(|e| (e.ip.as_deref(), e.hostname.as_deref())),
                )
            })
            .unwrap_or_default();

        let has_tls = spec
            .and_then(|s| s.tls.as_ref())
            .is_some_and(|tls| !tls.is_empty());

        let mut row = Row::new();
        row.set("Name", self.name());
        row.set("Class", class);
        row.set("Hosts", format_hosts(&hosts));
        row.set("Address", address);
        row.set("Ports", format_ingress_ports(has_tls));
        row.set("Age", self.age());
        row
    }
}

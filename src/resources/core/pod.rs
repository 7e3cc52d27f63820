//! Pod resource implementation

use crate::resources::core::pod_status;
use crate::resources::format::NONE;
use crate::resources::{KubeResource, Printable, Row};
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

impl KubeResource for Pod {
    const KIND: &'static str = "Pod";
    const GROUP: &'static str = "";
    const VERSION: &'static str = "v1";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl Printable for Pod {
    fn columns() -> &'static [&'static str] {
        &[
            "Name",
            "Ready",
            "Status",
            "Restarts",
            "Age",
            "IP",
            "Node",
            "Nominated Node",
            "Readiness Gates",
        ]
    }

    fn to_row(&self) -> Row {
        let summary = pod_status::resolve(self);
        let mut row = Row::new();

        row.set("Name", self.name());
        row.set("Ready", summary.ready());
        row.set("Status", summary.status);
        row.set("Restarts", summary.restarts);
        row.set("Age", self.age());
        row.set("IP", pod_ip(self).unwrap_or(NONE));
        row.set("Node", node_name(self).unwrap_or(NONE));
        row.set("Nominated Node", nominated_node_name(self).unwrap_or(NONE));
        row.set("Readiness Gates", summary.readiness_gates);
        row
    }
}

/// First entry of `podIPs`, then the legacy single `podIP`
fn pod_ip(pod: &Pod) -> Option<&str> {
    let status = pod.status.as_ref()?;
    status
        .pod_ips
        .as_ref()
        .and_then(|ips| ips.first())
        .map(|p| p.ip.as_str())
        .filter(|ip| !ip.is_empty())
        .or_else(|| status.pod_ip.as_deref().filter(|ip| !ip.is_empty()))
}

/// Get node name
fn node_name(pod: &Pod) -> Option<&str> {
    pod.spec
        .as_ref()
        .and_then(|s| s.node_name.as_deref())
        .filter(|n| !n.is_empty())
}

fn nominated_node_name(pod: &Pod) -> Option<&str> {
    pod.status
        .as_ref()
        .and_then(|s| s.nominated_node_name.as_deref())
        .filter(|n| !n.is_empty())
}

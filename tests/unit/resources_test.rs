//! Tests for per-kind row conversion

use k8s_openapi::api::apps::v1::{
    DaemonSet, DaemonSetSpec, DaemonSetStatus, ReplicaSet, ReplicaSetSpec, ReplicaSetStatus,
    StatefulSet, StatefulSetSpec, StatefulSetStatus,
};
use k8s_openapi::api::batch::v1::{CronJob, CronJobSpec, CronJobStatus, JobSpec, JobTemplateSpec};
use k8s_openapi::api::core::v1::{
    LoadBalancerIngress, LoadBalancerStatus, ObjectReference, PodIP, PodSpec, PodTemplateSpec,
    ReplicationController, ReplicationControllerSpec, ReplicationControllerStatus, ServiceStatus,
};
use k8s_openapi::api::networking::v1::{
    IngressClass, IngressClassParametersReference, IngressClassSpec, IngressLoadBalancerIngress,
    IngressLoadBalancerStatus, IngressStatus, IngressTLS,
};
use k8s_openapi::api::storage::v1::{
    CSIDriver, CSIDriverSpec, CSINode, CSINodeDriver, CSINodeSpec, TokenRequest,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, Time};
use kubeprint::resources::{KubeResource, Printable};

#[allow(dead_code)]
mod common {
    include!("../common/mod.rs");
}

use common::{container, meta};

fn template(containers: &[(&str, &str)]) -> PodTemplateSpec {
    PodTemplateSpec {
        metadata: None,
        spec: Some(PodSpec {
            containers: containers.iter().map(|(n, i)| container(n, i)).collect(),
            ..Default::default()
        }),
    }
}

fn match_labels(pairs: &[(&str, &str)]) -> LabelSelector {
    LabelSelector {
        match_labels: Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ),
        ..Default::default()
    }
}

// ============================================================================
// Pod
// ============================================================================

#[test]
fn test_pod_identity() {
    let id = k8s_openapi::api::core::v1::Pod::resource_identity();
    assert_eq!(id.group, "");
    assert_eq!(id.version, "v1");
    assert_eq!(id.kind, "Pod");
}

#[test]
fn test_pod_row_wide_cells() {
    let mut pod = common::create_mock_pod("web-0", "default", "Running");
    pod.spec.as_mut().unwrap().node_name = Some("node-a".to_string());
    pod.status.as_mut().unwrap().pod_ip = Some("10.244.0.7".to_string());

    let row = pod.to_row();
    assert_eq!(row.get_str("IP"), Some("10.244.0.7"));
    assert_eq!(row.get_str("Node"), Some("node-a"));
    assert_eq!(row.get_str("Nominated Node"), Some("<none>"));
    assert_eq!(row.get_str("Readiness Gates"), Some("<none>"));
}

#[test]
fn test_pod_ip_from_pod_ips() {
    let mut pod = common::create_mock_pod("web-0", "default", "Running");
    pod.status.as_mut().unwrap().pod_ips = Some(vec![
        PodIP {
            ip: "10.1.2.3".to_string(),
        },
        PodIP {
            ip: "fd00::3".to_string(),
        },
    ]);

    let row = kubeprint::REGISTRY.convert(&pod).unwrap();
    assert_eq!(row.get_str("IP"), Some("10.1.2.3"));
}

#[test]
fn test_pod_ips_win_over_pod_ip() {
    let mut pod = common::create_mock_pod("web-0", "default", "Running");
    let status = pod.status.as_mut().unwrap();
    status.pod_ip = Some("10.0.0.1".to_string());
    status.pod_ips = Some(vec![PodIP {
        ip: "10.0.0.2".to_string(),
    }]);
    assert_eq!(pod.to_row().get_str("IP"), Some("10.0.0.2"));
}

#[test]
fn test_pod_ips_empty_list() {
    let mut pod = common::create_mock_pod("web-0", "default", "Pending");
    pod.status.as_mut().unwrap().pod_ips = Some(vec![]);
    assert_eq!(pod.to_row().get_str("IP"), Some("<none>"));
}

#[test]
fn test_pod_row_missing_placement() {
    let pod = common::create_mock_pod("web-0", "default", "Pending");
    let row = pod.to_row();
    assert_eq!(row.get_str("IP"), Some("<none>"));
    assert_eq!(row.get_str("Node"), Some("<none>"));
}

// ============================================================================
// Service
// ============================================================================

#[test]
fn test_service_cluster_ip_row() {
    let svc = common::create_mock_service("web", "default", "ClusterIP");
    let row = svc.to_row();
    assert_eq!(row.get_str("Type"), Some("ClusterIP"));
    assert_eq!(row.get_str("Cluster-IP"), Some("10.96.0.10"));
    assert_eq!(row.get_str("External-IP"), Some("<none>"));
    assert_eq!(row.get_str("Port(s)"), Some("80/TCP"));
    assert_eq!(row.get_str("Selector"), Some("<none>"));
    assert_eq!(row.get_str("Age"), Some("12h"));
}

#[test]
fn test_service_node_port_and_selector() {
    let mut svc = common::create_mock_service("web", "default", "NodePort");
    let spec = svc.spec.as_mut().unwrap();
    spec.ports.as_mut().unwrap()[0].node_port = Some(30080);
    spec.selector = Some(
        [("tier", "frontend"), ("app", "web")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    );

    let row = svc.to_row();
    assert_eq!(row.get_str("Port(s)"), Some("80:30080/TCP"));
    assert_eq!(row.get_str("Selector"), Some("app=web,tier=frontend"));
}

#[test]
fn test_service_without_ports() {
    let mut svc = common::create_mock_service("headless", "default", "ClusterIP");
    let spec = svc.spec.as_mut().unwrap();
    spec.ports = None;
    spec.cluster_ips = None;
    spec.cluster_ip = Some("None".to_string());

    let row = svc.to_row();
    assert_eq!(row.get_str("Port(s)"), Some("<none>"));
    assert_eq!(row.get_str("Cluster-IP"), Some("None"));
}

#[test]
fn test_service_without_type_is_cluster_ip() {
    let mut svc = common::create_mock_service("web", "default", "ClusterIP");
    svc.spec.as_mut().unwrap().type_ = None;

    let row = svc.to_row();
    assert_eq!(row.get_str("Type"), Some("ClusterIP"));
    assert_eq!(row.get_str("External-IP"), Some("<none>"));
}

#[test]
fn test_service_without_type_keeps_external_ips() {
    let mut svc = common::create_mock_service("web", "default", "ClusterIP");
    let spec = svc.spec.as_mut().unwrap();
    spec.type_ = None;
    spec.external_ips = Some(vec!["192.0.2.10".to_string()]);
    assert_eq!(svc.to_row().get_str("External-IP"), Some("192.0.2.10"));
}

#[test]
fn test_service_load_balancer_pending() {
    let svc = common::create_mock_service("lb", "default", "LoadBalancer");
    assert_eq!(svc.to_row().get_str("External-IP"), Some("<pending>"));
}

#[test]
fn test_service_load_balancer_resolved() {
    let mut svc = common::create_mock_service("lb", "default", "LoadBalancer");
    svc.status = Some(ServiceStatus {
        load_balancer: Some(LoadBalancerStatus {
            ingress: Some(vec![LoadBalancerIngress {
                hostname: Some("a1.elb.example.com".to_string()),
                ..Default::default()
            }]),
        }),
        ..Default::default()
    });
    svc.spec.as_mut().unwrap().external_ips = Some(vec!["203.0.113.9".to_string()]);

    assert_eq!(
        svc.to_row().get_str("External-IP"),
        Some("a1.elb.example.com,203.0.113.9")
    );
}

// ============================================================================
// ReplicationController / ReplicaSet / StatefulSet / DaemonSet
// ============================================================================

#[test]
fn test_replication_controller_row() {
    let rc = ReplicationController {
        metadata: meta("legacy", 3),
        spec: Some(ReplicationControllerSpec {
            replicas: Some(3),
            selector: Some([("app".to_string(), "legacy".to_string())].into()),
            template: Some(template(&[("app", "legacy:1"), ("log", "fluentd")])),
            ..Default::default()
        }),
        status: Some(ReplicationControllerStatus {
            replicas: 3,
            ready_replicas: Some(2),
            ..Default::default()
        }),
    };

    let row = rc.to_row();
    assert_eq!(row.get_int("Desired"), Some(3));
    assert_eq!(row.get_int("Current"), Some(3));
    assert_eq!(row.get_int("Ready"), Some(2));
    assert_eq!(row.get_str("Containers"), Some("app,log"));
    assert_eq!(row.get_str("Images"), Some("legacy:1,fluentd"));
    assert_eq!(row.get_str("Selector"), Some("app=legacy"));
}

#[test]
fn test_replicaset_row_defaults() {
    let rs = ReplicaSet {
        metadata: meta("web-5d8f", 5),
        spec: Some(ReplicaSetSpec {
            selector: match_labels(&[("app", "web")]),
            template: Some(template(&[("web", "nginx:1.27")])),
            ..Default::default()
        }),
        status: None,
    };

    let row = rs.to_row();
    assert_eq!(row.get_int("Desired"), Some(0));
    assert_eq!(row.get_int("Current"), Some(0));
    assert_eq!(row.get_int("Ready"), Some(0));
    assert_eq!(row.get_str("Images"), Some("nginx:1.27"));
    assert_eq!(row.get_str("Selector"), Some("app=web"));
}

#[test]
fn test_replicaset_status_counts() {
    let rs = ReplicaSet {
        metadata: meta("web-5d8f", 5),
        spec: Some(ReplicaSetSpec {
            replicas: Some(4),
            selector: match_labels(&[("app", "web")]),
            ..Default::default()
        }),
        status: Some(ReplicaSetStatus {
            replicas: 4,
            ready_replicas: Some(1),
            ..Default::default()
        }),
    };

    let row = rs.to_row();
    assert_eq!(row.get_int("Desired"), Some(4));
    assert_eq!(row.get_int("Current"), Some(4));
    assert_eq!(row.get_int("Ready"), Some(1));
    assert_eq!(row.get_str("Containers"), Some(""));
}

#[test]
fn test_statefulset_ready_ratio() {
    let sts = StatefulSet {
        metadata: meta("db", 30),
        spec: Some(StatefulSetSpec {
            replicas: Some(3),
            selector: match_labels(&[("app", "db")]),
            template: template(&[("postgres", "postgres:16")]),
            ..Default::default()
        }),
        status: Some(StatefulSetStatus {
            replicas: 3,
            ready_replicas: Some(2),
            ..Default::default()
        }),
    };

    let row = sts.to_row();
    assert_eq!(row.get_str("Ready"), Some("2/3"));
    assert_eq!(row.get_str("Age"), Some("30h"));
    assert_eq!(row.get_str("Containers"), Some("postgres"));
}

#[test]
fn test_daemonset_row() {
    let mut tmpl = template(&[("agent", "datadog/agent:7")]);
    tmpl.spec.as_mut().unwrap().node_selector =
        Some([("kubernetes.io/os".to_string(), "linux".to_string())].into());

    let ds = DaemonSet {
        metadata: meta("agent", 100),
        spec: Some(DaemonSetSpec {
            selector: match_labels(&[("app", "agent")]),
            template: tmpl,
            ..Default::default()
        }),
        status: Some(DaemonSetStatus {
            desired_number_scheduled: 5,
            current_number_scheduled: 5,
            number_ready: 4,
            updated_number_scheduled: Some(5),
            number_available: None,
            ..Default::default()
        }),
    };

    let row = ds.to_row();
    assert_eq!(row.get_int("Desired"), Some(5));
    assert_eq!(row.get_int("Current"), Some(5));
    assert_eq!(row.get_int("Ready"), Some(4));
    assert_eq!(row.get_int("Up-to-date"), Some(5));
    assert_eq!(row.get_int("Available"), Some(0));
    assert_eq!(row.get_str("Node Selector"), Some("kubernetes.io/os=linux"));
    assert_eq!(row.get_str("Age"), Some("4d4h"));
    assert_eq!(row.get_str("Selector"), Some("app=agent"));
}

// ============================================================================
// CronJob
// ============================================================================

#[test]
fn test_cronjob_row() {
    let tmpl = template(&[("backup", "restic:0.16")]);

    let cj = CronJob {
        metadata: meta("backup", 48),
        spec: Some(CronJobSpec {
            schedule: "0 3 * * *".to_string(),
            suspend: Some(false),
            job_template: JobTemplateSpec {
                metadata: None,
                spec: Some(JobSpec {
                    template: tmpl,
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        status: Some(CronJobStatus {
            active: Some(vec![ObjectReference::default()]),
            last_schedule_time: Some(Time(chrono::Utc::now() - chrono::Duration::minutes(30))),
            ..Default::default()
        }),
    };

    let row = cj.to_row();
    assert_eq!(row.get_str("Schedule"), Some("0 3 * * *"));
    assert_eq!(row.get_str("Suspend"), Some("false"));
    assert_eq!(row.get_int("Active"), Some(1));
    assert_eq!(row.get_str("Last Schedule"), Some("30m"));
    assert_eq!(row.get_str("Age"), Some("2d"));
    assert_eq!(row.get_str("Containers"), Some("backup"));
    assert_eq!(row.get_str("Selector"), Some("<none>"));
}

#[test]
fn test_cronjob_never_scheduled() {
    let cj = CronJob {
        metadata: meta("nightly", 1),
        spec: Some(CronJobSpec {
            schedule: "@daily".to_string(),
            ..Default::default()
        }),
        status: None,
    };

    let row = cj.to_row();
    assert_eq!(row.get_str("Suspend"), Some("<unset>"));
    assert_eq!(row.get_int("Active"), Some(0));
    assert_eq!(row.get_str("Last Schedule"), Some("<none>"));
    assert_eq!(row.get_str("Containers"), Some(""));
}

// ============================================================================
// Ingress / IngressClass
// ============================================================================

#[test]
fn test_ingress_with_five_hosts() {
    let ingress = common::create_mock_ingress(
        "web",
        &["a.example.com", "b.example.com", "c.example.com", "d.example.com", "e.example.com"],
    );
    let row = ingress.to_row();
    assert_eq!(
        row.get_str("Hosts"),
        Some("a.example.com,b.example.com,c.example.com + 2 more...")
    );
    assert_eq!(row.get_str("Class"), Some("nginx"));
    assert_eq!(row.get_str("Ports"), Some("80"));
    assert_eq!(row.get_str("Address"), Some(""));
}

#[test]
fn test_ingress_tls_and_address() {
    let mut ingress = common::create_mock_ingress("secure", &["secure.example.com"]);
    ingress.spec.as_mut().unwrap().tls = Some(vec![IngressTLS::default()]);
    ingress.status = Some(IngressStatus {
        load_balancer: Some(IngressLoadBalancerStatus {
            ingress: Some(vec![
                IngressLoadBalancerIngress {
                    ip: Some("198.51.100.2".to_string()),
                    ..Default::default()
                },
                IngressLoadBalancerIngress {
                    ip: Some("198.51.100.1".to_string()),
                    ..Default::default()
                },
            ]),
        }),
    });

    let row = ingress.to_row();
    assert_eq!(row.get_str("Hosts"), Some("secure.example.com"));
    assert_eq!(row.get_str("Ports"), Some("80, 443"));
    assert_eq!(row.get_str("Address"), Some("198.51.100.1,198.51.100.2"));
}

#[test]
fn test_ingress_without_class_or_hosts() {
    let mut ingress = common::create_mock_ingress("catch-all", &[]);
    ingress.spec.as_mut().unwrap().ingress_class_name = None;

    let row = ingress.to_row();
    assert_eq!(row.get_str("Class"), Some("<none>"));
    assert_eq!(row.get_str("Hosts"), Some("*"));
}

#[test]
fn test_ingress_class_parameters() {
    let class = IngressClass {
        metadata: meta("external-lb", 10),
        spec: Some(IngressClassSpec {
            controller: Some("example.com/ingress-controller".to_string()),
            parameters: Some(IngressClassParametersReference {
                api_group: Some("k8s.example.com".to_string()),
                kind: "IngressParameters".to_string(),
                name: "external-lb".to_string(),
                ..Default::default()
            }),
        }),
    };

    let row = class.to_row();
    assert_eq!(row.get_str("Controller"), Some("example.com/ingress-controller"));
    assert_eq!(
        row.get_str("Parameters"),
        Some("IngressParameters.k8s.example.com/external-lb")
    );
}

#[test]
fn test_ingress_class_without_parameters() {
    let class = IngressClass {
        metadata: meta("nginx", 10),
        spec: Some(IngressClassSpec {
            controller: Some("k8s.io/ingress-nginx".to_string()),
            parameters: None,
        }),
    };
    assert_eq!(class.to_row().get_str("Parameters"), Some("<none>"));
}

// ============================================================================
// CSIDriver / CSINode
// ============================================================================

#[test]
fn test_csidriver_defaults() {
    let driver = CSIDriver {
        metadata: meta("ebs.csi.aws.com", 200),
        spec: CSIDriverSpec::default(),
    };

    let row = driver.to_row();
    assert_eq!(row.get_bool("AttachRequired"), Some(true));
    assert_eq!(row.get_bool("PodInfoOnMount"), Some(false));
    assert_eq!(row.get_bool("StorageCapacity"), Some(false));
    assert_eq!(row.get_bool("RequiresRepublish"), Some(false));
    assert_eq!(row.get_str("TokenRequests"), Some("<unset>"));
    assert_eq!(row.get_str("Modes"), Some("<none>"));
}

#[test]
fn test_csidriver_explicit_fields() {
    let driver = CSIDriver {
        metadata: meta("secrets-store.csi.k8s.io", 200),
        spec: CSIDriverSpec {
            attach_required: Some(false),
            pod_info_on_mount: Some(true),
            requires_republish: Some(true),
            token_requests: Some(vec![
                TokenRequest {
                    audience: "vault".to_string(),
                    ..Default::default()
                },
                TokenRequest {
                    audience: "aws".to_string(),
                    ..Default::default()
                },
            ]),
            volume_lifecycle_modes: Some(vec!["Ephemeral".to_string(), "Persistent".to_string()]),
            ..Default::default()
        },
    };

    let row = driver.to_row();
    assert_eq!(row.get_bool("AttachRequired"), Some(false));
    assert_eq!(row.get_bool("PodInfoOnMount"), Some(true));
    assert_eq!(row.get_bool("RequiresRepublish"), Some(true));
    assert_eq!(row.get_str("TokenRequests"), Some("vault,aws"));
    assert_eq!(row.get_str("Modes"), Some("Ephemeral,Persistent"));
}

#[test]
fn test_csidriver_empty_token_requests() {
    let driver = CSIDriver {
        metadata: meta("driver", 1),
        spec: CSIDriverSpec {
            token_requests: Some(vec![]),
            ..Default::default()
        },
    };
    assert_eq!(driver.to_row().get_str("TokenRequests"), Some(""));
}

#[test]
fn test_csinode_driver_count() {
    let node = CSINode {
        metadata: meta("node-a", 72),
        spec: CSINodeSpec {
            drivers: vec![
                CSINodeDriver {
                    name: "ebs.csi.aws.com".to_string(),
                    node_id: "i-0abc".to_string(),
                    ..Default::default()
                },
                CSINodeDriver {
                    name: "efs.csi.aws.com".to_string(),
                    node_id: "i-0abc".to_string(),
                    ..Default::default()
                },
            ],
        },
    };

    let row = node.to_row();
    assert_eq!(row.get_int("Drivers"), Some(2));
    assert_eq!(row.get_str("Age"), Some("3d"));
}

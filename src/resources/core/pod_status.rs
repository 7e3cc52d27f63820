//! Pod Ready/Status derivation from container states

use crate::resources::format::NONE;
use k8s_openapi::api::core::v1::{ContainerStateTerminated, ContainerStatus, Pod, PodCondition};

/// Pod reason set by the node lifecycle controller when a node stops reporting
pub const NODE_UNREACHABLE_POD_REASON: &str = "NodeLost";

/// Waiting reason of an init container that simply hasn't started yet
pub const POD_INITIALIZING: &str = "PodInitializing";

/// Status-related cells of a Pod row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodStatusSummary {
    pub ready_containers: usize,
    pub total_containers: usize,
    pub status: String,
    pub restarts: i64,
    pub readiness_gates: String,
}

impl PodStatusSummary {
    /// `ready/total`, e.g. `2/3`
    pub fn ready(&self) -> String {
        format!("{}/{}", self.ready_containers, self.total_containers)
    }
}

/// Derive the Ready, Status, Restarts and Readiness Gates cells of a Pod.
///
/// The first failing or pending init container decides the status. Once
/// initialization is done, regular containers are scanned last to first so
/// the earliest declared container reporting a waiting or terminated reason
/// wins. A deletion timestamp overrides everything.
pub fn resolve(pod: &Pod) -> PodStatusSummary {
    let spec = pod.spec.as_ref();
    let status = pod.status.as_ref();

    let total_containers = spec.map(|s| s.containers.len()).unwrap_or(0);
    let total_init = spec
        .and_then(|s| s.init_containers.as_ref())
        .map(Vec::len)
        .unwrap_or(0);

    let pod_reason = status
        .and_then(|s| s.reason.as_deref())
        .filter(|r| !r.is_empty());

    let mut reason = match pod_reason {
        Some(r) => r.to_string(),
        None => status.and_then(|s| s.phase.clone()).unwrap_or_default(),
    };

    let init_statuses: &[ContainerStatus] = status
        .and_then(|s| s.init_container_statuses.as_deref())
        .unwrap_or_default();
    let container_statuses: &[ContainerStatus] = status
        .and_then(|s| s.container_statuses.as_deref())
        .unwrap_or_default();
    let conditions: &[PodCondition] = status
        .and_then(|s| s.conditions.as_deref())
        .unwrap_or_default();

    let mut ready_containers = 0;
    let init = scan_init_containers(init_statuses, total_init);
    let mut restarts = init.restarts;

    match init.reason {
        Some(init_reason) => reason = init_reason,
        None => {
            let scan = scan_containers(container_statuses);
            restarts = scan.restarts;
            ready_containers = scan.ready;
            if let Some(container_reason) = scan.reason {
                reason = container_reason;
            }

            // a container still running means the pod isn't done yet
            if reason == "Completed" && scan.has_running {
                reason = if has_pod_ready_condition(conditions) {
                    "Running".to_string()
                } else {
                    "NotReady".to_string()
                };
            }
        }
    }

    if pod.metadata.deletion_timestamp.is_some() {
        reason = if pod_reason == Some(NODE_UNREACHABLE_POD_REASON) {
            "Unknown".to_string()
        } else {
            "Terminating".to_string()
        };
    }

    tracing::trace!(
        pod = pod.metadata.name.as_deref().unwrap_or_default(),
        status = %reason,
        ready = ready_containers,
        restarts,
        "resolved pod status"
    );

    PodStatusSummary {
        ready_containers,
        total_containers,
        status: reason,
        restarts,
        readiness_gates: readiness_gates(pod, conditions),
    }
}

struct InitScan {
    restarts: i64,
    /// Set when initialization is still in progress or has failed
    reason: Option<String>,
}

fn scan_init_containers(statuses: &[ContainerStatus], total_init: usize) -> InitScan {
    let mut restarts = 0;

    for (i, container) in statuses.iter().enumerate() {
        restarts += i64::from(container.restart_count);

        let state = container.state.as_ref();
        let terminated = state.and_then(|s| s.terminated.as_ref());
        let waiting_reason = state
            .and_then(|s| s.waiting.as_ref())
            .and_then(|w| w.reason.as_deref())
            .filter(|r| !r.is_empty());

        let reason = match (terminated, waiting_reason) {
            (Some(t), _) if t.exit_code == 0 => continue,
            (Some(t), _) => format!("Init:{}", terminated_reason(t)),
            (None, Some(w)) if w != POD_INITIALIZING => format!("Init:{}", w),
            _ => format!("Init:{}/{}", i, total_init),
        };

        return InitScan {
            restarts,
            reason: Some(reason),
        };
    }

    InitScan {
        restarts,
        reason: None,
    }
}

struct ContainerScan {
    restarts: i64,
    ready: usize,
    has_running: bool,
    reason: Option<String>,
}

fn scan_containers(statuses: &[ContainerStatus]) -> ContainerScan {
    let mut scan = ContainerScan {
        restarts: 0,
        ready: 0,
        has_running: false,
        reason: None,
    };

    for container in statuses.iter().rev() {
        scan.restarts += i64::from(container.restart_count);

        let state = container.state.as_ref();
        let waiting_reason = state
            .and_then(|s| s.waiting.as_ref())
            .and_then(|w| w.reason.as_deref())
            .filter(|r| !r.is_empty());
        let terminated = state.and_then(|s| s.terminated.as_ref());
        let running = state.and_then(|s| s.running.as_ref()).is_some();

        if let Some(w) = waiting_reason {
            scan.reason = Some(w.to_string());
        } else if let Some(t) = terminated {
            scan.reason = Some(terminated_reason(t));
        } else if container.ready && running {
            scan.has_running = true;
            scan.ready += 1;
        }
    }

    scan
}

/// The termination reason, or `Signal:<n>` / `ExitCode:<n>` when none was recorded
fn terminated_reason(terminated: &ContainerStateTerminated) -> String {
    match terminated.reason.as_deref().filter(|r| !r.is_empty()) {
        Some(r) => r.to_string(),
        None => match terminated.signal {
            Some(signal) if signal != 0 => format!("Signal:{}", signal),
            _ => format!("ExitCode:{}", terminated.exit_code),
        },
    }
}

fn has_pod_ready_condition(conditions: &[PodCondition]) -> bool {
    conditions
        .iter()
        .any(|c| c.type_ == "Ready" && c.status == "True")
}

/// `true/total` over the declared readiness gates, `<none>` without any
fn readiness_gates(pod: &Pod, conditions: &[PodCondition]) -> String {
    let gates = match pod.spec.as_ref().and_then(|s| s.readiness_gates.as_ref()) {
        Some(g) if !g.is_empty() => g,
        _ => return NONE.to_string(),
    };

    let true_conditions = gates
        .iter()
        .filter(|gate| {
            conditions
                .iter()
                .find(|c| c.type_ == gate.condition_type)
                .is_some_and(|c| c.status == "True")
        })
        .count();

    format!("{}/{}", true_conditions, gates.len())
}

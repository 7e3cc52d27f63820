//! Cell formatting helpers shared by the per-kind converters

use chrono::{DateTime, Duration, Utc};
use k8s_openapi::api::core::v1::{Container, Service, ServicePort};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, Time};
use std::collections::{BTreeMap, BTreeSet};

pub const NONE: &str = "<none>";
pub const UNSET: &str = "<unset>";
pub const UNKNOWN: &str = "<unknown>";
pub const PENDING: &str = "<pending>";

/// Hosts shown in an Ingress row before collapsing the rest
pub const MAX_HOSTS: usize = 3;

/// Abbreviated duration, coarser the older it gets (`45s`, `3m20s`, `5h`, `2d3h`, `1y30d`)
pub fn human_duration(d: Duration) -> String {
    let seconds = d.num_seconds();
    // up to a second of clock skew still reads as "now"
    if seconds < -1 {
        return "<invalid>".to_string();
    } else if seconds < 0 {
        return "0s".to_string();
    } else if seconds < 60 * 2 {
        return format!("{}s", seconds);
    }

    let minutes = d.num_minutes();
    if minutes < 10 {
        let s = seconds % 60;
        if s == 0 {
            return format!("{}m", minutes);
        }
        return format!("{}m{}s", minutes, s);
    } else if minutes < 60 * 3 {
        return format!("{}m", minutes);
    }

    let hours = d.num_hours();
    if hours < 8 {
        let m = minutes % 60;
        if m == 0 {
            return format!("{}h", hours);
        }
        format!("{}h{}m", hours, m)
    } else if hours < 48 {
        format!("{}h", hours)
    } else if hours < 24 * 8 {
        let h = hours % 24;
        if h == 0 {
            return format!("{}d", hours / 24);
        }
        format!("{}d{}h", hours / 24, h)
    } else if hours < 24 * 365 * 2 {
        format!("{}d", hours / 24)
    } else if hours < 24 * 365 * 8 {
        let days = (hours / 24) % 365;
        if days == 0 {
            return format!("{}y", hours / 24 / 365);
        }
        format!("{}y{}d", hours / 24 / 365, days)
    } else {
        format!("{}y", hours / 24 / 365)
    }
}

/// Age of `timestamp` relative to `now`
pub fn age_since(timestamp: Option<&Time>, now: DateTime<Utc>) -> String {
    match timestamp {
        Some(ts) => human_duration(now.signed_duration_since(ts.0)),
        None => UNKNOWN.to_string(),
    }
}

/// Age of `timestamp` relative to the current wall clock
pub fn translate_timestamp_since(timestamp: Option<&Time>) -> String {
    age_since(timestamp, Utc::now())
}

/// `k1=v1,k2=v2` in key order
pub fn format_labels(labels: Option<&BTreeMap<String, String>>) -> String {
    let joined = labels
        .map(|l| {
            l.iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(",")
        })
        .unwrap_or_default();

    if joined.is_empty() {
        NONE.to_string()
    } else {
        joined
    }
}

/// Render a label selector the way the API server's selector parser prints it.
///
/// Requirements are ordered by key; set-based values are sorted. An
/// expression the API would reject renders as `<error>`.
pub fn format_label_selector(selector: Option<&LabelSelector>) -> String {
    let selector = match selector {
        Some(s) => s,
        None => return NONE.to_string(),
    };

    let mut requirements: Vec<(&str, String)> = Vec::new();

    if let Some(match_labels) = &selector.match_labels {
        for (k, v) in match_labels {
            requirements.push((k.as_str(), format!("{}={}", k, v)));
        }
    }

    for expr in selector.match_expressions.iter().flatten() {
        let values: BTreeSet<&str> = expr
            .values
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        let joined = values.iter().copied().collect::<Vec<_>>().join(",");

        let rendered = match expr.operator.as_str() {
            "In" if !values.is_empty() => format!("{} in ({})", expr.key, joined),
            "NotIn" if !values.is_empty() => format!("{} notin ({})", expr.key, joined),
            "Exists" if values.is_empty() => expr.key.clone(),
            "DoesNotExist" if values.is_empty() => format!("!{}", expr.key),
            _ => return "<error>".to_string(),
        };
        requirements.push((expr.key.as_str(), rendered));
    }

    if requirements.is_empty() {
        return NONE.to_string();
    }

    requirements.sort_by(|a, b| a.0.cmp(b.0));
    requirements
        .into_iter()
        .map(|(_, r)| r)
        .collect::<Vec<_>>()
        .join(",")
}

/// Comma-joined container names and images
pub fn layout_container_cells(containers: &[Container]) -> (String, String) {
    let names = containers
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(",");
    let images = containers
        .iter()
        .map(|c| c.image.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");
    (names, images)
}

/// First [`MAX_HOSTS`] hosts, then a count of the remaining entries.
///
/// Empty hosts are skipped but still counted toward the remainder, since
/// they stand for rules matching any host.
pub fn format_hosts<S: AsRef<str>>(hosts: &[S]) -> String {
    let mut list: Vec<&str> = Vec::new();
    let mut more = false;

    for host in hosts {
        if list.len() == MAX_HOSTS {
            more = true;
            break;
        }
        let host = host.as_ref();
        if !host.is_empty() {
            list.push(host);
        }
    }

    if list.is_empty() {
        return "*".to_string();
    }

    let joined = list.join(",");
    if more {
        format!("{} + {} more...", joined, hosts.len() - MAX_HOSTS)
    } else {
        joined
    }
}

/// Ports an Ingress answers on
pub fn format_ingress_ports(has_tls: bool) -> &'static str {
    if has_tls {
        "80, 443"
    } else {
        "80"
    }
}

/// Distinct, sorted load-balancer addresses; an entry's IP wins over its hostname
pub fn load_balancer_addresses<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>,
{
    let result: BTreeSet<&str> = entries
        .into_iter()
        .filter_map(|(ip, hostname)| {
            ip.filter(|ip| !ip.is_empty())
                .or_else(|| hostname.filter(|h| !h.is_empty()))
        })
        .collect();

    result.into_iter().collect::<Vec<_>>().join(",")
}

/// `port/protocol`, or `port:nodePort/protocol` when a node port is allocated
pub fn make_port_string(ports: &[ServicePort]) -> String {
    ports
        .iter()
        .map(|p| {
            let protocol = p.protocol.as_deref().unwrap_or("TCP");
            match p.node_port {
                Some(node_port) if node_port > 0 => {
                    format!("{}:{}/{}", p.port, node_port, protocol)
                }
                _ => format!("{}/{}", p.port, protocol),
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Service type, defaulting to ClusterIP as the API server does
pub fn service_type(svc: &Service) -> &str {
    svc.spec
        .as_ref()
        .and_then(|s| s.type_.as_deref())
        .unwrap_or("ClusterIP")
}

/// External-IP cell for a Service, by service type
pub fn service_external_ip(svc: &Service) -> String {
    let spec = svc.spec.as_ref();
    let external_ips: &[String] = spec
        .and_then(|s| s.external_ips.as_deref())
        .unwrap_or_default();

    match service_type(svc) {
        "ClusterIP" | "NodePort" => {
            if external_ips.is_empty() {
                NONE.to_string()
            } else {
                external_ips.join(",")
            }
        }
        "LoadBalancer" => {
            let lb_ips = svc
                .status
                .as_ref()
                .and_then(|s| s.load_balancer.as_ref())
                .and_then(|lb| lb.ingress.as_ref())
                .map(|ingress| {
                    load_balancer_addresses(
                        ingress
                            .iter()
                            .map(|i| (i.ip.as_deref(), i.hostname.as_deref())),
                    )
                })
                .unwrap_or_default();

            if !external_ips.is_empty() {
                let mut results: Vec<&str> = Vec::new();
                if !lb_ips.is_empty() {
                    results.extend(lb_ips.split(','));
                }
                results.extend(external_ips.iter().map(String::as_str));
                return results.join(",");
            }
            if !lb_ips.is_empty() {
                return lb_ips;
            }
            PENDING.to_string()
        }
        "ExternalName" => spec
            .and_then(|s| s.external_name.clone())
            .unwrap_or_else(|| NONE.to_string()),
        _ => UNKNOWN.to_string(),
    }
}

/// `true`/`false`, or `<unset>` when the field was never set
pub fn print_bool_opt(value: Option<bool>) -> String {
    match value {
        Some(b) => b.to_string(),
        None => UNSET.to_string(),
    }
}

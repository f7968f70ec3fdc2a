//! The API status page mockup.
//!
//! Nothing here is measured. Services, incidents and metrics are fixed
//! tables, and the uptime history is drawn from a caller-supplied RNG so a
//! seeded run always shows the same bars.

use rand::Rng;
use serde::Serialize;

pub const HISTORY_DAYS: usize = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Operational,
    Degraded,
    Outage,
}

impl ServiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ServiceStatus::Operational => "Operational",
            ServiceStatus::Degraded => "Degraded",
            ServiceStatus::Outage => "Outage",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub name: &'static str,
    pub status: ServiceStatus,
    pub uptime: f64,
    pub response_time_ms: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Investigating,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Maintenance,
}

#[derive(Debug, Clone, Serialize)]
pub struct Incident {
    pub id: &'static str,
    pub title: &'static str,
    pub status: IncidentStatus,
    pub severity: Severity,
    pub started: &'static str,
    pub resolved: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub name: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

pub fn services() -> Vec<Service> {
    let service = |name, status, uptime, response_time_ms, description| Service {
        name,
        status,
        uptime,
        response_time_ms,
        description,
    };
    vec![
        service(
            "Core API",
            ServiceStatus::Operational,
            99.99,
            145,
            "Main API endpoints for vehicle data access",
        ),
        service(
            "Authentication Service",
            ServiceStatus::Operational,
            99.98,
            89,
            "OAuth 2.0 authentication and token management",
        ),
        service(
            "Location Services",
            ServiceStatus::Operational,
            99.97,
            234,
            "Vehicle location and tracking services",
        ),
        service(
            "Webhook Delivery",
            ServiceStatus::Degraded,
            99.85,
            567,
            "Real-time event notifications via webhooks",
        ),
        service(
            "Diagnostic Services",
            ServiceStatus::Operational,
            99.96,
            198,
            "Vehicle diagnostic and health monitoring",
        ),
        service(
            "Control Commands",
            ServiceStatus::Operational,
            99.94,
            312,
            "Vehicle control operations (lock/unlock, start/stop)",
        ),
    ]
}

pub fn incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: "INC-2023-1101-001",
            title: "Intermittent webhook delivery delays",
            status: IncidentStatus::Investigating,
            severity: Severity::Minor,
            started: "2023-11-01T14:30:00Z",
            resolved: None,
            description: "Some webhook events are experiencing delivery delays of 2-5 minutes.",
        },
        Incident {
            id: "INC-2023-1031-002",
            title: "Elevated API response times",
            status: IncidentStatus::Resolved,
            severity: Severity::Minor,
            started: "2023-10-31T09:15:00Z",
            resolved: Some("2023-10-31T10:45:00Z"),
            description: "API response times were elevated due to increased traffic. Issue resolved by scaling infrastructure.",
        },
        Incident {
            id: "INC-2023-1029-001",
            title: "Authentication service maintenance",
            status: IncidentStatus::Resolved,
            severity: Severity::Maintenance,
            started: "2023-10-29T02:00:00Z",
            resolved: Some("2023-10-29T04:00:00Z"),
            description: "Scheduled maintenance to improve authentication service performance.",
        },
    ]
}

pub fn metrics() -> Vec<Metric> {
    vec![
        Metric {
            name: "API Requests (24h)",
            value: "12.4M",
            change: "+5.2%",
            trend: Trend::Up,
        },
        Metric {
            name: "Average Response Time",
            value: "189ms",
            change: "-12ms",
            trend: Trend::Down,
        },
        Metric {
            name: "Success Rate",
            value: "99.97%",
            change: "+0.02%",
            trend: Trend::Up,
        },
        Metric {
            name: "Active Webhooks",
            value: "8,432",
            change: "+234",
            trend: Trend::Up,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UptimeLevel {
    Healthy,
    Degraded,
    Outage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UptimeDay {
    /// Days ago, counting down to 1 for yesterday.
    pub days_ago: usize,
    pub percent: u8,
}

impl UptimeDay {
    pub fn level(&self) -> UptimeLevel {
        match self.percent {
            100 => UptimeLevel::Healthy,
            p if p > 90 => UptimeLevel::Degraded,
            _ => UptimeLevel::Outage,
        }
    }

    pub fn label(&self) -> String {
        format!("Day {}: {}% uptime", self.days_ago, self.percent)
    }
}

/// One bar per day, oldest first. A day is clean 98% of the time; a bad day
/// is a coin flip between 95% and 85%.
pub fn uptime_history<R: Rng>(rng: &mut R, days: usize) -> Vec<UptimeDay> {
    (0..days)
        .map(|i| {
            let percent = if rng.random::<f64>() > 0.02 {
                100
            } else if rng.random::<f64>() > 0.5 {
                95
            } else {
                85
            };
            UptimeDay {
                days_ago: days - i,
                percent,
            }
        })
        .collect()
}

/// Mean uptime over the history, 100.0 when it is empty.
pub fn overall_uptime(history: &[UptimeDay]) -> f64 {
    if history.is_empty() {
        return 100.0;
    }
    let total: f64 = history.iter().map(|day| f64::from(day.percent)).sum();
    total / history.len() as f64
}

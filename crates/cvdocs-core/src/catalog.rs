use crate::error::{DocsError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Placeholder segment in endpoint path templates.
pub const ID_PLACEHOLDER: &str = "{id}";
pub const DEFAULT_VEHICLE_ID: &str = "veh_123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// The next method in `ALL`, wrapping around.
    pub fn cycle(self) -> Self {
        let index = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn cycle_back(self) -> Self {
        let index = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DocsError::UnknownMethod(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: HttpMethod,
    pub description: &'static str,
}

impl Endpoint {
    pub fn needs_resource_id(&self) -> bool {
        self.path.contains(ID_PLACEHOLDER)
    }
}

/// The endpoints offered for selection in the explorer.
#[derive(Debug, Clone)]
pub struct EndpointCatalog {
    endpoints: Vec<Endpoint>,
}

impl EndpointCatalog {
    pub fn connected_vehicles() -> Self {
        let endpoint = |path, method, description| Endpoint {
            path,
            method,
            description,
        };
        Self {
            endpoints: vec![
                endpoint("/v1/vehicles", HttpMethod::Get, "List all vehicles"),
                endpoint("/v1/vehicles/{id}", HttpMethod::Get, "Get vehicle details"),
                endpoint(
                    "/v1/vehicles/{id}/location",
                    HttpMethod::Get,
                    "Get vehicle location",
                ),
                endpoint(
                    "/v1/vehicles/{id}/diagnostics",
                    HttpMethod::Get,
                    "Get diagnostics",
                ),
                endpoint("/v1/vehicles/{id}/lock", HttpMethod::Post, "Lock vehicle"),
                endpoint(
                    "/v1/vehicles/{id}/unlock",
                    HttpMethod::Post,
                    "Unlock vehicle",
                ),
            ],
        }
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn find(&self, path: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|endpoint| endpoint.path == path)
    }

    pub fn position(&self, path: &str) -> Option<usize> {
        self.endpoints.iter().position(|endpoint| endpoint.path == path)
    }
}

/// A one-click preset that fills in path and method together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickExample {
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
    pub method: HttpMethod,
}

pub const QUICK_EXAMPLES: [QuickExample; 3] = [
    QuickExample {
        title: "List Vehicles",
        description: "Get all vehicles in your account",
        path: "/v1/vehicles",
        method: HttpMethod::Get,
    },
    QuickExample {
        title: "Get Location",
        description: "Retrieve vehicle's current location",
        path: "/v1/vehicles/{id}/location",
        method: HttpMethod::Get,
    },
    QuickExample {
        title: "Lock Vehicle",
        description: "Send lock command to vehicle",
        path: "/v1/vehicles/{id}/lock",
        method: HttpMethod::Post,
    },
];

/// Pre-authored payloads returned by the explorer instead of a network call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseCatalog;

impl ResponseCatalog {
    /// Canned payload for `path`, or a generic success body when there is none.
    ///
    /// `resource_id` fills in the vehicle id where a payload echoes it, and
    /// `now` stamps time-dependent payloads.
    pub fn lookup(&self, path: &str, resource_id: &str, now: DateTime<Utc>) -> Value {
        self.canned(path, resource_id, now)
            .unwrap_or_else(|| json!({ "message": "Success" }))
    }

    pub fn has_entry(&self, path: &str) -> bool {
        self.canned(path, "", Utc::now()).is_some()
    }

    fn canned(&self, path: &str, resource_id: &str, now: DateTime<Utc>) -> Option<Value> {
        let vehicle_id = if resource_id.is_empty() {
            DEFAULT_VEHICLE_ID
        } else {
            resource_id
        };

        let payload = match path {
            "/v1/vehicles" => json!({
                "data": [
                    {
                        "id": DEFAULT_VEHICLE_ID,
                        "vin": "1HGBH41JXMN109186",
                        "make": "Peugeot",
                        "model": "3008",
                        "year": 2023,
                        "status": "active"
                    }
                ]
            }),
            "/v1/vehicles/{id}" => json!({
                "data": {
                    "id": vehicle_id,
                    "vin": "1HGBH41JXMN109186",
                    "make": "Peugeot",
                    "model": "3008",
                    "year": 2023,
                    "color": "Metallic Blue",
                    "status": "active"
                }
            }),
            "/v1/vehicles/{id}/location" => json!({
                "data": {
                    "latitude": 48.8566,
                    "longitude": 2.3522,
                    "address": "Paris, France",
                    "timestamp": now.to_rfc3339_opts(SecondsFormat::Millis, true)
                }
            }),
            _ => return None,
        };
        Some(payload)
    }
}

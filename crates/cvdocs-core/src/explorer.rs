use crate::catalog::{
    EndpointCatalog, HttpMethod, QuickExample, ResponseCatalog, ID_PLACEHOLDER,
};
use crate::context::DocsContext;
use crate::timer::{lock, TimerSet};
use chrono::Utc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "/v1/vehicles";
pub const TOKEN_PLACEHOLDER: &str = "YOUR_ACCESS_TOKEN";
pub const RESOURCE_ID_PLACEHOLDER: &str = "VEHICLE_ID";

/// Everything the explorer panel shows about the request being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    pub endpoint_path: String,
    pub method: HttpMethod,
    pub auth_token: String,
    pub resource_id: String,
    /// Pretty-printed payload of the last resolved request, or empty.
    pub response_body: String,
    pub is_pending: bool,
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            endpoint_path: DEFAULT_ENDPOINT.to_string(),
            method: HttpMethod::Get,
            auth_token: String::new(),
            resource_id: String::new(),
            response_body: String::new(),
            is_pending: false,
        }
    }
}

impl RequestDraft {
    pub fn needs_resource_id(&self) -> bool {
        self.endpoint_path.contains(ID_PLACEHOLDER)
    }

    /// The request as a shell command. Empty credentials and ids are shown as
    /// placeholders so the command stays copy-pasteable.
    pub fn command_line(&self, base_url: &str) -> String {
        let resource_id = non_empty_or(&self.resource_id, RESOURCE_ID_PLACEHOLDER);
        let token = non_empty_or(&self.auth_token, TOKEN_PLACEHOLDER);
        let path = self.endpoint_path.replace(ID_PLACEHOLDER, resource_id);

        format!(
            "curl -X {} \"{}{}\" \\\n  -H \"Authorization: Bearer {}\" \\\n  -H \"Content-Type: application/json\"",
            self.method, base_url, path, token
        )
    }
}

fn non_empty_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Scheduled,
    /// A request is already in flight; nothing new was scheduled.
    AlreadyPending,
}

/// The API explorer's try-it panel.
///
/// `submit` never blocks: it marks the draft pending and schedules the canned
/// response one response delay later. Dropping the explorer abandons any
/// request still in flight.
pub struct Explorer {
    draft: Arc<Mutex<RequestDraft>>,
    endpoints: EndpointCatalog,
    responses: ResponseCatalog,
    base_url: String,
    response_delay: Duration,
    timers: TimerSet,
}

impl Explorer {
    pub fn new(ctx: &DocsContext) -> Self {
        Self {
            draft: Arc::new(Mutex::new(RequestDraft::default())),
            endpoints: EndpointCatalog::connected_vehicles(),
            responses: ResponseCatalog,
            base_url: ctx.config().sandbox_base_url.clone(),
            response_delay: ctx.config().response_delay(),
            timers: TimerSet::new(ctx.runtime().clone()),
        }
    }

    pub fn endpoints(&self) -> &EndpointCatalog {
        &self.endpoints
    }

    /// Method and id are left alone; a method that does not match the
    /// catalog's suggestion is allowed.
    pub fn select_endpoint(&self, path: impl Into<String>) {
        let path = path.into();
        if self.endpoints.find(&path).is_none() {
            tracing::debug!(%path, "selected endpoint outside the catalog");
        }
        lock(&self.draft).endpoint_path = path;
    }

    pub fn select_method(&self, method: HttpMethod) {
        lock(&self.draft).method = method;
    }

    pub fn set_auth_token(&self, token: impl Into<String>) {
        lock(&self.draft).auth_token = token.into();
    }

    pub fn set_resource_id(&self, resource_id: impl Into<String>) {
        lock(&self.draft).resource_id = resource_id.into();
    }

    pub fn apply_example(&self, example: &QuickExample) {
        let mut draft = lock(&self.draft);
        draft.endpoint_path = example.path.to_string();
        draft.method = example.method;
    }

    /// Start a simulated request for the current selection.
    ///
    /// The response is looked up by the path and id as they are now; edits
    /// made while pending only affect the next request.
    pub fn submit(&mut self) -> SubmitOutcome {
        let (path, resource_id) = {
            let mut draft = lock(&self.draft);
            if draft.is_pending {
                tracing::debug!("submit ignored, request already pending");
                return SubmitOutcome::AlreadyPending;
            }
            draft.is_pending = true;
            draft.response_body.clear();
            (draft.endpoint_path.clone(), draft.resource_id.clone())
        };
        tracing::debug!(%path, delay_ms = self.response_delay.as_millis() as u64, "request submitted");

        let responses = self.responses;
        self.timers
            .schedule(self.response_delay, &self.draft, move |draft| {
                let payload = responses.lookup(&path, &resource_id, Utc::now());
                draft.response_body = serde_json::to_string_pretty(&payload)
                    .unwrap_or_else(|_| payload.to_string());
                draft.is_pending = false;
                tracing::debug!(%path, "request resolved");
            });
        SubmitOutcome::Scheduled
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.draft).is_pending
    }

    pub fn response_body(&self) -> String {
        lock(&self.draft).response_body.clone()
    }

    pub fn needs_resource_id(&self) -> bool {
        lock(&self.draft).needs_resource_id()
    }

    /// A copy of the current state for rendering.
    pub fn snapshot(&self) -> RequestDraft {
        lock(&self.draft).clone()
    }

    /// Recomputed from the current state on every call.
    pub fn command_line(&self) -> String {
        lock(&self.draft).command_line(&self.base_url)
    }
}

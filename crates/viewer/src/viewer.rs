//! One-shot status fetch and its state machine.

use common::SERVICE_VERSION;
use serde_json::Value;

use crate::error::ViewerError;

/// Path of the status endpoint relative to the service base URL.
pub const STATUS_PATH: &str = "/api/status";

const ENVIRONMENT_FALLBACK: &str = "Production";

/// Observable viewer states.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerState {
    /// Request not resolved yet.
    Loading,
    /// The backend answered with a JSON body.
    Connected(StatusInfo),
    /// Transport failure or a body that is not JSON. Terminal.
    Disconnected,
}

impl ViewerState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ViewerState::Loading)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewerState::Loading => "Loading...",
            ViewerState::Connected(_) => "Connected",
            ViewerState::Disconnected => "Disconnected",
        }
    }
}

/// Status body captured verbatim from the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusInfo {
    raw: Value,
}

impl StatusInfo {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Reported environment, or `"Production"` when the field is missing or empty.
    pub fn environment(&self) -> &str {
        self.text_field("environment").unwrap_or(ENVIRONMENT_FALLBACK)
    }

    /// Reported version, or the current release when the field is missing or empty.
    pub fn version(&self) -> &str {
        self.text_field("version").unwrap_or(SERVICE_VERSION)
    }

    /// Whether the backend sent a body worth summarizing (anything but `null`).
    pub fn has_details(&self) -> bool {
        !self.raw.is_null()
    }

    fn text_field(&self, name: &str) -> Option<&str> {
        self.raw[name].as_str().filter(|value| !value.is_empty())
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Fetches `GET {base}/api/status` at most once and keeps the outcome.
#[derive(Debug)]
pub struct StatusViewer {
    client: reqwest::Client,
    status_url: String,
    state: ViewerState,
}

impl StatusViewer {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            status_url: format!("{}{STATUS_PATH}", base_url.trim_end_matches('/')),
            state: ViewerState::Loading,
        }
    }

    pub fn status_url(&self) -> &str {
        &self.status_url
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Resolves the state on the first call; later calls return it unchanged.
    pub async fn load(&mut self) -> &ViewerState {
        if self.state.is_resolved() {
            return &self.state;
        }

        self.state = match self.fetch().await {
            Ok(body) => {
                tracing::info!(url = %self.status_url, "backend connected");
                ViewerState::Connected(StatusInfo::new(body))
            }
            Err(err) => {
                tracing::warn!(url = %self.status_url, error = %err, "backend disconnected");
                ViewerState::Disconnected
            }
        };
        &self.state
    }

    async fn fetch(&self) -> Result<Value, ViewerError> {
        let response = self.client.get(&self.status_url).send().await?;
        tracing::debug!(status = %response.status(), "status response received");
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

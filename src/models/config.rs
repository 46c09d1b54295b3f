//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_submit_path() -> String {
    "/api/submit".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Path the relay endpoint is mounted on.
    #[serde(default = "default_submit_path")]
    pub submit_path: String,
    pub ghl: GhlConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Upstream CRM form the leads are relayed to.
pub struct GhlConfig {
    /// Form submission endpoint.
    pub submit_url: String,
    /// Identifier of the destination form.
    pub form_id: String,
    /// Identifier of the destination location (sub-account).
    pub location_id: String,
}

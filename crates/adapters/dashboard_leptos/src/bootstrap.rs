//! Page bootstrap: the JSON embedded by the serving page.

use camwatch_domain::bootstrap::InitialData;
use camwatch_domain::config::ClientConfig;

/// Id of the `<script type="application/json">` element carrying the data.
pub const BOOTSTRAP_ELEMENT_ID: &str = "camwatch-bootstrap";

/// Data and configuration the page starts with.
#[derive(Debug, Clone, Default)]
pub struct Bootstrap {
    pub data: InitialData,
    pub config: ClientConfig,
}

fn bootstrap_text() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
        .and_then(|el| el.text_content())
}

/// Read the bootstrap element. Missing or malformed data yields defaults.
pub fn load() -> Bootstrap {
    let Some(text) = bootstrap_text() else {
        tracing::warn!(element = BOOTSTRAP_ELEMENT_ID, "no bootstrap data on the page");
        return Bootstrap::default();
    };
    let data = match InitialData::from_json(&text) {
        Ok(data) => data,
        Err(err) => {
            tracing::error!(%err, "malformed bootstrap data");
            return Bootstrap::default();
        }
    };
    let config = data.client_config().unwrap_or_else(|err| {
        tracing::warn!(%err, "invalid client config, using defaults");
        ClientConfig::default()
    });
    tracing::info!(
        dashboard_id = ?data.dashboard_id,
        cameras = data.cameras.len(),
        api_base = config.api_base(),
        "bootstrap loaded"
    );
    Bootstrap { data, config }
}

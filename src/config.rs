//! Persisted Browser Configuration
//!
//! Session identity and service endpoint, kept in localStorage under fixed
//! keys so they survive reloads. The session is cleared on logout; the
//! endpoint URL stays until replaced.

use crate::models::Session;

/// localStorage key for the remembered session
pub const SESSION_KEY: &str = "sop_user";
/// localStorage key for the Apps Script endpoint
pub const SERVICE_URL_KEY: &str = "google_script_url";

/// Deployment id fragment that marks the placeholder endpoint
const DEMO_DEPLOYMENT_ID: &str =
    "AKfycbyC0H_y7MQWzdEsDLEYr-0l3ZRsTC-IS23BgjzF3WG_k-3lycufZxJVItHFV2dJSdqR";

/// Placeholder deployment shipped as the default endpoint. Operations
/// against it are served from in-memory fixtures, never the network.
pub const DEMO_URL: &str =
    "https://script.google.com/macros/s/AKfycbyC0H_y7MQWzdEsDLEYr-0l3ZRsTC-IS23BgjzF3WG_k-3lycufZxJVItHFV2dJSdqR/exec";

/// True when `url` still points at the placeholder deployment
pub fn is_demo_url(url: &str) -> bool {
    url.contains(DEMO_DEPLOYMENT_ID)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_service_url() -> String {
    local_storage()
        .and_then(|storage| storage.get_item(SERVICE_URL_KEY).ok().flatten())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEMO_URL.to_string())
}

pub fn store_service_url(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(SERVICE_URL_KEY, url);
    }
}

pub fn load_session() -> Option<Session> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn store_session(session: &Session) {
    if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(session)) {
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_is_demo() {
        assert!(is_demo_url(DEMO_URL));
    }

    #[test]
    fn test_real_deployment_is_live() {
        assert!(!is_demo_url(
            "https://script.google.com/macros/s/AKfycbSomeRealDeploymentId/exec"
        ));
        assert!(!is_demo_url(""));
    }
}

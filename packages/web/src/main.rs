use dioxus::prelude::*;

use store::ClientConfig;
use ui::{ClientProvider, Dashboard};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled `client.toml`.
const CLIENT_TOML: &str = include_str!("../assets/client.toml");

fn main() {
    let (config, invalid) = load_config(CLIENT_TOML);

    let level = config
        .log
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    // Fails only when a subscriber is already installed.
    let _ = dioxus::logger::init(level);
    if let Some(e) = invalid {
        tracing::warn!("Invalid {}, using defaults: {}", ClientConfig::filename(), e);
    }
    tracing::info!("Backend at {}", config.api.base_url);

    LaunchBuilder::new().with_context(config).launch(App);
}

/// Parse the bundled config, falling back to defaults, and resolve an empty
/// base URL to the page's origin. The parse error, if any, is returned so it
/// can be logged once the logger is up.
fn load_config(text: &str) -> (ClientConfig, Option<String>) {
    let (config, invalid) = match ClientConfig::from_toml(text) {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e.to_string())),
    };
    let config = if config.api.base_url.is_empty() {
        config.with_base_url(page_origin())
    } else {
        config
    };
    (config, invalid)
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    "http://localhost:8080".to_string()
}

#[component]
fn App() -> Element {
    let config = use_context::<ClientConfig>();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config: config,
            Dashboard {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = ClientConfig::from_toml(CLIENT_TOML).unwrap();
        assert_eq!(config.api.properties_path, "/api/v1/properties");
        assert_eq!(config.api.customers_path, "/api/v1/customers");
        assert_eq!(config.display, store::DisplayConfig::default());
    }

    #[test]
    fn test_empty_base_url_resolves_to_origin() {
        let (config, invalid) = load_config(CLIENT_TOML);
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(invalid, None);
    }

    #[test]
    fn test_invalid_config_falls_back_and_reports() {
        let (config, invalid) = load_config("[api]\nbase_url = 42\n");
        assert_eq!(config.api.properties_path, "/api/v1/properties");
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert!(invalid.is_some());
    }
}

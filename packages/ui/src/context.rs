//! Shared client state provided through Dioxus context.
//!
//! [`ClientProvider`] owns the REST client, the display settings and the
//! `Signal<Catalog>` every table and counter renders from. Wrap the app with it.

use api::{HttpTransport, RestClient};
use dioxus::prelude::*;
use store::{Catalog, ClientConfig, CustomerRecord, DisplayConfig, PropertyRecord, Resource};

use crate::sync::fetch_collection;

/// The client used by the running app.
pub type ApiClient = RestClient<HttpTransport>;

/// Consume the `Signal<Catalog>` from context.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}

pub fn use_display() -> DisplayConfig {
    use_context::<DisplayConfig>()
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>()
}

/// Fetch `R` and, if that worked, replace its collection in the catalog.
/// A failed fetch leaves the previous collection (and what is on screen) alone.
pub async fn refresh_into<R: Resource>(client: &ApiClient, mut catalog: Signal<Catalog>) {
    if let Some(records) = fetch_collection::<R, _>(client).await {
        catalog.write().replace(records);
    }
}

/// Provider component for the client, display settings and catalog.
/// Both collections are fetched once on mount.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    let client = use_context_provider(|| {
        RestClient::new(HttpTransport::new(config.api.clone()), config.api.clone())
    });
    use_context_provider(|| config.display.clone());
    let catalog = use_context_provider(|| Signal::new(Catalog::new()));

    use_hook(move || {
        let properties_client = client.clone();
        spawn(async move {
            refresh_into::<PropertyRecord>(&properties_client, catalog).await;
        });
        spawn(async move {
            refresh_into::<CustomerRecord>(&client, catalog).await;
        });
    });

    rsx! {
        {children}
    }
}

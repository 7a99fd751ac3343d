use api::AlchemyClient;
use api::Network;
use api::ProviderConfig;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct AppStateData {
    pub network: Network,
    pub client: AlchemyClient,
}

/// Stable, non-reactive state shared through the Dioxus context.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: ProviderConfig) -> Self {
        Self(Arc::new(AppStateData {
            network: config.network(),
            client: AlchemyClient::new(config),
        }))
    }
}

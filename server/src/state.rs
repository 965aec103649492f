use std::sync::Arc;
use std::time::Instant;

use geobook_core::{AddressStore, ProximityFilter};

use crate::config::AppConfig;

pub(crate) struct AppState {
    pub(crate) started_at: Instant,
    pub(crate) config: Arc<AppConfig>,
    pub(crate) store: Arc<dyn AddressStore>,
    pub(crate) proximity: ProximityFilter,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            started_at: self.started_at,
            config: Arc::clone(&self.config),
            store: Arc::clone(&self.store),
            proximity: self.proximity.clone(),
        }
    }
}

impl AppState {
    pub(crate) fn new(config: AppConfig, store: Arc<dyn AddressStore>) -> Self {
        Self {
            started_at: Instant::now(),
            config: Arc::new(config),
            proximity: ProximityFilter::new(Arc::clone(&store)),
            store,
        }
    }
}

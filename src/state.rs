use std::sync::Arc;

use crate::{catalog::Catalog, config::AppConfig, store::ShopStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub store: Arc<ShopStore>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_catalog(config, Catalog::default())
    }

    pub fn with_catalog(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            store: Arc::new(ShopStore::new()),
        }
    }
}

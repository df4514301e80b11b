// goods_api/src/state.rs
use crate::config::AppConfig;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn Store>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
    Self {
      store,
      config: Arc::new(config),
    }
  }
}

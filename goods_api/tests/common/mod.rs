// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use std::sync::Arc;

use goods_api::config::AppConfig;
use goods_api::state::AppState;
use goods_api::store::MemoryStore;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Fresh state over an empty in-memory store, routes under `/api`.
pub fn memory_state() -> (AppState, Arc<MemoryStore>) {
  memory_state_with(AppConfig::default())
}

pub fn memory_state_with(config: AppConfig) -> (AppState, Arc<MemoryStore>) {
  setup_tracing();
  let store = Arc::new(MemoryStore::new());
  (AppState::new(store.clone(), config), store)
}

pub fn goods_payload(goods_id: i64) -> Value {
  json!({
      "goodsId": goods_id,
      "name": format!("product {}", goods_id),
      "thumbnailUrl": "https://example.com/thumb.jpg",
      "category": "drink",
      "price": 3.5,
  })
}

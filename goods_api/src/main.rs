// goods_api/src/main.rs

use std::sync::Arc;

use actix_web::{App, HttpServer};
use anyhow::Context;

use goods_api::config::AppConfig;
use goods_api::services::goods_service;
use goods_api::state::AppState;
use goods_api::store::{MemoryStore, PgStore, Store};
use goods_api::{telemetry, web};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Load application configuration
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;

  telemetry::init_tracing(app_config.log_format);
  tracing::info!("Starting goods API server...");

  let store = open_store(&app_config).await?;
  tracing::info!(store = store.backend_name(), "Store ready.");

  if app_config.seed_db {
    goods_service::seed_catalog(store.as_ref())
      .await
      .context("Failed to seed the goods catalog")?;
  }

  let app_state = AppState::new(store.clone(), app_config.clone());

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  let served = HttpServer::new(move || {
    App::new()
      .configure(|cfg| web::configure_app(cfg, &app_state))
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await;

  // The server has stopped (signal or error); release the store either way.
  store.close().await;
  tracing::info!("Server stopped.");
  served.context("HTTP server exited with an error")
}

async fn open_store(app_config: &AppConfig) -> anyhow::Result<Arc<dyn Store>> {
  match &app_config.database_url {
    Some(database_url) => {
      let store = PgStore::connect(database_url, app_config.db_max_connections)
        .await
        .context("Database connection error")?;
      if app_config.run_migrations {
        store.migrate().await.context("Database migration error")?;
      }
      Ok(Arc::new(store))
    }
    None => {
      tracing::warn!("DATABASE_URL is not set; using the in-memory store. Data is lost on exit.");
      Ok(Arc::new(MemoryStore::new()))
    }
  }
}

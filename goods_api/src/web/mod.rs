// goods_api/src/web/mod.rs

pub mod handlers;
pub mod routes;

use actix_web::web;

use crate::errors::AppError;
use crate::state::AppState;

pub use routes::configure_app_routes;

/// Shared app setup used by `main` and the HTTP tests: state, body
/// extraction rules and routes. Middleware is added by the caller.
pub fn configure_app(cfg: &mut web::ServiceConfig, app_state: &AppState) {
  let json_config = web::JsonConfig::default().error_handler(|err, _req| {
    AppError::InvalidArgument(format!("Invalid request body: {}", err)).into()
  });

  cfg
    .app_data(web::Data::new(app_state.clone()))
    .app_data(json_config);
  configure_app_routes(cfg, &app_state.config.api_prefix);
}

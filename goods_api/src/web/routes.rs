// goods_api/src/web/routes.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::error;

use crate::state::AppState;
use crate::web::handlers::{cart_handlers, goods_handlers};

async fn home_handler() -> HttpResponse {
  HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("This is the home page")
}

async fn about_handler() -> HttpResponse {
  HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("This is the about page")
}

// Reports the store as reachable or not.
async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let backend = app_state.store.backend_name();
  match app_state.store.ping().await {
    Ok(()) => HttpResponse::Ok().json(json!({ "status": "ok", "store": backend })),
    Err(e) => {
      error!(error = %e, store = backend, "Health check failed.");
      HttpResponse::InternalServerError().json(json!({
          "success": false,
          "errorMessage": "Store unavailable",
      }))
    }
  }
}

/// Registers every route under `api_prefix` (e.g. `/api`, or empty for the root).
pub fn configure_app_routes(cfg: &mut web::ServiceConfig, api_prefix: &str) {
  cfg.service(
    web::scope(api_prefix)
      .route("", web::get().to(home_handler))
      .route("/", web::get().to(home_handler))
      .route("/about", web::get().to(about_handler))
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::resource("/goods")
          .route(web::get().to(goods_handlers::list_goods_handler))
          .route(web::post().to(goods_handlers::create_goods_handler)),
      )
      // Must stay ahead of /goods/{goods_id}, which would otherwise capture "carts".
      .route("/goods/carts", web::get().to(cart_handlers::list_carts_handler))
      .route("/goods/{goods_id}", web::get().to(goods_handlers::get_goods_detail_handler))
      .service(
        web::resource("/goods/{goods_id}/cart")
          .route(web::post().to(cart_handlers::add_to_cart_handler))
          .route(web::put().to(cart_handlers::update_cart_handler))
          .route(web::delete().to(cart_handlers::remove_from_cart_handler)),
      ),
  );
}

// goods_api/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::catalog::coerce_goods_id;
use crate::errors::AppError;
use crate::models::CartView;
use crate::services::cart_service;
use crate::state::AppState;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
pub struct CartQuantityRequestPayload {
  pub quantity: i64,
}

// --- Response DTOs ---
#[derive(Serialize, Debug)]
pub struct CartsResponse {
  pub carts: Vec<CartView>,
}

#[derive(Serialize, Debug)]
pub struct CartResultResponse {
  pub result: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub success: Option<bool>,
}

impl CartResultResponse {
  // Adding a line answers with `result` only; update and delete also carry `success`.
  fn added() -> Self {
    Self {
      result: "success",
      success: None,
    }
  }

  fn succeeded() -> Self {
    Self {
      result: "success",
      success: Some(true),
    }
  }
}

fn parse_goods_id(raw: &str) -> Result<i64, AppError> {
  coerce_goods_id(raw).ok_or_else(|| AppError::InvalidArgument(format!("Invalid goods id '{}'", raw)))
}

// --- Handler Implementations ---

#[instrument(name = "handler::list_carts", skip(app_state))]
pub async fn list_carts_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let carts = cart_service::list_carts(app_state.store.as_ref()).await?;
  Ok(HttpResponse::Ok().json(CartsResponse { carts }))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, path, req_payload),
    fields(goods_id = %path.as_ref(), quantity = req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<CartQuantityRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let goods_id = parse_goods_id(&path)?;
  cart_service::add_to_cart(app_state.store.as_ref(), goods_id, req_payload.quantity).await?;
  Ok(HttpResponse::Ok().json(CartResultResponse::added()))
}

#[instrument(
    name = "handler::update_cart",
    skip(app_state, path, req_payload),
    fields(goods_id = %path.as_ref(), quantity = req_payload.quantity)
)]
pub async fn update_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<CartQuantityRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let goods_id = parse_goods_id(&path)?;
  let updated = cart_service::update_cart(app_state.store.as_ref(), goods_id, req_payload.quantity).await?;
  info!(updated, "Cart update request handled.");
  Ok(HttpResponse::Ok().json(CartResultResponse::succeeded()))
}

#[instrument(name = "handler::remove_from_cart", skip(app_state, path), fields(goods_id = %path.as_ref()))]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let goods_id = parse_goods_id(&path)?;
  let removed = cart_service::remove_from_cart(app_state.store.as_ref(), goods_id).await?;
  info!(removed, "Cart removal request handled.");
  Ok(HttpResponse::Ok().json(CartResultResponse::succeeded()))
}

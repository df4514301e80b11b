// goods_api/src/web/handlers/goods_handlers.rs

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::Product;
use crate::services::goods_service;
use crate::state::AppState;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoodsRequestPayload {
  pub goods_id: i64,
  pub name: String,
  pub thumbnail_url: String,
  pub category: String,
  pub price: f64,
}

impl From<CreateGoodsRequestPayload> for Product {
  fn from(payload: CreateGoodsRequestPayload) -> Self {
    Product {
      goods_id: payload.goods_id,
      name: payload.name,
      thumbnail_url: payload.thumbnail_url,
      category: payload.category,
      price: payload.price,
    }
  }
}

// --- Response DTOs ---
#[derive(Serialize, Debug)]
pub struct GoodsListResponse<'a> {
  pub goods: &'a [Product],
}

// `detail` is left out of the body entirely when nothing matched.
#[derive(Serialize, Debug)]
pub struct GoodsDetailResponse<'a> {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub detail: Option<&'a Product>,
}

#[derive(Serialize, Debug)]
pub struct CreatedGoodsResponse {
  pub goods: Product,
}

// --- Handler Implementations ---

#[instrument(name = "handler::list_goods")]
pub async fn list_goods_handler() -> HttpResponse {
  let goods = goods_service::list_catalog();
  info!("Serving {} catalog entries.", goods.len());
  HttpResponse::Ok().json(GoodsListResponse { goods })
}

#[instrument(name = "handler::get_goods_detail", skip(path), fields(goods_id = %path.as_ref()))]
pub async fn get_goods_detail_handler(path: web::Path<String>) -> HttpResponse {
  let raw_goods_id = path.into_inner();
  let detail = goods_service::catalog_detail(&raw_goods_id);
  HttpResponse::Ok().json(GoodsDetailResponse { detail })
}

#[instrument(
    name = "handler::create_goods",
    skip(app_state, req_payload),
    fields(goods_id = req_payload.goods_id)
)]
pub async fn create_goods_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateGoodsRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let product = Product::from(req_payload.into_inner());
  let created = goods_service::create_goods(app_state.store.as_ref(), product).await?;
  Ok(HttpResponse::Ok().json(CreatedGoodsResponse { goods: created }))
}

// goods_api/src/models/cart_line.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::Product;

/// One row per product in the cart, keyed by `goods_id`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub goods_id: i64, // Not checked against the goods table
  pub quantity: i64,
  pub added_at: DateTime<Utc>,
}

/// A cart line joined with its persisted product, if the reference resolves.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
  pub quantity: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub goods: Option<Product>,
}

// goods_api/src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog item. Shared by the fixed catalog and the persisted `goods` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub goods_id: i64,
  pub name: String,
  pub thumbnail_url: String,
  pub category: String,
  pub price: f64, // Non-negative by convention, not checked
}

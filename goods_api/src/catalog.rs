// goods_api/src/catalog.rs

//! The fixed catalog served by `GET /goods`. It is built once and never
//! changes; persisted goods created through the API do not appear here.

use crate::models::Product;
use once_cell::sync::Lazy;

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
  vec![
    entry(
      4,
      "product 4",
      "https://cdn.pixabay.com/photo/2016/09/07/02/11/frogs-1650657_1280.jpg",
      0.1,
    ),
    entry(
      3,
      "product 3",
      "https://cdn.pixabay.com/photo/2016/09/07/02/12/frogs-1650658_1280.jpg",
      2.2,
    ),
    entry(
      2,
      "product 2",
      "https://cdn.pixabay.com/photo/2014/08/26/19/19/wine-428316_1280.jpg",
      0.11,
    ),
    entry(
      1,
      "product 1",
      "https://cdn.pixabay.com/photo/2016/09/07/19/54/wines-1652455_1280.jpg",
      6.2,
    ),
  ]
});

fn entry(goods_id: i64, name: &str, thumbnail_url: &str, price: f64) -> Product {
  Product {
    goods_id,
    name: name.to_string(),
    thumbnail_url: thumbnail_url.to_string(),
    category: "drink".to_string(),
    price,
  }
}

pub fn list() -> &'static [Product] {
  CATALOG.as_slice()
}

/// First catalog entry whose id matches the coerced path segment.
pub fn get_by_id(raw_id: &str) -> Option<&'static Product> {
  let goods_id = coerce_goods_id(raw_id)?;
  CATALOG.iter().find(|product| product.goods_id == goods_id)
}

/// Numeric coercion of a path segment. Accepts surrounding whitespace and
/// integral decimal notation ("7", " 7 ", "7.0"); anything else is `None`.
pub fn coerce_goods_id(raw: &str) -> Option<i64> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }
  if let Ok(id) = trimmed.parse::<i64>() {
    return Some(id);
  }
  let value = trimmed.parse::<f64>().ok()?;
  if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
    Some(value as i64)
  } else {
    None
  }
}

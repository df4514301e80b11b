// goods_api/src/services/goods_service.rs

//! Catalog lookups and persisted goods creation.

use crate::catalog;
use crate::errors::{AppError, Result};
use crate::models::Product;
use crate::store::{GoodsRepository, Inserted};
use tracing::{debug, info, instrument, warn};

pub const DUPLICATE_GOODS_MESSAGE: &str = "The document already exists";

pub fn list_catalog() -> &'static [Product] {
  catalog::list()
}

/// `None` when the id does not coerce to an integer or is not in the catalog.
pub fn catalog_detail(raw_goods_id: &str) -> Option<&'static Product> {
  let detail = catalog::get_by_id(raw_goods_id);
  if detail.is_none() {
    debug!(raw_goods_id, "No catalog entry for requested goods id.");
  }
  detail
}

#[instrument(name = "goods_service::create_goods", skip(goods, product), fields(goods_id = product.goods_id))]
pub async fn create_goods<R>(goods: &R, product: Product) -> Result<Product>
where
  R: GoodsRepository + ?Sized,
{
  match goods.insert_goods(product).await? {
    Inserted::Created(created) => {
      info!("Persisted goods {} ('{}').", created.goods_id, created.name);
      Ok(created)
    }
    Inserted::Conflict => {
      warn!("Goods already exists, refusing to create it again.");
      Err(AppError::DuplicateEntity(DUPLICATE_GOODS_MESSAGE.to_string()))
    }
  }
}

/// Copies the fixed catalog into the persisted goods store. Entries that
/// already exist are skipped, so running it on every start is harmless.
/// Returns how many entries were inserted.
#[instrument(name = "goods_service::seed_catalog", skip(goods))]
pub async fn seed_catalog<R>(goods: &R) -> Result<usize>
where
  R: GoodsRepository + ?Sized,
{
  let mut inserted = 0;
  for product in catalog::list() {
    match goods.insert_goods(product.clone()).await?.created() {
      Some(created) => {
        debug!(goods_id = created.goods_id, "Seeded catalog entry.");
        inserted += 1;
      }
      None => debug!(goods_id = product.goods_id, "Catalog entry already persisted, skipping."),
    }
  }
  info!(inserted, "Catalog seeding finished.");
  Ok(inserted)
}

// goods_api/src/services/cart_service.rs

//! Cart operations. Each one is at most two sequential store calls.

use crate::errors::{AppError, Result};
use crate::models::{CartLine, CartView};
use crate::store::{CartRepository, GoodsRepository, Inserted};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

pub const DUPLICATE_CART_LINE_MESSAGE: &str = "You already have a cart item with that goods id";
pub const QUANTITY_TOO_LOW_MESSAGE: &str = "Quantity must be at least 1";

/// Every cart line paired with its persisted goods record. Lines whose goods
/// id has no persisted record come back with `goods: None`.
#[instrument(name = "cart_service::list_carts", skip(store))]
pub async fn list_carts<S>(store: &S) -> Result<Vec<CartView>>
where
  S: GoodsRepository + CartRepository + ?Sized,
{
  let lines = store.list_cart_lines().await?;
  let goods_ids: Vec<i64> = lines
    .iter()
    .map(|line| line.goods_id)
    .collect::<BTreeSet<_>>()
    .into_iter()
    .collect();
  let goods = store.find_goods_by_ids(&goods_ids).await?;

  let views: Vec<CartView> = lines
    .into_iter()
    .map(|line| CartView {
      quantity: line.quantity,
      goods: goods.iter().find(|g| g.goods_id == line.goods_id).cloned(),
    })
    .collect();

  let dangling = views.iter().filter(|v| v.goods.is_none()).count();
  if dangling > 0 {
    debug!(dangling, "Some cart lines reference goods that are not persisted.");
  }
  info!("Fetched {} cart lines.", views.len());
  Ok(views)
}

/// Quantity is not validated here; only updates enforce the lower bound.
#[instrument(name = "cart_service::add_to_cart", skip(carts))]
pub async fn add_to_cart<R>(carts: &R, goods_id: i64, quantity: i64) -> Result<CartLine>
where
  R: CartRepository + ?Sized,
{
  match carts.insert_cart_line(goods_id, quantity).await? {
    Inserted::Created(line) => {
      info!("Cart line added for goods {} with quantity {}.", goods_id, quantity);
      Ok(line)
    }
    Inserted::Conflict => {
      warn!("Cart line for goods {} already exists.", goods_id);
      Err(AppError::DuplicateEntity(DUPLICATE_CART_LINE_MESSAGE.to_string()))
    }
  }
}

/// Sets the quantity of an existing line. A missing line is not an error;
/// the return value says whether anything was written.
#[instrument(name = "cart_service::update_cart", skip(carts))]
pub async fn update_cart<R>(carts: &R, goods_id: i64, quantity: i64) -> Result<bool>
where
  R: CartRepository + ?Sized,
{
  if quantity < 1 {
    return Err(AppError::InvalidArgument(QUANTITY_TOO_LOW_MESSAGE.to_string()));
  }

  let updated = carts.update_cart_quantity(goods_id, quantity).await?;
  if updated {
    info!("Cart line for goods {} set to quantity {}.", goods_id, quantity);
  } else {
    debug!("No cart line for goods {}, nothing updated.", goods_id);
  }
  Ok(updated)
}

/// Removes the line if present. Returns whether a line was removed.
#[instrument(name = "cart_service::remove_from_cart", skip(carts))]
pub async fn remove_from_cart<R>(carts: &R, goods_id: i64) -> Result<bool>
where
  R: CartRepository + ?Sized,
{
  let removed = carts.delete_cart_line(goods_id).await?;
  if removed {
    info!("Cart line for goods {} removed.", goods_id);
  } else {
    debug!("No cart line for goods {}, nothing removed.", goods_id);
  }
  Ok(removed)
}

// goods_api/src/store/memory.rs

use super::{CartRepository, GoodsRepository, Inserted, Store};
use crate::errors::Result;
use crate::models::{CartLine, Product};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

#[derive(Debug, Default)]
struct Tables {
  goods: Vec<Product>,
  carts: Vec<CartLine>,
}

/// Process-local store. Data lives as long as the process.
///
/// Every check-then-write runs under one write lock, which gives the same
/// insert-if-absent guarantee as the primary keys in `PgStore`. Guards are
/// never held across an `.await`.
#[derive(Debug, Default)]
pub struct MemoryStore {
  tables: RwLock<Tables>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl GoodsRepository for MemoryStore {
  async fn insert_goods(&self, product: Product) -> Result<Inserted<Product>> {
    let mut tables = self.tables.write();
    if tables.goods.iter().any(|g| g.goods_id == product.goods_id) {
      return Ok(Inserted::Conflict);
    }
    tables.goods.push(product.clone());
    Ok(Inserted::Created(product))
  }

  async fn find_goods_by_ids(&self, goods_ids: &[i64]) -> Result<Vec<Product>> {
    let tables = self.tables.read();
    Ok(
      tables
        .goods
        .iter()
        .filter(|g| goods_ids.contains(&g.goods_id))
        .cloned()
        .collect(),
    )
  }
}

#[async_trait]
impl CartRepository for MemoryStore {
  async fn list_cart_lines(&self) -> Result<Vec<CartLine>> {
    Ok(self.tables.read().carts.clone())
  }

  async fn find_cart_line(&self, goods_id: i64) -> Result<Option<CartLine>> {
    let tables = self.tables.read();
    Ok(tables.carts.iter().find(|line| line.goods_id == goods_id).cloned())
  }

  async fn insert_cart_line(&self, goods_id: i64, quantity: i64) -> Result<Inserted<CartLine>> {
    let mut tables = self.tables.write();
    if tables.carts.iter().any(|line| line.goods_id == goods_id) {
      return Ok(Inserted::Conflict);
    }
    let line = CartLine {
      goods_id,
      quantity,
      added_at: Utc::now(),
    };
    tables.carts.push(line.clone());
    Ok(Inserted::Created(line))
  }

  async fn update_cart_quantity(&self, goods_id: i64, quantity: i64) -> Result<bool> {
    let mut tables = self.tables.write();
    match tables.carts.iter_mut().find(|line| line.goods_id == goods_id) {
      Some(line) => {
        line.quantity = quantity;
        Ok(true)
      }
      None => Ok(false),
    }
  }

  async fn delete_cart_line(&self, goods_id: i64) -> Result<bool> {
    let mut tables = self.tables.write();
    let before = tables.carts.len();
    tables.carts.retain(|line| line.goods_id != goods_id);
    Ok(tables.carts.len() != before)
  }
}

#[async_trait]
impl Store for MemoryStore {
  fn backend_name(&self) -> &'static str {
    "memory"
  }

  async fn ping(&self) -> Result<()> {
    Ok(())
  }

  async fn close(&self) {}
}

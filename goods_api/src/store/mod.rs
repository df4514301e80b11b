// goods_api/src/store/mod.rs

//! Storage seams for persisted goods and cart lines.
//!
//! Handlers never talk to a database directly: they receive an `Arc<dyn Store>`
//! through `AppState`. Two backends implement it, `PgStore` (PostgreSQL) and
//! `MemoryStore` (process-local, used without `DATABASE_URL` and in tests).
//!
//! Uniqueness by `goods_id` is enforced by the backend in a single operation,
//! so two concurrent inserts for the same id can never both succeed.

use crate::errors::Result;
use crate::models::{CartLine, Product};
use async_trait::async_trait;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Result of an insert-if-absent write.
#[derive(Debug, Clone, PartialEq)]
pub enum Inserted<T> {
  Created(T),
  /// A record with the same key already exists; nothing was written.
  Conflict,
}

impl<T> Inserted<T> {
  pub fn created(self) -> Option<T> {
    match self {
      Inserted::Created(value) => Some(value),
      Inserted::Conflict => None,
    }
  }
}

/// Persisted goods records.
#[async_trait]
pub trait GoodsRepository: Send + Sync {
  async fn insert_goods(&self, product: Product) -> Result<Inserted<Product>>;

  /// Records whose `goods_id` is in `goods_ids`. Order is unspecified.
  async fn find_goods_by_ids(&self, goods_ids: &[i64]) -> Result<Vec<Product>>;
}

/// Cart lines, one per `goods_id`.
#[async_trait]
pub trait CartRepository: Send + Sync {
  /// All lines in insertion order.
  async fn list_cart_lines(&self) -> Result<Vec<CartLine>>;

  async fn find_cart_line(&self, goods_id: i64) -> Result<Option<CartLine>>;

  async fn insert_cart_line(&self, goods_id: i64, quantity: i64) -> Result<Inserted<CartLine>>;

  /// Returns whether a line was updated.
  async fn update_cart_quantity(&self, goods_id: i64, quantity: i64) -> Result<bool>;

  /// Returns whether a line was removed.
  async fn delete_cart_line(&self, goods_id: i64) -> Result<bool>;
}

#[async_trait]
pub trait Store: GoodsRepository + CartRepository {
  fn backend_name(&self) -> &'static str;

  async fn ping(&self) -> Result<()>;

  /// Releases connections. Called once after the server stops.
  async fn close(&self);
}

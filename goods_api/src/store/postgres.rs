// goods_api/src/store/postgres.rs

use super::{CartRepository, GoodsRepository, Inserted, Store};
use crate::errors::{AppError, Result};
use crate::models::{CartLine, Product};
use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info, instrument};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// PostgreSQL-backed store. Uniqueness comes from the primary keys on
/// `goods.goods_id` and `carts.goods_id`; inserts use `ON CONFLICT DO NOTHING`.
#[derive(Debug, Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_url)
      .await
      .map_err(|e| {
        error!("Failed to connect to the database: {}", e);
        AppError::Sqlx(e)
      })?;
    info!(max_connections, "Successfully connected to the database.");
    Ok(Self { pool })
  }

  #[instrument(name = "pg_store::migrate", skip(self), err(Display))]
  pub async fn migrate(&self) -> Result<()> {
    MIGRATOR.run(&self.pool).await?;
    info!("Database migrations applied.");
    Ok(())
  }
}

#[async_trait]
impl GoodsRepository for PgStore {
  async fn insert_goods(&self, product: Product) -> Result<Inserted<Product>> {
    let created: Option<Product> = sqlx::query_as(
      "INSERT INTO goods (goods_id, name, thumbnail_url, category, price) VALUES ($1, $2, $3, $4, $5) \
       ON CONFLICT (goods_id) DO NOTHING \
       RETURNING goods_id, name, thumbnail_url, category, price",
    )
    .bind(product.goods_id)
    .bind(&product.name)
    .bind(&product.thumbnail_url)
    .bind(&product.category)
    .bind(product.price)
    .fetch_optional(&self.pool)
    .await?;

    Ok(created.map_or(Inserted::Conflict, Inserted::Created))
  }

  async fn find_goods_by_ids(&self, goods_ids: &[i64]) -> Result<Vec<Product>> {
    if goods_ids.is_empty() {
      return Ok(Vec::new());
    }
    let goods: Vec<Product> = sqlx::query_as(
      "SELECT goods_id, name, thumbnail_url, category, price FROM goods WHERE goods_id = ANY($1)",
    )
    .bind(goods_ids)
    .fetch_all(&self.pool)
    .await?;
    Ok(goods)
  }
}

#[async_trait]
impl CartRepository for PgStore {
  async fn list_cart_lines(&self) -> Result<Vec<CartLine>> {
    let lines: Vec<CartLine> =
      sqlx::query_as("SELECT goods_id, quantity, added_at FROM carts ORDER BY added_at ASC, goods_id ASC")
        .fetch_all(&self.pool)
        .await?;
    Ok(lines)
  }

  async fn find_cart_line(&self, goods_id: i64) -> Result<Option<CartLine>> {
    let line: Option<CartLine> = sqlx::query_as("SELECT goods_id, quantity, added_at FROM carts WHERE goods_id = $1")
      .bind(goods_id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(line)
  }

  async fn insert_cart_line(&self, goods_id: i64, quantity: i64) -> Result<Inserted<CartLine>> {
    let created: Option<CartLine> = sqlx::query_as(
      "INSERT INTO carts (goods_id, quantity) VALUES ($1, $2) \
       ON CONFLICT (goods_id) DO NOTHING \
       RETURNING goods_id, quantity, added_at",
    )
    .bind(goods_id)
    .bind(quantity)
    .fetch_optional(&self.pool)
    .await?;

    Ok(created.map_or(Inserted::Conflict, Inserted::Created))
  }

  async fn update_cart_quantity(&self, goods_id: i64, quantity: i64) -> Result<bool> {
    let result = sqlx::query("UPDATE carts SET quantity = $1 WHERE goods_id = $2")
      .bind(quantity)
      .bind(goods_id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn delete_cart_line(&self, goods_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM carts WHERE goods_id = $1")
      .bind(goods_id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }
}

#[async_trait]
impl Store for PgStore {
  fn backend_name(&self) -> &'static str {
    "postgres"
  }

  async fn ping(&self) -> Result<()> {
    sqlx::query("SELECT 1").execute(&self.pool).await?;
    Ok(())
  }

  async fn close(&self) {
    self.pool.close().await;
    info!("Database pool closed.");
  }
}

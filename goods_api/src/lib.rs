// goods_api/src/lib.rs

//! Goods catalog and shopping cart HTTP service.
//!
//! `GET /goods` serves a fixed four-entry catalog. Persisted goods and cart
//! lines live behind the [`store::Store`] trait, backed by PostgreSQL or by
//! process memory.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;

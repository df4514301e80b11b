// goods_api/src/models/mod.rs

//! Contains data structures representing stored entities.

pub mod cart_line;
pub mod product;

pub use cart_line::{CartLine, CartView};
pub use product::Product;

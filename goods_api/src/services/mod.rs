// goods_api/src/services/mod.rs

//! Route-independent operations. Handlers translate HTTP into these calls.

pub mod cart_service;
pub mod goods_service;

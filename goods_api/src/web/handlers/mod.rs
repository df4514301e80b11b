// goods_api/src/web/handlers/mod.rs

// Declare handler modules
pub mod cart_handlers;
pub mod goods_handlers;

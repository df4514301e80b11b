// tests/cart_routes_tests.rs
mod common;
use common::*;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use goods_api::store::{CartRepository, GoodsRepository};
use goods_api::web::configure_app;
use serde_json::{json, Value};

#[actix_web::test]
async fn add_then_duplicate_add_is_rejected() {
  let (state, store) = memory_state();
  let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &state))).await;

  let req = test::TestRequest::post()
    .uri("/api/goods/5/cart")
    .set_json(json!({ "quantity": 2 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "result": "success" }));

  let req = test::TestRequest::post()
    .uri("/api/goods/5/cart")
    .set_json(json!({ "quantity": 7 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], false);
  assert_eq!(body["errorMessage"], "You already have a cart item with that goods id");

  assert_eq!(store.find_cart_line(5).await.unwrap().unwrap().quantity, 2);
}

#[actix_web::test]
async fn update_with_zero_quantity_fails_without_change() {
  let (state, store) = memory_state();
  store.insert_cart_line(5, 2).await.unwrap();
  let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &state))).await;

  let req = test::TestRequest::put()
    .uri("/api/goods/5/cart")
    .set_json(json!({ "quantity": 0 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], false);
  assert_eq!(body["errorMessage"], "Quantity must be at least 1");

  assert_eq!(store.find_cart_line(5).await.unwrap().unwrap().quantity, 2);
}

#[actix_web::test]
async fn update_changes_quantity_of_existing_line() {
  let (state, store) = memory_state();
  store.insert_cart_line(5, 2).await.unwrap();
  let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &state))).await;

  let req = test::TestRequest::put()
    .uri("/api/goods/5/cart")
    .set_json(json!({ "quantity": 3 }))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!({ "result": "success", "success": true }));
  assert_eq!(store.find_cart_line(5).await.unwrap().unwrap().quantity, 3);
}

#[actix_web::test]
async fn update_of_missing_line_reports_success_and_writes_nothing() {
  let (state, store) = memory_state();
  let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &state))).await;

  let req = test::TestRequest::put()
    .uri("/api/goods/123/cart")
    .set_json(json!({ "quantity": 3 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "result": "success", "success": true }));
  assert!(store.list_cart_lines().await.unwrap().is_empty());
}

#[actix_web::test]
async fn delete_removes_line_from_listing_and_repeats_succeed() {
  let (state, store) = memory_state();
  store.insert_cart_line(5, 2).await.unwrap();
  store.insert_cart_line(6, 1).await.unwrap();
  let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &state))).await;

  for _ in 0..2 {
    let req = test::TestRequest::delete().uri("/api/goods/5/cart").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "result": "success", "success": true }));
  }

  let req = test::TestRequest::get().uri("/api/goods/carts").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  let carts = body["carts"].as_array().unwrap();
  assert_eq!(carts.len(), 1);
  assert_eq!(carts[0]["quantity"], 1);
}

#[actix_web::test]
async fn carts_listing_joins_persisted_goods() {
  let (state, store) = memory_state();
  let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &state))).await;

  let req = test::TestRequest::post()
    .uri("/api/goods")
    .set_json(goods_payload(20))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

  for (goods_id, quantity) in [(20, 4), (21, 1)] {
    let req = test::TestRequest::post()
      .uri(&format!("/api/goods/{}/cart", goods_id))
      .set_json(json!({ "quantity": quantity }))
      .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
  }

  let req = test::TestRequest::get().uri("/api/goods/carts").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  let carts = body["carts"].as_array().expect("carts array");
  assert_eq!(carts.len(), 2);

  assert_eq!(carts[0]["quantity"], 4);
  assert_eq!(carts[0]["goods"], goods_payload(20));

  // Goods 21 was never persisted: the line is listed without a goods field.
  assert_eq!(carts[1], json!({ "quantity": 1 }));
  assert_eq!(store.find_goods_by_ids(&[20, 21]).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn carts_listing_is_empty_for_an_empty_cart() {
  let (state, _store) = memory_state();
  let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &state))).await;

  let req = test::TestRequest::get().uri("/api/goods/carts").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body, json!({ "carts": [] }));
}

#[actix_web::test]
async fn non_numeric_cart_id_is_invalid_argument() {
  let (state, store) = memory_state();
  let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &state))).await;

  let req = test::TestRequest::post()
    .uri("/api/goods/abc/cart")
    .set_json(json!({ "quantity": 1 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["errorMessage"], "Invalid goods id 'abc'");

  let req = test::TestRequest::delete().uri("/api/goods/abc/cart").to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
  assert!(store.list_cart_lines().await.unwrap().is_empty());
}

#[actix_web::test]
async fn cart_body_without_quantity_is_rejected() {
  let (state, store) = memory_state();
  let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, &state))).await;

  let req = test::TestRequest::put()
    .uri("/api/goods/5/cart")
    .set_json(json!({ "qty": 2 }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["success"], false);
  assert!(store.list_cart_lines().await.unwrap().is_empty());
}

//! End-to-end scenarios through the router, backed by in-memory SQLite.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use bizup_api::{build_router, AppState};
use bizup_infrastructure::{create_memory_pool, run_migrations};
use bizup_shared::config::AppConfig;

const BOUNDARY: &str = "bizup-test-boundary";

async fn app() -> Router {
    let pool = create_memory_pool().await.unwrap();
    run_migrations(&pool).await.unwrap();
    let config = AppConfig::from_defaults().unwrap();
    build_router(AppState::new(pool, config).unwrap())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn csv_upload(mode: &str, csv: &str) -> Request<Body> {
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"menu.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n{csv}\r\n--{b}--\r\n",
        b = BOUNDARY,
        csv = csv
    );
    Request::builder()
        .method(Method::POST)
        .uri(format!("/api/v1/menus/upload-csv?mode={}", mode))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn sales(events: Value) -> Request<Body> {
    json_request(Method::POST, "/api/v1/sales/receive", json!({ "sales": events }))
}

#[tokio::test]
async fn banner_and_health() {
    let app = app().await;

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "BIZUP API");

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn admin_login() {
    let app = app().await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/auth/login",
            json!({"username": "admin", "password": "bizup1234"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["access_token"], "bizup-token-admin");
    assert_eq!(body["token_type"], "bearer");

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/auth/login",
            json!({"username": "admin", "password": "nope"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn inventory_lifecycle() {
    let app = app().await;
    let beans = json!({
        "name": "Beans", "category": "Coffee", "quantity": 3.0,
        "unit": "kg", "min_quantity": 5.0, "price": 20000.0
    });

    let (status, created) = send(&app, json_request(Method::POST, "/api/v1/inventory", beans.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "LOW");
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send(&app, json_request(Method::POST, "/api/v1/inventory", beans)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, listed) = send(&app, get("/api/v1/inventory?search=coff")).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (_, stats) = send(&app, get("/api/v1/inventory/stats")).await;
    assert_eq!(stats, json!({"total_items": 1, "low_stock_count": 1, "out_of_stock_count": 0}));

    let (status, updated) = send(
        &app,
        json_request(Method::PUT, &format!("/api/v1/inventory/{}", id), json!({"quantity": 0.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "OUT_OF_STOCK");

    let (_, out) = send(&app, get("/api/v1/out-of-stock")).await;
    assert_eq!(out[0]["name"], "Beans");

    let (status, restocked) = send(
        &app,
        Request::builder()
            .method(Method::POST)
            .uri(format!("/api/v1/out-of-stock/{}/restock?quantity=12", id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(restocked["item"]["quantity"], 12.0);
    assert_eq!(restocked["item"]["status"], "NORMAL");

    let (status, _) = send(&app, delete(&format!("/api/v1/inventory/{}", id))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send(&app, get(&format!("/api/v1/inventory/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn upload_then_sell() {
    let app = app().await;

    let (status, report) = send(&app, csv_upload("add", "Latte,Milk-20,Sugar-5\nMocha,Milk-30")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["success"], true);
    assert_eq!(report["mode"], "add");
    assert_eq!(report["menus_created"], 2);
    assert_eq!(report["ingredients_registered"], 2);

    let (_, menus) = send(&app, get("/api/v1/menus")).await;
    assert_eq!(menus.as_array().unwrap().len(), 2);

    let (status, body) = send(
        &app,
        sales(json!([
            {"menu_name": "Latte", "quantity": 2, "timestamp": "2024-03-01T10:00:00"},
            {"menu_name": "Frappe", "quantity": 1, "timestamp": "2024-03-01T10:01:00"}
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["status"], "success");
    assert_eq!(results[0]["deducted_items"][0]["ingredient"], "Milk");
    assert_eq!(results[0]["deducted_items"][0]["remaining"], 60.0);
    assert_eq!(results[1]["status"], "error");

    let (_, milk) = send(&app, get("/api/v1/inventory?search=Milk")).await;
    assert_eq!(milk[0]["quantity"], 60.0);
}

#[tokio::test]
async fn reset_upload_blocks_sales_until_configured() {
    let app = app().await;
    send(&app, csv_upload("add", "Latte,Milk-20")).await;

    let (status, report) = send(&app, csv_upload("reset", "Tea,Leaf-5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["mode"], "reset");
    assert_eq!(report["total_inventory_count"], 1);

    let (status, body) = send(
        &app,
        sales(json!([{"menu_name": "Tea", "quantity": 1, "timestamp": ""}])),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    let (_, items) = send(&app, get("/api/v1/inventory")).await;
    let leaf = &items[0];
    assert_eq!(leaf["name"], "Leaf");
    assert_eq!(leaf["quantity"], 0.0);
    let id = leaf["id"].as_i64().unwrap();

    send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/v1/inventory/{}", id),
            json!({"category": "Tea", "unit": "g", "quantity": 50.0, "min_quantity": 10.0}),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        sales(json!([{"menu_name": "Tea", "quantity": 1, "timestamp": ""}])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["status"], "success");
}

#[tokio::test]
async fn invalid_sales_and_uploads_are_rejected() {
    let app = app().await;

    let (status, _) = send(
        &app,
        sales(json!([{"menu_name": "Latte", "quantity": 0, "timestamp": ""}])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, csv_upload("add", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["menus_count"], 0);
}

#[tokio::test]
async fn order_recommendation_and_purchase() {
    let app = app().await;
    let (_, created) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/inventory",
            json!({"name": "Cups", "category": "Supplies", "quantity": 0.0,
                   "unit": "ea", "min_quantity": 30.0, "price": 100.0}),
        ),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (_, recommendations) = send(&app, get("/api/v1/orders/recommendations")).await;
    assert_eq!(recommendations[0]["priority"], "high");

    let (status, order) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/orders",
            json!({"items": [
                {"inventory_item_id": id, "quantity": 40.0, "priority": "high"},
                {"inventory_item_id": 9999, "quantity": 1.0}
            ]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "pending");
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    assert_eq!(order["total_cost"], 4000.0);
}

#[tokio::test]
async fn staff_contracts_and_store() {
    let app = app().await;

    let (status, employee) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/employees",
            json!({"name": "Kim", "role": "Barista", "phone": "010-1234-5678"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(employee["status"], "active");
    let employee_id = employee["id"].as_i64().unwrap();

    let contract = |employee_id: i64, signature: &str| {
        json!({
            "employee_id": employee_id,
            "employer_name": "Our Cafe",
            "contract_date": "2024-03-01",
            "employee_name": "Kim",
            "employee_address": "Seoul",
            "employee_phone": "010-1234-5678",
            "employee_signature": signature
        })
    };

    let (status, _) = send(
        &app,
        json_request(Method::POST, "/api/v1/contracts", contract(employee_id, "short")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let signature = format!("data:image/png;base64,{}", "A".repeat(120));
    let (status, _) = send(
        &app,
        json_request(Method::POST, "/api/v1/contracts", contract(9999, &signature)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        json_request(Method::POST, "/api/v1/contracts", contract(employee_id, &signature)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, listed) = send(&app, get(&format!("/api/v1/contracts/employee/{}", employee_id))).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (_, profile) = send(&app, get("/api/v1/store")).await;
    assert_eq!(profile["name"], "Our Cafe");

    let (_, flags) = send(
        &app,
        json_request(Method::PUT, "/api/v1/store/notifications", json!({"daily_report": true})),
    )
    .await;
    assert_eq!(flags["daily_report"], true);
    assert_eq!(flags["low_stock"], true);
}

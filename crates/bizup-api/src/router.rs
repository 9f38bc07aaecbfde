//! Route table

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;

use bizup_shared::config::CorsSettings;

use crate::handlers::{
    auth, contracts, employees, health, inventory, menus, orders, out_of_stock, sales, store,
};
use crate::state::AppState;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let prefix = state.config.app.api_prefix.clone();

    Router::new()
        .route("/", get(health::banner))
        .route("/health", get(health::health_check))
        .nest(&prefix, api_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        // Inventory
        .route("/inventory", get(inventory::list).post(inventory::create))
        .route("/inventory/stats", get(inventory::stats))
        .route("/inventory/low-stock", get(inventory::low_stock))
        .route(
            "/inventory/{id}",
            get(inventory::get)
                .put(inventory::update)
                .delete(inventory::delete),
        )
        // Out of stock
        .route("/out-of-stock", get(out_of_stock::items))
        .route("/out-of-stock/menus", get(out_of_stock::menus))
        .route("/out-of-stock/{id}/restock", post(out_of_stock::restock))
        // Orders
        .route("/orders", post(orders::create))
        .route("/orders/recommendations", get(orders::recommendations))
        // Staff
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/{id}",
            get(employees::get)
                .put(employees::update)
                .delete(employees::delete),
        )
        .route("/contracts", get(contracts::list).post(contracts::create))
        .route("/contracts/employee/{id}", get(contracts::list_for_employee))
        .route(
            "/contracts/{id}",
            get(contracts::get)
                .put(contracts::update)
                .delete(contracts::delete),
        )
        // Store
        .route("/store", get(store::get_profile).put(store::update_profile))
        .route(
            "/store/notifications",
            get(store::get_notifications).put(store::update_notifications),
        )
        // Menus and sales
        .route("/menus", get(menus::list))
        .route("/menus/upload-csv", post(menus::upload_csv))
        // GET takes the menu name, DELETE the menu id
        .route("/menus/{menu}", get(menus::get).delete(menus::delete))
        .route("/sales/receive", post(sales::receive))
}

/// Empty origin list means any origin.
fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    if settings.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/*
 * Responsibility
 * - URL 構造を定義
 * - /products, /session, /users, /health
 * - 認可が必要な範囲は handler 側の AuthCtx extractor で掛ける
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::handlers::{
    health::health,
    products::{create_product, delete_product, get_product, list_products, update_product},
    session::login,
    users::register,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .route("/session", post(login))
        .route("/users", post(register))
}

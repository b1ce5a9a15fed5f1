/*
 * Responsibility
 * - /products 系 CRUD handler
 * - 変更系 (create/update/delete) は AuthCtx で認可を通してから store に触れる
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::dto::products::{ProductData, ProductResponse},
    api::extractors::AuthCtx,
    error::AppError,
    state::AppState,
};

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<ProductResponse>> {
    let products = state.products.list();

    Json(products.into_iter().map(ProductResponse::from).collect())
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .products
        .get(id)
        .ok_or_else(|| AppError::not_found("product"))?;

    Ok(Json(product.into()))
}

pub async fn create_product(
    State(state): State<AppState>,
    _auth: AuthCtx,
    Json(req): Json<ProductData>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let fields = req.validate().map_err(AppError::validation)?;

    let product = state.products.create(fields);

    Ok((StatusCode::CREATED, Json(product.into())))
}

pub async fn update_product(
    State(state): State<AppState>,
    _auth: AuthCtx,
    Path(id): Path<i64>,
    Json(req): Json<ProductData>,
) -> Result<Json<ProductResponse>, AppError> {
    let fields = req.validate().map_err(AppError::validation)?;

    let product = state
        .products
        .update(id, fields)
        .ok_or_else(|| AppError::not_found("product"))?;

    Ok(Json(product.into()))
}

pub async fn delete_product(
    State(state): State<AppState>,
    _auth: AuthCtx,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.products.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("product"))
    }
}

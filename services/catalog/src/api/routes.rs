//! API 路由

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tienda_bootstrap::MetricsRecorder;
use tienda_domain_core::Product;
use tienda_errors::AppError;

use super::ApiError;
use crate::application::CatalogService;

/// 商品路由
pub fn api_routes(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product_by_id))
        .with_state(service)
}

async fn get_product_by_id(
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = service
        .get_product_by_id(id.into())
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;

    Ok(Json(product))
}

async fn list_products(
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(service.list_products().await?))
}

/// 运维路由（健康检查与 metrics）
pub fn ops_routes(metrics: Arc<MetricsRecorder>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(render_metrics))
        .with_state(metrics)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
}

async fn readiness_check() -> Json<ReadinessResponse> {
    // 存储在进程内，无外部连接需要探测
    Json(ReadinessResponse { ready: true })
}

async fn render_metrics(State(metrics): State<Arc<MetricsRecorder>>) -> String {
    metrics.render()
}

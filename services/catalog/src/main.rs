//! Catalog Service - 商品目录服务入口
//!
//! 组装存储、上游来源与 HTTP API

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use catalog::api;
use catalog::application::CatalogService;
use catalog::infrastructure::persistence::InMemoryProductStore;
use catalog::infrastructure::upstream::{HttpCatalogClient, StubCatalogClient};
use tienda_bootstrap::{MetricsRecorder, init_runtime, shutdown_signal};
use tienda_config::AppConfig;
use tienda_domain_core::{Price, Product};
use tienda_ports::{ProductSource, ProductStore};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化运行时
    init_runtime(&config);

    info!("Initializing Catalog Service...");

    // 初始化 Metrics 记录器
    let metrics = Arc::new(MetricsRecorder::new());

    // 初始化本地存储并写入预置记录
    let store = Arc::new(InMemoryProductStore::new());
    for seed in &config.catalog.seed {
        let product = Product::new(seed.id, seed.name.clone(), Price::from_decimal(seed.price));
        store.insert(product).await?;
    }
    if !config.catalog.seed.is_empty() {
        info!(count = config.catalog.seed.len(), "Store seeded");
    }

    // 选择上游来源：配置了 endpoint 用 HTTP 客户端，否则用桩实现
    let upstream: Arc<dyn ProductSource> = match &config.catalog.upstream.endpoint {
        Some(endpoint) => {
            info!(%endpoint, "Using HTTP upstream catalog");
            Arc::new(HttpCatalogClient::new(
                endpoint.clone(),
                Duration::from_secs(config.catalog.upstream.timeout_secs),
            )?)
        }
        None => {
            info!("Using stub upstream catalog");
            Arc::new(StubCatalogClient::new(Price::from_decimal(
                config.catalog.upstream.placeholder_price,
            )))
        }
    };

    let service = Arc::new(CatalogService::new(store, upstream));

    // 构建路由
    let app = api::api_routes(service)
        .merge(api::ops_routes(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!(%addr, "Starting catalog service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

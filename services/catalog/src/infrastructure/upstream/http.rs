//! 上游目录 HTTP 客户端

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tienda_domain_core::{Product, ProductId};
use tienda_errors::{AppError, AppResult};
use tienda_ports::ProductSource;
use tracing::debug;

/// 通过 HTTP 访问真实上游目录的客户端
///
/// 上游 404 映射为 `Ok(None)`，其余非 2xx 状态与传输错误
/// 映射为 `AppError::ExternalService`。不做重试。
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build upstream HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl ProductSource for HttpCatalogClient {
    async fn fetch(&self, id: ProductId) -> AppResult<Option<Product>> {
        let url = format!("{}/products/{}", self.base_url, id);
        debug!(%url, "Fetching product from upstream");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Upstream request failed: {}", e)))?;

        // 上游 404 表示记录不存在，不是故障
        if response.status() == StatusCode::NOT_FOUND {
            debug!(%id, "Upstream has no such product");
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Upstream returned status {}",
                response.status()
            )));
        }

        let product = response.json::<Product>().await.map_err(|e| {
            AppError::external_service(format!("Failed to decode upstream product: {}", e))
        })?;

        Ok(Some(product))
    }
}

#[cfg(test)]
mod tests {
    use tienda_domain_core::Price;

    use super::*;

    fn client(server: &mockito::Server) -> HttpCatalogClient {
        HttpCatalogClient::new(server.url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_decodes_upstream_product() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/products/5")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":5,"name":"External Product 5","price":99.99}"#)
            .create_async()
            .await;

        let product = client(&server)
            .fetch(ProductId::new(5))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(product.id, ProductId::new(5));
        assert_eq!(product.name, "External Product 5");
        assert_eq!(product.price, Price::from_decimal(99.99));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upstream_404_maps_to_absent() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/products/6")
            .with_status(404)
            .create_async()
            .await;

        let found = client(&server).fetch(ProductId::new(6)).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_not_absence() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/products/7")
            .with_status(503)
            .create_async()
            .await;

        let result = client(&server).fetch(ProductId::new(7)).await;

        assert!(matches!(result, Err(AppError::ExternalService(_))));
    }
}

//! 上游目录桩实现

use async_trait::async_trait;
use tienda_domain_core::{Price, Product, ProductId};
use tienda_errors::AppResult;
use tienda_ports::ProductSource;
use tracing::debug;

/// 模拟上游目录的桩实现
///
/// 总是合成一条记录：名称由 id 模板化，价格为配置的占位价。
/// 从不返回"不存在"。
pub struct StubCatalogClient {
    placeholder_price: Price,
}

impl StubCatalogClient {
    pub fn new(placeholder_price: Price) -> Self {
        Self { placeholder_price }
    }
}

#[async_trait]
impl ProductSource for StubCatalogClient {
    async fn fetch(&self, id: ProductId) -> AppResult<Option<Product>> {
        debug!(%id, "Synthesizing upstream product");

        Ok(Some(Product::new(
            id,
            format!("External Product {}", id),
            self.placeholder_price,
        )))
    }
}

//! 内存商品存储

use async_trait::async_trait;
use tienda_domain_core::{Product, ProductId};
use tienda_errors::AppResult;
use tienda_ports::ProductStore;
use tokio::sync::RwLock;

/// 内存实现的商品存储
///
/// 记录按写入顺序保存。不强制 id 唯一：重复写入全部保留，
/// 点查返回最先写入的一条。各操作单独并发安全，
/// 跨调用不保证原子性（如 check-then-insert）。
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get(&self, id: ProductId) -> AppResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn insert(&self, product: Product) -> AppResult<()> {
        self.products.write().await.push(product);
        Ok(())
    }
}

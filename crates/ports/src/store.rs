//! 商品存储接口

use async_trait::async_trait;
use tienda_domain_core::{Product, ProductId};
use tienda_errors::AppResult;

/// 本地商品存储接口
///
/// 查找时的权威来源：一旦某个 id 有记录，后续查找不再访问上游。
/// `insert` 不强制 id 唯一，重复写入的记录都可通过 `list` 取回。
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 根据 ID 查找，不存在时返回 `Ok(None)`
    async fn get(&self, id: ProductId) -> AppResult<Option<Product>>;

    /// 列出所有记录（按写入顺序）
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// 写入记录
    async fn insert(&self, product: Product) -> AppResult<()>;
}

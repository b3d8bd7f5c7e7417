//! 上游商品来源接口

use async_trait::async_trait;
use tienda_domain_core::{Product, ProductId};
use tienda_errors::AppResult;

/// 上游（较慢的外部）商品来源接口
///
/// 只在本地存储未命中时被访问。`Ok(None)` 表示上游没有该记录，
/// 传输层故障通过 `Err` 上抛，不与"不存在"混淆。
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// 根据 ID 从上游获取商品
    async fn fetch(&self, id: ProductId) -> AppResult<Option<Product>>;
}

//! 商品目录应用服务
//!
//! 读穿透查找的编排逻辑，自身不持有任何状态

use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, histogram};
use tienda_domain_core::{Product, ProductId};
use tienda_errors::AppResult;
use tienda_ports::{ProductSource, ProductStore};
use tracing::debug;

/// 商品目录服务
///
/// 查找顺序:
/// 1. 先查本地存储，命中则直接返回，不再访问上游
/// 2. 未命中时访问上游来源
/// 3. 上游返回记录则回写本地存储后返回
/// 4. 上游也没有则返回 `None`，不回写
///
/// 并发的同 id 未命中查找可能都走到上游并各自回写一次，
/// 产生的重复记录会出现在 `list_products` 结果中（已知竞态，
/// 未做 single-flight 去重）。
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
    upstream: Arc<dyn ProductSource>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ProductStore>, upstream: Arc<dyn ProductSource>) -> Self {
        Self { store, upstream }
    }

    /// 根据 ID 查询商品
    pub async fn get_product_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        let start = Instant::now();

        let result = self.lookup(id).await;

        // 记录指标
        match &result {
            Ok((_, outcome)) => {
                counter!("catalog_lookups_total", "outcome" => *outcome).increment(1);
            }
            Err(_) => {
                counter!("catalog_lookup_errors_total").increment(1);
            }
        }
        histogram!("catalog_lookup_duration_ms").record(start.elapsed().as_millis() as f64);

        result.map(|(product, _)| product)
    }

    async fn lookup(&self, id: ProductId) -> AppResult<(Option<Product>, &'static str)> {
        // 本地存储是权威来源，命中即短路
        if let Some(product) = self.store.get(id).await? {
            debug!(%id, "Store hit");
            return Ok((Some(product), "hit"));
        }

        debug!(%id, "Store miss, consulting upstream");
        match self.upstream.fetch(id).await? {
            Some(product) => {
                // 回写，后续同 id 查找不再访问上游
                self.store.insert(product.clone()).await?;
                Ok((Some(product), "fetched"))
            }
            None => Ok((None, "absent")),
        }
    }

    /// 列出所有已缓存/预置的商品
    ///
    /// 只读本地存储；从未单独查询过的上游记录不会出现在结果中
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.store.list().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tienda_domain_core::Price;
    use tienda_errors::AppError;
    use tokio::sync::Mutex;

    use super::*;

    fn product(id: i64, name: &str, price: f64) -> Product {
        Product::new(id, name, Price::from_decimal(price))
    }

    struct RecordingStore {
        products: Mutex<Vec<Product>>,
        inserts: AtomicUsize,
    }

    impl RecordingStore {
        fn empty() -> Self {
            Self::with(vec![])
        }

        fn with(products: Vec<Product>) -> Self {
            Self {
                products: Mutex::new(products),
                inserts: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProductStore for RecordingStore {
        async fn get(&self, id: ProductId) -> AppResult<Option<Product>> {
            let products = self.products.lock().await;
            Ok(products.iter().find(|p| p.id == id).cloned())
        }

        async fn list(&self) -> AppResult<Vec<Product>> {
            Ok(self.products.lock().await.clone())
        }

        async fn insert(&self, product: Product) -> AppResult<()> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            self.products.lock().await.push(product);
            Ok(())
        }
    }

    struct MockUpstream {
        product: Option<Product>,
        fetches: AtomicUsize,
    }

    impl MockUpstream {
        fn returning(product: Option<Product>) -> Self {
            Self {
                product,
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProductSource for MockUpstream {
        async fn fetch(&self, _id: ProductId) -> AppResult<Option<Product>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.product.clone())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl ProductStore for FailingStore {
        async fn get(&self, _id: ProductId) -> AppResult<Option<Product>> {
            Err(AppError::internal("store unavailable"))
        }

        async fn list(&self) -> AppResult<Vec<Product>> {
            Err(AppError::internal("store unavailable"))
        }

        async fn insert(&self, _product: Product) -> AppResult<()> {
            Err(AppError::internal("store unavailable"))
        }
    }

    #[tokio::test]
    async fn test_store_hit_short_circuits_upstream() {
        let cached = product(1, "Cached Product", 10.0);
        let store = Arc::new(RecordingStore::with(vec![cached.clone()]));
        let upstream = Arc::new(MockUpstream::returning(Some(product(1, "Stale Copy", 1.0))));

        let service = CatalogService::new(store.clone(), upstream.clone());

        let found = service
            .get_product_by_id(ProductId::new(1))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found, cached);
        assert_eq!(upstream.fetch_count(), 0);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_miss_fetches_and_writes_back() {
        let external = product(2, "External Product 2", 20.0);
        let store = Arc::new(RecordingStore::empty());
        let upstream = Arc::new(MockUpstream::returning(Some(external.clone())));

        let service = CatalogService::new(store.clone(), upstream.clone());

        let first = service
            .get_product_by_id(ProductId::new(2))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first, external);
        assert_eq!(upstream.fetch_count(), 1);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 1);

        // 第二次查找命中回写的记录，不再访问上游
        let second = service
            .get_product_by_id(ProductId::new(2))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.name, first.name);
        assert_eq!(second.price, first.price);
        assert_eq!(upstream.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_absent_everywhere_inserts_nothing() {
        let store = Arc::new(RecordingStore::empty());
        let upstream = Arc::new(MockUpstream::returning(None));

        let service = CatalogService::new(store.clone(), upstream.clone());

        let found = service.get_product_by_id(ProductId::new(3)).await.unwrap();

        assert!(found.is_none());
        assert_eq!(upstream.fetch_count(), 1);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 0);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_only_reflects_cached_records() {
        let seeded = vec![product(1, "Product 1", 10.0), product(2, "Product 2", 20.0)];
        let store = Arc::new(RecordingStore::with(seeded.clone()));
        let upstream = Arc::new(MockUpstream::returning(Some(product(9, "Elsewhere", 9.0))));

        let service = CatalogService::new(store, upstream.clone());

        let mut listed = service.list_products().await.unwrap();
        listed.sort_by_key(|p| p.id.0);
        assert_eq!(listed, seeded);
        assert_eq!(upstream.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_propagates_as_error() {
        let store = Arc::new(FailingStore);
        let upstream = Arc::new(MockUpstream::returning(None));

        let service = CatalogService::new(store, upstream.clone());

        let result = service.get_product_by_id(ProductId::new(1)).await;

        // 基础设施故障不折叠为"不存在"
        assert!(matches!(result, Err(AppError::Internal(_))));
        assert_eq!(upstream.fetch_count(), 0);
    }
}

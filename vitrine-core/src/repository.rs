use async_trait::async_trait;
use vitrine_catalog::Product;

use crate::CoreResult;

/// Repository trait for the product catalog (the authoritative record)
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// `Ok(None)` when no product has this id
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Product>>;

    /// Products sharing `category`, excluding `product_id`, at most `limit`
    async fn find_related(
        &self,
        product_id: &str,
        category: &str,
        limit: usize,
    ) -> CoreResult<Vec<Product>>;

    /// Keyword match, one page. `keyword` is lower-cased by the caller.
    async fn search(&self, keyword: &str, limit: usize, offset: usize) -> CoreResult<Vec<Product>>;

    /// Number of products matching `keyword`
    async fn count(&self, keyword: &str) -> CoreResult<usize>;
}

use std::sync::Arc;
use tracing::{error, info, warn};
use vitrine_core::{CoreResult, ProductRepository, SearchPage, SearchQuery};

/// Keyword search over the catalog. Results keep the store's order.
pub struct ProductSearchService {
    products: Arc<dyn ProductRepository>,
}

impl ProductSearchService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn search(&self, query: &SearchQuery) -> CoreResult<SearchPage> {
        info!(
            query = %query.query,
            limit = query.limit,
            offset = query.offset,
            "Starting product search"
        );

        if query.is_empty() {
            warn!("Empty search query provided");
            return Ok(SearchPage::empty(query));
        }

        let total = self.products.count(&query.keyword).await.map_err(|e| {
            error!(error = %e, "Failed to count results");
            e
        })?;

        if total == 0 {
            info!(query = %query.keyword, "No products found");
            return Ok(SearchPage::empty(query));
        }

        let products = self
            .products
            .search(&query.keyword, query.limit, query.offset)
            .await
            .map_err(|e| {
                error!(error = %e, "Search failed");
                e
            })?;

        info!(
            query = %query.keyword,
            results = products.len(),
            total,
            "Search completed"
        );

        Ok(SearchPage {
            query: query.query.clone(),
            total,
            limit: query.limit,
            offset: query.offset,
            products,
        })
    }
}

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use vitrine_catalog::{Product, ProductError};
use vitrine_core::{CoreError, CoreResult, ProductRepository};

use crate::dataset::load_records;
use crate::latency::SimulatedLatency;

/// Product catalog backed by a JSON file, held in memory in file order
pub struct JsonProductRepository {
    products: Vec<Product>,
    latency: SimulatedLatency,
}

impl JsonProductRepository {
    pub async fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let products = load_records(path).await?;
        Self::from_records(products)
    }

    /// Builds the catalog, rejecting duplicate ids and negative prices
    pub fn from_records(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product
                .validate()
                .map_err(|e| CoreError::ValidationError(e.to_string()))?;
            if !seen.insert(product.id.as_str()) {
                return Err(CoreError::ValidationError(
                    ProductError::DuplicateId(product.id.clone()).to_string(),
                ));
            }
        }

        Ok(Self {
            products,
            latency: SimulatedLatency::default(),
        })
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn matching<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.matches_keyword(keyword))
    }
}

#[async_trait]
impl ProductRepository for JsonProductRepository {
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Product>> {
        self.latency.pause().await;
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_related(
        &self,
        product_id: &str,
        category: &str,
        limit: usize,
    ) -> CoreResult<Vec<Product>> {
        self.latency.pause().await;
        Ok(self
            .products
            .iter()
            .filter(|p| p.id != product_id && p.category == category)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn search(&self, keyword: &str, limit: usize, offset: usize) -> CoreResult<Vec<Product>> {
        self.latency.pause().await;
        let keyword = keyword.to_lowercase();
        Ok(self
            .matching(&keyword)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, keyword: &str) -> CoreResult<usize> {
        self.latency.pause().await;
        let keyword = keyword.to_lowercase();
        Ok(self.matching(&keyword).count())
    }
}

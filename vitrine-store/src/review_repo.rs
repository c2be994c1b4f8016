use async_trait::async_trait;
use std::path::Path;
use vitrine_core::{CoreResult, ReviewClient};
use vitrine_shared::{Review, ReviewSummary};

use crate::dataset::load_records;
use crate::latency::SimulatedLatency;

/// Review service backed by a JSON file
pub struct JsonReviewClient {
    reviews: Vec<Review>,
    latency: SimulatedLatency,
}

impl JsonReviewClient {
    pub async fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        Ok(Self::from_records(load_records(path).await?))
    }

    pub fn from_records(reviews: Vec<Review>) -> Self {
        Self {
            reviews,
            latency: SimulatedLatency::default(),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl ReviewClient for JsonReviewClient {
    async fn get_by_product_id(&self, product_id: &str) -> CoreResult<Vec<Review>> {
        self.latency.pause().await;
        Ok(self
            .reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn get_average_rating(&self, product_id: &str) -> CoreResult<f64> {
        let reviews = self.get_by_product_id(product_id).await?;
        Ok(ReviewSummary::from_reviews(&reviews).average_rating)
    }

    async fn get_total_count(&self, product_id: &str) -> CoreResult<usize> {
        Ok(self.get_by_product_id(product_id).await?.len())
    }
}

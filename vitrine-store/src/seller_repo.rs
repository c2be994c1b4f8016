use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;
use vitrine_core::{CoreError, CoreResult, SellerClient};
use vitrine_shared::Seller;

use crate::dataset::load_records;
use crate::latency::SimulatedLatency;

/// Seller service backed by a JSON file
pub struct JsonSellerClient {
    sellers: HashMap<String, Seller>,
    latency: SimulatedLatency,
}

impl JsonSellerClient {
    pub async fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        Ok(Self::from_records(load_records(path).await?))
    }

    pub fn from_records(sellers: Vec<Seller>) -> Self {
        Self {
            sellers: sellers.into_iter().map(|s| (s.id.clone(), s)).collect(),
            latency: SimulatedLatency::default(),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl SellerClient for JsonSellerClient {
    async fn get_by_id(&self, seller_id: &str) -> CoreResult<Seller> {
        self.latency.pause().await;
        debug!(seller_id, "Seller lookup");
        self.sellers
            .get(seller_id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("seller {}", seller_id)))
    }
}

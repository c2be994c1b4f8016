use async_trait::async_trait;
use vitrine_shared::{Question, Review, Seller};

use crate::CoreResult;

/// Seller service
#[async_trait]
pub trait SellerClient: Send + Sync {
    async fn get_by_id(&self, seller_id: &str) -> CoreResult<Seller>;
}

/// Review service
#[async_trait]
pub trait ReviewClient: Send + Sync {
    async fn get_by_product_id(&self, product_id: &str) -> CoreResult<Vec<Review>>;

    async fn get_average_rating(&self, product_id: &str) -> CoreResult<f64>;

    async fn get_total_count(&self, product_id: &str) -> CoreResult<usize>;
}

/// Questions & answers service
#[async_trait]
pub trait QuestionClient: Send + Sync {
    async fn get_by_product_id(&self, product_id: &str, limit: usize) -> CoreResult<Vec<Question>>;
}

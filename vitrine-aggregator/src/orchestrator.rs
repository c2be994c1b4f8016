use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;
use vitrine_catalog::ShippingCalculator;
use vitrine_core::{CoreError, ProductRepository, QuestionClient, ReviewClient, SellerClient};

use crate::assembler::assemble;
use crate::fallback::FallbackTable;
use crate::fanout::{AggregationSettings, EnrichmentRequest, FanOut};
use crate::models::{AggregationStage, ProductDetails};

#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product lookup failed: {0}")]
    Primary(#[source] CoreError),
}

/// Builds the product page: primary record first, then the concurrent enrichments
pub struct ProductAggregator {
    products: Arc<dyn ProductRepository>,
    fanout: FanOut,
    shipping: ShippingCalculator,
}

impl ProductAggregator {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        sellers: Arc<dyn SellerClient>,
        reviews: Arc<dyn ReviewClient>,
        questions: Arc<dyn QuestionClient>,
    ) -> Self {
        Self {
            fanout: FanOut::new(products.clone(), sellers, reviews, questions),
            products,
            shipping: ShippingCalculator::default(),
        }
    }

    pub fn with_fallbacks(mut self, fallbacks: FallbackTable) -> Self {
        self.fanout = self.fanout.with_fallbacks(fallbacks);
        self
    }

    pub fn with_settings(mut self, settings: AggregationSettings) -> Self {
        self.fanout = self.fanout.with_settings(settings);
        self
    }

    pub fn with_shipping(mut self, shipping: ShippingCalculator) -> Self {
        self.shipping = shipping;
        self
    }

    pub async fn get_product_details(&self, product_id: &str) -> Result<ProductDetails, AggregationError> {
        let span = info_span!("aggregation", request_id = %Uuid::new_v4(), product_id);
        self.aggregate(product_id).instrument(span).await
    }

    async fn aggregate(&self, product_id: &str) -> Result<ProductDetails, AggregationError> {
        info!("Starting product aggregation");
        let start = Instant::now();
        let mut stage = AggregationStage::Init;

        advance(&mut stage, AggregationStage::FetchingPrimary);
        let product = match self.products.find_by_id(product_id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                advance(&mut stage, AggregationStage::NotFound);
                info!("Product not found");
                return Err(AggregationError::NotFound(product_id.to_string()));
            }
            Err(e) => {
                error!(error = %e, "Product lookup failed");
                return Err(AggregationError::Primary(e));
            }
        };

        advance(&mut stage, AggregationStage::FanningOut);
        let pending = self.fanout.dispatch(&EnrichmentRequest::for_product(&product));

        advance(&mut stage, AggregationStage::Joining);
        let bundle = pending.join().await;

        advance(&mut stage, AggregationStage::ComputingShipping);
        let shipping = self.shipping.calculate(product.price);

        advance(&mut stage, AggregationStage::Assembling);
        let details = assemble(product, shipping, bundle);

        advance(&mut stage, AggregationStage::Done);
        info!(
            duration_ms = start.elapsed().as_millis() as u64,
            seller = %details.seller.id,
            reviews = details.reviews.len(),
            questions = details.questions.len(),
            related = details.related_products.len(),
            "Aggregation completed"
        );

        Ok(details)
    }
}

fn advance(stage: &mut AggregationStage, next: AggregationStage) {
    debug_assert!(stage.can_transition_to(next), "{} -> {}", stage, next);
    debug!(from = %stage, to = %next, "Stage transition");
    *stage = next;
}

use std::sync::Arc;
use tracing::info;
use vitrine_aggregator::{AggregationSettings, ProductAggregator, ProductSearchService};
use vitrine_catalog::ShippingCalculator;
use vitrine_core::{CoreResult, ProductRepository, QuestionClient, ReviewClient, SellerClient};
use vitrine_store::app_config::{AggregationConfig, Config};
use vitrine_store::{JsonProductRepository, JsonQuestionClient, JsonReviewClient, JsonSellerClient, SimulatedLatency};

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<ProductAggregator>,
    pub search: Arc<ProductSearchService>,
    pub shipping: ShippingCalculator,
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        sellers: Arc<dyn SellerClient>,
        reviews: Arc<dyn ReviewClient>,
        questions: Arc<dyn QuestionClient>,
        settings: AggregationSettings,
        shipping: ShippingCalculator,
    ) -> Self {
        let aggregator = ProductAggregator::new(products.clone(), sellers, reviews, questions)
            .with_settings(settings)
            .with_shipping(shipping.clone());

        Self {
            aggregator: Arc::new(aggregator),
            search: Arc::new(ProductSearchService::new(products)),
            shipping,
        }
    }

    /// Loads the JSON datasets named in `config` and wires the services over them
    pub async fn from_config(config: &Config) -> CoreResult<Self> {
        let data = &config.data;
        let latency = &config.latency;

        let (products, sellers, reviews, questions) = tokio::try_join!(
            JsonProductRepository::load(&data.products_file),
            JsonSellerClient::load(&data.sellers_file),
            JsonReviewClient::load(&data.reviews_file),
            JsonQuestionClient::load(&data.questions_file),
        )?;
        info!(products = products.len(), "Datasets loaded");

        Ok(Self::new(
            Arc::new(products.with_latency(SimulatedLatency::from_millis(latency.products_ms))),
            Arc::new(sellers.with_latency(SimulatedLatency::from_millis(latency.seller_ms))),
            Arc::new(reviews.with_latency(SimulatedLatency::from_millis(latency.reviews_ms))),
            Arc::new(questions.with_latency(SimulatedLatency::from_millis(latency.questions_ms))),
            aggregation_settings(&config.aggregation),
            ShippingCalculator::new(config.shipping.clone()),
        ))
    }
}

fn aggregation_settings(config: &AggregationConfig) -> AggregationSettings {
    AggregationSettings {
        question_limit: config.question_limit,
        related_limit: config.related_limit,
        enrichment_timeout: config.enrichment_timeout(),
    }
}

use serde::Serialize;
use std::fmt;
use vitrine_catalog::{Product, ShippingPolicy};
use vitrine_shared::{Question, Review, ReviewSummary, Seller};

/// Everything the product page needs, assembled once per request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductDetails {
    pub product: Product,
    pub seller: Seller,
    pub shipping: ShippingPolicy,
    pub reviews: Vec<Review>,
    pub review_summary: ReviewSummary,
    pub questions: Vec<Question>,
    pub related_products: Vec<Product>,
}

/// Stages of a single aggregation request
///
/// `Init → FetchingPrimary → {NotFound | FanningOut → Joining → ComputingShipping → Assembling → Done}`
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationStage {
    Init,
    FetchingPrimary,
    NotFound,
    FanningOut,
    Joining,
    ComputingShipping,
    Assembling,
    Done,
}

impl AggregationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationStage::Init => "init",
            AggregationStage::FetchingPrimary => "fetching_primary",
            AggregationStage::NotFound => "not_found",
            AggregationStage::FanningOut => "fanning_out",
            AggregationStage::Joining => "joining",
            AggregationStage::ComputingShipping => "computing_shipping",
            AggregationStage::Assembling => "assembling",
            AggregationStage::Done => "done",
        }
    }

    /// Whether `next` is a legal successor. There are no retries and no re-entry.
    pub fn can_transition_to(&self, next: AggregationStage) -> bool {
        use AggregationStage::*;
        matches!(
            (self, next),
            (Init, FetchingPrimary)
                | (FetchingPrimary, NotFound)
                | (FetchingPrimary, FanningOut)
                | (FanningOut, Joining)
                | (Joining, ComputingShipping)
                | (ComputingShipping, Assembling)
                | (Assembling, Done)
        )
    }
}

impl fmt::Display for AggregationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub user_name: String,
    /// Expected 1-5, not enforced
    pub rating: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub helpful_count: u32,
}

/// Aggregate figures over a product's reviews, computed per request
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewSummary {
    pub average_rating: f64,
    pub total_reviews: usize,
}

impl ReviewSummary {
    pub fn new(average_rating: f64, total_reviews: usize) -> Self {
        Self {
            average_rating,
            total_reviews,
        }
    }

    /// Arithmetic mean of the ratings; zero reviews yield 0.0
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::default();
        }

        let sum: i64 = reviews.iter().map(|r| r.rating as i64).sum();
        Self {
            average_rating: sum as f64 / reviews.len() as f64,
            total_reviews: reviews.len(),
        }
    }
}

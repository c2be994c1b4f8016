use serde::{Deserialize, Serialize};

/// Seller profile as returned by the seller service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seller {
    pub id: String,
    pub nickname: String,
    pub reputation_level: String,
    pub total_sales: u64,
    pub reputation_score: f64,
    pub years_active: u32,
    pub is_official_store: bool,
}

impl Seller {
    /// Placeholder seller shown when the seller service cannot answer
    pub fn placeholder() -> Self {
        Self {
            id: "default".to_string(),
            nickname: "Vendedor".to_string(),
            reputation_level: "green".to_string(),
            total_sales: 0,
            reputation_score: 0.0,
            years_active: 0,
            is_official_store: false,
        }
    }
}

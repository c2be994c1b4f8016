use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name/value pair shown in the product's technical sheet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Core product structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u32>,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub available_quantity: u32,
    #[serde(default)]
    pub sold_quantity: u32,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    /// Seller owning the listing. Datasets without it resolve the seller by product id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Key used to look up the seller of this listing
    pub fn seller_key(&self) -> &str {
        self.seller_id.as_deref().unwrap_or(&self.id)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive keyword match over title, description, category and brand.
    /// `keyword` must already be lower-cased.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        [&self.title, &self.description, &self.category, &self.brand]
            .iter()
            .any(|field| field.to_lowercase().contains(keyword))
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.trim().is_empty() {
            return Err(ProductError::MissingId);
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice {
                id: self.id.clone(),
                price: self.price,
            });
        }
        Ok(())
    }
}

/// Product-related errors
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product without id")]
    MissingId,

    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice { id: String, price: f64 },

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        serde_json::from_str(
            r#"
            {
                "id": "MLA1",
                "title": "Samsung Galaxy A55 5G",
                "description": "Pantalla Super AMOLED de 6.6 pulgadas",
                "price": 45999.0,
                "condition": "new",
                "images": ["a.jpg", "b.jpg"],
                "category": "celulares",
                "brand": "Samsung",
                "attributes": [{ "name": "Memoria", "value": "256 GB" }]
            }
            "#,
        )
        .expect("Failed to deserialize")
    }

    #[test]
    fn test_keyword_match_fields() {
        let product = sample();
        assert!(product.matches_keyword("galaxy"));
        assert!(product.matches_keyword("amoled"));
        assert!(product.matches_keyword("celu"));
        assert!(product.matches_keyword("samsung"));
        assert!(!product.matches_keyword("iphone"));
    }

    #[test]
    fn test_seller_key_falls_back_to_product_id() {
        let mut product = sample();
        assert_eq!(product.seller_key(), "MLA1");

        product.seller_id = Some("S42".to_string());
        assert_eq!(product.seller_key(), "S42");
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut product = sample();
        assert!(product.validate().is_ok());

        product.price = -1.0;
        assert!(matches!(
            product.validate(),
            Err(ProductError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_thumbnail() {
        let mut product = sample();
        assert_eq!(product.thumbnail(), Some("a.jpg"));
        product.images.clear();
        assert_eq!(product.thumbnail(), None);
    }
}

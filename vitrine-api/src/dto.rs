use serde::Serialize;
use vitrine_aggregator::ProductDetails;
use vitrine_catalog::{Attribute, Product, ShippingCalculator, ShippingPolicy};
use vitrine_core::SearchPage;
use vitrine_shared::{Question, Review, Seller};

// ============================================================================
// Product details
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProductDetailsResponse {
    pub product: ProductResponse,
    pub seller: Seller,
    pub shipping: ShippingPolicy,
    pub reviews: ReviewsResponse,
    pub questions: Vec<Question>,
    pub related_products: Vec<RelatedProductResponse>,
}

/// Listing as shown on the product page. Seller linkage and bookkeeping
/// timestamps stay internal.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u32>,
    pub condition: String,
    pub available_quantity: u32,
    pub sold_quantity: u32,
    pub images: Vec<String>,
    pub category: String,
    pub attributes: Vec<Attribute>,
    pub brand: String,
    pub model: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            original_price: product.original_price,
            discount_percentage: product.discount_percentage,
            condition: product.condition,
            available_quantity: product.available_quantity,
            sold_quantity: product.sold_quantity,
            images: product.images,
            category: product.category,
            attributes: product.attributes,
            brand: product.brand,
            model: product.model,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub average_rating: f64,
    pub total_reviews: usize,
    pub items: Vec<Review>,
}

#[derive(Debug, Serialize)]
pub struct RelatedProductResponse {
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub sold_quantity: u32,
}

impl From<&Product> for RelatedProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image: product.thumbnail().map(str::to_string),
            sold_quantity: product.sold_quantity,
        }
    }
}

impl From<ProductDetails> for ProductDetailsResponse {
    fn from(details: ProductDetails) -> Self {
        Self {
            related_products: details.related_products.iter().map(RelatedProductResponse::from).collect(),
            reviews: ReviewsResponse {
                average_rating: details.review_summary.average_rating,
                total_reviews: details.review_summary.total_reviews,
                items: details.reviews,
            },
            product: details.product.into(),
            seller: details.seller,
            shipping: details.shipping,
            questions: details.questions,
        }
    }
}

// ============================================================================
// Search
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_results: usize,
    pub limit: usize,
    pub offset: usize,
    pub results: Vec<ProductSummary>,
}

/// Listing card shown in search results
#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u32>,
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub sold_quantity: u32,
    pub available_quantity: u32,
    pub category: String,
    pub brand: String,
    pub free_shipping: bool,
}

impl ProductSummary {
    pub fn new(product: Product, shipping: &ShippingCalculator) -> Self {
        Self {
            free_shipping: shipping.is_free(product.price),
            thumbnail: product.thumbnail().map(str::to_string),
            id: product.id,
            title: product.title,
            price: product.price,
            original_price: product.original_price,
            discount_percentage: product.discount_percentage,
            condition: product.condition,
            sold_quantity: product.sold_quantity,
            available_quantity: product.available_quantity,
            category: product.category,
            brand: product.brand,
        }
    }
}

impl SearchResponse {
    pub fn from_page(page: SearchPage, shipping: &ShippingCalculator) -> Self {
        Self {
            query: page.query,
            total_results: page.total,
            limit: page.limit,
            offset: page.offset,
            results: page
                .products
                .into_iter()
                .map(|product| ProductSummary::new(product, shipping))
                .collect(),
        }
    }
}

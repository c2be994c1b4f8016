use vitrine_catalog::{Product, ShippingPolicy};

use crate::fanout::EnrichmentBundle;
use crate::models::ProductDetails;

/// Merges the primary record, its shipping policy and the joined enrichments
pub fn assemble(product: Product, shipping: ShippingPolicy, bundle: EnrichmentBundle) -> ProductDetails {
    let EnrichmentBundle {
        seller,
        reviews,
        questions,
        related,
    } = bundle;

    ProductDetails {
        product,
        seller,
        shipping,
        reviews: reviews.reviews,
        review_summary: reviews.summary,
        questions,
        related_products: related,
    }
}

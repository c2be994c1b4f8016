use std::fmt;
use vitrine_catalog::Product;
use vitrine_shared::{Question, Seller};

use crate::fanout::ReviewBundle;

/// Enrichment sources queried during fan-out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collaborator {
    Seller,
    Reviews,
    Questions,
    Related,
}

impl Collaborator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collaborator::Seller => "seller",
            Collaborator::Reviews => "reviews",
            Collaborator::Questions => "questions",
            Collaborator::Related => "related",
        }
    }
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values substituted when an enrichment fails
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackTable {
    pub seller: Seller,
    pub reviews: ReviewBundle,
    pub questions: Vec<Question>,
    pub related: Vec<Product>,
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self {
            seller: Seller::placeholder(),
            reviews: ReviewBundle::default(),
            questions: Vec::new(),
            related: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = FallbackTable::default();
        assert_eq!(table.seller.id, "default");
        assert_eq!(table.seller.nickname, "Vendedor");
        assert!(table.reviews.reviews.is_empty());
        assert_eq!(table.reviews.summary.average_rating, 0.0);
        assert_eq!(table.reviews.summary.total_reviews, 0);
        assert!(table.questions.is_empty());
        assert!(table.related.is_empty());
    }
}

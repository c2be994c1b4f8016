pub mod models;

pub use models::{Question, Review, ReviewSummary, Seller};

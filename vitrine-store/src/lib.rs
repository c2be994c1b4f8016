pub mod app_config;
pub mod dataset;
pub mod latency;
pub mod product_repo;
pub mod question_repo;
pub mod review_repo;
pub mod seller_repo;

pub use latency::SimulatedLatency;
pub use product_repo::JsonProductRepository;
pub use question_repo::JsonQuestionClient;
pub use review_repo::JsonReviewClient;
pub use seller_repo::JsonSellerClient;

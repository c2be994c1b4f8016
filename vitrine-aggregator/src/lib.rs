pub mod assembler;
pub mod fallback;
pub mod fanout;
pub mod models;
pub mod orchestrator;
pub mod search;

pub use fallback::{Collaborator, FallbackTable};
pub use fanout::{AggregationSettings, EnrichmentBundle, FanOut, ReviewBundle};
pub use models::{AggregationStage, ProductDetails};
pub use orchestrator::{AggregationError, ProductAggregator};
pub use search::ProductSearchService;

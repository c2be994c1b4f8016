pub mod question;
pub mod review;
pub mod seller;

pub use question::Question;
pub use review::{Review, ReviewSummary};
pub use seller::Seller;

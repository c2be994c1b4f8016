pub mod product;
pub mod shipping;

pub use product::{Attribute, Product, ProductError};
pub use shipping::{ShippingCalculator, ShippingConfig, ShippingPolicy};

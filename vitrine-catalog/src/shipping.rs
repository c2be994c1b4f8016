use serde::{Deserialize, Serialize};

/// Shipping conditions offered for a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingPolicy {
    pub free_shipping: bool,
    pub shipping_mode: String,
    pub cost: f64,
    pub estimated_delivery: String,
    pub full_fulfillment: bool,
    pub pickup_available: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingConfig {
    /// Prices strictly above this ship for free
    pub free_shipping_threshold: f64,

    /// Fraction of the price charged when shipping is not free
    pub cost_rate: f64,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: 50_000.0,
            cost_rate: 0.05,
        }
    }
}

/// Derives the shipping policy from a product price. No I/O.
#[derive(Debug, Clone, Default)]
pub struct ShippingCalculator {
    config: ShippingConfig,
}

impl ShippingCalculator {
    pub fn new(config: ShippingConfig) -> Self {
        Self { config }
    }

    pub fn is_free(&self, price: f64) -> bool {
        price > self.config.free_shipping_threshold
    }

    pub fn calculate(&self, price: f64) -> ShippingPolicy {
        let free_shipping = self.is_free(price);
        let cost = if free_shipping {
            0.0
        } else {
            price * self.config.cost_rate
        };

        ShippingPolicy {
            free_shipping,
            shipping_mode: "standard".to_string(),
            cost,
            estimated_delivery: "3–5 days".to_string(),
            full_fulfillment: false,
            pickup_available: "yes".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_not_free() {
        let calculator = ShippingCalculator::default();
        let policy = calculator.calculate(50_000.0);
        assert!(!policy.free_shipping);
        assert_eq!(policy.cost, 2500.0);
    }

    #[test]
    fn test_above_threshold_is_free() {
        let calculator = ShippingCalculator::default();
        let policy = calculator.calculate(50_001.0);
        assert!(policy.free_shipping);
        assert_eq!(policy.cost, 0.0);
    }

    #[test]
    fn test_fixed_fields() {
        let policy = ShippingCalculator::default().calculate(1000.0);
        assert_eq!(policy.shipping_mode, "standard");
        assert_eq!(policy.estimated_delivery, "3–5 days");
        assert!(!policy.full_fulfillment);
        assert_eq!(policy.pickup_available, "yes");
        assert_eq!(policy.cost, 50.0);
    }

    #[test]
    fn test_custom_config() {
        let calculator = ShippingCalculator::new(ShippingConfig {
            free_shipping_threshold: 100.0,
            cost_rate: 0.1,
        });
        assert!(calculator.is_free(100.5));
        assert_eq!(calculator.calculate(100.0).cost, 10.0);
    }

    #[test]
    fn test_zero_price() {
        let policy = ShippingCalculator::default().calculate(0.0);
        assert!(!policy.free_shipping);
        assert_eq!(policy.cost, 0.0);
    }
}

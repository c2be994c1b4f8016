use std::time::Duration;

/// Artificial delay standing in for a remote call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// Suspends the calling task for the configured delay
    pub async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_pause_waits_configured_delay() {
        let latency = SimulatedLatency::from_millis(25);
        let start = Instant::now();
        latency.pause().await;
        assert_eq!(start.elapsed(), Duration::from_millis(25));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_latency_does_not_sleep() {
        let start = Instant::now();
        SimulatedLatency::default().pause().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}

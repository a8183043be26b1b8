use std::time::Duration;

/// Stand-in for the round trip of a remote call.
///
/// Every service operation awaits one of these before touching state, so the
/// call sites already have the shape a real network-backed implementation
/// would need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    pub const NONE: SimulatedLatency = SimulatedLatency(Duration::ZERO);

    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
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
    async fn test_wait_sleeps_for_configured_duration() {
        let start = Instant::now();
        SimulatedLatency::from_millis(300).wait().await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_latency_returns_immediately() {
        let start = Instant::now();
        SimulatedLatency::NONE.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}

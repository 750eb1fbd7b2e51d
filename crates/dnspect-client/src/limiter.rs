//! Global request rate gate shared across all concurrent lookups.

use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;

/// Token-bucket gate over outbound ownership requests.
///
/// Capacity 1, refilled at the configured requests-per-second, so requests
/// from every concurrent domain task are spaced to the aggregate rate.
/// This is the one piece of state shared across tasks; acquisition is
/// internally synchronized and callers never lock.
pub struct RequestGate {
    limiter: RateLimiter<
        governor::state::NotKeyed,
        governor::state::InMemoryState,
        governor::clock::DefaultClock,
    >,
}

impl RequestGate {
    /// Build a gate allowing `rps` requests per second, or `None` when
    /// `rps` is 0 (rate limiting disabled).
    #[must_use]
    pub fn per_second(rps: u32) -> Option<Self> {
        let rps = NonZeroU32::new(rps)?;
        let quota = Quota::per_second(rps).allow_burst(NonZeroU32::MIN);
        Some(Self {
            limiter: RateLimiter::direct(quota),
        })
    }

    /// Block until one token is available.
    ///
    /// May stall the caller indefinitely at very low configured rates;
    /// that is the intended back-pressure.
    pub async fn acquire(&self) {
        self.limiter.until_ready().await;
    }
}

impl std::fmt::Debug for RequestGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestGate").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn zero_rps_disables_the_gate() {
        assert!(RequestGate::per_second(0).is_none());
        assert!(RequestGate::per_second(2).is_some());
    }

    #[tokio::test]
    async fn sequential_acquisitions_are_spaced() {
        // 50 rps with burst 1 refills a token every 20ms: five sequential
        // acquisitions need at least four refill intervals.
        let gate = RequestGate::per_second(50).expect("nonzero rate");
        let start = Instant::now();
        for _ in 0..5 {
            gate.acquire().await;
        }
        assert!(
            start.elapsed().as_millis() >= 60,
            "acquisitions were not spaced: {:?}",
            start.elapsed()
        );
    }
}

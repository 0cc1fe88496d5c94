//! Watch whether the main loop keeps up with the microphone.
//!
//! This only reports. Nothing here slows the producer down or rejects late blocks.
use crate::logging::{info, warn};

#[cfg(feature = "std")]
use std::time::{Duration, Instant};

#[cfg(all(not(feature = "std"), feature = "embassy"))]
use embassy_time::{Duration, Instant};

/// Counts processed blocks and logs the block rate once per second.
pub struct BlockRateTracker {
    last: Instant,
    count: u64,
    /// the handoff's overwritten counter at the last report
    last_overwritten: u32,
    /// blocks per second the microphone produces. sample rate / N
    expected_per_second: u64,
}

impl BlockRateTracker {
    pub fn new(sample_rate_hz: u32, block_len: usize) -> Self {
        Self {
            last: Instant::now(),
            count: 0,
            last_overwritten: 0,
            expected_per_second: sample_rate_hz as u64 / block_len as u64,
        }
    }

    /// Call after every processed block with the handoff's [crate::handoff::BlockHandoff::overwritten] counter.
    ///
    /// Returns the blocks per second whenever a report is logged.
    pub fn tick(&mut self, overwritten: u32) -> Option<u64> {
        self.count += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);

        if elapsed < Duration::from_secs(1) {
            return None;
        }

        let per_second = self.count * 1_000u64 / (elapsed.as_millis() as u64);

        let dropped = overwritten.wrapping_sub(self.last_overwritten);

        self.count = 0;
        self.last = now;
        self.last_overwritten = overwritten;

        if dropped > 0 {
            warn!(
                "{} blocks/s of {}. {} blocks dropped",
                per_second, self.expected_per_second, dropped
            );
        } else {
            info!("{} blocks/s of {}", per_second, self.expected_per_second);
        }

        Some(per_second)
    }

    pub fn expected_per_second(&self) -> u64 {
        self.expected_per_second
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_expected_rate() {
        // 256 samples at 16kHz is 62.5 blocks per second
        assert_eq!(BlockRateTracker::new(16_000, 256).expected_per_second(), 62);
    }

    #[test]
    fn test_no_report_before_a_second() {
        let mut tracker = BlockRateTracker::new(16_000, 256);

        for _ in 0..100 {
            assert_eq!(tracker.tick(0), None);
        }
    }

    #[test_log::test]
    fn test_report() {
        let mut tracker = BlockRateTracker::new(16_000, 256);

        // pretend we started over a second ago
        tracker.last = Instant::now() - Duration::from_millis(1_100);

        assert_eq!(tracker.tick(0), Some(0));
        assert_eq!(tracker.count, 0);

        for _ in 0..9 {
            assert_eq!(tracker.tick(0), None);
        }

        tracker.last = Instant::now() - Duration::from_millis(1_000);
        let per_second = tracker.tick(3).unwrap();

        assert!((9..=10).contains(&per_second), "{per_second}");
        assert_eq!(tracker.last_overwritten, 3);
    }
}

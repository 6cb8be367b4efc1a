// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Process-wide monotonic millisecond clock used to stamp events.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// A clock anchored at a fixed instant that never reports a value lower than
/// one it has already returned.
#[derive(Debug)]
pub struct MonotonicClock {
    epoch: Instant,
    last_ms: AtomicU64,
}

impl MonotonicClock {
    /// Creates a clock whose epoch is the current instant.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            last_ms: AtomicU64::new(0),
        }
    }

    /// Returns the time elapsed since the clock's epoch.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }

    /// Returns the milliseconds elapsed since the epoch, clamped so that the
    /// sequence of returned values is non-decreasing.
    pub fn now_ms(&self) -> u64 {
        self.observe(self.elapsed().as_millis() as u64)
    }

    /// Records a raw reading and returns it, or the previous reading if the
    /// raw value went backwards.
    fn observe(&self, raw_ms: u64) -> u64 {
        let previous = self.last_ms.fetch_max(raw_ms, Ordering::AcqRel);
        previous.max(raw_ms)
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

static PROCESS_CLOCK: OnceLock<MonotonicClock> = OnceLock::new();

/// Returns the process clock, starting it on first use.
pub fn process_clock() -> &'static MonotonicClock {
    PROCESS_CLOCK.get_or_init(MonotonicClock::new)
}

/// Milliseconds since the process clock's epoch. Never decreases.
#[inline]
pub fn now_ms() -> u64 {
    process_clock().now_ms()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn consecutive_reads_never_decrease() {
        let clock = MonotonicClock::new();
        let mut previous = clock.now_ms();
        for _ in 0..1_000 {
            let current = clock.now_ms();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn backwards_reading_is_clamped() {
        let clock = MonotonicClock::new();
        assert_eq!(clock.observe(50), 50);
        assert_eq!(clock.observe(20), 50);
        assert_eq!(clock.observe(75), 75);
    }

    #[test]
    fn process_clock_advances() {
        let start = now_ms();
        thread::sleep(Duration::from_millis(5));
        assert!(now_ms() >= start + 5);
    }
}

//! Elapsed time measurement for a single report

use std::time::{Duration, Instant};

/// Monotonic start instant for one report
#[derive(Debug, Clone, Copy)]
pub struct ReportClock {
    begin: Instant,
}

impl ReportClock {
    pub fn new() -> Self {
        Self {
            begin: Instant::now(),
        }
    }

    /// Restart timing from now
    pub fn start(&mut self) {
        self.begin = Instant::now();
    }

    /// Time since the last `start`, truncated to whole milliseconds
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms())
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.begin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for ReportClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_elapsed_is_monotonic() {
        let clock = ReportClock::new();
        let first = clock.elapsed();
        thread::sleep(Duration::from_millis(5));
        let second = clock.elapsed();
        assert!(second >= first);
        assert!(second >= Duration::from_millis(5));
        assert_eq!(second.subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_start_resets() {
        let mut clock = ReportClock::new();
        thread::sleep(Duration::from_millis(50));
        clock.start();
        assert!(clock.elapsed() < Duration::from_millis(50));
    }
}

//! Bounded readiness wait for elements that mount after page load
//!
//! Chat composers and message nodes often mount well after the document is
//! first available. This is the crate's single waiting primitive: probe for
//! the value, stop on first match, give up at the deadline. Abandoning the
//! wait is treated as "not found" by callers, never as a reason to retry.

use std::thread;
use std::time::{Duration, Instant};

/// Probe for a value until it appears or `timeout` elapses.
///
/// The probe runs immediately, then at `interval` steps until the deadline.
/// Returns `None` on timeout; the caller decides what "not found" means.
pub fn wait_for<T>(
    timeout: Duration,
    interval: Duration,
    mut probe: impl FnMut() -> Option<T>,
) -> Option<T> {
    let deadline = Instant::now() + timeout;

    loop {
        if let Some(value) = probe() {
            return Some(value);
        }
        if Instant::now() >= deadline {
            return None;
        }
        thread::sleep(interval.min(deadline.saturating_duration_since(Instant::now())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_match_returns_without_sleeping() {
        let started = Instant::now();
        let found = wait_for(Duration::from_secs(5), Duration::from_millis(50), || Some(42));
        assert_eq!(found, Some(42));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_resolves_once_probe_succeeds() {
        let mut calls = 0;
        let found = wait_for(Duration::from_secs(5), Duration::from_millis(1), || {
            calls += 1;
            if calls >= 3 { Some("ready") } else { None }
        });
        assert_eq!(found, Some("ready"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_times_out_to_none() {
        let found: Option<()> =
            wait_for(Duration::from_millis(20), Duration::from_millis(5), || None);
        assert!(found.is_none());
    }
}

//! Bounded retry with linear backoff.
//!
//! A call is attempted once and then retried up to `max_retries` times. The
//! wait before retry `n` (1-indexed) is `min(base_delay * n, max_delay)`.
//! There is no jitter and no circuit breaker.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::warn;

/// Default number of retries after the initial attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay in milliseconds.
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;

/// Default delay cap in milliseconds.
pub const DEFAULT_MAX_DELAY_MS: u64 = 5000;

/// Retry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
    /// Delay unit, multiplied by the retry number.
    pub base_delay: Duration,
    /// Upper bound for any single delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_millis(DEFAULT_BASE_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_MAX_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the base delay.
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Set the delay cap.
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Total attempts this policy allows, including the first one.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay to wait before retry number `retry` (1-indexed).
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(retry).min(self.max_delay)
    }
}

/// What a retry loop did before reaching its terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryReport {
    /// Attempts made, including the first.
    pub attempts: u32,
    /// Sum of all backoff delays waited.
    pub total_delay: Duration,
}

/// Run `operation` under `policy`.
///
/// Every `Err` is treated as retryable. The returned report is filled in on
/// both success and final failure; on failure the error is the one from the
/// last attempt.
pub async fn retry_with_backoff<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> (Result<T, E>, RetryReport)
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut report = RetryReport::default();
    let max_attempts = policy.max_attempts();

    loop {
        report.attempts += 1;

        let error = match operation().await {
            Ok(value) => return (Ok(value), report),
            Err(e) => e,
        };

        if report.attempts >= max_attempts {
            return (Err(error), report);
        }

        let delay = policy.delay_for(report.attempts);
        warn!(
            attempt = report.attempts,
            max_attempts,
            remaining = max_attempts - report.attempts,
            delay_ms = delay.as_millis() as u64,
            error = %error,
            "Request failed, retrying"
        );
        sleep(delay).await;
        report.total_delay += delay;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    fn policy(max_retries: u32, base_ms: u64, max_ms: u64) -> RetryPolicy {
        RetryPolicy::default()
            .with_max_retries(max_retries)
            .with_base_delay(Duration::from_millis(base_ms))
            .with_max_delay(Duration::from_millis(max_ms))
    }

    #[test]
    fn test_policy_default() {
        let p = RetryPolicy::default();
        assert_eq!(p.max_retries, 3);
        assert_eq!(p.base_delay, Duration::from_millis(1000));
        assert_eq!(p.max_delay, Duration::from_millis(5000));
        assert_eq!(p.max_attempts(), 4);
    }

    #[test]
    fn test_delay_is_linear_and_capped() {
        let p = policy(10, 1000, 5000);
        let delays: Vec<u64> = (1..=7).map(|n| p.delay_for(n).as_millis() as u64).collect();
        assert_eq!(delays, vec![1000, 2000, 3000, 4000, 5000, 5000, 5000]);
    }

    #[test]
    fn test_delay_monotonic() {
        let p = policy(50, 300, 4000);
        let mut previous = Duration::ZERO;
        for n in 1..=50 {
            let d = p.delay_for(n);
            assert!(d >= previous);
            assert!(d <= p.max_delay);
            previous = d;
        }
    }

    #[test]
    fn test_delay_does_not_overflow() {
        let p = RetryPolicy::default().with_max_retries(u32::MAX);
        assert_eq!(p.delay_for(u32::MAX), p.max_delay);
        assert_eq!(p.max_attempts(), u32::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success_no_delay() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let start = Instant::now();

        let (result, report) = retry_with_backoff(&RetryPolicy::default(), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>("ok")
        })
        .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(report.attempts, 1);
        assert_eq!(report.total_delay, Duration::ZERO);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fails_twice_then_succeeds() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let start = Instant::now();

        let (result, report) = retry_with_backoff(&policy(3, 1000, 5000), move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n < 3 {
                Err(format!("failure {}", n))
            } else {
                Ok(n)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(report.attempts, 3);
        assert_eq!(report.total_delay, Duration::from_millis(3000));
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delays_between_attempts() {
        let stamps = std::sync::Mutex::new(Vec::new());
        let start = Instant::now();

        let (result, _) = retry_with_backoff(&policy(3, 1000, 5000), || {
            stamps.lock().unwrap().push(start.elapsed());
            async { Err::<(), _>("boom") }
        })
        .await;

        assert!(result.is_err());
        let stamps = stamps.into_inner().unwrap();
        let gaps: Vec<Duration> = stamps.windows(2).map(|w| w[1] - w[0]).collect();
        assert_eq!(gaps.len(), 3);
        assert!(gaps[0] >= Duration::from_millis(1000) && gaps[0] < Duration::from_millis(1100));
        assert!(gaps[1] >= Duration::from_millis(2000) && gaps[1] < Duration::from_millis(2100));
        assert!(gaps[2] >= Duration::from_millis(3000) && gaps[2] < Duration::from_millis(3100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_failing_exhausts_budget() {
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let (result, report) = retry_with_backoff(&policy(3, 1000, 5000), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>("network timeout")
        })
        .await;

        assert_eq!(result.unwrap_err(), "network timeout");
        assert_eq!(counter.load(Ordering::SeqCst), 4);
        assert_eq!(report.attempts, 4);
        assert_eq!(report.total_delay, Duration::from_millis(1000 + 2000 + 3000));
    }

    #[tokio::test]
    async fn test_zero_retries_single_attempt() {
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let (result, report) = retry_with_backoff(&policy(0, 1000, 5000), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>("nope")
        })
        .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(report.total_delay, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_large_budget_terminates_without_timing() {
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let (result, report) = retry_with_backoff(&policy(10_000, 0, 0), move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>("still failing")
        })
        .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 10_001);
        assert_eq!(report.attempts, 10_001);
    }

    #[tokio::test(start_paused = true)]
    async fn test_returns_last_error() {
        let counter = AtomicU32::new(0);
        let calls = &counter;

        let (result, _) = retry_with_backoff(&policy(2, 10, 10), move || async move {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            Err::<(), _>(format!("error {}", n))
        })
        .await;

        assert_eq!(result.unwrap_err(), "error 3");
    }
}

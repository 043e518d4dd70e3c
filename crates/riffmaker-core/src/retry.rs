//! Fixed-delay retry for transient storage failures.
//!
//! The storage medium is the local device, not a remote service, so there is
//! no exponential backoff or jitter. A momentary lock or a busy disk either
//! clears within a beat or it does not.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// How often and how patiently to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryOptions {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

impl Default for RetryOptions {
    fn default() -> Self {
        RetryOptions {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

/// Run `op`, retrying on failure with the default observer, which logs each
/// retry at warn level.
pub async fn with_retry<T, E, F, Fut>(options: &RetryOptions, op: F) -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    with_retry_observed(options, op, |attempt, err| {
        tracing::warn!(attempt, error = %err, "transient storage failure, retrying");
    })
    .await
}

/// Run `op` up to `max_attempts` times, pausing `delay` between attempts.
///
/// `on_retry(attempt, &err)` fires before each pause, never after the final
/// failure; it is an observer only and cannot affect control flow. The last
/// error is returned once attempts are exhausted. Errors are retried
/// uniformly; classification is the caller's concern.
pub async fn with_retry_observed<T, E, F, Fut, O>(
    options: &RetryOptions,
    mut op: F,
    mut on_retry: O,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    O: FnMut(u32, &E),
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= options.max_attempts {
                    return Err(err);
                }
                on_retry(attempt, &err);
                tokio::time::sleep(options.delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn options() -> RetryOptions {
        RetryOptions {
            max_attempts: 3,
            delay: Duration::from_millis(100),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_transient_failures() {
        let calls = Cell::new(0u32);
        let observed = Cell::new(0u32);

        let result: Result<&str, &str> = with_retry_observed(
            &options(),
            || {
                calls.set(calls.get() + 1);
                let call = calls.get();
                async move {
                    if call < 3 {
                        Err("flaky")
                    } else {
                        Ok("done")
                    }
                }
            },
            |_, _| observed.set(observed.get() + 1),
        )
        .await;

        assert_eq!(result, Ok("done"));
        assert_eq!(calls.get(), 3);
        assert_eq!(observed.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_max_attempts() {
        let calls = Cell::new(0u32);
        let observed = Cell::new(0u32);

        let result: Result<(), &str> = with_retry_observed(
            &options(),
            || {
                calls.set(calls.get() + 1);
                async { Err("still broken") }
            },
            |attempt, _| {
                observed.set(observed.get() + 1);
                assert!(attempt < 3);
            },
        )
        .await;

        assert_eq!(result, Err("still broken"));
        assert_eq!(calls.get(), 3);
        // the observer never fires after the final failure
        assert_eq!(observed.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn first_success_skips_the_delay() {
        let before = tokio::time::Instant::now();
        let result: Result<u8, &str> = with_retry(&options(), || async { Ok(7) }).await;
        assert_eq!(result, Ok(7));
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}

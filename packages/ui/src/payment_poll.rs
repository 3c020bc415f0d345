//! # Checkout return handling
//!
//! After an external checkout the payer lands back on the campaign page with
//! `?session_id=<id>`. The page strips the parameter from the address bar and
//! asks the backend a bounded number of times whether the payment went through.
//!
//! [`poll_payment`] is generic over the status request and the sleep so the
//! schedule can be driven by a paused tokio clock in tests. The poll holds no
//! resources besides its future: dropping it (the owning view unmounting)
//! cancels it between two attempts.

use std::future::Future;
use std::time::Duration;

use api::{ApiClient, ApiError, PaymentStatus};
use store::PaymentsConfig;

/// Query parameter the checkout redirect appends.
pub const CHECKOUT_SESSION_PARAM: &str = "session_id";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from(&PaymentsConfig::default())
    }
}

/// Most status requests one checkout return may make.
pub const MAX_POLL_ATTEMPTS: u32 = 5;
/// Shortest gap allowed between two status requests.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Configured values are clamped to at most [`MAX_POLL_ATTEMPTS`] requests
/// spaced at least [`MIN_POLL_INTERVAL`] apart.
impl From<&PaymentsConfig> for PollPolicy {
    fn from(config: &PaymentsConfig) -> Self {
        Self {
            max_attempts: config.poll_max_attempts.min(MAX_POLL_ATTEMPTS),
            interval: config.poll_interval().max(MIN_POLL_INTERVAL),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PollOutcome {
    Paid(PaymentStatus),
    /// Every attempt ran without seeing `paid`.
    StillProcessing,
}

/// Request the payment status up to `policy.max_attempts` times, sleeping
/// `policy.interval` between two requests. Returns as soon as one reports
/// `paid`. Request errors are logged and count as an unpaid attempt.
pub async fn poll_payment<F, Fut, S, SFut>(policy: PollPolicy, mut fetch: F, mut sleep: S) -> PollOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<PaymentStatus, ApiError>>,
    S: FnMut(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    for attempt in 1..=policy.max_attempts {
        match fetch().await {
            Ok(status) if status.is_paid() => {
                tracing::info!("payment confirmed on attempt {}", attempt);
                return PollOutcome::Paid(status);
            }
            Ok(status) => {
                tracing::debug!("payment status {:?} on attempt {}", status.payment_status, attempt);
            }
            Err(e) => {
                tracing::warn!("payment status check {} failed: {}", attempt, e);
            }
        }
        if attempt < policy.max_attempts {
            sleep(policy.interval).await;
        }
    }
    PollOutcome::StillProcessing
}

/// [`poll_payment`] against the backend with the platform timer.
pub async fn poll_checkout(client: &ApiClient, session_id: &str, policy: PollPolicy) -> PollOutcome {
    poll_payment(policy, move || client.payment_status(session_id), crate::platform::sleep).await
}

/// Value of `session_id` in a `?a=b&session_id=...` query string.
pub fn session_id_from_query(search: &str) -> Option<String> {
    query_pairs(search)
        .find(|(key, _)| *key == CHECKOUT_SESSION_PARAM)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// The query string without `key`, with its leading `?`, or empty when nothing
/// is left.
pub fn remove_query_param(search: &str, key: &str) -> String {
    let kept: Vec<String> = query_pairs(search)
        .filter(|(k, _)| *k != key)
        .map(|(k, v)| if v.is_empty() { k.to_string() } else { format!("{k}={v}") })
        .collect();
    if kept.is_empty() {
        String::new()
    } else {
        format!("?{}", kept.join("&"))
    }
}

fn query_pairs(search: &str) -> impl Iterator<Item = (&str, &str)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tokio::time::Instant;

    use super::*;

    fn status(payment_status: &str) -> PaymentStatus {
        PaymentStatus {
            payment_status: payment_status.into(),
            ..Default::default()
        }
    }

    /// Scripted status backend that records when it was asked.
    #[derive(Clone)]
    struct Script {
        replies: Arc<Mutex<Vec<Result<PaymentStatus, ApiError>>>>,
        calls: Arc<Mutex<Vec<Instant>>>,
    }

    impl Script {
        fn new(mut replies: Vec<Result<PaymentStatus, ApiError>>) -> Self {
            replies.reverse();
            Self {
                replies: Arc::new(Mutex::new(replies)),
                calls: Arc::default(),
            }
        }

        fn fetch(&self) -> impl Future<Output = Result<PaymentStatus, ApiError>> {
            let this = self.clone();
            async move {
                this.calls.lock().unwrap().push(Instant::now());
                this.replies.lock().unwrap().pop().unwrap_or_else(|| Ok(status("unpaid")))
            }
        }

        fn calls(&self) -> Vec<Instant> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_on_paid() {
        let script = Script::new(vec![Ok(status("unpaid")), Ok(status("unpaid")), Ok(status("paid"))]);
        let outcome = poll_payment(PollPolicy::default(), || script.fetch(), tokio::time::sleep).await;

        assert_eq!(outcome, PollOutcome::Paid(status("paid")));
        assert_eq!(script.calls().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_max_attempts_spaced_by_interval() {
        let script = Script::new(vec![]);
        let start = Instant::now();
        let outcome = poll_payment(PollPolicy::default(), || script.fetch(), tokio::time::sleep).await;

        assert_eq!(outcome, PollOutcome::StillProcessing);
        let calls = script.calls();
        assert_eq!(calls.len(), 5);
        for pair in calls.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_secs(2));
        }
        // no sleep after the final attempt
        assert_eq!(start.elapsed(), Duration::from_secs(8));
    }

    #[tokio::test(start_paused = true)]
    async fn test_errors_do_not_stop_polling() {
        let script = Script::new(vec![
            Err(ApiError::Decode("truncated".into())),
            Err(ApiError::Server {
                status: 502,
                detail: None,
            }),
            Ok(status("paid")),
        ]);
        let outcome = poll_payment(PollPolicy::default(), || script.fetch(), tokio::time::sleep).await;

        assert!(matches!(outcome, PollOutcome::Paid(_)));
        assert_eq!(script.calls().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_the_poll_cancels_it() {
        let script = Script::new(vec![]);
        let poll = poll_payment(PollPolicy::default(), || script.fetch(), tokio::time::sleep);
        assert!(tokio::time::timeout(Duration::from_secs(3), poll).await.is_err());
        assert_eq!(script.calls().len(), 2);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(script.calls().len(), 2);
    }

    #[test]
    fn test_policy_from_config_is_clamped() {
        let eager = PaymentsConfig {
            poll_max_attempts: 50,
            poll_interval_secs: 0,
        };
        assert_eq!(
            PollPolicy::from(&eager),
            PollPolicy {
                max_attempts: 5,
                interval: Duration::from_secs(2),
            }
        );

        let patient = PaymentsConfig {
            poll_max_attempts: 3,
            poll_interval_secs: 4,
        };
        assert_eq!(
            PollPolicy::from(&patient),
            PollPolicy {
                max_attempts: 3,
                interval: Duration::from_secs(4),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_clamped_config_stays_within_five_requests() {
        let script = Script::new(vec![]);
        let policy = PollPolicy::from(&PaymentsConfig {
            poll_max_attempts: 9,
            poll_interval_secs: 1,
        });
        let outcome = poll_payment(policy, || script.fetch(), tokio::time::sleep).await;

        assert_eq!(outcome, PollOutcome::StillProcessing);
        let calls = script.calls();
        assert_eq!(calls.len(), 5);
        for pair in calls.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_secs(2));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_attempts_never_requests() {
        let script = Script::new(vec![]);
        let policy = PollPolicy {
            max_attempts: 0,
            interval: Duration::from_secs(2),
        };
        let outcome = poll_payment(policy, || script.fetch(), tokio::time::sleep).await;
        assert_eq!(outcome, PollOutcome::StillProcessing);
        assert!(script.calls().is_empty());
    }

    #[test]
    fn test_policy_from_config() {
        let config = store::ClientConfig::default().with_payment_polling(3, 5);
        let policy = PollPolicy::from(&config.payments);
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.interval, Duration::from_secs(5));
    }

    #[test]
    fn test_query_helpers() {
        assert_eq!(session_id_from_query("?session_id=cs_123").as_deref(), Some("cs_123"));
        assert_eq!(session_id_from_query("?ref=mail&session_id=cs_9&x=1").as_deref(), Some("cs_9"));
        assert_eq!(session_id_from_query("?session_id="), None);
        assert_eq!(session_id_from_query(""), None);

        assert_eq!(remove_query_param("?session_id=cs_123", "session_id"), "");
        assert_eq!(remove_query_param("?ref=mail&session_id=cs_9&x=1", "session_id"), "?ref=mail&x=1");
    }
}

//! Resend cooldown countdown

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Seconds to wait before another code may be requested
pub const DEFAULT_RESEND_COOLDOWN_SECONDS: u32 = 60;

/// Countdown gating code resends
///
/// `remaining()` is measured against a fixed deadline, rounded up to whole
/// seconds, so it reads 0 exactly when the cooldown has elapsed. A background
/// task publishes the value once per second for subscribers. The task belongs
/// to this handle: dropping the handle aborts it, and subscribers then see the
/// channel close.
#[derive(Debug)]
pub struct ResendCooldown {
    deadline: Instant,
    remaining: watch::Receiver<u32>,
    ticker: Option<JoinHandle<()>>,
}

impl ResendCooldown {
    /// Start counting down from `seconds`
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(seconds: u32) -> Self {
        let start = Instant::now();
        let deadline = start + Duration::from_secs(u64::from(seconds));
        let (tx, remaining) = watch::channel(seconds);
        if seconds == 0 {
            return Self {
                deadline,
                remaining,
                ticker: None,
            };
        }

        let ticker = tokio::spawn(async move {
            let period = Duration::from_secs(1);
            let mut interval = time::interval_at(start + period, period);
            loop {
                interval.tick().await;
                let left = seconds_until(deadline);
                tx.send_replace(left);
                if left == 0 {
                    break;
                }
            }
        });

        Self {
            deadline,
            remaining,
            ticker: Some(ticker),
        }
    }

    /// Seconds left before a resend is allowed
    pub fn remaining(&self) -> u32 {
        seconds_until(self.deadline)
    }

    pub fn can_resend(&self) -> bool {
        self.remaining() == 0
    }

    /// Receiver observing every tick
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.remaining.clone()
    }
}

fn seconds_until(deadline: Instant) -> u32 {
    let left = deadline.saturating_duration_since(Instant::now());
    let whole = left.as_secs() + u64::from(left.subsec_nanos() > 0);
    u32::try_from(whole).unwrap_or(u32::MAX)
}

impl Drop for ResendCooldown {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

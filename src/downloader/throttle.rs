extern crate tokio;

use crate::{
    config::throttle::{COOLDOWN_LONG, COOLDOWN_SHORT, JITTER},
    random,
};
use std::{future::Future, time::Duration};
use tokio::{
    sync::{Mutex, MutexGuard},
    time::{sleep, Instant},
};

struct Pace {
    last_call: Option<Instant>,
    counter: u32,
}

/// Keeps a minimum spacing between the operations it guards.
///
/// The pacing state is locked for the whole guarded call, so callers sharing
/// one instance are served one after another. With `variable_timeout` every
/// 5th call waits five intervals and every 10th call ten, and each wait is
/// perturbed by up to 50% in either direction.
pub struct Throttle {
    interval: Duration,
    variable_timeout: bool,
    state: Mutex<Pace>,
}

// Records the call even when the operation fails.
struct Accounting<'a>(MutexGuard<'a, Pace>);
impl Drop for Accounting<'_> {
    fn drop(&mut self) {
        self.0.last_call = Some(Instant::now());
        self.0.counter = self.0.counter.wrapping_add(1);
    }
}

fn jittered(remaining: Duration) -> Duration {
    let nanos = remaining.as_nanos() as f64 * (1.0 + random::symmetric(JITTER));
    Duration::from_nanos(nanos.max(0.0).round() as u64)
}

impl Throttle {
    pub fn new(interval: Duration, variable_timeout: bool) -> Self {
        Self {
            interval,
            variable_timeout,
            state: Mutex::new(Pace {
                last_call: None,
                counter: 0,
            }),
        }
    }
    fn nominal(&self, pace: &Pace) -> Duration {
        let mut ret = self.interval;
        if self.variable_timeout && pace.last_call.is_some() {
            if pace.counter % COOLDOWN_LONG == 0 {
                ret *= COOLDOWN_LONG;
            } else if pace.counter % COOLDOWN_SHORT == 0 {
                ret *= COOLDOWN_SHORT;
            }
        }
        ret
    }
    /// Spacing the next call has to keep, before jitter.
    pub async fn next_interval(&self) -> Duration {
        self.nominal(&*self.state.lock().await)
    }
    pub async fn calls(&self) -> u32 {
        self.state.lock().await.counter
    }

    pub async fn run<F, U, T>(&self, fun: F) -> T
    where
        F: FnOnce() -> U,
        U: Future<Output = T>,
    {
        let pace = self.state.lock().await;
        let interval = self.nominal(&pace);
        if let Some(last) = pace.last_call {
            let due = last + interval;
            let now = Instant::now();
            if due > now {
                sleep(jittered(due - now)).await;
            }
        }
        let _accounting = Accounting(pace);
        fun().await
    }
}

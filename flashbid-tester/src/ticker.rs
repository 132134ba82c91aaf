//! Tokio-backed clock and ticker for live countdown runs.
//!
//! Ticks run as `spawn_local` tasks, so the ticker must be used inside a
//! [`tokio::task::LocalSet`].
use std::time::Duration;

use flashbid_core::{Clock, TickFlow, TickHandle, Ticker};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Wall-clock milliseconds derived from tokio's monotonic clock.
///
/// Anchoring to tokio's `Instant` keeps the clock consistent with paused
/// test time.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
    origin_ms: i64,
}

impl TokioClock {
    pub fn anchored_at(origin_ms: i64) -> Self {
        Self {
            origin: Instant::now(),
            origin_ms,
        }
    }

    pub fn system() -> Self {
        Self::anchored_at(chrono::Utc::now().timestamp_millis())
    }
}

impl Clock for TokioClock {
    fn now_ms(&self) -> i64 {
        let elapsed = i64::try_from(self.origin.elapsed().as_millis()).unwrap_or(i64::MAX);
        self.origin_ms.saturating_add(elapsed)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTicker;

pub struct LocalTickHandle {
    task: Option<JoinHandle<()>>,
}

impl Ticker for LocalTicker {
    type Handle = LocalTickHandle;

    fn every(&self, period_ms: u32, mut on_tick: Box<dyn FnMut() -> TickFlow>) -> Self::Handle {
        let period = Duration::from_millis(u64::from(period_ms.max(1)));
        let task = tokio::task::spawn_local(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if on_tick() == TickFlow::Stop {
                    break;
                }
            }
        });
        LocalTickHandle { task: Some(task) }
    }
}

impl TickHandle for LocalTickHandle {
    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for LocalTickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

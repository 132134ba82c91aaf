//! Per-card countdown: a pure state machine plus a controller that drives it
//! from a recurring tick.
//!
//! The controller is platform-agnostic. It receives a [`Clock`] for "now" and
//! a [`Ticker`] that hands back an owned, cancellable [`TickHandle`]; the web
//! crate backs these with `window.setInterval`, the tester with tokio, and
//! tests with [`crate::virtual_time::VirtualTime`].
use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::deadline::Deadline;
use crate::time::{Remaining, ZERO_DISPLAY};

pub const DEFAULT_TICK_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownPhase {
    Running,
    Expired,
}

/// Result of feeding one tick into a [`Countdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Distance was non-negative; the display was recomputed.
    Updated,
    /// Distance went negative (or the deadline is invalid); now expired.
    Expired,
    /// Already expired; nothing changed.
    Idle,
}

/// What a ticker should do after invoking its callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

impl From<TickOutcome> for TickFlow {
    fn from(outcome: TickOutcome) -> Self {
        match outcome {
            TickOutcome::Updated => Self::Continue,
            TickOutcome::Expired | TickOutcome::Idle => Self::Stop,
        }
    }
}

/// Countdown state for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    deadline: Deadline,
    phase: CountdownPhase,
    display: String,
    remaining: Option<Remaining>,
}

impl Countdown {
    /// A running countdown showing [`ZERO_DISPLAY`] until its first tick.
    #[must_use]
    pub fn new(deadline: Deadline) -> Self {
        Self::with_display(deadline, ZERO_DISPLAY)
    }

    #[must_use]
    pub fn with_display(deadline: Deadline, initial: impl Into<String>) -> Self {
        Self {
            deadline,
            phase: CountdownPhase::Running,
            display: initial.into(),
            remaining: None,
        }
    }

    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    #[must_use]
    pub const fn phase(&self) -> CountdownPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self.phase, CountdownPhase::Expired)
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Components behind the current display, once a tick has computed them.
    #[must_use]
    pub const fn remaining(&self) -> Option<Remaining> {
        self.remaining
    }

    /// Recompute against `now_ms`.
    ///
    /// Expiry keeps the last computed display; it never resets to zero.
    pub fn tick(&mut self, now_ms: i64) -> TickOutcome {
        if self.is_expired() {
            return TickOutcome::Idle;
        }
        match self
            .deadline
            .distance_from(now_ms)
            .and_then(|distance| u64::try_from(distance).ok())
        {
            Some(distance) => {
                let remaining = Remaining::from_millis(distance);
                self.display = remaining.to_string();
                self.remaining = Some(remaining);
                TickOutcome::Updated
            }
            None => {
                self.phase = CountdownPhase::Expired;
                TickOutcome::Expired
            }
        }
    }
}

/// Source of the current wall-clock time in Unix milliseconds.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Owned handle to a recurring tick.
///
/// `cancel` must be idempotent; implementations also cancel on drop.
pub trait TickHandle {
    fn cancel(&mut self);

    fn is_active(&self) -> bool;
}

/// Scheduling primitive that invokes a callback every `period_ms`.
///
/// The callback's [`TickFlow::Stop`] ends the schedule from inside.
pub trait Ticker {
    type Handle: TickHandle;

    fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut() -> TickFlow>) -> Self::Handle;
}

/// Tunables for a controller, usually taken from the page config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownSettings {
    pub tick_ms: u32,
    pub initial_display: String,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            initial_display: ZERO_DISPLAY.to_string(),
        }
    }
}

type Observer = Rc<dyn Fn(&Countdown)>;

/// Drives one [`Countdown`] from a recurring tick.
///
/// The controller exclusively owns its tick handle and releases it on
/// re-target, [`dispose`](Self::dispose), or drop.
pub struct CountdownController<T, C>
where
    T: Ticker,
    C: Clock + Clone + 'static,
{
    ticker: T,
    clock: C,
    settings: CountdownSettings,
    state: Rc<RefCell<Countdown>>,
    observer: Option<Observer>,
    handle: Option<T::Handle>,
}

impl<T, C> CountdownController<T, C>
where
    T: Ticker,
    C: Clock + Clone + 'static,
{
    /// An idle controller; nothing ticks until [`start`](Self::start).
    #[must_use]
    pub fn new(ticker: T, clock: C, settings: CountdownSettings) -> Self {
        let state = Countdown::with_display(Deadline::Invalid, settings.initial_display.clone());
        Self {
            ticker,
            clock,
            settings,
            state: Rc::new(RefCell::new(state)),
            observer: None,
            handle: None,
        }
    }

    /// Register a callback invoked after every tick that changed the countdown.
    #[must_use]
    pub fn on_change(mut self, observer: impl Fn(&Countdown) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    /// Begin counting toward `deadline`. Equivalent to [`retarget`](Self::retarget).
    pub fn start(&mut self, deadline: Deadline) {
        self.retarget(deadline);
    }

    /// Cancel any running tick and restart in `Running` against `deadline`
    /// with a fresh cycle and the initial display.
    pub fn retarget(&mut self, deadline: Deadline) {
        self.release_handle();
        *self.state.borrow_mut() =
            Countdown::with_display(deadline, self.settings.initial_display.clone());
        log::debug!("countdown started toward {deadline:?}");

        let state = Rc::clone(&self.state);
        let clock = self.clock.clone();
        let observer = self.observer.clone();
        let on_tick = Box::new(move || {
            let (outcome, snapshot) = {
                let mut countdown = state.borrow_mut();
                let outcome = countdown.tick(clock.now_ms());
                (outcome, countdown.clone())
            };
            if outcome == TickOutcome::Expired {
                log::debug!("countdown expired at {}", snapshot.display());
            }
            if outcome != TickOutcome::Idle
                && let Some(observer) = observer.as_ref()
            {
                observer(&snapshot);
            }
            TickFlow::from(outcome)
        });
        self.handle = Some(self.ticker.every(self.settings.tick_ms, on_tick));
    }

    /// Cancel the recurring tick. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.release_handle();
    }

    /// Whether a tick is still scheduled.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.handle.as_ref().is_some_and(TickHandle::is_active)
    }

    #[must_use]
    pub fn snapshot(&self) -> Countdown {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn phase(&self) -> CountdownPhase {
        self.state.borrow().phase()
    }

    #[must_use]
    pub fn display(&self) -> String {
        self.state.borrow().display().to_string()
    }

    fn release_handle(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl<T, C> Drop for CountdownController<T, C>
where
    T: Ticker,
    C: Clock + Clone + 'static,
{
    fn drop(&mut self) {
        self.release_handle();
    }
}

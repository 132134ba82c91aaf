//! Deterministic clock and ticker for simulations and tests.
//!
//! `VirtualTime` is both a [`Clock`] and a [`Ticker`]. Time only moves when
//! [`VirtualTime::advance`] is called; due timers fire in order of their due
//! instant (ties by registration order) with the clock set to that instant.
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::countdown::{Clock, TickFlow, TickHandle, Ticker};

struct Timer {
    id: u64,
    period: i64,
    due: i64,
    cancelled: bool,
    on_tick: Option<Box<dyn FnMut() -> TickFlow>>,
}

struct Inner {
    now: Cell<i64>,
    next_id: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
}

#[derive(Clone)]
pub struct VirtualTime {
    inner: Rc<Inner>,
}

impl VirtualTime {
    #[must_use]
    pub fn starting_at(now_ms: i64) -> Self {
        Self {
            inner: Rc::new(Inner {
                now: Cell::new(now_ms),
                next_id: Cell::new(0),
                timers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Number of timers still scheduled.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.inner
            .timers
            .borrow()
            .iter()
            .filter(|timer| !timer.cancelled)
            .count()
    }

    /// Move the clock forward by `ms`, firing every timer that falls due.
    pub fn advance(&self, ms: i64) {
        let target = self.inner.now.get().saturating_add(ms);
        while let Some((id, due)) = self.next_due(target) {
            self.inner.now.set(due);
            self.fire(id);
        }
        self.inner.now.set(target);
    }

    fn next_due(&self, target: i64) -> Option<(u64, i64)> {
        self.inner
            .timers
            .borrow()
            .iter()
            .filter(|timer| !timer.cancelled && timer.due <= target)
            .min_by_key(|timer| (timer.due, timer.id))
            .map(|timer| (timer.id, timer.due))
    }

    fn fire(&self, id: u64) {
        let taken = {
            let mut timers = self.inner.timers.borrow_mut();
            timers
                .iter_mut()
                .find(|timer| timer.id == id)
                .and_then(|timer| timer.on_tick.take())
        };
        let Some(mut on_tick) = taken else {
            return;
        };
        // The callback may cancel or register timers, so no borrow is held.
        let flow = on_tick();
        let mut leftover = Some(on_tick);
        {
            let mut timers = self.inner.timers.borrow_mut();
            if let Some(timer) = timers.iter_mut().find(|timer| timer.id == id) {
                if flow == TickFlow::Continue && !timer.cancelled {
                    timer.due += timer.period;
                    timer.on_tick = leftover.take();
                } else {
                    timer.cancelled = true;
                }
            }
            timers.retain(|timer| !timer.cancelled);
        }
        drop(leftover);
    }
}

impl Clock for VirtualTime {
    fn now_ms(&self) -> i64 {
        self.inner.now.get()
    }
}

impl Ticker for VirtualTime {
    type Handle = VirtualTickHandle;

    fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut() -> TickFlow>) -> Self::Handle {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let period = i64::from(period_ms.max(1));
        self.inner.timers.borrow_mut().push(Timer {
            id,
            period,
            due: self.inner.now.get() + period,
            cancelled: false,
            on_tick: Some(on_tick),
        });
        VirtualTickHandle {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }
}

pub struct VirtualTickHandle {
    id: u64,
    inner: Weak<Inner>,
}

impl TickHandle for VirtualTickHandle {
    fn cancel(&mut self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let Ok(mut timers) = inner.timers.try_borrow_mut() else {
            return;
        };
        if let Some(timer) = timers.iter_mut().find(|timer| timer.id == self.id) {
            timer.cancelled = true;
            // A timer mid-callback keeps its slot until `fire` finishes with it.
            if timer.on_tick.is_some() {
                timers.retain(|timer| timer.id != self.id);
            }
        }
    }

    fn is_active(&self) -> bool {
        self.inner.upgrade().is_some_and(|inner| {
            inner
                .timers
                .borrow()
                .iter()
                .any(|timer| timer.id == self.id && !timer.cancelled)
        })
    }
}

impl Drop for VirtualTickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(
        time: &VirtualTime,
        period: u32,
        stop_after: u32,
    ) -> (Rc<Cell<u32>>, VirtualTickHandle) {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let handle = time.every(
            period,
            Box::new(move || {
                seen.set(seen.get() + 1);
                if seen.get() >= stop_after {
                    TickFlow::Stop
                } else {
                    TickFlow::Continue
                }
            }),
        );
        (count, handle)
    }

    #[test]
    fn fires_on_each_period_boundary() {
        let time = VirtualTime::starting_at(0);
        let (count, handle) = counting(&time, 1_000, u32::MAX);
        time.advance(999);
        assert_eq!(count.get(), 0);
        time.advance(1);
        assert_eq!(count.get(), 1);
        time.advance(3_500);
        assert_eq!(count.get(), 4);
        assert_eq!(time.now_ms(), 4_500);
        assert!(handle.is_active());
    }

    #[test]
    fn stop_flow_unschedules() {
        let time = VirtualTime::starting_at(0);
        let (count, handle) = counting(&time, 100, 2);
        time.advance(1_000);
        assert_eq!(count.get(), 2);
        assert!(!handle.is_active());
        assert_eq!(time.active_timers(), 0);
    }

    #[test]
    fn cancel_is_idempotent_and_drop_cancels() {
        let time = VirtualTime::starting_at(0);
        let (count, mut handle) = counting(&time, 100, u32::MAX);
        handle.cancel();
        handle.cancel();
        time.advance(1_000);
        assert_eq!(count.get(), 0);

        let (count, handle) = counting(&time, 100, u32::MAX);
        drop(handle);
        time.advance(1_000);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn clock_reads_due_instant_inside_callback() {
        let time = VirtualTime::starting_at(10);
        let observed = Rc::new(Cell::new(0));
        let seen = Rc::clone(&observed);
        let clock = time.clone();
        let _handle = time.every(
            1_000,
            Box::new(move || {
                seen.set(clock.now_ms());
                TickFlow::Stop
            }),
        );
        time.advance(5_000);
        assert_eq!(observed.get(), 1_010);
        assert_eq!(time.now_ms(), 5_010);
    }
}

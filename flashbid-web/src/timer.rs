//! Browser clock and `setInterval`-backed ticker for countdown controllers.
use std::cell::Cell;
use std::rc::Rc;

use flashbid_core::{Clock, TickFlow, TickHandle, Ticker};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> i64 {
        dom::now_ms()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalTicker;

/// Owns a `window.setInterval` registration and the closure it calls.
///
/// Clearing happens at most once: on a `Stop` from the callback, on
/// [`TickHandle::cancel`], or on drop.
pub struct IntervalHandle {
    interval_id: Rc<Cell<Option<i32>>>,
    _closure: Option<Closure<dyn FnMut()>>,
}

fn clear(interval_id: &Cell<Option<i32>>) {
    if let Some(id) = interval_id.take()
        && let Some(win) = dom::window()
    {
        win.clear_interval_with_handle(id);
    }
}

impl Ticker for IntervalTicker {
    type Handle = IntervalHandle;

    fn every(&self, period_ms: u32, mut on_tick: Box<dyn FnMut() -> TickFlow>) -> Self::Handle {
        let interval_id = Rc::new(Cell::new(None));
        let Some(window) = dom::window() else {
            dom::console_error("Failed to start countdown: window unavailable");
            return IntervalHandle {
                interval_id,
                _closure: None,
            };
        };

        let slot = Rc::clone(&interval_id);
        let closure = Closure::wrap(Box::new(move || {
            if on_tick() == TickFlow::Stop {
                clear(&slot);
            }
        }) as Box<dyn FnMut()>);

        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(id) => interval_id.set(Some(id)),
            Err(err) => dom::console_error(&format!(
                "Failed to start countdown: {}",
                dom::js_error_message(&err)
            )),
        }

        IntervalHandle {
            interval_id,
            _closure: Some(closure),
        }
    }
}

impl TickHandle for IntervalHandle {
    fn cancel(&mut self) {
        clear(&self.interval_id);
    }

    fn is_active(&self) -> bool {
        self.interval_id.get().is_some()
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        // Clear before the closure field is dropped so the browser never calls freed memory.
        self.cancel();
    }
}

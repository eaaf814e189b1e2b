//! Debounce Primitive
//!
//! Explicit cancel-and-reschedule around a single `setTimeout`-style
//! timer. Scheduling supersedes any timer that has not fired yet; an
//! action already running (an in-flight request) is never cancelled.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Latest-wins bookkeeping for a debounced action.
///
/// Separate from the timer so the coalescing rules can be exercised
/// without a browser event loop. Each schedule bumps the generation; a
/// timer only fires its payload if no newer schedule happened since it
/// was armed.
#[derive(Debug)]
pub struct DebounceSlot<T> {
    payload: Option<T>,
    generation: u64,
}

impl<T> Default for DebounceSlot<T> {
    fn default() -> Self {
        Self { payload: None, generation: 0 }
    }
}

impl<T> DebounceSlot<T> {
    /// Store `payload` as the pending action and return its generation.
    pub fn schedule(&mut self, payload: T) -> u64 {
        self.payload = Some(payload);
        self.generation += 1;
        self.generation
    }

    /// Take the payload if `generation` is still the latest scheduled one.
    /// A stale generation means a newer schedule superseded this timer.
    pub fn fire(&mut self, generation: u64) -> Option<T> {
        if generation == self.generation {
            self.payload.take()
        } else {
            None
        }
    }
}

/// One debounced action slot backed by a real timer.
pub struct Debouncer<T> {
    delay_ms: u32,
    slot: Rc<RefCell<DebounceSlot<T>>>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            delay_ms: self.delay_ms,
            slot: Rc::clone(&self.slot),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<T: 'static> Debouncer<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            slot: Rc::new(RefCell::new(DebounceSlot::default())),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Arm the timer with `payload`, cancelling any unfired timer. After
    /// the quiet period, `action` runs with the last scheduled payload.
    pub fn schedule(&self, payload: T, action: impl FnOnce(T) + 'static) {
        let generation = self.slot.borrow_mut().schedule(payload);
        let slot = Rc::clone(&self.slot);
        let pending = Rc::clone(&self.pending);
        let timeout = Timeout::new(self.delay_ms, move || {
            let fired = slot.borrow_mut().fire(generation);
            *pending.borrow_mut() = None;
            if let Some(payload) = fired {
                action(payload);
            }
        });
        if let Some(superseded) = self.pending.borrow_mut().replace(timeout) {
            superseded.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_schedules_fire_once_with_the_last_payload() {
        let mut slot = DebounceSlot::default();
        let first = slot.schedule("b");
        let second = slot.schedule("bu");
        let last = slot.schedule("buy milk");

        assert_eq!(slot.fire(first), None);
        assert_eq!(slot.fire(second), None);
        assert_eq!(slot.fire(last), Some("buy milk"));
    }

    #[test]
    fn firing_consumes_the_payload() {
        let mut slot = DebounceSlot::default();
        let generation = slot.schedule(1);
        assert_eq!(slot.fire(generation), Some(1));
        assert_eq!(slot.fire(generation), None);
    }

    #[test]
    fn schedule_after_fire_starts_a_fresh_cycle() {
        let mut slot = DebounceSlot::default();
        let first = slot.schedule("a");
        assert_eq!(slot.fire(first), Some("a"));

        let second = slot.schedule("b");
        assert_eq!(slot.fire(first), None);
        assert_eq!(slot.fire(second), Some("b"));
    }
}

//! One-shot timers for toast auto-dismiss.
//!
//! Every handle cancels its timer when dropped, so a display unit that owns
//! the handle releases the timer on every exit path.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

pub trait TimerHost {
    /// Cancels the pending timer when dropped.
    type Handle;

    fn schedule(
        &self,
        delay_ms: u32,
        callback: Box<dyn FnOnce()>,
    ) -> Self::Handle;
}

/// `setTimeout` in the browser event loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = Timeout;

    fn schedule(
        &self,
        delay_ms: u32,
        callback: Box<dyn FnOnce()>,
    ) -> Self::Handle {
        Timeout::new(delay_ms, callback)
    }
}

/// A virtual clock that only moves when told to.
///
/// Used outside the browser (native tests, prerendering) where there is no
/// event loop to drive real timeouts.
#[derive(Clone, Default)]
pub struct ManualTimers {
    clock: Rc<RefCell<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_seq: u64,
    // Keyed by (due time, scheduling order) so equal deadlines fire FIFO.
    pending: BTreeMap<(u64, u64), Box<dyn FnOnce()>>,
}

pub struct ManualTimer {
    key: (u64, u64),
    clock: Weak<RefCell<ManualClock>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().pending.remove(&self.key);
        }
    }
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Moves the clock forward, firing every timer that comes due in
    /// deadline order. Callbacks may schedule or cancel other timers.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;

        loop {
            let due = {
                let mut clock = self.clock.borrow_mut();
                match clock.pending.keys().next().copied() {
                    Some(key) if key.0 <= target => {
                        clock.now_ms = key.0;
                        clock.pending.remove(&key)
                    }
                    _ => None,
                }
            };

            match due {
                Some(callback) => callback(),
                None => break,
            }
        }

        self.clock.borrow_mut().now_ms = target;
    }
}

impl TimerHost for ManualTimers {
    type Handle = ManualTimer;

    fn schedule(
        &self,
        delay_ms: u32,
        callback: Box<dyn FnOnce()>,
    ) -> Self::Handle {
        let mut clock = self.clock.borrow_mut();
        let key = (clock.now_ms + u64::from(delay_ms), clock.next_seq);
        clock.next_seq += 1;
        clock.pending.insert(key, callback);

        ManualTimer {
            key,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Box<dyn FnOnce()>) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, Box::new(move || inner.set(inner.get() + 1)))
    }

    #[test]
    fn fires_once_when_due() {
        let timers = ManualTimers::new();
        let (count, callback) = counter();
        let _handle = timers.schedule(1000, callback);

        timers.advance(999);
        assert_eq!(count.get(), 0);
        timers.advance(1);
        assert_eq!(count.get(), 1);
        timers.advance(10_000);
        assert_eq!(count.get(), 1);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let timers = ManualTimers::new();
        let (count, callback) = counter();
        let handle = timers.schedule(500, callback);
        assert_eq!(timers.pending(), 1);

        drop(handle);
        assert_eq!(timers.pending(), 0);
        timers.advance(1000);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn fires_in_deadline_order() {
        let timers = ManualTimers::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let handles: Vec<_> = [(300, "c"), (100, "a"), (200, "b"), (100, "a2")]
            .into_iter()
            .map(|(delay, label)| {
                let order = order.clone();
                timers.schedule(
                    delay,
                    Box::new(move || order.borrow_mut().push(label)),
                )
            })
            .collect();

        timers.advance(1000);
        assert_eq!(*order.borrow(), vec!["a", "a2", "b", "c"]);
        assert_eq!(timers.now_ms(), 1000);
        drop(handles);
    }

    #[test]
    fn callback_can_cancel_a_later_timer() {
        let timers = ManualTimers::new();
        let (count, callback) = counter();
        let later = Rc::new(RefCell::new(Some(timers.schedule(200, callback))));

        let slot = later.clone();
        let _first = timers.schedule(
            100,
            Box::new(move || {
                slot.borrow_mut().take();
            }),
        );

        timers.advance(500);
        assert_eq!(count.get(), 0);
        assert!(later.borrow().is_none());
    }
}

//! Per-instance toast lifecycle.
//!
//! A displayed toast starts in [`ToastPhase::MountedPending`]. The first
//! close request, from the timer or from the close control, moves it to
//! [`ToastPhase::Dismissing`] and emits `on_close` once. Dropping the
//! instance is the unmount: the phase becomes [`ToastPhase::Unmounted`] and
//! any pending timer is cancelled.
//!
//! The owner may hand a new `on_close` on every render. It replaces the one
//! given at mount without touching the timer, and later closes emit through
//! the newest callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::Callback;

use super::model::{ToastId, ToastSpec};
use super::timer::TimerHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    MountedPending,
    Dismissing,
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Timer,
    Manual,
}

type SharedCallback = Rc<RefCell<Callback<ToastId>>>;

pub struct MountedToast<H: TimerHost> {
    id: ToastId,
    phase: Rc<Cell<ToastPhase>>,
    on_close: SharedCallback,
    timer: Option<H::Handle>,
}

impl<H: TimerHost> MountedToast<H> {
    /// Mounts a toast, scheduling its auto-dismiss timer when the toast
    /// asks for one.
    pub fn mount(
        toast: &ToastSpec,
        on_close: Callback<ToastId>,
        host: &H,
    ) -> Self {
        let id = toast.id();
        let phase = Rc::new(Cell::new(ToastPhase::MountedPending));
        let on_close = Rc::new(RefCell::new(on_close));

        let timer = toast.auto_dismiss_after().map(|delay_ms| {
            tracing::debug!("toast {id}: auto-dismiss in {delay_ms}ms");
            let phase = phase.clone();
            let on_close = on_close.clone();
            host.schedule(
                delay_ms,
                Box::new(move || {
                    request_close(&phase, id, &on_close, CloseTrigger::Timer);
                }),
            )
        });

        Self {
            id,
            phase,
            on_close,
            timer,
        }
    }

    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase.get()
    }

    /// Replaces the callback used by the timer and by every close handle.
    pub fn set_on_close(&self, on_close: Callback<ToastId>) {
        *self.on_close.borrow_mut() = on_close;
    }

    /// A cloneable close control that does not borrow the instance.
    pub fn close_handle(&self) -> CloseHandle {
        CloseHandle {
            id: self.id,
            phase: self.phase.clone(),
            on_close: self.on_close.clone(),
        }
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some() && self.phase() == ToastPhase::MountedPending
    }

    /// Handles the close control. Returns `false` when the toast was
    /// already closing, in which case nothing is emitted.
    pub fn dismiss(&mut self) -> bool {
        let emitted = request_close(
            &self.phase,
            self.id,
            &self.on_close,
            CloseTrigger::Manual,
        );
        if emitted {
            self.timer = None;
        }
        emitted
    }
}

impl<H: TimerHost> Drop for MountedToast<H> {
    fn drop(&mut self) {
        self.phase.set(ToastPhase::Unmounted);
        if self.timer.take().is_some() {
            tracing::debug!("toast {}: unmounted, timer released", self.id);
        }
    }
}

/// Manual close control detached from the [`MountedToast`] that issued it.
/// Closing through it leaves the timer to fire into a no-op; the timer is
/// released when the instance unmounts.
#[derive(Clone)]
pub struct CloseHandle {
    id: ToastId,
    phase: Rc<Cell<ToastPhase>>,
    on_close: SharedCallback,
}

impl CloseHandle {
    pub fn close(&self) -> bool {
        request_close(&self.phase, self.id, &self.on_close, CloseTrigger::Manual)
    }
}

fn request_close(
    phase: &Cell<ToastPhase>,
    id: ToastId,
    on_close: &RefCell<Callback<ToastId>>,
    trigger: CloseTrigger,
) -> bool {
    if phase.get() != ToastPhase::MountedPending {
        tracing::debug!("toast {id}: ignoring {trigger:?} close");
        return false;
    }

    phase.set(ToastPhase::Dismissing);
    tracing::debug!("toast {id}: closing ({trigger:?})");
    // Released before emitting: the owner may replace it from inside.
    let on_close = on_close.borrow().clone();
    on_close.emit(id);
    true
}

//! Headless toast core: the value object, the timer facility, the
//! per-instance lifecycle and identity-keyed reconciliation.
//!
//! The Yew components in [`crate::components::toast`] are thin views over
//! these pieces.

pub mod lifecycle;
pub mod model;
pub mod reconcile;
pub mod timer;

pub use lifecycle::{CloseHandle, CloseTrigger, MountedToast, ToastPhase};
pub use model::{ToastError, ToastId, ToastKind, ToastSpec};
pub use timer::{BrowserTimers, ManualTimers, TimerHost};

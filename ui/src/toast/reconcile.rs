//! Identity-keyed diff between two toast sequences.
//!
//! Toasts are matched by [`ToastId`], never by position, so a toast that
//! shifts within the sequence keeps its mounted instance and timer.

use std::collections::HashSet;

use super::model::{ToastId, ToastSpec};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// New ids, in the order of the next sequence.
    pub mount: Vec<ToastId>,
    /// Ids present in both, in the order of the next sequence.
    pub retain: Vec<ToastId>,
    /// Ids that disappeared, in the order of the previous sequence.
    pub unmount: Vec<ToastId>,
}

impl ReconcilePlan {
    pub fn is_unchanged(&self) -> bool {
        self.mount.is_empty() && self.unmount.is_empty()
    }
}

pub fn plan(previous: &[ToastId], next: &[ToastId]) -> ReconcilePlan {
    let before: HashSet<_> = previous.iter().collect();
    let after: HashSet<_> = next.iter().collect();

    let (retain, mount) = next.iter().partition(|id| before.contains(id));
    let unmount = previous
        .iter()
        .filter(|id| !after.contains(id))
        .copied()
        .collect();

    ReconcilePlan {
        mount,
        retain,
        unmount,
    }
}

pub fn ids(toasts: &[ToastSpec]) -> Vec<ToastId> {
    toasts.iter().map(ToastSpec::id).collect()
}

/// Ids that occur more than once, each reported once.
pub fn duplicate_ids(toasts: &[ToastSpec]) -> Vec<ToastId> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    toasts
        .iter()
        .map(ToastSpec::id)
        .filter(|id| !seen.insert(*id) && reported.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::lifecycle::{MountedToast, ToastPhase};
    use crate::toast::model::ToastKind;
    use crate::toast::timer::ManualTimers;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use yew::Callback;

    fn id(n: u128) -> ToastId {
        ToastId::from(n)
    }

    fn toast(n: u128, duration_ms: i64) -> ToastSpec {
        ToastSpec::new(id(n), ToastKind::Info, format!("Toast {n}"))
            .unwrap()
            .duration_ms(duration_ms)
    }

    #[test]
    fn plan_matches_by_identity() {
        let plan = plan(&[id(1), id(2)], &[id(2), id(3)]);
        assert_eq!(plan.mount, vec![id(3)]);
        assert_eq!(plan.retain, vec![id(2)]);
        assert_eq!(plan.unmount, vec![id(1)]);
        assert!(!plan.is_unchanged());
    }

    #[test]
    fn reordering_is_not_a_change() {
        let plan = plan(&[id(1), id(2), id(3)], &[id(3), id(1), id(2)]);
        assert!(plan.is_unchanged());
        assert_eq!(plan.retain, vec![id(3), id(1), id(2)]);
    }

    #[test]
    fn empty_transitions() {
        let plan_up = plan(&[], &[id(1)]);
        assert_eq!(plan_up.mount, vec![id(1)]);

        let plan_down = plan(&[id(1), id(2)], &[]);
        assert_eq!(plan_down.unmount, vec![id(1), id(2)]);

        assert_eq!(plan(&[], &[]), ReconcilePlan::default());
    }

    #[test]
    fn duplicates_reported_once() {
        let toasts = vec![
            toast(1, 0),
            toast(2, 0),
            toast(1, 0),
            toast(1, 0),
            toast(3, 0),
        ];
        assert_eq!(duplicate_ids(&toasts), vec![id(1)]);
        assert_eq!(ids(&toasts[..2]), vec![id(1), id(2)]);
    }

    #[test]
    fn shifting_sequence_keeps_retained_timers() {
        let timers = ManualTimers::new();
        let closed = Rc::new(RefCell::new(Vec::new()));
        let on_close = {
            let closed = closed.clone();
            let clock = timers.clone();
            Callback::from(move |id: ToastId| {
                closed.borrow_mut().push((id, clock.now_ms()));
            })
        };

        let first = vec![toast(1, 2000), toast(2, 1000)];
        let mut mounted: HashMap<ToastId, MountedToast<ManualTimers>> = first
            .iter()
            .map(|t| (t.id(), MountedToast::mount(t, on_close.clone(), &timers)))
            .collect();

        timers.advance(600);

        let second = vec![toast(2, 1000), toast(3, 1000)];
        let step = plan(&ids(&first), &ids(&second));
        for gone in &step.unmount {
            mounted.remove(gone);
        }
        for new in &step.mount {
            let spec = second.iter().find(|t| t.id() == *new).unwrap();
            mounted.insert(*new, MountedToast::mount(spec, on_close.clone(), &timers));
        }

        // B keeps its original deadline at t=1000, C starts fresh at t=600.
        timers.advance(400);
        assert_eq!(*closed.borrow(), vec![(id(2), 1000)]);

        timers.advance(600);
        assert_eq!(*closed.borrow(), vec![(id(2), 1000), (id(3), 1600)]);

        // A was unmounted before its deadline at t=2000.
        timers.advance(5000);
        assert_eq!(closed.borrow().len(), 2);
        assert_eq!(mounted[&id(2)].phase(), ToastPhase::Dismissing);
        assert!(!mounted.contains_key(&id(1)));
    }
}

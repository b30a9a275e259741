use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use ui_kit::components::toast::toast_keys;
use ui_kit::contexts::toast::{ToastAction, ToastState};
use ui_kit::toast::reconcile;
use ui_kit::toast::{
    ManualTimers, MountedToast, ToastId, ToastKind, ToastPhase, ToastSpec,
};
use yew::Callback;
use yew::functional::Reducible;

type Closes = Rc<RefCell<Vec<(ToastId, u64)>>>;

fn recorder(timers: &ManualTimers) -> (Closes, Callback<ToastId>) {
    let closes: Closes = Rc::default();
    let sink = closes.clone();
    let clock = timers.clone();
    let callback = Callback::from(move |id: ToastId| {
        sink.borrow_mut().push((id, clock.now_ms()));
    });
    (closes, callback)
}

fn toast(n: u128, duration_ms: Option<i64>) -> ToastSpec {
    let spec = ToastSpec::new(ToastId::from(n), ToastKind::Info, format!("T{n}"))
        .unwrap();
    match duration_ms {
        Some(ms) => spec.duration_ms(ms),
        None => spec,
    }
}

/// A minimal keyed host: mounts, keeps and drops instances the way a keyed
/// renderer does when the owner's list changes.
struct Host {
    timers: ManualTimers,
    on_close: Callback<ToastId>,
    shown: Vec<ToastId>,
    mounted: HashMap<ToastId, MountedToast<ManualTimers>>,
}

impl Host {
    fn new(timers: &ManualTimers, on_close: Callback<ToastId>) -> Self {
        Self {
            timers: timers.clone(),
            on_close,
            shown: Vec::new(),
            mounted: HashMap::new(),
        }
    }

    fn render(&mut self, toasts: &[ToastSpec]) {
        let next = reconcile::ids(toasts);
        let step = reconcile::plan(&self.shown, &next);
        for id in &step.unmount {
            self.mounted.remove(id);
        }
        for instance in self.mounted.values() {
            instance.set_on_close(self.on_close.clone());
        }
        for id in &step.mount {
            let spec = toasts.iter().find(|t| t.id() == *id).unwrap();
            let instance =
                MountedToast::mount(spec, self.on_close.clone(), &self.timers);
            self.mounted.insert(*id, instance);
        }
        self.shown = next;
    }
}

#[test]
fn empty_list_renders_nothing() {
    assert!(toast_keys(&[]).is_none());
}

#[test]
fn render_order_is_input_order() {
    let toasts = vec![toast(1, None), toast(2, None), toast(3, None)];
    let keys = toast_keys(&toasts).unwrap();
    let expected: Vec<String> =
        toasts.iter().map(|t| t.id().to_string()).collect();
    assert_eq!(keys, expected);
}

#[test]
fn auto_dismiss_fires_once_at_the_deadline() {
    let timers = ManualTimers::new();
    let (closes, on_close) = recorder(&timers);
    let _mounted = MountedToast::mount(&toast(1, Some(1000)), on_close, &timers);

    timers.advance(500);
    assert!(closes.borrow().is_empty());
    timers.advance(10_000);
    assert_eq!(*closes.borrow(), vec![(ToastId::from(1), 1000)]);
}

#[test]
fn manual_dismiss_wins_over_the_timer() {
    let timers = ManualTimers::new();
    let (closes, on_close) = recorder(&timers);
    let mut mounted =
        MountedToast::mount(&toast(1, Some(5000)), on_close, &timers);

    timers.advance(100);
    mounted.dismiss();
    timers.advance(5000);
    assert_eq!(*closes.borrow(), vec![(ToastId::from(1), 100)]);
}

#[test]
fn toast_without_duration_waits_for_the_user() {
    let timers = ManualTimers::new();
    let (closes, on_close) = recorder(&timers);
    let mut no_duration =
        MountedToast::mount(&toast(1, None), on_close.clone(), &timers);
    let _zero = MountedToast::mount(&toast(2, Some(0)), on_close, &timers);

    timers.advance(1_000_000);
    assert!(closes.borrow().is_empty());

    no_duration.dismiss();
    assert_eq!(*closes.borrow(), vec![(ToastId::from(1), 1_000_000)]);
}

#[test]
fn removal_by_owner_cancels_the_timer() {
    let timers = ManualTimers::new();
    let (closes, on_close) = recorder(&timers);
    let mut host = Host::new(&timers, on_close);

    host.render(&[toast(1, Some(2000))]);
    timers.advance(500);
    host.render(&[]);

    timers.advance(2000);
    assert!(closes.borrow().is_empty());
    assert_eq!(timers.pending(), 0);
}

#[test]
fn title_only_toast_is_valid() {
    let spec = ToastSpec::new(ToastId::from(1), ToastKind::Success, "Saved")
        .unwrap();
    assert_eq!(spec.message_text(), None);
    assert!(toast_keys(&[spec]).is_some());
}

#[test]
fn reconciliation_is_keyed_by_id() {
    let timers = ManualTimers::new();
    let (closes, on_close) = recorder(&timers);
    let mut host = Host::new(&timers, on_close);

    host.render(&[toast(1, Some(1000)), toast(2, Some(1000))]);
    timers.advance(400);
    host.render(&[toast(2, Some(1000)), toast(3, Some(1000))]);

    timers.advance(600);
    assert_eq!(*closes.borrow(), vec![(ToastId::from(2), 1000)]);

    timers.advance(400);
    assert_eq!(
        *closes.borrow(),
        vec![(ToastId::from(2), 1000), (ToastId::from(3), 1400)]
    );
    assert!(!host.mounted.contains_key(&ToastId::from(1)));
}

#[test]
fn owner_state_closes_the_loop() {
    let timers = ManualTimers::new();
    let state = Rc::new(RefCell::new(Rc::new(ToastState::default())));

    let on_close = {
        let state = state.clone();
        Callback::from(move |id: ToastId| {
            let current = state.borrow().clone();
            *state.borrow_mut() = current.reduce(ToastAction::Remove(id));
        })
    };
    let mut host = Host::new(&timers, on_close);

    for spec in [toast(1, Some(300)), toast(2, None)] {
        let current = state.borrow().clone();
        *state.borrow_mut() = current.reduce(ToastAction::Add(spec));
    }
    host.render(&state.borrow().toasts);

    timers.advance(300);
    assert_eq!(
        reconcile::ids(&state.borrow().toasts),
        vec![ToastId::from(2)]
    );
    assert_eq!(
        host.mounted[&ToastId::from(1)].phase(),
        ToastPhase::Dismissing
    );

    host.render(&state.borrow().toasts);
    assert_eq!(host.mounted.len(), 1);

    // A late duplicate close from the owner's point of view is a no-op.
    let before = state.borrow().clone();
    let after = before.clone().reduce(ToastAction::Remove(ToastId::from(1)));
    assert!(Rc::ptr_eq(&before, &after));
}

/// An owner that rebuilds its close callback from a snapshot of its list on
/// every render, like a `use_state` consumer.
fn snapshot_owner(list: &Rc<RefCell<Vec<ToastSpec>>>) -> Callback<ToastId> {
    let snapshot = list.borrow().clone();
    let list = list.clone();
    Callback::from(move |id: ToastId| {
        *list.borrow_mut() =
            snapshot.iter().filter(|t| t.id() != id).cloned().collect();
    })
}

#[test]
fn toasts_close_through_the_owners_latest_callback() {
    let timers = ManualTimers::new();
    let list = Rc::new(RefCell::new(vec![toast(1, Some(1000))]));
    let mut host = Host::new(&timers, snapshot_owner(&list));
    host.render(&list.borrow().clone());

    timers.advance(200);
    list.borrow_mut().push(toast(2, None));
    host.on_close = snapshot_owner(&list);
    host.render(&list.borrow().clone());
    assert_eq!(timers.pending(), 1);

    timers.advance(800);
    assert_eq!(reconcile::ids(&list.borrow()), vec![ToastId::from(2)]);
}

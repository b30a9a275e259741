use std::rc::Rc;
use yew::prelude::*;

use crate::components::toast::ToastContainer;
use crate::config::DEFAULT_TOAST_DURATION_MS;
use crate::toast::{ToastError, ToastId, ToastKind, ToastSpec};

/// The authoritative list of active toasts, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<ToastSpec>,
}

pub enum ToastAction {
    Add(ToastSpec),
    Remove(ToastId),
    Clear,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Add(toast) => {
                if self.toasts.iter().any(|t| t.id() == toast.id()) {
                    tracing::warn!("toast {} is already active", toast.id());
                    return self;
                }
                let mut toasts = self.toasts.clone();
                toasts.push(toast);
                Rc::new(ToastState { toasts })
            }
            ToastAction::Remove(id) => {
                if !self.toasts.iter().any(|t| t.id() == id) {
                    // Timer and close button can both report the same toast.
                    return self;
                }
                let toasts =
                    self.toasts.iter().filter(|t| t.id() != id).cloned().collect();
                Rc::new(ToastState { toasts })
            }
            ToastAction::Clear => {
                if self.toasts.is_empty() {
                    return self;
                }
                Rc::new(ToastState::default())
            }
        }
    }
}

pub type ToastReducer = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
    /// Auto-dismiss delay for toasts created through [`ToastHandle::show`]
    /// and its shortcuts.
    #[prop_or(DEFAULT_TOAST_DURATION_MS)]
    pub default_duration_ms: i64,
}

/// Owns the toast list for everything below it and renders the container
/// after its children.
#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    let on_close_toast = {
        let toast_state = toast_state.clone();
        Callback::from(move |id: ToastId| {
            toast_state.dispatch(ToastAction::Remove(id));
        })
    };

    let handle = ToastHandle {
        state: toast_state.clone(),
        default_duration_ms: props.default_duration_ms,
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            {props.children.clone()}
            <ToastContainer
                toasts={toast_state.toasts.clone()}
                on_close_toast={on_close_toast}
            />
        </ContextProvider<ToastHandle>>
    }
}

/// Builds a toast with a fresh id, auto-dismissed after `duration_ms`.
pub fn new_toast(
    kind: ToastKind,
    title: impl Into<String>,
    duration_ms: i64,
) -> Result<ToastSpec, ToastError> {
    Ok(ToastSpec::new(ToastId::new(), kind, title)?.duration_ms(duration_ms))
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    state: ToastReducer,
    default_duration_ms: i64,
}

impl ToastHandle {
    pub fn toasts(&self) -> &[ToastSpec] {
        &self.state.toasts
    }

    pub fn add(&self, toast: ToastSpec) -> ToastId {
        let id = toast.id();
        self.state.dispatch(ToastAction::Add(toast));
        id
    }

    /// Adds a toast with a fresh id and the provider's default duration.
    pub fn show(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
    ) -> Result<ToastId, ToastError> {
        let toast = new_toast(kind, title, self.default_duration_ms)?;
        Ok(self.add(toast))
    }

    pub fn success(
        &self,
        title: impl Into<String>,
    ) -> Result<ToastId, ToastError> {
        self.show(ToastKind::Success, title)
    }

    pub fn error(&self, title: impl Into<String>) -> Result<ToastId, ToastError> {
        self.show(ToastKind::Error, title)
    }

    pub fn info(&self, title: impl Into<String>) -> Result<ToastId, ToastError> {
        self.show(ToastKind::Info, title)
    }

    pub fn warning(
        &self,
        title: impl Into<String>,
    ) -> Result<ToastId, ToastError> {
        self.show(ToastKind::Warning, title)
    }

    pub fn remove(&self, id: ToastId) {
        self.state.dispatch(ToastAction::Remove(id));
    }

    pub fn clear(&self) {
        self.state.dispatch(ToastAction::Clear);
    }
}

/// Like [`use_toast`], but returns `None` outside a [`ToastProvider`].
#[hook]
pub fn use_toast_opt() -> Option<ToastHandle> {
    use_context::<ToastHandle>()
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>()
        .expect("use_toast must be used within a ToastProvider")
}

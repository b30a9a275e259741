use super::Toast;
use crate::toast::reconcile;
use crate::toast::{ToastId, ToastSpec};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    /// Active toasts in display order. Owned by the caller.
    pub toasts: Vec<ToastSpec>,
    /// Passed to every toast as its `on_close`.
    pub on_close_toast: Callback<ToastId>,
}

/// Render keys for `toasts`, or `None` when there is nothing to show.
///
/// Keys are the toast ids, so the renderer matches toasts by identity
/// when the sequence shifts.
pub fn toast_keys(toasts: &[ToastSpec]) -> Option<Vec<String>> {
    if toasts.is_empty() {
        return None;
    }
    Some(toasts.iter().map(|toast| toast.id().to_string()).collect())
}

/// Renders the owner's toasts in order. Instance identity comes from the
/// keys: Yew keeps a `Toast` (and its timer) alive while its id stays in the
/// list. The reconcile plan computed here is only logged.
#[function_component]
pub fn ToastContainer(props: &ToastContainerProps) -> Html {
    let previous = use_mut_ref(Vec::<ToastId>::new);

    {
        let previous = previous.clone();
        use_effect_with(reconcile::ids(&props.toasts), move |next| {
            let step = reconcile::plan(&previous.borrow(), next);
            if !step.is_unchanged() {
                tracing::debug!(
                    mounted = ?step.mount,
                    unmounted = ?step.unmount,
                    "toast container updated"
                );
            }
            *previous.borrow_mut() = next.clone();
        });
    }

    let duplicates = reconcile::duplicate_ids(&props.toasts);
    if !duplicates.is_empty() {
        tracing::warn!(?duplicates, "toast ids must be unique");
    }

    let Some(keys) = toast_keys(&props.toasts) else {
        return html! {};
    };

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full">
            {for props.toasts.iter().zip(keys).map(|(toast, key)| {
                html! {
                    <Toast
                        key={key}
                        toast={toast.clone()}
                        on_close={props.on_close_toast.clone()}
                    />
                }
            })}
        </div>
    }
}

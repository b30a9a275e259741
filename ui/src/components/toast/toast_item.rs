use crate::style::toast_style;
use crate::toast::{BrowserTimers, CloseHandle, MountedToast, ToastId, ToastSpec};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: ToastSpec,
    /// Called with the toast's id when it should be removed.
    pub on_close: Callback<ToastId>,
}

/// A single notification. Owns its auto-dismiss timer for as long as it is
/// mounted; the timer is started on mount and released on unmount. The
/// latest `on_close` prop is used for every close, without restarting the
/// timer.
#[function_component]
pub fn Toast(props: &ToastProps) -> Html {
    let mounted = use_mut_ref(|| None::<MountedToast<BrowserTimers>>);
    let close_handle = use_mut_ref(|| None::<CloseHandle>);

    if let Some(instance) = mounted.borrow().as_ref() {
        instance.set_on_close(props.on_close.clone());
    }

    {
        let mounted = mounted.clone();
        let close_handle = close_handle.clone();
        let toast = props.toast.clone();
        let on_close = props.on_close.clone();

        // Keyed on the id only: a re-render with new text must not restart
        // the timer.
        use_effect_with(props.toast.id(), move |_| {
            let instance = MountedToast::mount(&toast, on_close, &BrowserTimers);
            *close_handle.borrow_mut() = Some(instance.close_handle());
            *mounted.borrow_mut() = Some(instance);

            move || {
                close_handle.borrow_mut().take();
                mounted.borrow_mut().take();
            }
        });
    }

    let on_dismiss = {
        let close_handle = close_handle.clone();
        Callback::from(move |_: MouseEvent| {
            let handle = close_handle.borrow().clone();
            if let Some(handle) = handle {
                handle.close();
            }
        })
    };

    let toast = &props.toast;
    let style = toast_style(toast.kind());

    html! {
        <div
            class={style.container.classes()}
            role="status"
            data-toast-id={toast.id().to_string()}
            data-toast-kind={toast.kind().as_str()}
        >
            <div class="flex items-start space-x-3">
                <div class="flex-shrink-0">
                    <span class="text-sm font-medium">{style.icon}</span>
                </div>
                <div class="flex-1 min-w-0">
                    <p class="text-sm font-medium leading-5">
                        {toast.title()}
                    </p>
                    if let Some(message) = toast.message_text() {
                        <p class="mt-1 text-sm leading-5 opacity-90">
                            {message}
                        </p>
                    }
                </div>
                <div class="flex-shrink-0">
                    <button
                        onclick={on_dismiss}
                        class="inline-flex text-neutral-400 hover:text-neutral-600 dark:hover:text-neutral-200 focus:outline-none focus:text-neutral-600 dark:focus:text-neutral-200 transition-colors"
                        title="Dismiss"
                    >
                        <span class="text-lg leading-none">{"×"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

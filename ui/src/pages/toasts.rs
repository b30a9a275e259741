use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::toast::{ToastId, ToastKind, ToastSpec};

const MESSAGES: [(ToastKind, &str, &str); 4] = [
    (ToastKind::Success, "Changes saved", "Your profile is up to date."),
    (ToastKind::Error, "Upload failed", "The file is larger than 10 MB."),
    (ToastKind::Info, "New version available", "Reload to update."),
    (ToastKind::Warning, "Session expiring", "You will be signed out soon."),
];

#[function_component]
pub fn ToastsPage() -> Html {
    let toasts = use_toast();

    let show = {
        let toasts = toasts.clone();
        move |build: fn() -> Option<ToastSpec>| {
            let toasts = toasts.clone();
            Callback::from(move |_: MouseEvent| match build() {
                Some(toast) => {
                    toasts.add(toast);
                }
                None => tracing::error!("failed to build sample toast"),
            })
        }
    };

    let kind_buttons = MESSAGES.iter().map(|(kind, title, message)| {
        let kind = *kind;
        let (title, message) = (*title, *message);
        let toasts = toasts.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            match ToastSpec::new(ToastId::new(), kind, title) {
                Ok(toast) => {
                    toasts.add(toast.message(message).duration_ms(5000));
                }
                Err(e) => tracing::error!("{e}"),
            }
        });
        html! {
            <button key={kind.as_str()} onclick={onclick} class={BUTTON_CLASS}>
                {kind.as_str()}
            </button>
        }
    });

    let on_clear = {
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| toasts.clear())
    };

    html! {
        <div class="space-y-8">
            <section class="space-y-3">
                <h2 class="text-lg font-semibold">{"Kinds"}</h2>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {"Each toast dismisses itself after five seconds."}
                </p>
                <div class="flex flex-wrap gap-2">{for kind_buttons}</div>
            </section>

            <section class="space-y-3">
                <h2 class="text-lg font-semibold">{"Variants"}</h2>
                <div class="flex flex-wrap gap-2">
                    <button
                        onclick={show(|| {
                            ToastSpec::new(ToastId::new(), ToastKind::Info, "Title only")
                                .ok()
                                .map(|t| t.duration_ms(3000))
                        })}
                        class={BUTTON_CLASS}
                    >
                        {"Title only"}
                    </button>
                    <button
                        onclick={show(|| {
                            ToastSpec::new(ToastId::new(), ToastKind::Warning, "Stays until closed")
                                .ok()
                                .map(|t| t.message("Use the × button to dismiss."))
                        })}
                        class={BUTTON_CLASS}
                    >
                        {"Persistent"}
                    </button>
                    <button
                        onclick={show(|| {
                            ToastSpec::new(ToastId::new(), ToastKind::Success, "Quick one")
                                .ok()
                                .map(|t| t.duration_ms(1000))
                        })}
                        class={BUTTON_CLASS}
                    >
                        {"One second"}
                    </button>
                    <button onclick={on_clear} class={BUTTON_CLASS}>
                        {"Clear all"}
                    </button>
                </div>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {format!("{} active", toasts.toasts().len())}
                </p>
            </section>
        </div>
    }
}

const BUTTON_CLASS: &str = "px-3 py-1.5 text-sm font-medium rounded-md border \
                            border-neutral-300 dark:border-neutral-600 \
                            hover:bg-neutral-50 dark:hover:bg-neutral-700";

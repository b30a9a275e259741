use yew::prelude::*;

use crate::components::{ConfirmDialog, Modal};
use crate::contexts::toast::use_toast;

#[derive(Clone, Copy, PartialEq)]
enum OpenDialog {
    None,
    Modal,
    Confirm,
    Destructive,
}

#[function_component]
pub fn DialogsPage() -> Html {
    let open = use_state(|| OpenDialog::None);
    let toasts = use_toast();

    let open_with = |dialog: OpenDialog| {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(dialog))
    };

    let close = {
        let open = open.clone();
        Callback::from(move |()| open.set(OpenDialog::None))
    };

    let on_confirm = {
        let open = open.clone();
        let toasts = toasts.clone();
        Callback::from(move |()| {
            let title = if *open == OpenDialog::Destructive {
                "Project deleted"
            } else {
                "Changes published"
            };
            if let Err(e) = toasts.success(title) {
                tracing::error!("{e}");
            }
            open.set(OpenDialog::None);
        })
    };

    let button_class = "px-3 py-1.5 text-sm font-medium rounded-md border \
                        border-neutral-300 dark:border-neutral-600 \
                        hover:bg-neutral-50 dark:hover:bg-neutral-700";

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap gap-2">
                <button onclick={open_with(OpenDialog::Modal)} class={button_class}>
                    {"Open modal"}
                </button>
                <button onclick={open_with(OpenDialog::Confirm)} class={button_class}>
                    {"Confirm dialog"}
                </button>
                <button onclick={open_with(OpenDialog::Destructive)} class={button_class}>
                    {"Destructive confirm"}
                </button>
            </div>

            {match *open {
                OpenDialog::None => html! {},
                OpenDialog::Modal => html! {
                    <Modal title="About this modal" on_close={close.clone()}>
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {"Click the backdrop, press Escape or use the close button."}
                        </p>
                    </Modal>
                },
                OpenDialog::Confirm => html! {
                    <ConfirmDialog
                        title="Publish changes?"
                        message="Everyone with access will see the new version."
                        confirm_text="Publish"
                        on_confirm={on_confirm.clone()}
                        on_cancel={close.clone()}
                    />
                },
                OpenDialog::Destructive => html! {
                    <ConfirmDialog
                        title="Delete project?"
                        message="This permanently removes the project and its history."
                        confirm_text="Delete"
                        destructive=true
                        on_confirm={on_confirm.clone()}
                        on_cancel={close.clone()}
                    />
                },
            }}
        </div>
    }
}

use yew::prelude::*;

use super::Modal;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    /// Dialog title (e.g., "Discard changes?")
    pub title: AttrValue,
    /// Explanation shown above the buttons
    pub message: AttrValue,
    #[prop_or_else(|| AttrValue::from("Confirm"))]
    pub confirm_text: AttrValue,
    #[prop_or_else(|| AttrValue::from("Cancel"))]
    pub cancel_text: AttrValue,
    /// Styles the confirm button as a destructive action
    #[prop_or_default]
    pub destructive: bool,
    /// Whether the confirmed operation is in progress
    #[prop_or_default]
    pub is_loading: bool,
    pub on_confirm: Callback<()>,
    /// Called on cancel, Escape or backdrop click
    pub on_cancel: Callback<()>,
}

#[function_component]
pub fn ConfirmDialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(());
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };

    // While loading the dialog cannot be dismissed.
    let on_close = {
        let on_cancel = props.on_cancel.clone();
        let is_loading = props.is_loading;
        Callback::from(move |()| {
            if !is_loading {
                on_cancel.emit(());
            }
        })
    };

    let confirm_class = if props.destructive {
        "bg-red-600 hover:bg-red-700 dark:bg-red-700 dark:hover:bg-red-600"
    } else {
        "bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 \
         dark:text-neutral-900 dark:hover:bg-neutral-200"
    };

    html! {
        <Modal on_close={on_close} title={props.title.clone()}>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {&props.message}
            </p>

            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={on_cancel_click}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300
                           bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600
                           rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                >
                    {&props.cancel_text}
                </button>
                <button
                    onclick={on_confirm_click}
                    disabled={props.is_loading}
                    class={classes!(
                        "px-4", "py-2", "text-sm", "font-medium", "text-white",
                        "rounded-md", "disabled:opacity-50",
                        "disabled:cursor-not-allowed", "transition-colors",
                        confirm_class
                    )}
                >
                    {if props.is_loading { "Processing..." } else { &props.confirm_text }}
                </button>
            </div>
        </Modal>
    }
}

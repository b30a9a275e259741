use yew::prelude::*;

use crate::style::{ToggleVisual, toggle_style};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub checked: bool,
    /// Receives the requested new value. The owner decides whether to
    /// apply it.
    pub on_change: Callback<bool>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Next value to request when the switch is activated, if any.
pub fn requested_value(checked: bool, disabled: bool) -> Option<bool> {
    (!disabled).then_some(!checked)
}

/// A controlled on/off switch with no state of its own.
#[function_component]
pub fn ToggleSwitch(props: &Props) -> Html {
    let on_click = {
        let on_change = props.on_change.clone();
        let checked = props.checked;
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if let Some(value) = requested_value(checked, disabled) {
                on_change.emit(value);
            }
        })
    };

    let style = toggle_style(ToggleVisual {
        checked: props.checked,
        disabled: props.disabled,
    });

    html! {
        <div class="flex items-center gap-3">
            <button
                type="button"
                role="switch"
                aria-checked={props.checked.to_string()}
                disabled={props.disabled}
                onclick={on_click}
                class={style.track.classes()}
            >
                <span class={style.thumb.classes()}></span>
            </button>
            if let Some(label) = &props.label {
                <span class="text-sm font-medium text-neutral-700 \
                             dark:text-neutral-300">
                    {label}
                </span>
            }
        </div>
    }
}

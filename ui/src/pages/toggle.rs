use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::ToggleSwitch;
use crate::state::ShowcaseState;

#[function_component]
pub fn TogglePage() -> Html {
    let (state, dispatch) = use_store::<ShowcaseState>();

    let on_change = dispatch.reduce_mut_callback_with(|state, value: bool| {
        state.notifications_enabled = value;
    });

    html! {
        <div class="space-y-6">
            <section class="space-y-2">
                <h2 class="text-lg font-semibold">{"Interactive"}</h2>
                <ToggleSwitch
                    checked={state.notifications_enabled}
                    on_change={on_change}
                    label={if state.notifications_enabled { "Notifications on" } else { "Notifications off" }}
                />
            </section>
            <section class="space-y-2">
                <h2 class="text-lg font-semibold">{"Disabled"}</h2>
                <ToggleSwitch checked=true disabled=true on_change={Callback::from(|_: bool| ())} label="Locked on" />
                <ToggleSwitch checked=false disabled=true on_change={Callback::from(|_: bool| ())} label="Locked off" />
            </section>
        </div>
    }
}

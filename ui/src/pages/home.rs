use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn HomePage() -> Html {
    let entries = [
        (Route::Toasts, "Toasts", "Auto-dismissing and persistent notifications"),
        (Route::Dialogs, "Dialogs", "Modal frame and confirmation dialog"),
        (Route::Pricing, "Pricing wizard", "Multi-step plan selection screen"),
        (Route::Toggle, "Toggle switch", "Controlled on/off switch"),
    ];

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                {"Components"}
            </h1>
            <div class="grid gap-4 md:grid-cols-2">
                {for entries.into_iter().map(|(route, name, description)| html! {
                    <Link<Route>
                        to={route}
                        classes="block p-6 rounded-lg border border-neutral-200 \
                                 dark:border-neutral-700 hover:border-neutral-400 \
                                 transition-colors"
                    >
                        <h2 class="text-lg font-semibold text-neutral-900 dark:text-white">
                            {name}
                        </h2>
                        <p class="mt-1 text-sm text-neutral-600 dark:text-neutral-400">
                            {description}
                        </p>
                    </Link<Route>>
                })}
            </div>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    let current = use_route::<Route>();

    let nav_link = |route: Route, label: &'static str| {
        let active = current.as_ref() == Some(&route);
        html! {
            <Link<Route>
                to={route}
                classes={classes!(
                    "text-sm", "font-medium", "transition-colors",
                    if active {
                        "text-neutral-900 dark:text-white"
                    } else {
                        "text-neutral-500 hover:text-neutral-900 dark:hover:text-white"
                    }
                )}
            >
                {label}
            </Link<Route>>
        }
    };

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        {nav_link(Route::Home, "UI Kit")}
                    </div>
                    <nav class="flex items-center space-x-4">
                        {nav_link(Route::Toasts, "Toasts")}
                        {nav_link(Route::Dialogs, "Dialogs")}
                        {nav_link(Route::Pricing, "Pricing")}
                        {nav_link(Route::Toggle, "Toggle")}
                    </nav>
                </div>
            </div>
        </header>
    }
}

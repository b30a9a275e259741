use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::YewduxRoot;

pub mod components;
pub mod config;
pub mod contexts;
pub mod devtools;
mod logs;
mod pages;
pub mod state;
pub mod style;
pub mod toast;

use components::layout::MainLayout;
use config::UiConfig;
use contexts::ToastProvider;
use devtools::DevToolbarMount;
use pages::{
    DialogsPage, HomePage, NotFoundPage, PricingPage, ToastsPage, TogglePage,
};

/// The component showcase.
#[function_component]
pub fn App() -> Html {
    let config = use_memo((), |_| UiConfig::from_env());
    logs::init_logging(&config.log_filter);

    html! {
        <YewduxRoot>
            <BrowserRouter>
                <ToastProvider default_duration_ms={config.toast_duration_ms}>
                    <DevToolbarMount config={(*config).clone()} />
                    <MainLayout>
                        <Switch<Route> render={switch} />
                    </MainLayout>
                </ToastProvider>
            </BrowserRouter>
        </YewduxRoot>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/toasts")]
    Toasts,
    #[at("/dialogs")]
    Dialogs,
    #[at("/pricing")]
    Pricing,
    #[at("/toggle")]
    Toggle,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Toasts => html! { <ToastsPage /> },
        Route::Dialogs => html! { <DialogsPage /> },
        Route::Pricing => html! { <PricingPage /> },
        Route::Toggle => html! { <TogglePage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

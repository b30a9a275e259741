use crate::components::layout::Header;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &MainLayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
            <Header />
            <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {for props.children.iter()}
            </main>
        </div>
    }
}

use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A dialog frame: dimmed backdrop plus a centered panel.
///
/// # Example
///
/// ```rust,ignore
/// use ui_kit::components::Modal;
/// use yew::prelude::*;
///
/// #[function_component]
/// fn MyComponent() -> Html {
///     let show_modal = use_state(|| false);
///
///     let close_modal = {
///         let show_modal = show_modal.clone();
///         Callback::from(move |_| show_modal.set(false))
///     };
///
///     html! {
///         if *show_modal {
///             <Modal title="Modal Title" on_close={close_modal}>
///                 <p>{"Modal content goes here"}</p>
///             </Modal>
///         }
///     }
/// }
/// ```
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Modal content (passed as children)
    pub children: Html,
    /// Called on backdrop click, Escape or the close button
    pub on_close: Callback<()>,
    /// Optional heading rendered above the content
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Maximum width class (default: "max-w-md")
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
    /// Whether to allow closing by clicking backdrop (default: true)
    #[prop_or(true)]
    pub close_on_backdrop: bool,
    /// Whether Escape closes the modal (default: true)
    #[prop_or(true)]
    pub close_on_escape: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    // Focus the backdrop so it receives keydown events.
    {
        let backdrop_ref = backdrop_ref.clone();
        use_effect_with((), move |_| {
            if let Some(element) = backdrop_ref.cast::<web_sys::HtmlElement>()
            {
                let _ = element.focus();
            }
        });
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        let close_on_backdrop = props.close_on_backdrop;

        Callback::from(move |e: MouseEvent| {
            if !close_on_backdrop {
                return;
            }

            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_keydown = {
        let on_close = props.on_close.clone();
        let close_on_escape = props.close_on_escape;
        Callback::from(move |e: KeyboardEvent| {
            if close_on_escape && e.key() == "Escape" {
                e.prevent_default();
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            onkeydown={on_keydown}
            tabindex="-1"
            role="dialog"
            aria-modal="true"
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4 focus:outline-none"
        >
            <div
                class={format!(
                    "bg-white dark:bg-neutral-800 rounded-lg shadow-xl \
                     w-full p-6 {}",
                    props.max_width
                )}
            >
                if let Some(title) = &props.title {
                    <div class="flex items-start justify-between mb-4">
                        <h3 class="text-lg font-semibold text-neutral-900 \
                                   dark:text-neutral-100">
                            {title}
                        </h3>
                        <button
                            onclick={on_close_click}
                            class="text-neutral-400 hover:text-neutral-600 \
                                   dark:hover:text-neutral-200 transition-colors"
                            title="Close"
                        >
                            <span class="text-lg leading-none">{"×"}</span>
                        </button>
                    </div>
                }
                {props.children.clone()}
            </div>
        </div>
    }
}

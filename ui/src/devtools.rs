//! Development toolbar mounted outside the application tree.
//!
//! The toolbar gets its own root node appended to `<body>`. The node is
//! owned by a [`DevRoot`] and removed when that value is dropped, so
//! tearing down the toolbar never leaves stray nodes behind.

use anyhow::Context;
use yew::AppHandle;
use yew::prelude::*;

use crate::config::UiConfig;
use crate::contexts::toast::ToastHandle;
use crate::toast::ToastKind;

pub const DEV_ROOT_ID: &str = "ui-kit-dev-toolbar";

#[derive(Debug, thiserror::Error)]
pub enum DevToolsError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("failed to create dev root: {0}")]
    CreateElement(String),
    #[error("an element with id {0:?} already exists")]
    AlreadyMounted(String),
}

/// An element appended to `<body>` for the lifetime of this value.
pub struct DevRoot {
    element: web_sys::Element,
}

impl DevRoot {
    pub fn acquire(element_id: &str) -> Result<Self, DevToolsError> {
        let document = web_sys::window()
            .ok_or(DevToolsError::NoWindow)?
            .document()
            .ok_or(DevToolsError::NoDocument)?;

        if document.get_element_by_id(element_id).is_some() {
            return Err(DevToolsError::AlreadyMounted(element_id.to_string()));
        }

        let body = document.body().ok_or(DevToolsError::NoBody)?;
        let element = document
            .create_element("div")
            .map_err(|e| DevToolsError::CreateElement(format!("{e:?}")))?;
        element.set_id(element_id);
        body.append_child(&element)
            .map_err(|e| DevToolsError::CreateElement(format!("{e:?}")))?;

        tracing::debug!("acquired dev root #{element_id}");
        Ok(Self { element })
    }

    pub fn element(&self) -> &web_sys::Element {
        &self.element
    }
}

impl Drop for DevRoot {
    fn drop(&mut self) {
        self.element.remove();
        tracing::debug!("released dev root #{}", self.element.id());
    }
}

/// Keeps the toolbar app alive. Dropping it unmounts the app and then
/// removes its root node.
pub struct DevToolbarHandle {
    app: Option<AppHandle<DevToolbar>>,
    _root: DevRoot,
}

impl Drop for DevToolbarHandle {
    fn drop(&mut self) {
        if let Some(app) = self.app.take() {
            app.destroy();
        }
    }
}

/// Mounts the toolbar when the build enables it.
pub fn mount_dev_toolbar(
    config: &UiConfig,
    toasts: ToastHandle,
) -> anyhow::Result<Option<DevToolbarHandle>> {
    if !config.dev_toolbar {
        return Ok(None);
    }

    let root = DevRoot::acquire(DEV_ROOT_ID)
        .context("failed to acquire the dev toolbar root")?;
    let app = yew::Renderer::<DevToolbar>::with_root_and_props(
        root.element().clone(),
        DevToolbarProps { toasts },
    )
    .render();

    Ok(Some(DevToolbarHandle {
        app: Some(app),
        _root: root,
    }))
}

#[derive(Properties, PartialEq)]
pub struct DevToolbarProps {
    pub toasts: ToastHandle,
}

#[function_component]
pub fn DevToolbar(props: &DevToolbarProps) -> Html {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    let sample_buttons = ToastKind::ALL.iter().map(|kind| {
        let kind = *kind;
        let toasts = props.toasts.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let title = format!("Sample {} toast", kind.as_str());
            if let Err(e) = toasts.show(kind, title) {
                tracing::error!("dev toolbar: {e}");
            }
        });
        html! {
            <button
                key={kind.as_str()}
                onclick={onclick}
                class="px-2 py-1 rounded bg-neutral-700 hover:bg-neutral-600"
            >
                {kind.as_str()}
            </button>
        }
    });

    let on_clear = {
        let toasts = props.toasts.clone();
        Callback::from(move |_: MouseEvent| toasts.clear())
    };

    html! {
        <div class="fixed bottom-4 left-4 z-50 flex items-center gap-2 \
                    rounded-lg bg-neutral-900 px-3 py-2 text-xs text-white \
                    shadow-lg">
            <span class="font-mono opacity-75">{profile}</span>
            {for sample_buttons}
            <button
                onclick={on_clear}
                class="px-2 py-1 rounded bg-red-700 hover:bg-red-600"
            >
                {"clear"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DevToolbarMountProps {
    pub config: UiConfig,
}

/// Mounts the toolbar for as long as this component is mounted. Must be
/// rendered inside a [`crate::contexts::ToastProvider`].
#[function_component]
pub fn DevToolbarMount(props: &DevToolbarMountProps) -> Html {
    let toasts = crate::contexts::use_toast();

    {
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let handle = match mount_dev_toolbar(&config, toasts) {
                Ok(handle) => handle,
                Err(e) => {
                    tracing::error!("{e:#}");
                    None
                }
            };

            move || drop(handle)
        });
    }

    html! {}
}

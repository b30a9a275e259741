mod toast_container;
mod toast_item;

pub use toast_container::{ToastContainer, ToastContainerProps, toast_keys};
pub use toast_item::{Toast, ToastProps};

pub mod toast;

pub use toast::{ToastHandle, ToastProvider, use_toast, use_toast_opt};

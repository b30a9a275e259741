pub mod confirm_dialog;
pub mod layout;
pub mod modal;
pub mod pricing_wizard;
pub mod toast;
pub mod toggle_switch;

pub use confirm_dialog::ConfirmDialog;
pub use modal::Modal;
pub use pricing_wizard::PricingWizard;
pub use toast::{Toast, ToastContainer};
pub use toggle_switch::ToggleSwitch;

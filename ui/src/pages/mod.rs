pub mod dialogs;
pub mod home;
pub mod not_found;
pub mod pricing;
pub mod toasts;
pub mod toggle;

pub use dialogs::DialogsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use toasts::ToastsPage;
pub use toggle::TogglePage;

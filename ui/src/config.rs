//! Build-time configuration.
//!
//! The crate runs as a wasm bundle, so settings are baked in with
//! `option_env!` when it is compiled.

pub const DEFAULT_LOG_FILTER: &str = "error,ui_kit=debug";
pub const DEFAULT_TOAST_DURATION_MS: i64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub log_filter: String,
    /// Auto-dismiss delay for toasts created through the convenience
    /// helpers. Zero or negative disables auto-dismiss.
    pub toast_duration_ms: i64,
    pub dev_toolbar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            dev_toolbar: cfg!(debug_assertions),
        }
    }
}

impl UiConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("UI_LOG_FILTER"),
            option_env!("UI_TOAST_DURATION_MS"),
            option_env!("UI_DEV_TOOLBAR"),
        )
    }

    pub fn from_values(
        log_filter: Option<&str>,
        toast_duration_ms: Option<&str>,
        dev_toolbar: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let log_filter = log_filter
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.log_filter);

        let toast_duration_ms = match toast_duration_ms {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "UI_TOAST_DURATION_MS={raw:?} is not a number, using {}",
                    defaults.toast_duration_ms
                );
                defaults.toast_duration_ms
            }),
            None => defaults.toast_duration_ms,
        };

        let dev_toolbar = match dev_toolbar.map(str::trim) {
            Some("1") | Some("true") => true,
            Some("0") | Some("false") => false,
            _ => defaults.dev_toolbar,
        };

        Self {
            log_filter,
            toast_duration_ms,
            dev_toolbar,
        }
    }
}

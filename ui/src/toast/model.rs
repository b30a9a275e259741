use std::fmt;
use uuid::Uuid;

/// Longest delay handed to the browser timer facility. Browsers store
/// timeouts as a signed 32 bit millisecond count and fire immediately on
/// overflow, so larger requests are clamped here.
pub const MAX_DURATION_MS: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub Uuid);

impl ToastId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u128> for ToastId {
    fn from(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

/// Severity of a toast. Presentational only; every kind shares the same
/// lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Info,
        ToastKind::Warning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToastError {
    #[error("toast title must not be empty")]
    EmptyTitle,
}

/// A single notification as handed to the container by its owner.
///
/// The close capability is not part of the value: the container receives
/// one `on_close_toast` callback and passes it to every toast it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSpec {
    id: ToastId,
    kind: ToastKind,
    title: String,
    message: Option<String>,
    duration_ms: Option<i64>,
}

impl ToastSpec {
    /// Creates a persistent, title-only toast.
    ///
    /// Fails with [`ToastError::EmptyTitle`] when `title` is blank, since a
    /// toast with nothing to show cannot be rendered meaningfully.
    pub fn new(
        id: ToastId,
        kind: ToastKind,
        title: impl Into<String>,
    ) -> Result<Self, ToastError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ToastError::EmptyTitle);
        }

        Ok(Self {
            id,
            kind,
            title,
            message: None,
            duration_ms: None,
        })
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Requests auto-dismiss after `duration_ms`. Zero or negative values
    /// are kept as given and mean "no auto-dismiss".
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn no_auto_dismiss(mut self) -> Self {
        self.duration_ms = None;
        self
    }

    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn requested_duration_ms(&self) -> Option<i64> {
        self.duration_ms
    }

    /// The delay after which the toast dismisses itself, if any.
    pub fn auto_dismiss_after(&self) -> Option<u32> {
        normalize_duration(self.duration_ms)
    }
}

/// Maps a requested duration to the timer delay actually scheduled.
pub fn normalize_duration(duration_ms: Option<i64>) -> Option<u32> {
    match duration_ms {
        Some(ms) if ms > 0 => {
            Some(u32::try_from(ms).unwrap_or(u32::MAX).min(MAX_DURATION_MS))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(
            ToastSpec::new(ToastId::from(1), ToastKind::Info, "   "),
            Err(ToastError::EmptyTitle)
        );
        assert_eq!(
            ToastSpec::new(ToastId::from(1), ToastKind::Info, ""),
            Err(ToastError::EmptyTitle)
        );
    }

    #[test]
    fn title_only_toast_has_no_message() {
        let toast =
            ToastSpec::new(ToastId::from(7), ToastKind::Success, "Saved")
                .unwrap();
        assert_eq!(toast.title(), "Saved");
        assert_eq!(toast.message_text(), None);
        assert_eq!(toast.auto_dismiss_after(), None);
    }

    #[test]
    fn duration_normalization() {
        assert_eq!(normalize_duration(None), None);
        assert_eq!(normalize_duration(Some(0)), None);
        assert_eq!(normalize_duration(Some(-250)), None);
        assert_eq!(normalize_duration(Some(1000)), Some(1000));
        assert_eq!(
            normalize_duration(Some(i64::MAX)),
            Some(MAX_DURATION_MS)
        );
        assert_eq!(
            normalize_duration(Some(i64::from(MAX_DURATION_MS) + 1)),
            Some(MAX_DURATION_MS)
        );
    }

    #[test]
    fn builder_sets_optional_fields() {
        let toast = ToastSpec::new(ToastId::from(3), ToastKind::Error, "Oops")
            .unwrap()
            .message("Could not save")
            .duration_ms(2500);
        assert_eq!(toast.message_text(), Some("Could not save"));
        assert_eq!(toast.auto_dismiss_after(), Some(2500));

        let toast = toast.no_auto_dismiss();
        assert_eq!(toast.requested_duration_ms(), None);
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }
}

//! Component state to class-list mappings.
//!
//! These are plain functions so the mapping can be checked without
//! rendering anything.

use yew::Classes;

use crate::toast::ToastKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDescriptor {
    tokens: Vec<&'static str>,
}

impl StyleDescriptor {
    pub fn new(tokens: &[&'static str]) -> Self {
        Self {
            tokens: tokens.to_vec(),
        }
    }

    pub fn with(mut self, tokens: &[&'static str]) -> Self {
        self.tokens.extend_from_slice(tokens);
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| *t == token)
    }

    pub fn tokens(&self) -> &[&'static str] {
        &self.tokens
    }

    pub fn classes(&self) -> Classes {
        self.tokens.iter().copied().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastStyle {
    pub container: StyleDescriptor,
    pub accent: StyleDescriptor,
    pub icon: &'static str,
}

pub fn toast_style(kind: ToastKind) -> ToastStyle {
    let container = StyleDescriptor::new(&[
        "relative",
        "p-4",
        "rounded-lg",
        "border",
        "shadow-lg",
        "transition-all",
        "duration-300",
        "ease-out",
    ]);

    let (palette, accent, icon) = match kind {
        ToastKind::Error => (
            StyleDescriptor::new(&[
                "bg-red-50",
                "dark:bg-red-900",
                "border-red-200",
                "dark:border-red-800",
            ]),
            StyleDescriptor::new(&["text-red-700", "dark:text-red-400"]),
            "✕",
        ),
        ToastKind::Success => (
            StyleDescriptor::new(&[
                "bg-green-50",
                "dark:bg-green-900",
                "border-green-200",
                "dark:border-green-800",
            ]),
            StyleDescriptor::new(&["text-green-700", "dark:text-green-400"]),
            "✓",
        ),
        ToastKind::Info => (
            StyleDescriptor::new(&[
                "bg-neutral-50",
                "dark:bg-neutral-800",
                "border-neutral-200",
                "dark:border-neutral-700",
            ]),
            StyleDescriptor::new(&["text-neutral-700", "dark:text-neutral-300"]),
            "ℹ",
        ),
        ToastKind::Warning => (
            StyleDescriptor::new(&[
                "bg-amber-50",
                "dark:bg-amber-900",
                "border-amber-200",
                "dark:border-amber-800",
            ]),
            StyleDescriptor::new(&["text-amber-700", "dark:text-amber-400"]),
            "!",
        ),
    };

    ToastStyle {
        container: container.with(palette.tokens()).with(accent.tokens()),
        accent,
        icon,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleVisual {
    pub checked: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleStyle {
    pub track: StyleDescriptor,
    pub thumb: StyleDescriptor,
}

pub fn toggle_style(visual: ToggleVisual) -> ToggleStyle {
    let track = StyleDescriptor::new(&[
        "relative",
        "inline-flex",
        "h-6",
        "w-11",
        "shrink-0",
        "rounded-full",
        "transition-colors",
    ]);
    let thumb = StyleDescriptor::new(&[
        "absolute",
        "top-[2px]",
        "left-[2px]",
        "h-5",
        "w-5",
        "rounded-full",
        "border",
        "transition-transform",
    ]);

    let track = if visual.checked {
        track.with(&["bg-neutral-900", "dark:bg-neutral-100"])
    } else {
        track.with(&["bg-neutral-200", "dark:bg-neutral-700"])
    };
    let thumb = if visual.checked {
        thumb.with(&["translate-x-5", "bg-white", "dark:bg-neutral-900"])
    } else {
        thumb.with(&["translate-x-0", "bg-white", "border-neutral-300"])
    };

    let track = if visual.disabled {
        track.with(&["opacity-50", "cursor-not-allowed"])
    } else {
        track.with(&["cursor-pointer"])
    };

    ToggleStyle { track, thumb }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

pub fn step_style(status: StepStatus) -> StyleDescriptor {
    let base = StyleDescriptor::new(&[
        "flex",
        "h-8",
        "w-8",
        "items-center",
        "justify-center",
        "rounded-full",
        "text-sm",
        "font-medium",
    ]);

    match status {
        StepStatus::Complete => base.with(&[
            "bg-neutral-900",
            "text-white",
            "dark:bg-neutral-100",
            "dark:text-neutral-900",
        ]),
        StepStatus::Current => base.with(&[
            "border-2",
            "border-neutral-900",
            "text-neutral-900",
            "dark:border-neutral-100",
            "dark:text-neutral-100",
        ]),
        StepStatus::Upcoming => base.with(&[
            "border",
            "border-neutral-300",
            "text-neutral-400",
            "dark:border-neutral-600",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_toast_kind_is_distinct() {
        let styles: Vec<_> =
            ToastKind::ALL.iter().map(|k| toast_style(*k)).collect();
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a.icon, b.icon);
                assert_ne!(a.accent, b.accent);
            }
        }
        assert!(toast_style(ToastKind::Error).container.contains("bg-red-50"));
        assert!(toast_style(ToastKind::Error).container.contains("shadow-lg"));
    }

    #[test]
    fn toggle_style_follows_state() {
        let on = toggle_style(ToggleVisual {
            checked: true,
            disabled: false,
        });
        let off = toggle_style(ToggleVisual::default());

        assert!(on.track.contains("bg-neutral-900"));
        assert!(on.thumb.contains("translate-x-5"));
        assert!(off.track.contains("bg-neutral-200"));
        assert!(off.thumb.contains("translate-x-0"));
        assert!(off.track.contains("cursor-pointer"));

        let disabled = toggle_style(ToggleVisual {
            checked: false,
            disabled: true,
        });
        assert!(disabled.track.contains("opacity-50"));
        assert!(!disabled.track.contains("cursor-pointer"));
    }

    #[test]
    fn step_styles_differ() {
        let complete = step_style(StepStatus::Complete);
        let current = step_style(StepStatus::Current);
        let upcoming = step_style(StepStatus::Upcoming);
        assert_ne!(complete, current);
        assert_ne!(current, upcoming);
        assert!(current.contains("border-2"));
    }

    #[test]
    fn descriptor_keeps_token_order() {
        let style = StyleDescriptor::new(&["a", "b"]).with(&["c"]);
        assert_eq!(style.tokens(), &["a", "b", "c"]);
    }
}

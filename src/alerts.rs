use serde::Serialize;

/// Milliseconds before the slide-in class is applied.
pub const SHOW_DELAY_MS: u64 = 100;
/// Milliseconds an alert stays up before auto-dismissal begins.
pub const AUTO_DISMISS_MS: u64 = 5000;
/// Milliseconds the exit fade runs before the element is removed.
pub const EXIT_FADE_MS: u64 = 300;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Error,
    Success,
}

/// One banner for the page's alert rail. Clicking a banner dismisses it
/// ahead of the auto-dismiss timer.
#[derive(Serialize, Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn error(message: &str) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.to_string(),
        }
    }

    pub fn success(message: &str) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.to_string(),
        }
    }
}

/// Offsets, in milliseconds from creation, of an alert's presentation
/// phases: slide-in, start of auto-dismiss, removal after the exit fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSchedule {
    pub show_at_ms: u64,
    pub dismiss_at_ms: u64,
    pub remove_at_ms: u64,
}

pub fn presentation_schedule() -> AlertSchedule {
    AlertSchedule {
        show_at_ms: SHOW_DELAY_MS,
        dismiss_at_ms: AUTO_DISMISS_MS,
        remove_at_ms: AUTO_DISMISS_MS + EXIT_FADE_MS,
    }
}

/// A clicked alert starts fading immediately and is removed once the exit
/// fade ends.
pub fn click_dismiss_removal_ms(clicked_at_ms: u64) -> u64 {
    clicked_at_ms + EXIT_FADE_MS
}

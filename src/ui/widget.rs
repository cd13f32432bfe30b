use serde::Serialize;

/// When the popup bubble appears next to the launcher.
pub const POPUP_AT_MS: u64 = 2000;
/// When the unread badge appears.
pub const BADGE_AT_MS: u64 = 3000;
/// When the launcher starts its nudge animation.
pub const NUDGE_AT_MS: u64 = 5000;

/// Attention cues currently showing on the chat launcher.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AttentionCues {
    pub popup: bool,
    pub badge: bool,
    pub nudge: bool,
}

/// Launcher state for the chat widget. Each attention timer checks whether
/// the panel is open when it fires, not whether it was ever opened.
#[derive(Debug, Default)]
pub struct ChatWidget {
    open: bool,
    popup_visible: bool,
    badge_visible: bool,
    nudging: bool,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn on_popup_timer(&mut self) {
        if !self.open {
            self.popup_visible = true;
        }
    }

    pub fn on_badge_timer(&mut self) {
        if !self.open {
            self.badge_visible = true;
        }
    }

    pub fn on_nudge_timer(&mut self) {
        if !self.open {
            self.nudging = true;
        }
    }

    /// Opening the panel consumes the popup and the badge. The nudge keeps
    /// running so the launcher still draws the eye after a close.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.popup_visible = false;
            self.badge_visible = false;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_visible = false;
    }

    pub fn cues(&self) -> AttentionCues {
        AttentionCues {
            popup: self.popup_visible,
            badge: self.badge_visible,
            nudge: self.nudging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_that_fire_before_any_open_show_their_cues() {
        let mut widget = ChatWidget::new();
        widget.on_popup_timer();
        widget.on_badge_timer();
        widget.on_nudge_timer();
        assert_eq!(
            widget.cues(),
            AttentionCues {
                popup: true,
                badge: true,
                nudge: true,
            }
        );
    }

    #[test]
    fn opening_clears_the_popup_and_badge_but_not_the_nudge() {
        let mut widget = ChatWidget::new();
        widget.on_popup_timer();
        widget.on_badge_timer();
        widget.on_nudge_timer();

        widget.toggle();
        assert!(widget.is_open());
        let cues = widget.cues();
        assert!(!cues.popup);
        assert!(!cues.badge);
        assert!(cues.nudge);
    }

    #[test]
    fn timers_that_fire_while_open_are_suppressed() {
        let mut widget = ChatWidget::new();
        widget.toggle();
        widget.on_popup_timer();
        widget.on_badge_timer();
        widget.on_nudge_timer();
        assert_eq!(
            widget.cues(),
            AttentionCues {
                popup: false,
                badge: false,
                nudge: false,
            }
        );
    }

    #[test]
    fn timers_resume_showing_cues_after_a_close() {
        let mut widget = ChatWidget::new();
        widget.toggle();
        widget.close();
        widget.on_badge_timer();
        assert!(widget.cues().badge);
    }

    #[test]
    fn visitor_can_dismiss_the_popup_without_opening() {
        let mut widget = ChatWidget::new();
        widget.on_popup_timer();
        widget.dismiss_popup();
        assert!(!widget.cues().popup);
        assert!(!widget.is_open());
    }
}

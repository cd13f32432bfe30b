use std::collections::HashSet;

/// Touches longer than this are drags, not card taps.
pub const TAP_OPEN_MAX_MS: u64 = 300;
/// Swipe-to-close only arms when the touch starts near the sheet's top edge.
pub const SWIPE_CLOSE_START_ZONE_PX: f64 = 100.0;
/// Downward travel needed to dismiss the sheet.
pub const SWIPE_CLOSE_DISTANCE_PX: f64 = 100.0;
/// Slower gestures are treated as scrolling.
pub const SWIPE_CLOSE_MAX_MS: u64 = 500;
/// Drag distance over which the sheet fades toward its floor opacity.
pub const FEEDBACK_RANGE_PX: f64 = 200.0;

/// Which overlays are open right now. The page body stays locked until the
/// last one closes.
#[derive(Debug, Default)]
pub struct ModalStack {
    open: HashSet<String>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, id: &str) {
        self.open.insert(id.to_string());
    }

    pub fn close(&mut self, id: &str) {
        self.open.remove(id);
    }

    /// Escape closes every open overlay at once.
    pub fn close_all(&mut self) {
        self.open.clear();
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn body_locked(&self) -> bool {
        !self.open.is_empty()
    }
}

/// A quick touch on a card opens its overlay; anything longer was a scroll.
pub fn is_card_tap(duration_ms: u64) -> bool {
    duration_ms < TAP_OPEN_MAX_MS
}

/// Visual state of the sheet while a close gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFeedback {
    pub translate_y: f64,
    pub opacity: f64,
}

/// One touch sequence on an open sheet, tracked from its starting point.
#[derive(Debug)]
pub struct SwipeClose {
    start_x: f64,
    start_y: f64,
    started_at_ms: u64,
}

impl SwipeClose {
    pub fn begin(start_x: f64, start_y: f64, now_ms: u64) -> Self {
        Self {
            start_x,
            start_y,
            started_at_ms: now_ms,
        }
    }

    /// The sheet follows a downward drag at reduced speed and fades as it
    /// goes. Outside the feedback range it sits at rest.
    pub fn drag_feedback(&self, current_x: f64, current_y: f64) -> Option<DragFeedback> {
        if self.start_y >= SWIPE_CLOSE_START_ZONE_PX {
            return None;
        }
        let dx = current_x - self.start_x;
        let dy = current_y - self.start_y;
        if dy.abs() > dx.abs() && dy > 0.0 && dy < FEEDBACK_RANGE_PX {
            Some(DragFeedback {
                translate_y: dy * 0.3,
                opacity: (1.0 - dy / FEEDBACK_RANGE_PX).max(0.3),
            })
        } else {
            None
        }
    }

    /// A fast, decisively downward release from the top zone dismisses the
    /// sheet.
    pub fn should_close(&self, end_x: f64, end_y: f64, now_ms: u64) -> bool {
        let dx = end_x - self.start_x;
        let dy = end_y - self.start_y;
        self.start_y < SWIPE_CLOSE_START_ZONE_PX
            && dy.abs() > dx.abs()
            && dy > SWIPE_CLOSE_DISTANCE_PX
            && now_ms - self.started_at_ms < SWIPE_CLOSE_MAX_MS
    }
}

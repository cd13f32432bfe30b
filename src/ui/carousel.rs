/// Widest viewport that gets the horizontal-scroll carousel.
pub const MOBILE_MAX_WIDTH_PX: f64 = 480.0;
pub const ITEM_WIDTH_PX: f64 = 280.0;
pub const ITEM_GAP_PX: f64 = 16.0;
/// Distance between item origins.
pub const ITEM_STRIDE_PX: f64 = ITEM_WIDTH_PX + ITEM_GAP_PX;
/// Minimum release distance for a swipe to move the carousel.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
/// Movement inside this zone never captures the gesture.
pub const DRAG_DEAD_ZONE_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMode {
    Mobile,
    Desktop,
}

pub fn mode_for_width(viewport_width: f64) -> CarouselMode {
    if viewport_width <= MOBILE_MAX_WIDTH_PX {
        CarouselMode::Mobile
    } else {
        CarouselMode::Desktop
    }
}

/// A resize re-initializes the carousel only when it crosses the mobile
/// boundary.
pub fn mode_changed(previous_width: f64, new_width: f64) -> bool {
    mode_for_width(previous_width) != mode_for_width(new_width)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Running,
    Paused,
}

/// Desktop auto-rotation pauses while the pointer is over the carousel.
pub fn play_state(hovering: bool) -> PlayState {
    if hovering {
        PlayState::Paused
    } else {
        PlayState::Running
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Advance,
    Retreat,
    Stay,
}

impl SwipeOutcome {
    /// How far the release moves the scroll position.
    pub fn scroll_delta(self) -> f64 {
        match self {
            SwipeOutcome::Advance => ITEM_STRIDE_PX,
            SwipeOutcome::Retreat => -ITEM_STRIDE_PX,
            SwipeOutcome::Stay => 0.0,
        }
    }
}

/// One touch or mouse drag across the mobile carousel. Deltas are start
/// minus current, so dragging left yields a positive delta.
#[derive(Debug)]
pub struct SwipeTracker {
    start_x: f64,
    start_y: f64,
    start_scroll: f64,
    active: bool,
}

impl SwipeTracker {
    pub fn begin(start_x: f64, start_y: f64, scroll_left: f64) -> Self {
        Self {
            start_x,
            start_y,
            start_scroll: scroll_left,
            active: true,
        }
    }

    /// Scroll position while dragging. Movement inside the dead zone, or
    /// with vertical dominance, leaves the native scroll alone.
    pub fn update(&self, current_x: f64, current_y: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        let dx = self.start_x - current_x;
        let dy = self.start_y - current_y;
        if dx.abs() > dy.abs() && dx.abs() > DRAG_DEAD_ZONE_PX {
            Some(self.start_scroll + dx)
        } else {
            None
        }
    }

    /// Ends the gesture. A decisive horizontal release past the threshold
    /// moves one item in the swipe direction.
    pub fn finish(&mut self, end_x: f64, end_y: f64) -> SwipeOutcome {
        if !self.active {
            return SwipeOutcome::Stay;
        }
        self.active = false;

        let dx = self.start_x - end_x;
        let dy = self.start_y - end_y;
        if dx.abs() > dy.abs() && dx.abs() > SWIPE_THRESHOLD_PX {
            if dx > 0.0 { SwipeOutcome::Advance } else { SwipeOutcome::Retreat }
        } else {
            SwipeOutcome::Stay
        }
    }
}

/// Index the scroll position snaps to. Positions that round outside the
/// item range keep the current index.
pub fn snap_index(scroll_left: f64, item_count: usize, current_index: usize) -> usize {
    let candidate = (scroll_left / ITEM_STRIDE_PX).round();
    if candidate >= 0.0 && (candidate as usize) < item_count {
        candidate as usize
    } else {
        current_index
    }
}

/// Scroll depth past which the header takes its raised background.
pub const RAISED_AFTER_PX: f64 = 50.0;
/// Scroll depth past which downward movement hides the header.
pub const HIDE_AFTER_PX: f64 = 100.0;
/// How far above a section its activation window starts.
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 100.0;
/// Gap left between the header and an anchor-scrolled section.
pub const ANCHOR_GAP_PX: f64 = 20.0;

pub const SCROLL_SPY_INTERVAL_MS: u64 = 100;
pub const PARALLAX_INTERVAL_MS: u64 = 16;

/// Classes the header carries after a scroll step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEffects {
    pub raised: bool,
    pub hidden: bool,
}

/// Direction-aware header state. Scrolling down past the hide depth hides
/// the header and logos; any upward movement brings them back.
#[derive(Debug, Default)]
pub struct NavScroll {
    last_y: f64,
}

impl NavScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, y: f64) -> NavEffects {
        let effects = NavEffects {
            raised: y > RAISED_AFTER_PX,
            hidden: y > self.last_y && y > HIDE_AFTER_PX,
        };
        self.last_y = y;
        effects
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section the nav highlights: the last one, in document order, whose
/// activation window contains the scroll position.
pub fn active_section(sections: &[Section], y: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        let window_top = section.top - SECTION_ACTIVATION_OFFSET_PX;
        if y >= window_top && y < window_top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Scroll destination for an anchor link.
pub fn scroll_target(section_top: f64, navbar_height: f64) -> f64 {
    section_top - navbar_height - ANCHOR_GAP_PX
}

/// Hamburger menu. Closes when a link is followed or a tap lands outside
/// the menu and its toggle.
#[derive(Debug, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn on_link_followed(&mut self) {
        self.open = false;
    }

    pub fn on_outside_tap(&mut self) {
        self.open = false;
    }
}

/// Leading-edge rate limiter for scroll handlers. The first call fires,
/// later calls are dropped until the interval has elapsed.
#[derive(Debug)]
pub struct Throttle {
    interval_ms: u64,
    last_fired: Option<u64>,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fired: None,
        }
    }

    pub fn ready(&mut self, now_ms: u64) -> bool {
        match self.last_fired {
            Some(last) if now_ms < last + self.interval_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }
}

/// FAQ list where at most one entry is expanded at a time.
#[derive(Debug, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Expands the entry, collapsing whichever one was open. Toggling the
    /// open entry collapses it. Returns whether the entry is now open.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.open == Some(index) {
            self.open = None;
            false
        } else {
            self.open = Some(index);
            true
        }
    }
}

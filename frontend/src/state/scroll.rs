use crate::config::{BACK_TO_TOP_THRESHOLD_PX, HEADER_SOLID_THRESHOLD_PX};

/// Latest vertical scroll offset of the window. Flags are derived on read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub offset_px: f64,
}

impl ScrollState {
    pub fn new(offset_px: f64) -> Self {
        Self { offset_px }
    }

    pub fn is_scrolled_past_threshold(&self) -> bool {
        self.offset_px > HEADER_SOLID_THRESHOLD_PX
    }

    pub fn show_back_to_top(&self) -> bool {
        self.offset_px > BACK_TO_TOP_THRESHOLD_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_threshold_is_strict() {
        assert!(!ScrollState::new(0.0).is_scrolled_past_threshold());
        assert!(!ScrollState::new(50.0).is_scrolled_past_threshold());
        assert!(ScrollState::new(50.5).is_scrolled_past_threshold());
    }

    #[test]
    fn header_follows_scroll_both_ways() {
        let mut scroll = ScrollState::default();
        scroll.offset_px = 60.0;
        assert!(scroll.is_scrolled_past_threshold());
        scroll.offset_px = 40.0;
        assert!(!scroll.is_scrolled_past_threshold());
    }

    #[test]
    fn back_to_top_threshold_is_strict() {
        assert!(!ScrollState::new(300.0).show_back_to_top());
        assert!(ScrollState::new(301.0).show_back_to_top());
    }

    #[test]
    fn scroll_down_then_back_to_top() {
        let deep = ScrollState::new(500.0);
        assert!(deep.is_scrolled_past_threshold());
        assert!(deep.show_back_to_top());

        let top = ScrollState::new(0.0);
        assert!(!top.is_scrolled_past_threshold());
        assert!(!top.show_back_to_top());
    }
}

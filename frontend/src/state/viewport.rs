/// One-way latch for "has this element been seen yet".
///
/// Flips to entered the first time an intersection report meets the
/// threshold and ignores every report after that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLatch {
    threshold: f64,
    entered: bool,
}

impl ViewportLatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, entered: false }
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feeds one intersection report. Returns `true` only on the report that
    /// trips the latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.entered || !is_intersecting || ratio < self.threshold {
            return false;
        }
        self.entered = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FOOTER_VISIBILITY_THRESHOLD, SECTION_VISIBILITY_THRESHOLD};

    #[test]
    fn sections_wait_until_mostly_visible() {
        let mut latch = ViewportLatch::new(SECTION_VISIBILITY_THRESHOLD);
        assert!(!latch.observe(true, 0.5));
        assert!(!latch.observe(true, 0.79));
        assert!(latch.observe(true, 0.8));
    }

    #[test]
    fn footer_trips_on_first_tenth() {
        let mut latch = ViewportLatch::new(FOOTER_VISIBILITY_THRESHOLD);
        assert!(!latch.observe(true, 0.05));
        assert!(latch.observe(true, 0.1));
    }

    #[test]
    fn below_threshold_does_not_trip() {
        let mut latch = ViewportLatch::new(0.1);
        assert!(!latch.observe(true, 0.05));
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.has_entered());
    }

    #[test]
    fn trips_once_and_stays_entered() {
        let mut latch = ViewportLatch::new(0.1);
        assert!(latch.observe(true, 0.1));
        assert!(latch.has_entered());

        // leaves, then comes back
        assert!(!latch.observe(false, 0.0));
        assert!(latch.has_entered());
        assert!(!latch.observe(true, 0.9));
        assert!(latch.has_entered());
    }
}

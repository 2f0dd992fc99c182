use super::{Extent, Length, Pose};

/// Drifts an element down by `factor` of its own height while the page scrolls
/// from its top edge reaching the viewport top to its bottom edge doing so.
/// Linear and scrubbed directly by scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct Parallax {
    target: String,
    factor: f64,
}

impl Parallax {
    pub fn new(target: impl Into<String>, factor: f64) -> Self {
        Self {
            target: target.into(),
            factor,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn progress(extent: Extent, scroll_y: f64) -> f64 {
        if extent.height <= 0.0 {
            return 0.0;
        }
        ((scroll_y - extent.top) / extent.height).clamp(0.0, 1.0)
    }

    pub fn pose(&self, extent: Extent, scroll_y: f64) -> Pose {
        let percent = self.factor * 100.0 * Self::progress(extent, scroll_y);
        Pose::offset_y(Length::percent(percent))
    }
}

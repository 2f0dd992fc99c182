//! Animation sequencing decoupled from any rendering engine.
//!
//! Timelines, reveals and parallax only compute [`Pose`]s; a [`Surface`] is
//! what actually moves elements. The browser surface lives in the app module.

mod ease;
mod parallax;
mod pose;
mod reveal;
mod scroll;
mod timeline;

pub use ease::Ease;
pub use parallax::Parallax;
pub use pose::{Length, Lerp, Pose, Unit};
pub use reveal::{Axis, Reveal};
pub use scroll::{Crossing, ScrollDispatcher};
pub use timeline::{Playback, Position, Scheduled, Timeline, Tween};

/// Document-relative placement of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

/// The page as seen by the animation code. Targets are element ids.
pub trait Surface {
    /// Writes a pose to the target. Returns false when no such element exists.
    fn apply(&mut self, target: &str, pose: &Pose) -> bool;
    /// Top edge of the target relative to the viewport.
    fn viewport_top(&self, target: &str) -> Option<f64>;
    fn extent(&self, target: &str) -> Option<Extent>;
    fn viewport_height(&self) -> f64;
    fn scroll_y(&self) -> f64;
    /// Instant, non-smooth scroll.
    fn jump_to(&mut self, y: f64);

    fn contains(&self, target: &str) -> bool {
        self.extent(target).is_some()
    }
}

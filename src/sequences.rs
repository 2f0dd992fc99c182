//! The fixed timelines of the page, keyed by element id.

use crate::motion::{Ease, Length, Pose, Position, Timeline, Tween};

pub mod targets {
    pub const OVERLAY: &str = "page-transition";
    pub const NAVBAR: &str = "navbar";
    pub const HERO: &str = "home";
    pub const TITLE: &str = "film";
    pub const SUBTITLE: &str = "nick";
    pub const DESCRIPTION: &str = "hero-description";
}

fn overlay_up() -> Pose {
    Pose::offset_y(Length::percent(-100.0))
}

/// Overlay wipes away, then title, subtitle, description and navbar arrive,
/// each overlapping the tail of the one before. Steps whose element is
/// missing are left out entirely.
pub fn load_sequence(present: impl Fn(&str) -> bool) -> Timeline {
    let steps = [
        (
            Tween::new(targets::OVERLAY, Pose::REST, overlay_up())
                .duration(1.2)
                .ease(Ease::Power4Out)
                .delay(0.5),
            Position::Append,
        ),
        (
            Tween::new(targets::TITLE, Pose::hidden_y(100.0), Pose::REST)
                .duration(0.8)
                .ease(Ease::Power3Out),
            Position::Overlap(0.5),
        ),
        (
            Tween::new(targets::SUBTITLE, Pose::hidden_y(50.0), Pose::REST)
                .duration(0.6)
                .ease(Ease::Power3Out),
            Position::Overlap(0.4),
        ),
        (
            Tween::new(targets::DESCRIPTION, Pose::hidden_y(30.0), Pose::REST)
                .duration(0.6)
                .ease(Ease::Power2Out),
            Position::Overlap(0.2),
        ),
        (
            Tween::new(targets::NAVBAR, Pose::hidden_y(-50.0), Pose::REST)
                .duration(0.5)
                .ease(Ease::Power2Out),
            Position::Overlap(0.4),
        ),
    ];
    steps
        .into_iter()
        .filter(|(tween, _)| present(&tween.target))
        .fold(Timeline::new(), |tl, (tween, position)| tl.add(tween, position))
}

/// Overlay drops over the page ahead of a section jump.
pub fn cover_sequence() -> Timeline {
    Timeline::new().add(
        Tween::new(targets::OVERLAY, overlay_up(), Pose::REST)
            .duration(0.6)
            .ease(Ease::Power3In),
        Position::Append,
    )
}

/// Overlay lifts again once the jump has happened.
pub fn uncover_sequence() -> Timeline {
    Timeline::new().add(
        Tween::new(targets::OVERLAY, Pose::REST, overlay_up())
            .duration(0.6)
            .ease(Ease::Power3Out)
            .delay(0.2),
        Position::Append,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Unit;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn load_runs_in_fixed_order() {
        let tl = load_sequence(|_| true);
        let order = tl
            .steps()
            .iter()
            .map(|s| s.tween.target.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                targets::OVERLAY,
                targets::TITLE,
                targets::SUBTITLE,
                targets::DESCRIPTION,
                targets::NAVBAR
            ]
        );
        let starts = tl.steps().iter().map(|s| s.active_start()).collect::<Vec<_>>();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
        let ends = tl.steps().iter().map(|s| s.end()).collect::<Vec<_>>();
        assert!(ends.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn load_overlaps_match_the_choreography() {
        let tl = load_sequence(|_| true);
        let starts = tl.steps().iter().map(|s| s.active_start()).collect::<Vec<_>>();
        for (got, want) in starts.iter().zip([0.5, 1.2, 1.6, 2.0, 2.2]) {
            assert!(close(*got, want), "{got} != {want}");
        }
        assert!(close(tl.duration(), 2.7));
    }

    #[test]
    fn missing_targets_are_skipped_without_gaps() {
        let tl = load_sequence(|t| t != targets::OVERLAY);
        assert_eq!(tl.steps().len(), 4);
        assert_eq!(tl.steps()[0].tween.target, targets::TITLE);
        assert_eq!(tl.steps()[0].start, 0.0);

        assert!(load_sequence(|_| false).is_empty());
    }

    #[test]
    fn cover_then_uncover_returns_overlay_offscreen() {
        let cover = cover_sequence();
        let uncover = uncover_sequence();
        assert_eq!(cover.sample(cover.duration())[0].1, Pose::REST);
        assert_eq!(
            uncover.sample(uncover.duration())[0].1.y,
            Length::percent(-100.0)
        );
        assert!(close(uncover.duration(), 0.8));
    }

    #[test]
    fn cover_wipes_down_in_percent() {
        let cover = cover_sequence();
        let mut last = -100.0;
        for t in [0.01, 0.1, 0.3, 0.45, 0.59] {
            let y = cover.sample(t)[0].1.y;
            assert_eq!(y.unit, Unit::Percent);
            assert!(y.value > last && y.value < 0.0, "t={t}: {y}");
            last = y.value;
        }
        // power3.in starts slowly, the overlay is still mostly offscreen
        assert!(cover.sample(0.3)[0].1.y.value < -90.0);
    }
}

use super::{timeline::Tween, Ease, Pose};

const REVEAL_DISTANCE: f64 = 50.0;
const REVEAL_DURATION: f64 = 0.6;

/// Axis a tile slides in along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Rises from below.
    Y,
    /// Slides in from the left.
    X,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Idle,
    Forward,
    Backward,
}

/// Scroll-triggered entrance for one tile: plays forward on enter, reverses
/// from wherever it is on exit.
#[derive(Clone, Debug)]
pub struct Reveal {
    tween: Tween,
    time: f64,
    direction: Direction,
}

impl Reveal {
    /// The `index`th tile of a registry starts `index * stagger` seconds after
    /// its trigger fires.
    pub fn new(target: impl Into<String>, axis: Axis, index: usize, stagger: f64) -> Self {
        let from = match axis {
            Axis::Y => Pose::hidden_y(REVEAL_DISTANCE),
            Axis::X => Pose::hidden_x(-REVEAL_DISTANCE),
        };
        let tween = Tween::new(target, from, Pose::REST)
            .duration(REVEAL_DURATION)
            .ease(Ease::Power2Out)
            .delay(index as f64 * stagger);
        Self {
            tween,
            time: 0.0,
            direction: Direction::Idle,
        }
    }

    pub fn target(&self) -> &str {
        &self.tween.target
    }

    pub fn delay(&self) -> f64 {
        self.tween.delay
    }

    pub fn pose(&self) -> Pose {
        self.tween.pose_at(self.time)
    }

    pub fn is_moving(&self) -> bool {
        self.direction != Direction::Idle
    }

    pub fn play(&mut self) {
        if self.time < self.tween.span() {
            self.direction = Direction::Forward;
        }
    }

    pub fn reverse(&mut self) {
        // still waiting out the stagger delay, nothing visible to undo
        if self.time <= self.tween.delay {
            self.time = 0.0;
            self.direction = Direction::Idle;
            return;
        }
        self.direction = Direction::Backward;
    }

    /// Moves the playhead. Returns the new pose while the reveal is moving.
    pub fn advance(&mut self, dt: f64) -> Option<Pose> {
        match self.direction {
            Direction::Idle => return None,
            Direction::Forward => {
                self.time = (self.time + dt).min(self.tween.span());
                if self.time >= self.tween.span() {
                    self.direction = Direction::Idle;
                }
            }
            Direction::Backward => {
                self.time -= dt;
                if self.time <= self.tween.delay {
                    self.time = 0.0;
                    self.direction = Direction::Idle;
                }
            }
        }
        Some(self.pose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Length;

    #[test]
    fn delay_is_index_times_stagger() {
        let delays = (0..5)
            .map(|i| Reveal::new(format!("work-{i}"), Axis::Y, i, 0.1).delay())
            .collect::<Vec<_>>();
        for (i, d) in delays.iter().enumerate() {
            assert!((d - i as f64 * 0.1).abs() < 1e-9);
        }
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn starts_hidden_and_plays_to_rest() {
        let mut reveal = Reveal::new("work-0", Axis::Y, 0, 0.1);
        assert_eq!(reveal.pose(), Pose::hidden_y(50.0));
        assert_eq!(reveal.advance(0.1), None);

        reveal.play();
        let mid = reveal.advance(0.3).unwrap();
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert_eq!(reveal.advance(0.3), Some(Pose::REST));
        assert!(!reveal.is_moving());
    }

    #[test]
    fn about_tiles_slide_from_the_left() {
        let reveal = Reveal::new("about-0", Axis::X, 0, 0.1);
        assert_eq!(reveal.pose().x, Length::px(-50.0));
        assert_eq!(reveal.pose().opacity, 0.0);
    }

    #[test]
    fn reverse_replays_back_to_hidden() {
        let mut reveal = Reveal::new("work-2", Axis::Y, 2, 0.1);
        reveal.play();
        reveal.advance(1.0);
        assert_eq!(reveal.pose(), Pose::REST);

        reveal.reverse();
        let mid = reveal.advance(0.3).unwrap();
        assert!(mid.opacity < 1.0 && mid.opacity > 0.0);
        assert_eq!(reveal.advance(1.0), Some(Pose::hidden_y(50.0)));
        assert!(!reveal.is_moving());
    }

    #[test]
    fn reverse_during_delay_cancels() {
        let mut reveal = Reveal::new("work-3", Axis::Y, 3, 0.1);
        reveal.play();
        reveal.advance(0.1);
        reveal.reverse();
        assert!(!reveal.is_moving());
        assert_eq!(reveal.pose(), Pose::hidden_y(50.0));
    }
}

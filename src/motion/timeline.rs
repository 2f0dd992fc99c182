use super::{
    ease::Ease,
    pose::{Lerp, Pose},
    Surface,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: String,
    pub from: Pose,
    pub to: Pose,
    pub duration: f64,
    pub ease: Ease,
    pub delay: f64,
}

impl Tween {
    pub fn new(target: impl Into<String>, from: Pose, to: Pose) -> Self {
        Self {
            target: target.into(),
            from,
            to,
            duration: 0.5,
            ease: Ease::Linear,
            delay: 0.0,
        }
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = secs;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs;
        self
    }

    /// Delay plus duration.
    pub fn span(&self) -> f64 {
        self.delay + self.duration
    }

    /// Pose `local` seconds after the tween was scheduled (delay included).
    pub fn pose_at(&self, local: f64) -> Pose {
        let active = local - self.delay;
        if active <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 || active >= self.duration {
            return self.to;
        }
        let t = self.ease.apply(active / self.duration);
        Pose::lerp(&self.from, &self.to, t)
    }
}

/// Where a tween lands relative to what is already on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    Append,
    /// `n` seconds before the current end (`-=n`).
    Overlap(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scheduled {
    pub start: f64,
    pub tween: Tween,
}

impl Scheduled {
    /// Time at which the tween begins moving, after its own delay.
    pub fn active_start(&self) -> f64 {
        self.start + self.tween.delay
    }

    pub fn end(&self) -> f64 {
        self.start + self.tween.span()
    }
}

/// An ordered list of tweens with resolved start times.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<Scheduled>,
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, tween: Tween, position: Position) -> Self {
        let start = match position {
            Position::Append => self.end,
            Position::Overlap(n) => (self.end - n).max(0.0),
        };
        self.end = self.end.max(start + tween.span());
        self.steps.push(Scheduled { start, tween });
        self
    }

    pub fn steps(&self) -> &[Scheduled] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn duration(&self) -> f64 {
        self.end
    }

    /// Pose of every target at time `t`, in order of first appearance.
    ///
    /// A target takes its pose from the latest tween on it that has begun
    /// moving; before any has, it holds the first tween's `from` pose.
    pub fn sample(&self, t: f64) -> Vec<(&str, Pose)> {
        let mut out: Vec<(&str, Pose)> = Vec::new();
        for step in &self.steps {
            let target = step.tween.target.as_str();
            let existing = out.iter().position(|(name, _)| *name == target);
            let started = step.active_start() <= t;
            match existing {
                None => {
                    let pose = if started {
                        step.tween.pose_at(t - step.start)
                    } else {
                        step.tween.from
                    };
                    out.push((target, pose));
                }
                Some(i) if started => out[i].1 = step.tween.pose_at(t - step.start),
                Some(_) => {}
            }
        }
        out
    }
}

/// A timeline being played against a [`Surface`].
#[derive(Clone, Debug)]
pub struct Playback {
    timeline: Timeline,
    elapsed: f64,
    finished: bool,
}

impl Playback {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            elapsed: 0.0,
            finished: false,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Moves the playhead by `dt` seconds and writes every pose. Returns true
    /// once the final frame has been written.
    pub fn advance(&mut self, dt: f64, surface: &mut impl Surface) -> bool {
        if self.finished {
            return true;
        }
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.timeline.duration());
        for (target, pose) in self.timeline.sample(self.elapsed) {
            surface.apply(target, &pose);
        }
        self.finished = self.elapsed >= self.timeline.duration();
        self.finished
    }
}

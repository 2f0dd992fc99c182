use std::fmt;

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Px,
    Percent,
}

/// A translation distance. Percent is relative to the element's own size.
#[derive(Clone, Copy, Debug)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const ZERO: Self = Self::px(0.0);

    pub const fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub const fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }
}

// zero is the same distance in any unit
impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && (self.unit == other.unit || self.value == 0.0)
    }
}

// A zero end has no real unit and takes the other end's. Two non-zero ends
// in different units snap to the destination.
impl Lerp for Length {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let unit = if a.unit == b.unit || b.value == 0.0 {
            a.unit
        } else if a.value == 0.0 {
            b.unit
        } else {
            return if t < 1.0 { *a } else { *b };
        };
        Self {
            value: f64::lerp(&a.value, &b.value, t),
            unit,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Px => write!(f, "{}px", self.value),
            Unit::Percent => write!(f, "{}%", self.value),
        }
    }
}

/// Visual state of one element: a 2D translation plus opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: Length,
    pub y: Length,
    pub opacity: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Pose {
    /// Natural position, fully opaque.
    pub const REST: Self = Self {
        x: Length::ZERO,
        y: Length::ZERO,
        opacity: 1.0,
    };

    pub fn offset_y(y: Length) -> Self {
        Self { y, ..Self::REST }
    }

    /// Shifted by `px` along y and fully transparent.
    pub fn hidden_y(px: f64) -> Self {
        Self {
            y: Length::px(px),
            opacity: 0.0,
            ..Self::REST
        }
    }

    /// Shifted by `px` along x and fully transparent.
    pub fn hidden_x(px: f64) -> Self {
        Self {
            x: Length::px(px),
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.x, self.y)
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: Length::lerp(&a.x, &b.x, t),
            y: Length::lerp(&a.y, &b.y, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_renders_units() {
        let pose = Pose::offset_y(Length::percent(-100.0));
        assert_eq!(pose.transform(), "translate(0px, -100%)");
        assert_eq!(Pose::hidden_x(-50.0).transform(), "translate(-50px, 0px)");
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Pose::lerp(&Pose::hidden_y(50.0), &Pose::REST, 0.5);
        assert_eq!(mid.y, Length::px(25.0));
        assert_eq!(mid.opacity, 0.5);
    }

    #[test]
    fn zero_is_equal_in_any_unit() {
        assert_eq!(Length::percent(0.0), Length::ZERO);
        assert_ne!(Length::percent(10.0), Length::px(10.0));
    }

    #[test]
    fn lerp_from_zero_px_stays_in_percent() {
        let l = Length::lerp(&Length::px(0.0), &Length::percent(-100.0), 1.0);
        assert_eq!(l, Length::percent(-100.0));
        let l = Length::lerp(&Length::ZERO, &Length::percent(-100.0), 0.25);
        assert_eq!(l, Length::percent(-25.0));
    }

    #[test]
    fn lerp_to_zero_px_keeps_source_unit() {
        for t in [0.0, 0.01, 0.3, 0.5, 0.99] {
            let l = Length::lerp(&Length::percent(-100.0), &Length::ZERO, t);
            assert_eq!(l.unit, Unit::Percent);
            assert!((-100.0..=0.0).contains(&l.value));
        }
        assert_eq!(
            Length::lerp(&Length::percent(-100.0), &Length::ZERO, 0.5),
            Length::percent(-50.0)
        );
    }

    #[test]
    fn lerp_between_nonzero_mixed_units_snaps_at_end() {
        let a = Length::px(20.0);
        let b = Length::percent(50.0);
        assert_eq!(Length::lerp(&a, &b, 0.5), a);
        assert_eq!(Length::lerp(&a, &b, 1.0), b);
    }
}

use serde::{Deserialize, Serialize};

/// Easing curves, named after the power family used by web animation tools:
/// `power2` is cubic, `power3` quartic, `power4` quintic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    Power2Out,
    Power3In,
    Power3Out,
    Power4Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3In => t.powi(4),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::Power4Out => 1.0 - (1.0 - t).powi(5),
        }
    }
}

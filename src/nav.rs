use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    motion::{Playback, Surface},
    sequences::{cover_sequence, uncover_sequence},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Work,
    About,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section: {0}")]
    Unknown(String),
}

impl Section {
    pub const ALL: [Section; 4] = [Self::Home, Self::Work, Self::About, Self::Contact];

    /// Element id of the section's anchor.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "#",
            Self::Work => "#work",
            Self::About => "#about",
            Self::Contact => "#contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Work => "Work",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Accepts a bare id (`work`) or a fragment (`#work`). An empty fragment is home.
impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        match id {
            "" | "home" => Ok(Self::Home),
            "work" => Ok(Self::Work),
            "about" => Ok(Self::About),
            "contact" => Ok(Self::Contact),
            _ => Err(SectionError::Unknown(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Transform class for the mobile panel; the slide itself is a CSS
    /// transition.
    pub fn panel_class(self) -> &'static str {
        match self {
            Self::Open => "translate-y-0",
            Self::Closed => "-translate-y-full",
        }
    }
}

#[derive(Debug)]
enum Phase {
    Idle,
    Covering { playback: Playback, anchor: String },
    Uncovering { playback: Playback },
}

/// Section jumps hidden behind the transition overlay.
///
/// Only one overlay cycle runs at a time: a click while covering retargets
/// the jump, a click while uncovering is queued (latest wins) and starts a
/// fresh cycle afterwards.
#[derive(Debug)]
pub struct NavController {
    phase: Phase,
    queued: Option<String>,
    nav_offset: f64,
}

impl NavController {
    pub fn new(nav_offset: f64) -> Self {
        Self {
            phase: Phase::Idle,
            queued: None,
            nav_offset,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle) && self.queued.is_none()
    }

    pub fn click(&mut self, menu: &mut MenuState, anchor: &str) {
        menu.close();
        match &mut self.phase {
            Phase::Idle => self.start(anchor),
            Phase::Covering { anchor: pending, .. } => *pending = anchor.to_string(),
            Phase::Uncovering { .. } => self.queued = Some(anchor.to_string()),
        }
    }

    fn start(&mut self, anchor: &str) {
        self.phase = Phase::Covering {
            playback: Playback::new(cover_sequence()),
            anchor: anchor.to_string(),
        };
    }

    /// Scrolls so the anchor sits just below the fixed navbar. Returns false
    /// when the anchor does not exist.
    pub fn jump(&self, anchor: &str, surface: &mut impl Surface) -> bool {
        match surface.extent(anchor) {
            Some(extent) => {
                surface.jump_to((extent.top - self.nav_offset).max(0.0));
                true
            }
            None => false,
        }
    }

    pub fn advance(&mut self, dt: f64, surface: &mut impl Surface) {
        match &mut self.phase {
            Phase::Idle => {}
            Phase::Covering { playback, anchor } => {
                if !playback.advance(dt, surface) {
                    return;
                }
                let anchor = std::mem::take(anchor);
                if !self.jump(&anchor, surface) {
                    log::debug!("no anchor `{anchor}` to jump to");
                }
                self.phase = Phase::Uncovering {
                    playback: Playback::new(uncover_sequence()),
                };
            }
            Phase::Uncovering { playback } => {
                if !playback.advance(dt, surface) {
                    return;
                }
                self.phase = Phase::Idle;
                if let Some(anchor) = self.queued.take() {
                    self.start(&anchor);
                }
            }
        }
    }
}

use crate::{
    content::MotionConfig,
    motion::{Axis, Crossing, Parallax, Playback, Reveal, ScrollDispatcher, Surface},
    nav::{MenuState, NavController, Section},
    registry::Registry,
    sequences::{load_sequence, targets},
};

/// Owns every animation on the page.
///
/// Tiles register as they mount, then [`Director::bind`] attaches their
/// reveals in one go. The UI feeds it frame deltas and scroll notifications;
/// everything it does goes through a [`Surface`].
#[derive(Debug)]
pub struct Director {
    config: MotionConfig,
    load: Option<Playback>,
    loaded: bool,
    work: Registry<String>,
    about: Registry<String>,
    reveals: Vec<Reveal>,
    scroll: ScrollDispatcher<usize>,
    parallax: Option<Parallax>,
    nav: NavController,
}

impl Director {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            load: None,
            loaded: false,
            work: Registry::new(),
            about: Registry::new(),
            reveals: Vec::new(),
            scroll: ScrollDispatcher::new(),
            parallax: None,
            nav: NavController::new(config.nav_offset),
        }
    }

    pub fn register_work(&mut self, id: impl Into<String>) -> bool {
        self.work.register(id.into())
    }

    pub fn register_about(&mut self, id: impl Into<String>) -> bool {
        self.about.register(id.into())
    }

    pub fn is_bound(&self) -> bool {
        !self.scroll.is_empty() || self.parallax.is_some()
    }

    pub fn reveals(&self) -> &[Reveal] {
        &self.reveals
    }

    /// Starts the load sequence. Only the first call per page has any effect.
    pub fn start(&mut self, surface: &mut impl Surface) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        let mut playback = Playback::new(load_sequence(|t| surface.contains(t)));
        // render the opening poses before the first frame
        playback.advance(0.0, surface);
        self.load = Some(playback);
    }

    /// Attaches reveals to every registered tile and the hero parallax.
    pub fn bind(&mut self, surface: &mut impl Surface) {
        if self.is_bound() {
            return;
        }
        let work = self.work.iter().enumerate().map(|(i, id)| (id, Axis::Y, i));
        let about = self.about.iter().enumerate().map(|(i, id)| (id, Axis::X, i));
        for (id, axis, index) in work.chain(about) {
            let reveal = Reveal::new(id.as_str(), axis, index, self.config.stagger);
            surface.apply(reveal.target(), &reveal.pose());
            self.scroll
                .subscribe(id.as_str(), self.config.reveal_threshold, self.reveals.len());
            self.reveals.push(reveal);
        }
        self.parallax = Some(Parallax::new(targets::HERO, self.config.parallax_factor));
        log::debug!(
            "bound {} work and {} about reveals",
            self.work.len(),
            self.about.len()
        );
        self.scrolled(surface);
    }

    /// Releases every scroll subscription.
    pub fn unbind(&mut self) {
        self.scroll.clear();
        self.reveals.clear();
        self.parallax = None;
    }

    pub fn scrolled(&mut self, surface: &mut impl Surface) {
        for (index, crossing) in self.scroll.dispatch(&*surface) {
            let Some(reveal) = self.reveals.get_mut(index) else {
                continue;
            };
            match crossing {
                Crossing::Enter => reveal.play(),
                Crossing::Exit => reveal.reverse(),
            }
        }
        if let Some(parallax) = &self.parallax {
            if let Some(extent) = surface.extent(parallax.target()) {
                let pose = parallax.pose(extent, surface.scroll_y());
                surface.apply(parallax.target(), &pose);
            }
        }
    }

    /// Advances everything that is playing by `dt` seconds.
    pub fn frame(&mut self, dt: f64, surface: &mut impl Surface) {
        if let Some(load) = &mut self.load {
            if load.advance(dt, surface) {
                self.load = None;
            }
        }
        for reveal in self.reveals.iter_mut() {
            if let Some(pose) = reveal.advance(dt) {
                surface.apply(reveal.target(), &pose);
            }
        }
        self.nav.advance(dt, surface);
    }

    pub fn navigate(&mut self, menu: &mut MenuState, anchor: &str) {
        self.nav.click(menu, anchor);
    }

    /// Puts a section below the navbar without any transition.
    pub fn settle_on(&self, section: Section, surface: &mut impl Surface) -> bool {
        self.nav.jump(section.id(), surface)
    }

    pub fn is_idle(&self) -> bool {
        self.load.is_none() && self.nav.is_idle() && !self.reveals.iter().any(Reveal::is_moving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{testing::FakeSurface, Length, Pose};

    fn page() -> FakeSurface {
        let mut surface = FakeSurface::with_targets(&[
            targets::OVERLAY,
            targets::NAVBAR,
            targets::TITLE,
            targets::SUBTITLE,
            targets::DESCRIPTION,
        ]);
        surface.place(targets::HERO, 0.0, 1500.0);
        surface.place("work-heading", 1500.0, 60.0);
        surface.place("work-0", 1600.0, 200.0);
        surface.place("work-1", 1600.0, 200.0);
        surface.place("about-0", 3000.0, 300.0);
        surface
    }

    fn director(surface: &mut FakeSurface) -> Director {
        let mut director = Director::new(MotionConfig::default());
        for id in ["work-heading", "work-0", "work-1", "work-0"] {
            director.register_work(id);
        }
        director.register_about("about-0");
        director.start(surface);
        director.bind(surface);
        director
    }

    fn settle(director: &mut Director, surface: &mut FakeSurface) {
        for _ in 0..600 {
            if director.is_idle() {
                return;
            }
            director.frame(1.0 / 60.0, surface);
        }
        panic!("director never settled");
    }

    #[test]
    fn load_renders_opening_poses_immediately() {
        let mut surface = page();
        let _director = director(&mut surface);
        assert_eq!(surface.pose(targets::OVERLAY), Some(Pose::REST));
        assert_eq!(surface.pose(targets::TITLE), Some(Pose::hidden_y(100.0)));
        assert_eq!(surface.pose(targets::NAVBAR), Some(Pose::hidden_y(-50.0)));
    }

    #[test]
    fn load_finishes_with_everything_in_place() {
        let mut surface = page();
        let mut director = director(&mut surface);
        settle(&mut director, &mut surface);
        assert_eq!(
            surface.pose(targets::OVERLAY).map(|p| p.y),
            Some(Length::percent(-100.0))
        );
        for target in [targets::TITLE, targets::SUBTITLE, targets::NAVBAR] {
            assert_eq!(surface.pose(target), Some(Pose::REST));
        }
    }

    #[test]
    fn start_only_runs_once() {
        let mut surface = page();
        let mut director = director(&mut surface);
        settle(&mut director, &mut surface);
        director.start(&mut surface);
        assert!(director.is_idle());
    }

    #[test]
    fn reveals_are_staggered_per_registry() {
        let mut surface = page();
        let director = director(&mut surface);
        let delays = director
            .reveals()
            .iter()
            .map(|r| (r.target().to_string(), r.delay()))
            .collect::<Vec<_>>();
        assert_eq!(delays.len(), 4);
        assert_eq!(delays[0], ("work-heading".to_string(), 0.0));
        assert_eq!(delays[2], ("work-1".to_string(), 0.2));
        assert_eq!(delays[3], ("about-0".to_string(), 0.0));
    }

    #[test]
    fn tiles_start_hidden_and_reveal_on_scroll() {
        let mut surface = page();
        let mut director = director(&mut surface);
        assert_eq!(surface.pose("work-0"), Some(Pose::hidden_y(50.0)));
        assert_eq!(surface.pose("about-0"), Some(Pose::hidden_x(-50.0)));

        surface.scroll(900.0);
        director.scrolled(&mut surface);
        settle(&mut director, &mut surface);
        assert_eq!(surface.pose("work-0"), Some(Pose::REST));
        assert_eq!(surface.pose("about-0"), Some(Pose::hidden_x(-50.0)));

        surface.scroll(0.0);
        director.scrolled(&mut surface);
        settle(&mut director, &mut surface);
        assert_eq!(surface.pose("work-0"), Some(Pose::hidden_y(50.0)));
    }

    #[test]
    fn parallax_follows_scroll() {
        let mut surface = page();
        let mut director = director(&mut surface);
        surface.scroll(750.0);
        director.scrolled(&mut surface);
        assert_eq!(
            surface.pose(targets::HERO).map(|p| p.y),
            Some(Length::percent(15.0))
        );
    }

    #[test]
    fn unbind_releases_everything() {
        let mut surface = page();
        let mut director = director(&mut surface);
        director.unbind();
        assert!(!director.is_bound());
        assert!(director.reveals().is_empty());

        let writes = surface.writes();
        surface.scroll(900.0);
        director.scrolled(&mut surface);
        assert_eq!(surface.writes(), writes);
    }

    #[test]
    fn navigate_closes_menu_and_jumps() {
        let mut surface = page();
        let mut director = director(&mut surface);
        settle(&mut director, &mut surface);

        let mut menu = MenuState::Open;
        director.navigate(&mut menu, Section::Home.id());
        assert_eq!(menu, MenuState::Closed);
        director.navigate(&mut menu, "work-heading");
        settle(&mut director, &mut surface);
        assert_eq!(surface.jumps(), &[1420.0]);
    }

    #[test]
    fn settle_on_skips_the_overlay() {
        let mut surface = page();
        surface.place("about", 3000.0, 800.0);
        let director = director(&mut surface);
        assert!(director.settle_on(Section::About, &mut surface));
        assert!(!director.settle_on(Section::Contact, &mut surface));
        assert_eq!(surface.jumps(), &[2920.0]);
    }
}

use std::sync::{Arc, Mutex};

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};

use crate::{
    content::PORTFOLIO,
    director::Director,
    nav::{MenuState, Section},
    sequences::targets,
};

use super::{
    contact::Contact,
    experience::Experience,
    footer::Footer,
    gallery::Gallery,
    hero::Hero,
    nav_bar::{MobileMenu, NavBar},
    surface::DomSurface,
};

type SharedDirector = StoredValue<Arc<Mutex<Director>>>;

fn drive<R>(director: SharedDirector, f: impl FnOnce(&mut Director, &mut DomSurface) -> R) -> R {
    director.with_value(|d| {
        let mut d = d.lock().expect("should be able to lock director");
        f(&mut d, &mut DomSurface)
    })
}

/// The whole site. Holds the menu flag and the [`Director`]; every child only
/// renders markup and registers its animatable elements.
#[component]
pub fn Page() -> impl IntoView {
    let portfolio = &*PORTFOLIO;
    let director: SharedDirector =
        StoredValue::new(Arc::new(Mutex::new(Director::new(portfolio.motion))));
    let (menu, set_menu) = signal(MenuState::Closed);

    let register_work = Callback::new(move |id: String| {
        director.with_value(|d| {
            d.lock()
                .expect("should be able to lock director")
                .register_work(id);
        });
    });
    let register_about = Callback::new(move |id: String| {
        director.with_value(|d| {
            d.lock()
                .expect("should be able to lock director")
                .register_about(id);
        });
    });

    let on_navigate = Callback::new(move |section: Section| {
        set_menu.update(|menu| {
            director.with_value(|d| {
                d.lock()
                    .expect("should be able to lock director")
                    .navigate(menu, section.id());
            });
        });
    });

    // children have registered by the time effects run
    Effect::new(move |_| {
        drive(director, |d, surface| {
            d.start(surface);
            let hash = window().location().hash().unwrap_or_default();
            match hash.parse::<Section>() {
                Ok(Section::Home) => {}
                Ok(section) => {
                    d.settle_on(section, surface);
                }
                Err(e) => log::debug!("ignoring fragment: {e}"),
            }
            d.bind(surface);
        });
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let dt = args.delta / 1000.0;
        drive(director, |d, surface| d.frame(dt, surface));
    });
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        drive(director, |d, surface| d.scrolled(surface));
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        drive(director, |d, surface| d.scrolled(surface));
    });

    on_cleanup(move || {
        director.with_value(|d| {
            if let Ok(mut d) = d.lock() {
                d.unbind();
            }
        });
    });

    view! {
        <div
            id=targets::OVERLAY
            class="fixed top-0 left-0 w-full h-screen bg-black z-50 transform"
        ></div>
        <div
            class="bg-cover bg-top w-full h-[150vh] bg-fixed"
            style=format!("background-image: url('{}')", portfolio.backdrop)
        >
            <NavBar brand=portfolio.brand.clone() menu set_menu on_navigate />
            <MobileMenu menu on_navigate />
            <div class="absolute w-full h-auto backdrop-blur hover:backdrop-blur-none duration-1000 bg-gray-600/30">
                <Hero hero=portfolio.hero.clone() />
                <div id="work" class="bg-stone-900 text-white">
                    <div class="bg-white/0 w-full h-12 spacer"></div>
                    <Gallery work=portfolio.work.clone() register=register_work />
                    <Experience
                        employers=portfolio.experience.clone()
                        register=register_about
                    />
                    <Contact contact=portfolio.contact.clone() />
                    <div class="bg-white/0 w-full h-12 spacer"></div>
                </div>
            </div>
        </div>
        <Footer brand=portfolio.brand.clone() />
    }
}

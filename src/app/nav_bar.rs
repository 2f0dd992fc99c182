use leptos::prelude::*;

use crate::{
    content::Brand,
    nav::{MenuState, Section},
    sequences::targets,
};

const LINK_CLASS: &str = "hover:text-white transition-colors duration-300";

#[component]
fn SectionLinks(on_navigate: Callback<Section>) -> impl IntoView {
    Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <li>
                    <a
                        href=section.href()
                        class=LINK_CLASS
                        on:click=move |ev| {
                            // the overlay performs the jump
                            ev.prevent_default();
                            on_navigate.run(section);
                        }
                    >
                        {section.label()}
                    </a>
                </li>
            }
        })
        .collect_view()
}

#[component]
pub fn BrandMark(brand: Brand, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <div class=class>
            {brand.name} " " <span class="font-thin text-yellow-300">{brand.tag}</span>
        </div>
    }
}

#[component]
pub fn NavBar(
    brand: Brand,
    menu: ReadSignal<MenuState>,
    set_menu: WriteSignal<MenuState>,
    on_navigate: Callback<Section>,
) -> impl IntoView {
    view! {
        <nav id=targets::NAVBAR class="bg-black/90 backdrop-blur-sm fixed w-full z-30">
            <div class="max-w-5xl mx-auto px-4 lg:px-0">
                <div class="relative flex items-center justify-between h-fit py-3">
                    <BrandMark brand class="uppercase text-white font-bold text-3xl" />
                    <ul class="md:flex items-center space-x-8 text-yellow-300 text-lg hidden">
                        <SectionLinks on_navigate />
                    </ul>
                    <div class="md:hidden">
                        <button
                            class="text-yellow-300 hover:text-white transition-colors duration-300 text-2xl"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu.update(|m| *m = m.toggled())
                        >
                            {move || if menu.get().is_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn MobileMenu(menu: ReadSignal<MenuState>, on_navigate: Callback<Section>) -> impl IntoView {
    view! {
        <div class=move || {
            format!(
                "fixed top-[56px] left-0 w-full bg-black/95 backdrop-blur-sm z-20 transform transition-transform duration-500 ease-in-out {}",
                menu.get().panel_class(),
            )
        }>
            <ul class="flex flex-col items-center space-y-6 py-8 text-yellow-400 text-xl">
                <SectionLinks on_navigate />
            </ul>
        </div>
    }
}

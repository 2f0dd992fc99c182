use leptos::{either::Either, prelude::*};

use crate::content::Media;

const TILE_CLASS: &str = "w-full aspect-video rounded-lg overflow-hidden shadow-lg";
const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

#[component]
fn WorkTile(id: String, media: Media) -> impl IntoView {
    match media {
        Media::Link { href, poster } => Either::Left(view! {
            <a id=id href=href target="_blank" rel="noopener" class="block">
                <div
                    class=format!("{TILE_CLASS} bg-cover bg-center hover:scale-105 transition-transform duration-500")
                    style=format!("background-image: url('{poster}')")
                ></div>
            </a>
        }),
        Media::Embed { src, title } => Either::Right(view! {
            <iframe
                id=id
                class=TILE_CLASS
                src=src
                title=title
                allow=EMBED_ALLOW
                referrerpolicy="strict-origin-when-cross-origin"
                allowfullscreen="true"
                {..::leptos::tachys::html::attribute::custom::custom_attribute("frameborder", "0")}
            ></iframe>
        }),
    }
}

/// The work grid. The heading and every tile join the vertical reveal group in
/// document order.
#[component]
pub fn Gallery(work: Vec<Media>, register: Callback<String>) -> impl IntoView {
    let heading = "work-heading".to_string();
    register.run(heading.clone());
    let tiles = work
        .into_iter()
        .enumerate()
        .map(|(i, media)| {
            let id = format!("work-{i}");
            register.run(id.clone());
            view! { <WorkTile id media /> }
        })
        .collect_view();
    view! {
        <section class="max-w-5xl mx-auto px-4 lg:px-0 py-12">
            <p id=heading class="text-5xl font-bold text-yellow-300 mb-10 space-grotesk">
                "Work"
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">{tiles}</div>
        </section>
    }
}

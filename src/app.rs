mod contact;
mod experience;
mod footer;
mod gallery;
mod hero;
mod nav_bar;
mod page;
mod surface;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use page::Page;

/// Support script for the embedded players, loaded once for the whole page.
const PLAYER_SCRIPT: &str = "https://player.vimeo.com/api/player.js";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/sopark-vfx.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
                <script src=PLAYER_SCRIPT></script>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text="Sopark VFX" />
        <Meta
            name="description"
            content="Sopark (Film) Chatarasopark - compositing, lighting and FX for feature films and games."
        />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Page />
            </Routes>
        </Router>
    }
}

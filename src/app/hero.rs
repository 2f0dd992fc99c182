use leptos::prelude::*;

use crate::{content, sequences::targets};

#[component]
pub fn Hero(hero: content::Hero) -> impl IntoView {
    // dots in the nickname render as invisible spacers
    let nickname = hero
        .nickname
        .split('.')
        .map(|word| view! { <span class="text-white/0">"."</span> {word.to_string()} })
        .collect_view();
    view! {
        <header id=targets::HERO class="-pt-6 overflow-hidden">
            <div class="h-[150vh] max-w-5xl mx-auto py-0 px-4 lg:px-0">
                <div class="md:flex flex flex-col h-[120vh] z-10 pt-48">
                    <h1 class="font-bold text-[12rem] flex flex-col text-gray-200">
                        <span
                            id=targets::TITLE
                            class="drop-shadow-lg leading-[6rem] space-grotesk tracking-tighter animate-pulse"
                        >
                            {hero.title}
                        </span>
                        <span
                            id=targets::SUBTITLE
                            class="text-[2.6rem] md:text-[3rem] font-thin leading-[6rem] z-10 tracking-wider text-yellow-300"
                        >
                            "[" {nickname} <span class="text-white/0">"."</span> "]"
                        </span>
                    </h1>
                    <p
                        id=targets::DESCRIPTION
                        class="text-white pl-4 pr-6 mt-16 border-l md:w-2/3 tracking-wider text-lg font-thin text-pretty md:text-balance"
                    >
                        {hero.description}
                    </p>
                </div>
            </div>
        </header>
    }
}

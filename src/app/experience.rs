use leptos::prelude::*;

use crate::content::Employer;

#[component]
fn EmployerCard(id: String, employer: Employer) -> impl IntoView {
    let roles = employer
        .roles
        .iter()
        .map(|role| {
            view! { <h4 class="text-yellow-300 font-thin tracking-wide">{role.heading()}</h4> }
        })
        .collect_view();
    view! {
        <div id=id class="border-l border-yellow-300/60 pl-6 py-2">
            <h3 class="text-2xl font-bold mb-1">{employer.name}</h3>
            {roles}
            <p class="mt-3 text-white/80 leading-relaxed text-pretty">{employer.summary}</p>
        </div>
    }
}

/// Employment history; every card slides in horizontally.
#[component]
pub fn Experience(employers: Vec<Employer>, register: Callback<String>) -> impl IntoView {
    let cards = employers
        .into_iter()
        .enumerate()
        .map(|(i, employer)| {
            let id = format!("about-{i}");
            register.run(id.clone());
            view! { <EmployerCard id employer /> }
        })
        .collect_view();
    view! {
        <section id="about" class="max-w-5xl mx-auto px-4 lg:px-0 py-12">
            <h2 class="text-5xl font-bold text-yellow-300 mb-10 space-grotesk">
                "Professional Experience"
            </h2>
            <div class="flex flex-col gap-10">{cards}</div>
        </section>
    }
}

use leptos::prelude::*;

use crate::content::Brand;

use super::nav_bar::BrandMark;

#[component]
pub fn Footer(brand: Brand) -> impl IntoView {
    view! {
        <footer class="fixed w-full bottom-0 z-40 bg-gray-950">
            <div class="max-w-5xl mx-auto h-fit flex items-center justify-center md:justify-between text-white px-4 py-3">
                <BrandMark brand class="uppercase text-white font-bold text-xl md:block hidden" />
                <p class="text-gray-300 text-sm font-extralight tracking-widest">
                    {format!("Copyright © {} | All rights reserved.", env!("BUILD_YEAR"))}
                </p>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn footer_is_a_fixed_bottom_bar() {
        let brand = Brand {
            name: "Sopark".to_string(),
            tag: "vfx".to_string(),
        };
        let html = view! { <Footer brand /> }.to_html();
        assert!(html.contains(r#"class="fixed w-full bottom-0"#));
        assert!(html.contains(env!("BUILD_YEAR")));
    }
}

use leptos::prelude::*;

use crate::content;

const FIELD_CLASS: &str = "w-full px-4 py-2 bg-stone-600 border border-gray-600 rounded-md focus:outline-none focus:ring-2 focus:ring-yellow-400 text-white";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-300 mb-1";

#[component]
fn ContactRow(
    href: String,
    #[prop(into)] kind: String,
    label: String,
    children: Children,
) -> impl IntoView {
    view! {
        <li class="flex items-center space-x-2 text-gray-300 border-t border-white/20 w-full">
            <a
                href=href
                target="_blank"
                aria-label=kind
                class="text-yellow-300 hover:text-white px-2 text-2xl"
            >
                {children()}
            </a>
            <p class="border-l border-white/20 px-3 py-2.5">{label}</p>
        </li>
    }
}

/// Contact details and a display-only message form.
#[component]
pub fn Contact(contact: content::Contact) -> impl IntoView {
    let mailto = contact.mailto();
    let tel = contact.tel();
    view! {
        <section id="contact" class="max-w-5xl mx-auto px-4 lg:px-0 py-12">
            <h2 class="text-5xl font-bold text-yellow-300 mb-10 space-grotesk">"Contact"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                <form class="space-y-4">
                    <div>
                        <label for="contact-name" class=LABEL_CLASS>
                            "Name"
                        </label>
                        <input
                            type="text"
                            id="contact-name"
                            name="name"
                            placeholder="Your name"
                            class=FIELD_CLASS
                        />
                    </div>
                    <div>
                        <label for="contact-email" class=LABEL_CLASS>
                            "Email"
                        </label>
                        <input
                            type="email"
                            id="contact-email"
                            name="email"
                            placeholder="your.email@example.com"
                            class=FIELD_CLASS
                        />
                    </div>
                    <div>
                        <label for="contact-message" class=LABEL_CLASS>
                            "Message"
                        </label>
                        <textarea
                            id="contact-message"
                            name="message"
                            rows="4"
                            placeholder="Your message"
                            class=FIELD_CLASS
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2 px-4 bg-yellow-500 hover:bg-yellow-600 text-gray-900 font-medium rounded-md transition-colors duration-300"
                    >
                        "Send Message"
                    </button>
                </form>
                <div>
                    <p class="mb-6 text-white/80 leading-relaxed">{contact.intro}</p>
                    <ul class="flex flex-col text-lg border-b border-white/20">
                        <ContactRow href=mailto kind="Email" label=contact.email>
                            "✉"
                        </ContactRow>
                        <ContactRow href=tel kind="Phone" label=contact.phone>
                            "☎"
                        </ContactRow>
                        <ContactRow
                            href=contact.profile_url
                            kind="LinkedIn"
                            label=contact.profile_label
                        >
                            <i class="devicon-linkedin-plain" />
                        </ContactRow>
                    </ul>
                </div>
            </div>
        </section>
    }
}

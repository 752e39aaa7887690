use super::*;

#[component]
pub fn ProfileCard() -> Element {
    let state = use_context::<State>();
    let visible = state.session().read().content_visible;

    rsx! {
        div {
            class: if visible { "profile-scene visible" } else { "profile-scene" },

            div {
                class: "profile-card",
                h1 { "{CONFIG.title}" }
                p { class: "tagline", "{CONFIG.tagline}" }

                div {
                    class: "social-row",
                    for link in CONFIG.links.iter() {
                        a {
                            href: "{link.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            img {
                                src: "{link.icon}",
                                alt: "{link.name}",
                            }
                        }
                    }
                }
            }
        }
    }
}

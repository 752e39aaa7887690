use super::*;

#[component]
pub fn Gate() -> Element {
    let state = use_context::<State>();
    let ready = state.session().read().video_ready;

    let headline = if ready {
        "Click to Enter"
    } else {
        "Loading video..."
    };

    match CONFIG.enter_affordance {
        EnterAffordance::Overlay => rsx! {
            div {
                class: "gate-overlay",
                onclick: move |_| state.enter(),

                div {
                    class: "gate-text",
                    p { class: "pulse", "{headline}" }
                    p { class: "hint", "Click here to enter" }
                    if CONFIG.volume_control == VolumeControlMode::KeyboardToggle {
                        p { class: "hint", "Use Ctrl + V to control volume" }
                    }
                }
            }
        },
        EnterAffordance::Button => rsx! {
            div {
                class: "gate-overlay",

                div {
                    class: "gate-text",
                    p { class: "pulse", "{headline}" }
                    button {
                        class: "enter-button",
                        disabled: !ready,
                        onclick: move |_| state.enter(),
                        "Enter"
                    }
                    if CONFIG.volume_control == VolumeControlMode::KeyboardToggle {
                        p { class: "hint", "Use Ctrl + V to control volume" }
                    }
                }
            }
        },
    }
}

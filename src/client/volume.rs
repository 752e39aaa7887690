use super::*;

use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[component]
pub fn VolumeSlider() -> Element {
    let state = use_context::<State>();
    let volume = state.session().read().volume;

    rsx! {
        div {
            class: "volume-control",
            input {
                r#type: "range",
                min: "0",
                max: "1",
                step: "{CONFIG.volume_step}",
                value: "{volume}",
                oninput: move |event| match event.value().parse::<f64>() {
                    Ok(v) => state.set_volume(v),
                    Err(err) => log_to_console(("discarding slider input", err)),
                },
            }
        }
    }
}

/// Global Ctrl+V listener that toggles slider visibility.
///
/// The browser window outlives any component, so the subscription is tied to
/// this handle: dropping it removes the listener again, which keeps repeated
/// mounts from piling up callbacks.
pub struct KeyListener {
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyListener {
    pub fn install(state: State) -> Option<Self> {
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.ctrl_key() && event.key() == "v" {
                state.toggle_volume_control();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let window = web_sys::window()?;
        if let Err(err) =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            log_to_console(("failed to install keydown listener", err));
            return None;
        }

        Some(Self { closure })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref());
        }
    }
}

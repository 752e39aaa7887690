#![allow(non_snake_case)]

use crate::common;
use common::{EnterAffordance, Session, VolumeControlMode, CONFIG};

use dioxus::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlAudioElement;

mod gate;
mod media;
mod profile;
mod utils;
mod volume;

use gate::*;
use profile::*;
use utils::*;
use volume::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    launch(App);
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

fn App() -> Element {
    use_context_provider(State::new);

    rsx!(Router::<Route> {})
}

#[component]
fn Home() -> Element {
    let state = use_context::<State>();

    let init_state = state.clone();
    use_effect(move || init_state.initialize());

    let drop_state = state.clone();
    use_drop(move || drop_state.dispose());

    let session = state.session();
    let entered = session.read().entered;
    let show_slider = match CONFIG.volume_control {
        VolumeControlMode::KeyboardToggle => session.read().volume_control_visible,
        VolumeControlMode::AlwaysVisible => entered,
    };

    let ready_state = state.clone();

    rsx! {
        style { { include_str!("landing.css") } }
        div {
            class: "landing-container",

            // Rendered from mount, hidden behind the gate overlay, so the
            // canplaythrough signal can be observed before entry.
            video {
                id: media::VIDEO_ELEMENT_ID,
                class: if entered { "background-video entered" } else { "background-video" },
                src: "{CONFIG.media_src}",
                preload: "auto",
                r#loop: true,
                muted: true,
                "playsinline": "true",
                oncanplaythrough: move |_| ready_state.mark_video_ready(),
            }

            if !entered {
                Gate {}
            } else {
                ProfileCard {}
            }

            if show_slider {
                VolumeSlider {}
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct State {
    inner: Arc<Mutex<InnerState>>,
}

#[derive(Default)]
struct InnerState {
    session: Signal<Session>,
    audio: Option<HtmlAudioElement>,
    key_listener: Option<KeyListener>,
    // Cleared at teardown so a reveal timer that outlives the component
    // cannot touch dead state.
    alive: Arc<AtomicBool>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Signal<Session> {
        self.inner.lock().unwrap().session
    }

    /// Builds the audio handle and, in keyboard-toggle mode, installs the
    /// global volume shortcut. Safe to call again; only the first call after
    /// a mount does anything.
    pub fn initialize(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.audio.is_some() {
            return;
        }

        inner.alive.store(true, Ordering::SeqCst);

        let volume = inner.session.peek().volume;
        inner.audio = media::create_audio(&CONFIG.media_src, volume);

        if CONFIG.volume_control == VolumeControlMode::KeyboardToggle {
            inner.key_listener = KeyListener::install(self.clone());
        }

        log_to_console("media session initialized");
    }

    /// Passes the gate. Playback and the reveal timer only trigger on the
    /// locked-to-entered edge; clicking again does nothing.
    pub fn enter(&self) {
        let mut session = self.session();
        if session.peek().entered {
            log_to_console("enter ignored, already past the gate");
            return;
        }
        session.write().enter();
        log_to_console("gate entered");

        let state = self.clone();
        spawn_local(async move {
            state.request_playback().await;
        });

        self.schedule_reveal();
    }

    /// One-shot delayed reveal of the profile content.
    fn schedule_reveal(&self) {
        let mut session = self.session();
        let alive = self.inner.lock().unwrap().alive.clone();

        spawn_local(async move {
            let delay = std::time::Duration::from_millis(CONFIG.reveal_delay_millis);
            gloo_timers::future::sleep(delay).await;

            if !alive.load(Ordering::SeqCst) {
                log_to_console("reveal timer fired after teardown, dropping it");
                return;
            }

            session.write().reveal();
            log_to_console("content revealed");
        });
    }

    /// Starts audio playback (async, may be rejected by the autoplay policy)
    /// and kicks the background video. Neither outcome blocks the reveal.
    pub async fn request_playback(&self) {
        let audio = self.inner.lock().unwrap().audio.clone();
        match audio {
            Some(audio) => media::request_audio_playback(&audio).await,
            None => log_to_console("playback requested without an audio handle"),
        }

        media::start_video_playback();
    }

    pub fn mark_video_ready(&self) {
        let mut session = self.session();
        if session.peek().video_ready {
            return;
        }
        session.write().mark_video_ready();
        log_to_console("video can play through");
    }

    /// Applies a slider value to the session state and the audio handle in
    /// one step, so the two can never drift apart.
    pub fn set_volume(&self, volume: f64) {
        let volume = Session::clamp_volume(volume);

        let mut session = self.session();
        session.write().set_volume(volume);

        if let Some(audio) = &self.inner.lock().unwrap().audio {
            audio.set_volume(volume);
        }
    }

    pub fn toggle_volume_control(&self) {
        let mut session = self.session();
        session.write().toggle_volume_control();
    }

    /// Releases everything the mount acquired: stops audio and clears its
    /// source, removes the keyboard listener, and flags in-flight timers
    /// as stale.
    pub fn dispose(&self) {
        let mut inner = self.inner.lock().unwrap();

        inner.alive.store(false, Ordering::SeqCst);
        inner.key_listener.take();

        if let Some(audio) = inner.audio.take() {
            let _ = audio.pause();
            audio.set_src("");
        }

        log_to_console("media session disposed");
    }
}

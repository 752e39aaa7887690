use super::*;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

pub const VIDEO_ELEMENT_ID: &str = "background-video";

/// Builds the audio handle that carries sound for the page.
///
/// The rendered video stays muted; sound goes through a separate audio
/// element bound to the same source, so its volume can be driven without
/// going through the render tree.
pub fn create_audio(src: &str, volume: f64) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(src) {
        Ok(audio) => {
            audio.set_volume(volume);
            Some(audio)
        }
        Err(err) => {
            log_to_console(("failed to create audio element", err));
            None
        }
    }
}

/// Looks up the rendered background video. Not owned here; the render tree
/// manages its lifecycle.
pub fn video_element() -> Option<HtmlVideoElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(VIDEO_ELEMENT_ID)?
        .dyn_into()
        .ok()
}

/// Requests audio playback. Browsers may reject this under their autoplay
/// policy; the outcome is logged and otherwise ignored so the reveal flow
/// proceeds either way.
pub async fn request_audio_playback(audio: &HtmlAudioElement) {
    match audio.play() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(_) => log_to_console("audio playback permitted"),
            Err(err) => log_to_console(("audio playback permission denied", err)),
        },
        Err(err) => log_to_console(("audio playback request failed", err)),
    }
}

/// Fire-and-forget; video playback failure is not observed.
pub fn start_video_playback() {
    if let Some(video) = video_element() {
        let _ = video.play();
    }
}

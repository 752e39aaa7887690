/// Audio volume on a fresh mount.
pub const DEFAULT_VOLUME: f64 = 1.0;

/// Transient UI state for the landing experience.
///
/// The gate is a one-way door: locked, then entered with the content still
/// hidden, then entered with the content revealed. Nothing transitions back
/// to locked short of a fresh mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    pub entered: bool,
    pub content_visible: bool,
    pub video_ready: bool,
    pub volume_control_visible: bool,
    pub volume: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            entered: false,
            content_visible: false,
            video_ready: false,
            volume_control_visible: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl Session {
    /// Passes the gate. Returns whether this call actually took the
    /// transition; repeated calls are no-ops, so playback and the reveal
    /// timer only ever trigger once per mount.
    pub fn enter(&mut self) -> bool {
        if self.entered {
            return false;
        }

        self.entered = true;
        true
    }

    /// Makes the profile content visible. Refused while still locked, so
    /// content can never show up before the gate was passed.
    pub fn reveal(&mut self) -> bool {
        if !self.entered || self.content_visible {
            return false;
        }

        self.content_visible = true;
        true
    }

    pub fn mark_video_ready(&mut self) {
        self.video_ready = true;
    }

    pub fn toggle_volume_control(&mut self) {
        self.volume_control_visible = !self.volume_control_visible;
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = Self::clamp_volume(volume);
    }

    /// Clamps a requested volume into `[0, 1]`. Non-finite input falls back
    /// to the default instead of poisoning the audio handle.
    pub fn clamp_volume(volume: f64) -> f64 {
        if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            DEFAULT_VOLUME
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_locked() {
        let session = Session::default();

        assert!(!session.entered);
        assert!(!session.content_visible);
        assert!(!session.video_ready);
        assert!(!session.volume_control_visible);
        assert_eq!(session.volume, DEFAULT_VOLUME);
    }

    #[test]
    fn enter_is_idempotent() {
        let mut session = Session::default();

        assert!(session.enter());
        assert!(session.entered);
        assert!(!session.enter());
        assert!(session.entered);
    }

    #[test]
    fn reveal_requires_entered() {
        let mut session = Session::default();

        assert!(!session.reveal());
        assert!(!session.content_visible);

        session.enter();
        assert!(session.reveal());
        assert!(session.content_visible);
    }

    #[test]
    fn reveal_fires_once() {
        let mut session = Session::default();
        session.enter();

        assert!(session.reveal());
        assert!(!session.reveal());
        assert!(session.content_visible);
    }

    #[test]
    fn video_ready_stays_set() {
        let mut session = Session::default();

        session.mark_video_ready();
        session.mark_video_ready();
        assert!(session.video_ready);
    }

    #[test]
    fn volume_is_clamped() {
        let mut session = Session::default();

        session.set_volume(0.37);
        assert_eq!(session.volume, 0.37);

        session.set_volume(-1.0);
        assert_eq!(session.volume, 0.0);

        session.set_volume(2.5);
        assert_eq!(session.volume, 1.0);
    }

    #[test]
    fn non_finite_volume_falls_back_to_default() {
        assert_eq!(Session::clamp_volume(f64::NAN), DEFAULT_VOLUME);
        assert_eq!(Session::clamp_volume(f64::INFINITY), DEFAULT_VOLUME);
        assert_eq!(Session::clamp_volume(f64::NEG_INFINITY), DEFAULT_VOLUME);
    }

    #[test]
    fn volume_toggle_parity() {
        let mut session = Session::default();

        session.toggle_volume_control();
        assert!(session.volume_control_visible);

        session.toggle_volume_control();
        assert!(!session.volume_control_visible);

        for _ in 0..3 {
            session.toggle_volume_control();
        }
        assert!(session.volume_control_visible);
    }
}

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumString};

pub static CONFIG: Lazy<Arc<GateConfig>> = Lazy::new(|| Arc::new(GateConfig::load()));

/// How the gate can be passed.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EnterAffordance {
    /// The whole gate screen is clickable, even before the video is ready.
    #[default]
    Overlay,
    /// An explicit button that stays disabled until the video can play through.
    Button,
}

/// How the volume slider becomes visible.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum VolumeControlMode {
    /// Hidden until Ctrl+V toggles it, independent of the gate.
    #[default]
    KeyboardToggle,
    /// Shown unconditionally once the gate has been passed.
    AlwaysVisible,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GateConfig {
    #[serde(default = "default_media_src")]
    pub media_src: String,
    #[serde(default = "default_reveal_delay_millis")]
    pub reveal_delay_millis: u64,
    #[serde(default = "default_volume_step")]
    pub volume_step: f64,
    #[serde(default)]
    pub enter_affordance: EnterAffordance,
    #[serde(default)]
    pub volume_control: VolumeControlMode,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

impl GateConfig {
    /// Loads the embedded config.
    ///
    /// The frontend has no file system, so gate.toml is packaged into the
    /// binary with include_str. The build script creates an empty file if
    /// none exists yet, and an empty or broken file falls back to the
    /// defaults so the page always renders something.
    pub fn load() -> Self {
        toml::from_str(include_str!("../../gate.toml")).unwrap_or_default()
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            media_src: default_media_src(),
            reveal_delay_millis: default_reveal_delay_millis(),
            volume_step: default_volume_step(),
            enter_affordance: EnterAffordance::default(),
            volume_control: VolumeControlMode::default(),
            title: default_title(),
            tagline: String::new(),
            links: Vec::new(),
        }
    }
}

fn default_media_src() -> String {
    "/video.mp4".to_string()
}

fn default_reveal_delay_millis() -> u64 {
    5000
}

fn default_volume_step() -> f64 {
    0.01
}

fn default_title() -> String {
    "Welcome".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn empty_config_yields_defaults() {
        let config: GateConfig = toml::from_str("").unwrap();

        assert_eq!(config.media_src, "/video.mp4");
        assert_eq!(config.reveal_delay_millis, 5000);
        assert_eq!(config.volume_step, 0.01);
        assert_eq!(config.enter_affordance, EnterAffordance::Overlay);
        assert_eq!(config.volume_control, VolumeControlMode::KeyboardToggle);
        assert!(config.links.is_empty());
    }

    #[test]
    fn sample_config_parses() {
        let config: GateConfig = toml::from_str(
            r#"
            media_src = "/intro.webm"
            reveal_delay_millis = 2500
            enter_affordance = "button"
            volume_control = "always-visible"
            title = "Ichigo"

            [[links]]
            name = "Discord"
            href = "https://discord.com"
            icon = "icons/discord.svg"
            "#,
        )
        .unwrap();

        assert_eq!(config.media_src, "/intro.webm");
        assert_eq!(config.reveal_delay_millis, 2500);
        assert_eq!(config.enter_affordance, EnterAffordance::Button);
        assert_eq!(config.volume_control, VolumeControlMode::AlwaysVisible);
        assert_eq!(config.title, "Ichigo");
        assert_eq!(config.links.len(), 1);
        assert_eq!(config.links[0].name, "Discord");
    }

    #[test]
    fn mode_names_are_kebab_case() {
        assert_eq!(
            VolumeControlMode::from_str("keyboard-toggle").unwrap(),
            VolumeControlMode::KeyboardToggle
        );
        assert_eq!(
            VolumeControlMode::AlwaysVisible.to_string(),
            "always-visible"
        );
        assert_eq!(
            EnterAffordance::from_str("overlay").unwrap(),
            EnterAffordance::Overlay
        );
        assert_eq!(EnterAffordance::Button.to_string(), "button");
    }

    #[test]
    fn embedded_config_loads() {
        // Whatever gate.toml currently holds, loading must not fall over.
        let config = GateConfig::load();
        assert!(!config.media_src.is_empty());
        assert!(config.reveal_delay_millis > 0);
    }
}

//! Device profiles and player preferences
//!
//! Read from LocalStorage and the page's query string on the web; natively
//! a profile can be forced through `PING_PONG_PROFILE`.

use serde::{Deserialize, Serialize};

use crate::consts::COMPACT_VIEWPORT_MAX_WIDTH;
use crate::sim::MatchConfig;

/// Device class, chosen once at startup from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeviceProfile {
    /// Small viewports (phones)
    Compact,
    #[default]
    Standard,
}

impl DeviceProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceProfile::Compact => "Compact",
            DeviceProfile::Standard => "Standard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "compact" | "mobile" => Some(DeviceProfile::Compact),
            "standard" | "desktop" => Some(DeviceProfile::Standard),
            _ => None,
        }
    }

    /// Pick the profile for a viewport width (logical units)
    pub fn for_viewport_width(width: f32) -> Self {
        if width <= COMPACT_VIEWPORT_MAX_WIDTH {
            DeviceProfile::Compact
        } else {
            DeviceProfile::Standard
        }
    }

    /// Initial ball speed magnitude (both axes)
    pub fn ball_speed(&self) -> f32 {
        match self {
            DeviceProfile::Compact => 2.0,
            DeviceProfile::Standard => 1.0,
        }
    }

    /// Opponent paddle step per tick
    pub fn computer_speed(&self) -> f32 {
        match self {
            DeviceProfile::Compact => 4.0,
            DeviceProfile::Standard => 10.0,
        }
    }

    /// Engine configuration for this profile
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            initial_speed_x: -self.ball_speed(),
            initial_speed_y: -self.ball_speed(),
            computer_speed: self.computer_speed(),
        }
    }
}

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Force a device profile instead of detecting it from the viewport
    pub profile: Option<DeviceProfile>,
    /// Hide the cursor over the play surface once the paddle moves
    pub hide_cursor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: None,
            hide_cursor: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "ping_pong_settings";

    /// Profile to use for a viewport, honoring any forced profile
    pub fn resolve_profile(&self, viewport_width: f32) -> DeviceProfile {
        self.profile
            .unwrap_or_else(|| DeviceProfile::for_viewport_width(viewport_width))
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Force a profile by name, e.g. "compact"
    pub fn force_profile(&mut self, name: &str) {
        match DeviceProfile::from_str(name) {
            Some(profile) => {
                log::info!("Forcing {} profile", profile.as_str());
                self.profile = Some(profile);
            }
            None => log::warn!("Unknown profile '{}', ignoring", name),
        }
    }

    /// Apply overrides from a URL query string such as `?profile=compact`
    pub fn apply_query(&mut self, query: &str) {
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "profile" => self.force_profile(value),
                "cursor" => self.hide_cursor = value != "show",
                _ => {}
            }
        }
    }

    /// Load settings from LocalStorage, then apply URL overrides (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let mut settings = match window.local_storage().ok().flatten() {
            Some(storage) => match storage.get_item(Self::STORAGE_KEY) {
                Ok(Some(json)) => {
                    log::info!("Loaded settings from LocalStorage");
                    Self::from_json_or_default(&json)
                }
                _ => Self::default(),
            },
            None => Self::default(),
        };

        if let Ok(query) = window.location().search() {
            settings.apply_query(&query);
        }
        settings
    }

    /// Defaults, with `PING_PONG_PROFILE` forcing a profile (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let mut settings = Self::default();
        if let Ok(name) = std::env::var("PING_PONG_PROFILE") {
            settings.force_profile(&name);
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_threshold() {
        assert_eq!(DeviceProfile::for_viewport_width(375.0), DeviceProfile::Compact);
        assert_eq!(DeviceProfile::for_viewport_width(600.0), DeviceProfile::Compact);
        assert_eq!(DeviceProfile::for_viewport_width(601.0), DeviceProfile::Standard);
        assert_eq!(DeviceProfile::for_viewport_width(1920.0), DeviceProfile::Standard);
    }

    #[test]
    fn test_profile_speeds() {
        let compact = DeviceProfile::Compact.match_config();
        assert_eq!(compact.initial_speed_y, -2.0);
        assert_eq!(compact.initial_speed_x, -2.0);
        assert_eq!(compact.computer_speed, 4.0);

        let standard = DeviceProfile::Standard.match_config();
        assert_eq!(standard.initial_speed_y, -1.0);
        assert_eq!(standard.initial_speed_x, -1.0);
        assert_eq!(standard.computer_speed, 10.0);
    }

    #[test]
    fn test_forced_profile_wins() {
        let settings = Settings {
            profile: Some(DeviceProfile::Compact),
            ..Default::default()
        };
        assert_eq!(settings.resolve_profile(1920.0), DeviceProfile::Compact);
        assert_eq!(
            Settings::default().resolve_profile(1920.0),
            DeviceProfile::Standard
        );
    }

    #[test]
    fn test_settings_json() {
        let settings = Settings::from_json(r#"{"profile":"Compact"}"#).unwrap();
        assert_eq!(settings.profile, Some(DeviceProfile::Compact));
        assert!(settings.hide_cursor);

        let fallback = Settings::from_json_or_default("not json");
        assert_eq!(fallback, Settings::default());
    }

    #[test]
    fn test_query_forces_profile() {
        let mut settings = Settings::default();
        settings.apply_query("?profile=compact");
        assert_eq!(settings.profile, Some(DeviceProfile::Compact));
        assert_eq!(settings.resolve_profile(1920.0), DeviceProfile::Compact);

        settings.apply_query("?debug=1&profile=Desktop&cursor=show");
        assert_eq!(settings.profile, Some(DeviceProfile::Standard));
        assert!(!settings.hide_cursor);
    }

    #[test]
    fn test_query_ignores_unknown_values() {
        let mut settings = Settings::default();
        settings.apply_query("?profile=tablet&flag&=x");
        assert_eq!(settings, Settings::default());

        settings.apply_query("");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!(DeviceProfile::from_str("MOBILE"), Some(DeviceProfile::Compact));
        assert_eq!(DeviceProfile::from_str("standard"), Some(DeviceProfile::Standard));
        assert_eq!(DeviceProfile::from_str("tablet"), None);
    }
}

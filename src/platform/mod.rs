//! Platform abstraction layer
//!
//! Maps raw pointer positions onto the play surface and picks the device
//! profile. Browser-only glue (listeners, game-over panel) lives in `web`.

use crate::clamp_paddle_x;
use crate::consts::PADDLE_DIFF;
use crate::settings::{DeviceProfile, Settings};

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Bottom paddle x for a pointer at `client_x`, with the surface's left edge
/// at `surface_left`. The paddle is centered under the pointer.
pub fn paddle_x_from_pointer(client_x: f32, surface_left: f32) -> f32 {
    clamp_paddle_x(client_x - surface_left - PADDLE_DIFF)
}

/// Left edge of a surface of `surface_width` centered in a window of `window_width`
pub fn centered_surface_left(window_width: f32, surface_width: f32) -> f32 {
    window_width / 2.0 - surface_width / 2.0
}

/// Device profile for this session, resolved once at startup
pub fn startup_profile(settings: &Settings, viewport_width: f32) -> DeviceProfile {
    let profile = settings.resolve_profile(viewport_width);
    log::info!(
        "Viewport {}px wide, using {} profile",
        viewport_width,
        profile.as_str()
    );
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_centers_paddle() {
        // Surface centered in a 1000px window starts at 250
        let left = centered_surface_left(1000.0, 500.0);
        assert_eq!(left, 250.0);
        assert_eq!(paddle_x_from_pointer(500.0, left), 225.0);
    }

    #[test]
    fn test_pointer_clamped_to_surface() {
        assert_eq!(paddle_x_from_pointer(0.0, 250.0), 0.0);
        assert_eq!(paddle_x_from_pointer(260.0, 250.0), 0.0);
        assert_eq!(paddle_x_from_pointer(900.0, 250.0), 450.0);
        assert_eq!(paddle_x_from_pointer(720.0, 250.0), 445.0);
    }

    #[test]
    fn test_startup_profile() {
        let settings = Settings::default();
        assert_eq!(startup_profile(&settings, 390.0), DeviceProfile::Compact);
        assert_eq!(startup_profile(&settings, 1280.0), DeviceProfile::Standard);
    }
}

//! Compile-time site configuration.
//!
//! Asset paths resolve against `ASSET_BASE_URL` when it is set at build time,
//! otherwise against the site root.

pub const MODEL_ASSET: &str = "/fire_alarm_button.glb";
pub const LOGO_ASSET: &str = "/logo.png";
pub const HERO_VIDEO_MP4: &str = "/hero-video.mp4";
pub const HERO_VIDEO_WEBM: &str = "/hero-video.webm";
pub const HERO_POSTER: &str = "/hero-poster.jpg";

/// Visible fraction at which a section becomes the active nav link.
pub const NAV_SECTION_THRESHOLD: f64 = 0.6;
/// Offset past which the nav bar gets its solid background.
pub const NAV_SCROLLED_OFFSET: f64 = 50.0;
/// Offset past which scrolling down hides the nav bar.
pub const NAV_HIDE_OFFSET: f64 = 100.0;
/// Stagger between mobile menu links.
pub const MOBILE_LINK_STAGGER_MS: u32 = 100;

pub const STATS_THRESHOLD: f64 = 0.4;
pub const COUNT_UP_DURATION_MS: f64 = 3000.0;
pub const COUNT_UP_TICK_MS: u32 = 16;
pub const STAT_CARD_STAGGER_MS: u32 = 150;

pub const HERO_REVEAL_DELAY_MS: u32 = 500;
pub const REVEAL_THRESHOLD: f64 = 0.3;

pub const DEFAULT_MODEL_SCALE: f32 = 16.0;

pub fn get_asset_url(path: &str) -> String {
    match option_env!("ASSET_BASE_URL") {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_are_rooted() {
        let url = get_asset_url(MODEL_ASSET);
        assert!(url.ends_with("/fire_alarm_button.glb"));
    }
}

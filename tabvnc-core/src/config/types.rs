//! Configuration type definitions
//!
//! Every section has defaults, so a configuration file only needs the keys
//! it changes.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum server host name length
pub const MAX_HOST_LEN: usize = 64;

/// Maximum network name length
pub const MAX_SSID_LEN: usize = 32;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Malformed configuration text
    Parse,
    /// A gesture threshold or time is zero
    InvalidThreshold,
    /// Rotation outside 0..=3
    InvalidRotation,
    /// Input cadence of zero
    InvalidTick,
}

/// Gesture thresholds
///
/// Defaults are tuned for a 1280x720 panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// A swipe must start at or above this y coordinate (px)
    pub swipe_top_threshold: u16,
    /// Minimum downward travel of a swipe, and maximum sideways drift (px)
    pub swipe_min_distance: u16,
    /// A swipe must complete within this time (ms)
    pub swipe_max_time_ms: u32,
    /// Minimum time between three-finger toggles (ms)
    pub three_touch_debounce_ms: u32,
    /// Vertical travel per wheel step (px)
    pub scroll_threshold: u16,
    /// Minimum time between wheel steps (ms)
    pub scroll_min_interval_ms: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_top_threshold: 40,
            swipe_min_distance: 120,
            swipe_max_time_ms: 600,
            three_touch_debounce_ms: 500,
            scroll_threshold: 20,
            scroll_min_interval_ms: 50,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.swipe_min_distance == 0
            || self.swipe_max_time_ms == 0
            || self.scroll_threshold == 0
        {
            return Err(ConfigError::InvalidThreshold);
        }
        Ok(())
    }
}

/// Panel settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Backlight level (0-255)
    pub brightness: u8,
    /// Quarter turns clockwise (0-3)
    pub rotation: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness: 128,
            rotation: 3,
        }
    }
}

/// RFB server endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServerConfig {
    pub host: String<MAX_HOST_LEN>,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 5900,
        }
    }
}

/// Network shown on the info screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NetworkConfig {
    pub ssid: String<MAX_SSID_LEN>,
}

/// Renderer settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Largest copy-rect scratch buffer in pixels; unlimited when absent
    pub scratch_limit_px: Option<u32>,
}

impl RenderConfig {
    /// Scratch cap in pixels, `usize::MAX` when unlimited
    pub fn scratch_limit(&self) -> usize {
        self.scratch_limit_px.map_or(usize::MAX, |px| px as usize)
    }
}

/// Input loop settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputConfig {
    /// Touch polling period (ms)
    pub tick_ms: u32,
    /// Time a keyboard key is held before release (ms)
    pub key_press_ms: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            key_press_ms: 50,
        }
    }
}

/// Complete viewer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    pub display: DisplayConfig,
    pub server: ServerConfig,
    pub network: NetworkConfig,
    pub gesture: GestureConfig,
    pub render: RenderConfig,
    pub input: InputConfig,
}

impl ViewerConfig {
    /// Check values the viewer cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gesture.validate()?;
        if self.display.rotation > 3 {
            return Err(ConfigError::InvalidRotation);
        }
        if self.input.tick_ms == 0 {
            return Err(ConfigError::InvalidTick);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ViewerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.server.port, 5900);
        assert_eq!(config.display.brightness, 128);
        assert_eq!(config.gesture.swipe_top_threshold, 40);
        assert_eq!(config.render.scratch_limit_px, None);
    }

    #[test]
    fn test_zero_scroll_threshold_rejected() {
        let mut config = ViewerConfig::default();
        config.gesture.scroll_threshold = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold));
    }

    #[test]
    fn test_zero_swipe_time_rejected() {
        let mut config = ViewerConfig::default();
        config.gesture.swipe_max_time_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold));
    }

    #[test]
    fn test_bad_rotation_rejected() {
        let mut config = ViewerConfig::default();
        config.display.rotation = 4;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRotation));
    }

    #[test]
    fn test_zero_tick_rejected() {
        let mut config = ViewerConfig::default();
        config.input.tick_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidTick));
    }
}

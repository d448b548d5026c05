//! # Configuration Management
//!
//! Loads and saves the clock's appearance settings from `clock-config.toml`.
//! Every field has a default, so a missing or partial file is never an
//! error — the host always ends up with a drawable configuration.

use crate::{ClockError, SurfaceDimensions};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// An sRGB color, written as `"#rrggbb"` in config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    /// Default center-pin gray
    pub const GRAY: Color = Color::new(0x88, 0x88, 0x88);
    /// Default face fill, a light neutral gray
    pub const FACE: Color = Color::new(0xe4, 0xe0, 0xdd);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6)
            .ok_or_else(|| ClockError::InvalidColor(s.to_string()))?;
        let channel = |range| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ClockError::InvalidColor(s.to_string()))
        };
        Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ClockError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.to_string()
    }
}

/// Application configuration loaded from clock-config.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Surface size
    #[serde(default)]
    pub display: DisplayConfig,
    /// Dial appearance
    #[serde(default)]
    pub face: FaceConfig,
    /// Hand colors
    #[serde(default)]
    pub hands: HandsConfig,
}

/// Drawing surface configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Surface width in pixels
    #[serde(default = "defaults::dimension")]
    pub width: i32,
    /// Surface height in pixels
    #[serde(default = "defaults::dimension")]
    pub height: i32,
}

/// Dial appearance: face fill, border ring, tick dots, numerals, center pin
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FaceConfig {
    /// Fill of the clock face disc
    #[serde(default = "defaults::face_color")]
    pub background_color: Color,
    /// Stroke of the outer ring
    #[serde(default = "defaults::black")]
    pub border_color: Color,
    /// Whether the 60-dot tick-mark ring is drawn
    #[serde(default = "defaults::enabled")]
    pub border_dots_enabled: bool,
    /// Fill of the tick dots
    #[serde(default = "defaults::black")]
    pub border_dots_color: Color,
    /// Whether the 1–12 digit labels are drawn
    #[serde(default = "defaults::enabled")]
    pub numerals_enabled: bool,
    /// Fill of the digit labels
    #[serde(default = "defaults::black")]
    pub numerals_color: Color,
    /// Fill of the center pin
    #[serde(default = "defaults::gray")]
    pub center_pin_color: Color,
}

/// Per-hand stroke colors
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HandsConfig {
    #[serde(default = "defaults::black")]
    pub hour_color: Color,
    #[serde(default = "defaults::black")]
    pub minute_color: Color,
    #[serde(default = "defaults::black")]
    pub second_color: Color,
}

mod defaults {
    use super::Color;

    pub fn dimension() -> i32 {
        400
    }

    pub fn black() -> Color {
        Color::BLACK
    }

    pub fn gray() -> Color {
        Color::GRAY
    }

    pub fn face_color() -> Color {
        Color::FACE
    }

    pub fn enabled() -> bool {
        true
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: defaults::dimension(),
            height: defaults::dimension(),
        }
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            background_color: Color::FACE,
            border_color: Color::BLACK,
            border_dots_enabled: true,
            border_dots_color: Color::BLACK,
            numerals_enabled: true,
            numerals_color: Color::BLACK,
            center_pin_color: Color::GRAY,
        }
    }
}

impl Default for HandsConfig {
    fn default() -> Self {
        Self {
            hour_color: Color::BLACK,
            minute_color: Color::BLACK,
            second_color: Color::BLACK,
        }
    }
}

impl Config {
    /// Load configuration from clock-config.toml in the working directory.
    /// Falls back to default configuration if the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_from_path("clock-config.toml")
    }

    /// Load configuration from the given path.
    /// Falls back to default configuration if the file is missing or invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("invalid config file format: {e}");
                    warn!("using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                info!("no config file found, using default configuration");
                Self::default()
            }
        }
    }

    /// Save the current configuration to clock-config.toml.
    pub fn save(&self) -> Result<(), ClockError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("clock-config.toml", contents)?;
        Ok(())
    }

    /// Surface size as reported to the layout engine.
    pub fn dimensions(&self) -> SurfaceDimensions {
        SurfaceDimensions::new(self.display.width, self.display.height)
    }
}

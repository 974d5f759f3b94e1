//! # Effect Configuration
//!
//! The few things a host may tune: display density, the random seed, the
//! palette and the size of a full-field restart. Everything else is a fixed
//! constant (see [`crate::constants`]).
//!
//! ```toml
//! density = 2.75
//! seed = 42
//!
//! [palette]
//! white = [255, 255, 255, 255]
//! blue = [120, 190, 255, 255]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use warp_procedural::EffectSeed;

use crate::color::Rgba;
use crate::constants::{
    BASE_LINE_LENGTH_DP, FULL_FIELD_CENTER_STARS, FULL_FIELD_RANDOM_STARS, STROKE_WIDTH_DP,
};
use crate::error::{WarpError, WarpResult};

/// Upper bound on stars seeded by a full-field restart.
pub const MAX_FULL_FIELD_STARS: usize = 100_000;

/// Colors used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Color of white stars.
    pub white: Rgba,
    /// Color of blue stars.
    pub blue: Rgba,
    /// Background fill.
    pub background: Rgba,
    /// Center glow colors, one per stop.
    pub center_gradient: [Rgba; 3],
    /// Warp-zone colors, one per stop.
    pub warp_zone_gradient: [Rgba; 6],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: Rgba::WHITE,
            blue: Rgba::new(0x78, 0xBE, 0xFF, 0xFF),
            background: Rgba::new(0x05, 0x08, 0x18, 0xFF),
            center_gradient: [
                Rgba::new(0xFF, 0xFF, 0xFF, 0xE6),
                Rgba::new(0xB4, 0xDC, 0xFF, 0x80),
                Rgba::new(0x05, 0x08, 0x18, 0x00),
            ],
            warp_zone_gradient: [
                Rgba::new(0xFF, 0xFF, 0xFF, 0x00),
                Rgba::new(0xFF, 0xFF, 0xFF, 0x00),
                Rgba::new(0xC8, 0xE6, 0xFF, 0x40),
                Rgba::new(0x50, 0x8C, 0xFF, 0x99),
                Rgba::new(0x1E, 0x32, 0x8C, 0x4D),
                Rgba::new(0x05, 0x08, 0x18, 0x00),
            ],
        }
    }
}

/// Configuration for one warp effect instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Pixels per dp.
    pub density: f32,
    /// Random seed. `None` seeds from the system clock.
    pub seed: Option<u64>,
    /// Center-born stars seeded by a full-field restart.
    pub full_field_center_stars: usize,
    /// Field-born stars seeded by a full-field restart.
    pub full_field_random_stars: usize,
    /// Renderer colors. Must stay the last field: TOML tables follow plain keys.
    pub palette: Palette,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            seed: None,
            full_field_center_stars: FULL_FIELD_CENTER_STARS,
            full_field_random_stars: FULL_FIELD_RANDOM_STARS,
            palette: Palette::default(),
        }
    }
}

impl EffectConfig {
    /// Parses and validates a TOML document. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::Parse`] for malformed TOML and
    /// [`WarpError::InvalidConfig`] for out of range values.
    pub fn from_toml_str(text: &str) -> WarpResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::Io`] if the file cannot be read, otherwise as
    /// [`EffectConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> WarpResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WarpError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> WarpResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::InvalidConfig`] naming the first bad value.
    pub fn validate(&self) -> WarpResult<()> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(WarpError::InvalidConfig(format!(
                "density must be a positive finite number, got {}",
                self.density
            )));
        }

        let full_field = self
            .full_field_center_stars
            .saturating_add(self.full_field_random_stars);
        if full_field > MAX_FULL_FIELD_STARS {
            return Err(WarpError::InvalidConfig(format!(
                "full field of {full_field} stars exceeds the limit of {MAX_FULL_FIELD_STARS}"
            )));
        }

        Ok(())
    }

    /// Base streak length in pixels.
    #[inline]
    #[must_use]
    pub fn base_line_length(&self) -> f32 {
        BASE_LINE_LENGTH_DP * self.density
    }

    /// Stroke width in pixels.
    #[inline]
    #[must_use]
    pub fn stroke_width(&self) -> f32 {
        STROKE_WIDTH_DP * self.density
    }

    /// Root seed for the effect's random streams.
    #[must_use]
    pub fn effect_seed(&self) -> EffectSeed {
        self.seed.map_or_else(EffectSeed::from_clock, EffectSeed::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EffectConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.full_field_center_stars, 50);
        assert_eq!(config.full_field_random_stars, 600);
        assert_eq!(config.base_line_length(), 12.0);
        assert_eq!(config.stroke_width(), 2.0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = EffectConfig::from_toml_str("").unwrap();
        assert_eq!(config, EffectConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = EffectConfig::from_toml_str(
            r#"
            density = 3.0
            seed = 42

            [palette]
            blue = [1, 2, 3, 4]
            "#,
        )
        .unwrap();

        assert_eq!(config.density, 3.0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.palette.blue, Rgba::new(1, 2, 3, 4));
        assert_eq!(config.palette.white, Rgba::WHITE);
        assert_eq!(config.base_line_length(), 36.0);
        assert_eq!(config.effect_seed(), EffectSeed::new(42));
    }

    #[test]
    fn test_invalid_density() {
        for text in ["density = 0.0", "density = -1.5", "density = nan"] {
            let err = EffectConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, WarpError::InvalidConfig(_)), "{text}: {err}");
        }
    }

    #[test]
    fn test_too_many_full_field_stars() {
        let err = EffectConfig::from_toml_str("full_field_random_stars = 1000000").unwrap_err();
        assert!(matches!(err, WarpError::InvalidConfig(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = EffectConfig::from_toml_str("density = \"fast\"").unwrap_err();
        assert!(matches!(err, WarpError::Parse(_)));

        let err = EffectConfig::from_toml_str("[palette]\nwhite = [1, 2, 3]").unwrap_err();
        assert!(matches!(err, WarpError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EffectConfig::from_file("/definitely/not/here/warp.toml").unwrap_err();
        match err {
            WarpError::Io { path, .. } => assert!(path.ends_with("warp.toml")),
            other => panic!("expected Io error, got {other}"),
        }
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = EffectConfig::default();
        config.seed = Some(7);
        config.density = 2.5;

        let text = config.to_toml_string().unwrap();
        assert_eq!(EffectConfig::from_toml_str(&text).unwrap(), config);
    }
}

//! # Effect State
//!
//! The scalar state shared between the sequencer, the star field and the
//! renderer, plus the viewport it is all projected into.

use crate::constants::{
    FULL_BIRTH_RATE_CENTER, FULL_BIRTH_RATE_RANDOM, SHAKE_AMPLITUDE_FACTOR, START_SPEED,
    WARP_ZONE_FACTOR,
};
use crate::starfield::FieldParams;

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Creates a viewport. Negative and non-finite sides become 0.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_side(width),
            height: sanitize_side(height),
        }
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Returns true if nothing can be drawn.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Distance from the center to a corner, plus the shake amplitude.
    #[inline]
    #[must_use]
    pub fn edge_radius(&self, shake_amplitude: f32) -> f32 {
        (self.width / 2.0).hypot(self.height / 2.0) + shake_amplitude
    }

    /// Radius of the center glow: half the smaller side.
    #[inline]
    #[must_use]
    pub fn center_radius(&self) -> f32 {
        (self.width / 2.0).min(self.height / 2.0)
    }

    /// Radius of the warp-zone overlay before scaling.
    #[inline]
    #[must_use]
    pub fn warp_zone_radius(&self) -> f32 {
        WARP_ZONE_FACTOR * self.center_radius()
    }

    /// Shake amplitude at full speed.
    #[inline]
    #[must_use]
    pub fn full_shake(&self) -> f32 {
        (self.width * SHAKE_AMPLITUDE_FACTOR).min(self.height * SHAKE_AMPLITUDE_FACTOR)
    }
}

fn sanitize_side(side: f32) -> f32 {
    if side.is_finite() {
        side.max(0.0)
    } else {
        0.0
    }
}

/// Scalar state of a running effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectState {
    /// Camera offset in pixels, applied to everything drawn.
    pub camera_offset: (f32, f32),
    /// Alpha applied to every drawn component.
    pub global_alpha: f32,
    /// Warp-zone overlay scale.
    pub warp_zone_scale: f32,
    /// Warp-zone overlay alpha.
    pub warp_zone_alpha: f32,
    /// Shake amplitude in pixels.
    pub shake_amplitude: f32,
    /// Star speed.
    pub speed: f32,
    /// Center births per millisecond.
    pub birth_rate_center: f32,
    /// Field births per millisecond.
    pub birth_rate_random: f32,
}

impl EffectState {
    /// Parameters the star field needs for one step.
    #[inline]
    #[must_use]
    pub const fn field_params(&self) -> FieldParams {
        FieldParams {
            speed: self.speed,
            birth_rate_center: self.birth_rate_center,
            birth_rate_random: self.birth_rate_random,
            shake_amplitude: self.shake_amplitude,
        }
    }
}

impl Default for EffectState {
    fn default() -> Self {
        Self {
            camera_offset: (0.0, 0.0),
            global_alpha: 1.0,
            warp_zone_scale: 0.0,
            warp_zone_alpha: 0.0,
            shake_amplitude: 0.0,
            speed: START_SPEED,
            birth_rate_center: FULL_BIRTH_RATE_CENTER,
            birth_rate_random: FULL_BIRTH_RATE_RANDOM,
        }
    }
}

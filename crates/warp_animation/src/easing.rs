//! Easing curves.
//!
//! Plain functions over inputs nominally in `[0, 1]`. Only the `*step`
//! functions clamp; everything else trusts the caller. Visual timing depends
//! on these exact formulas, so they stay in `f32` end to end.

use std::f32::consts::PI;

/// Accelerating curve `t²`.
#[inline]
#[must_use]
pub fn accelerate(t: f32) -> f32 {
    t * t
}

/// Accelerating curve `t^(2·factor)`.
///
/// `factor = 1.0` is [`accelerate`]; larger factors start slower and end
/// faster.
#[inline]
#[must_use]
pub fn accelerate_by(t: f32, factor: f32) -> f32 {
    t.powf(2.0 * factor)
}

/// Decelerating curve `1 - (1 - t)²`.
#[inline]
#[must_use]
pub fn decelerate(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Decelerating curve `1 - (1 - t)^(2·factor)`.
#[inline]
#[must_use]
pub fn decelerate_by(t: f32, factor: f32) -> f32 {
    1.0 - (1.0 - t).powf(2.0 * factor)
}

/// Cosine ease-in-out: `cos((t + 1)·π) / 2 + 0.5`.
#[inline]
#[must_use]
pub fn accelerate_decelerate(t: f32) -> f32 {
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

/// Smootherstep between two edges.
///
/// Clamps `x` into `[edge0, edge1]`, normalizes it and applies
/// `6x⁵ - 15x⁴ + 10x³`.
#[inline]
#[must_use]
pub fn smootherstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let x = linear_step(edge0, edge1, x);
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

/// Linear step between two edges: clamp and normalize, nothing else.
#[inline]
#[must_use]
pub fn linear_step(edge0: f32, edge1: f32, x: f32) -> f32 {
    clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0)
}

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics on `min > max`; `min` wins.
#[inline]
#[must_use]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}

/// Easing curve selector, so timelines can carry their curve as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Straight line.
    Linear,
    /// `t²`: slow start, fast finish.
    Accelerate,
    /// `1 - (1 - t)²`: fast start, slow finish.
    Decelerate,
    /// Cosine ease-in-out.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    ///
    /// `t` is clamped first, so the result always lies in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = clamp(t, 0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Accelerate => accelerate(t),
            Self::Decelerate => decelerate(t),
            Self::AccelerateDecelerate => accelerate_decelerate(t),
        }
    }
}

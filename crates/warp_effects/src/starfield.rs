//! # Star Field
//!
//! CPU simulation of the radial starfield.
//!
//! Every tick:
//! 1. Moves every star outward and retires the ones past the edge
//! 2. Spawns center-born and field-born stars from the birth rates
//! 3. Advances the camera shake timelines
//! 4. Rebuilds the white and blue line pools from the surviving stars
//!
//! Stars live in a [`SwapArena`] and segments in two [`LineBatchPool`]s, so
//! a warmed-up field ticks without touching the allocator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use warp_animation::{accelerate, decelerate};
use warp_core::{LineBatchPool, SwapArena};
use warp_procedural::{octave_noise, EffectSeed};

use crate::constants::{
    BASE_LINE_LENGTH_DP, BASIC_SPEED, BIRTH_DISTANCE, CENTER_BIRTH_MIN_DISTANCE,
    FIELD_BIRTH_MAX_DRAW, NOISE_FREQUENCY, RETIRE_DISTANCE, SHAKE_OCTAVES, SHAKE_ROUGHNESS,
    SHAKE_SCALE, SHAKE_TIMELINE_WRAP, STRETCH_RANGE,
};
use crate::state::Viewport;

/// Stars the arena and pools are sized for up front.
const INITIAL_STAR_CAPACITY: usize = 1_024;

/// Which pool a star is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    /// Drawn with the white paint.
    White,
    /// Drawn with the blue paint.
    Blue,
}

/// A single star stretched by warping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Direction from the center in radians, `[0, 2π)`.
    pub angle: f32,
    /// Depth scalar in `[0.3, 1]`. Damps speed and lengthens the streak.
    pub stretch_factor: f32,
    /// 0 at the center, 1 at the corners.
    pub distance: f32,
    /// Paint the star is drawn with.
    pub color: ColorClass,
}

impl Star {
    /// Returns true while the star is inside the birth zone.
    ///
    /// Born stars grow linearly and are not drawn.
    #[inline]
    #[must_use]
    pub fn is_born(&self) -> bool {
        self.distance < BIRTH_DISTANCE
    }

    /// Returns true once the star has left the screen.
    #[inline]
    #[must_use]
    pub fn is_retired(&self) -> bool {
        self.distance > RETIRE_DISTANCE
    }

    /// Moves the star outward by one tick of `delta_ms` at `speed`.
    #[inline]
    fn advance(&mut self, delta_ms: f32, speed: f32) {
        if self.is_born() {
            self.distance += delta_ms * BIRTH_DISTANCE * 0.001;
        } else {
            let speed = speed * decelerate(self.stretch_factor);
            self.distance += delta_ms * speed * accelerate(self.distance);
        }
    }
}

/// Scalars the field needs for one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldParams {
    /// Star speed.
    pub speed: f32,
    /// Center births per millisecond.
    pub birth_rate_center: f32,
    /// Field births per millisecond.
    pub birth_rate_random: f32,
    /// Shake amplitude in pixels. 0 disables shake.
    pub shake_amplitude: f32,
}

/// Fractional birth carry.
///
/// Spawning `floor(expected)` stars per tick would lose every fraction at low
/// rates. The remainder is carried into the next tick instead, so the long
/// run count tracks the expected total within one star.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BirthAccumulator {
    carry: f32,
}

impl BirthAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { carry: 0.0 }
    }

    /// Adds `expected` births and returns how many whole stars to spawn.
    ///
    /// Negative and non-finite expectations count as 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn accumulate(&mut self, expected: f32) -> u32 {
        let expected = if expected.is_finite() { expected.max(0.0) } else { 0.0 };
        let raw = expected + self.carry;
        let whole = raw.floor();
        self.carry = raw - whole;
        whole as u32
    }

    /// Current fractional carry in `[0, 1)`.
    #[inline]
    #[must_use]
    pub const fn carry(&self) -> f32 {
        self.carry
    }

    /// Drops the carry.
    #[inline]
    pub fn reset(&mut self) {
        self.carry = 0.0;
    }
}

/// Lifetime counters of a star field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpawnStats {
    /// Stars born in the center zone.
    pub spawned_center: u64,
    /// Stars born anywhere else.
    pub spawned_field: u64,
    /// Stars that left the screen.
    pub retired: u64,
    /// Stars born during the last step.
    pub spawned_last_step: u32,
    /// Stars retired during the last step.
    pub retired_last_step: u32,
}

impl SpawnStats {
    /// Total stars ever spawned.
    #[inline]
    #[must_use]
    pub const fn spawned_total(&self) -> u64 {
        self.spawned_center + self.spawned_field
    }
}

/// The radial star field.
pub struct StarField {
    /// Active stars.
    stars: SwapArena<Star>,
    /// Stream for star births.
    rng: ChaCha8Rng,
    /// Stream for shake timeline phases.
    shake_rng: ChaCha8Rng,
    /// Carry of center births.
    center_births: BirthAccumulator,
    /// Carry of field births.
    field_births: BirthAccumulator,
    /// Shake timelines (x, y).
    shake_timeline: (f32, f32),
    /// Current camera offset in pixels.
    camera_offset: (f32, f32),
    /// Segments of white stars.
    white_lines: LineBatchPool,
    /// Segments of blue stars.
    blue_lines: LineBatchPool,
    /// Base streak length in pixels.
    base_line_length: f32,
    /// Counters.
    stats: SpawnStats,
}

impl StarField {
    /// Creates an empty field. Streaks use the 1 px per dp base length.
    #[must_use]
    pub fn new(seed: EffectSeed) -> Self {
        let mut shake_rng = ChaCha8Rng::seed_from_u64(seed.derive(EffectSeed::SHAKE).value());
        let shake_timeline = (shake_rng.gen::<f32>(), shake_rng.gen::<f32>());

        Self {
            stars: SwapArena::with_capacity(INITIAL_STAR_CAPACITY),
            rng: ChaCha8Rng::seed_from_u64(seed.derive(EffectSeed::STARS).value()),
            shake_rng,
            center_births: BirthAccumulator::new(),
            field_births: BirthAccumulator::new(),
            shake_timeline,
            camera_offset: (0.0, 0.0),
            white_lines: LineBatchPool::with_capacity(INITIAL_STAR_CAPACITY),
            blue_lines: LineBatchPool::with_capacity(INITIAL_STAR_CAPACITY),
            base_line_length: BASE_LINE_LENGTH_DP,
            stats: SpawnStats::default(),
        }
    }

    /// Sets the base streak length in pixels.
    #[must_use]
    pub fn with_base_line_length(mut self, pixels: f32) -> Self {
        self.base_line_length = pixels;
        self
    }

    /// Advances the field by `delta_ms`.
    ///
    /// Negative deltas count as 0. A zero delta moves and spawns nothing but
    /// still rebuilds the line pools.
    #[allow(clippy::cast_precision_loss)]
    pub fn step(&mut self, delta_ms: i64, params: &FieldParams, viewport: Viewport) {
        let delta = delta_ms.max(0) as f32;
        let speed = params.speed;

        // Motion and retirement
        let retired = self.stars.retain(|star| {
            if star.is_retired() {
                return false;
            }
            star.advance(delta, speed);
            !star.is_retired()
        });

        // Births
        let center_expected = delta * params.birth_rate_center * self.rng.gen_range(0.5..1.0);
        let center = self.center_births.accumulate(center_expected);
        for _ in 0..center {
            let distance = self.rng.gen_range(CENTER_BIRTH_MIN_DISTANCE..BIRTH_DISTANCE);
            self.spawn(distance);
        }

        let field_expected = delta * params.birth_rate_random * self.rng.gen_range(0.5..1.0);
        let field = self.field_births.accumulate(field_expected);
        for _ in 0..field {
            let distance = decelerate(self.rng.gen_range(BIRTH_DISTANCE..FIELD_BIRTH_MAX_DRAW));
            self.spawn(distance);
        }

        self.stats.spawned_center += u64::from(center);
        self.stats.spawned_field += u64::from(field);
        self.stats.spawned_last_step = center + field;
        self.record_retired(retired);

        self.update_shake(delta, params.shake_amplitude);
        self.project(params, viewport);
    }

    /// Rebuilds both line pools from the current stars.
    ///
    /// Stars in the birth zone and past the edge are skipped. An empty
    /// viewport leaves both pools empty.
    pub fn project(&mut self, params: &FieldParams, viewport: Viewport) {
        self.white_lines.clear();
        self.blue_lines.clear();

        if viewport.is_empty() {
            return;
        }

        let edge_radius = viewport.edge_radius(params.shake_amplitude);
        let speed_factor = params.speed / BASIC_SPEED + 1.0;

        for star in &self.stars {
            if star.is_born() || star.is_retired() {
                continue;
            }

            let offset = edge_radius * star.distance;
            let length = 1.0
                + accelerate(star.distance) * speed_factor * star.stretch_factor * self.base_line_length;
            let (sin, cos) = star.angle.sin_cos();

            let pool = match star.color {
                ColorClass::White => &mut self.white_lines,
                ColorClass::Blue => &mut self.blue_lines,
            };
            pool.add_segment(
                cos * offset,
                sin * offset,
                cos * (offset + length),
                sin * (offset + length),
            );
        }
    }

    /// Removes every star. Line pools keep their capacity.
    pub fn clear(&mut self) {
        self.stars.clear();
        self.white_lines.clear();
        self.blue_lines.clear();
    }

    /// Drops the fractional birth carries.
    pub fn reset_accumulators(&mut self) {
        self.center_births.reset();
        self.field_births.reset();
    }

    /// Replaces all stars with a field already in motion.
    ///
    /// `center` stars are placed inside the birth zone and `random` stars
    /// across the screen, using the same distributions as regular births.
    pub fn seed_full_field(&mut self, center: usize, random: usize) {
        self.clear();

        for _ in 0..center {
            let distance = self.rng.gen_range(CENTER_BIRTH_MIN_DISTANCE..BIRTH_DISTANCE);
            self.spawn(distance);
        }
        for _ in 0..random {
            let distance = decelerate(self.rng.gen_range(BIRTH_DISTANCE..FIELD_BIRTH_MAX_DRAW));
            self.spawn(distance);
        }

        self.stats.spawned_center += center as u64;
        self.stats.spawned_field += random as u64;
    }

    /// Removes every star closer to the center than `distance`.
    ///
    /// Returns the number of removed stars.
    pub fn purge_below(&mut self, distance: f32) -> usize {
        self.stars.retain(|star| star.distance >= distance)
    }

    /// Adds a star exactly as given.
    ///
    /// A star past the edge is never drawn and is retired on the next step.
    pub fn insert(&mut self, star: Star) {
        self.stars.push(star);
    }

    /// Current camera offset in pixels.
    #[inline]
    #[must_use]
    pub const fn camera_offset(&self) -> (f32, f32) {
        self.camera_offset
    }

    /// Shake noise positions (x, y). Reseeded once past the wrap bound.
    #[inline]
    #[must_use]
    pub const fn shake_timeline(&self) -> (f32, f32) {
        self.shake_timeline
    }

    /// Segments of white stars from the last projection.
    #[inline]
    #[must_use]
    pub const fn white_lines(&self) -> &LineBatchPool {
        &self.white_lines
    }

    /// Segments of blue stars from the last projection.
    #[inline]
    #[must_use]
    pub const fn blue_lines(&self) -> &LineBatchPool {
        &self.blue_lines
    }

    /// Number of active stars.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Returns true if no star is active.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Active stars, in no particular order.
    #[inline]
    #[must_use]
    pub fn stars(&self) -> &[Star] {
        self.stars.as_slice()
    }

    /// Lifetime counters.
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> SpawnStats {
        self.stats
    }

    /// Creates a star at `distance` with random angle, stretch and color.
    fn spawn(&mut self, distance: f32) {
        let star = Star {
            angle: self.rng.gen_range(0.0..std::f32::consts::TAU),
            stretch_factor: self.rng.gen_range(STRETCH_RANGE.0..STRETCH_RANGE.1),
            distance,
            color: if self.rng.gen::<bool>() {
                ColorClass::White
            } else {
                ColorClass::Blue
            },
        };
        self.stars.push(star);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn record_retired(&mut self, retired: usize) {
        self.stats.retired += retired as u64;
        self.stats.retired_last_step = retired.min(u32::MAX as usize) as u32;
    }

    /// Advances both shake timelines and samples the camera offset.
    fn update_shake(&mut self, delta: f32, amplitude: f32) {
        if amplitude <= 0.0 || !amplitude.is_finite() {
            self.camera_offset = (0.0, 0.0);
            return;
        }

        let (x, y) = &mut self.shake_timeline;
        for timeline in [x, y] {
            if *timeline > SHAKE_TIMELINE_WRAP {
                *timeline = self.shake_rng.gen::<f32>();
            }
            *timeline += delta * NOISE_FREQUENCY;
        }

        let (x, y) = self.shake_timeline;
        self.camera_offset = (
            octave_noise(x, SHAKE_OCTAVES, SHAKE_ROUGHNESS, SHAKE_SCALE) * amplitude,
            octave_noise(y, SHAKE_OCTAVES, SHAKE_ROUGHNESS, SHAKE_SCALE) * amplitude,
        );
    }
}

impl Default for StarField {
    fn default() -> Self {
        Self::new(EffectSeed::default())
    }
}

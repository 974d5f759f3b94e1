//! # Effect Constants
//!
//! Fixed visual parameters of the warp effect. Speeds are fractions of the
//! center-to-edge distance per millisecond, durations are milliseconds of
//! effect time, lengths in dp are scaled by the configured density.

// ============================================================================
// TIMING
// ============================================================================

/// Duration of the birth-rate ramp at start.
pub const BIRTH_RATE_ACCELERATION_MS: i64 = 2_000;

/// Duration of the speed-up and warp-zone-in ramps.
pub const SPEED_UP_MS: i64 = 1_000;

/// Delay before the speed-up ramps begin, so they end with the birth ramp.
pub const SPEED_UP_DELAY_MS: i64 = BIRTH_RATE_ACCELERATION_MS - SPEED_UP_MS;

/// Longest delta a single tick may advance the effect by.
///
/// Hosts that stop ticking without pausing (backgrounded windows) resume
/// with one huge delta; it is cut to this so births stay per-frame sized.
pub const MAX_FRAME_DELTA_MS: i64 = 100;

// ============================================================================
// SPEED AND BIRTH RATES
// ============================================================================

/// Base star speed.
pub const BASIC_SPEED: f32 = 0.001;

/// Speed right after a start request.
pub const START_SPEED: f32 = 3.0 * BASIC_SPEED;

/// Cruise speed.
pub const FULL_SPEED: f32 = 20.0 * BASIC_SPEED;

/// Center births per millisecond right after a start request.
pub const START_BIRTH_RATE_CENTER: f32 = 0.01;

/// Field births per millisecond right after a start request.
pub const START_BIRTH_RATE_RANDOM: f32 = 0.1;

/// Center births per millisecond while cruising.
pub const FULL_BIRTH_RATE_CENTER: f32 = 0.2;

/// Field births per millisecond while cruising.
pub const FULL_BIRTH_RATE_RANDOM: f32 = 1.0;

// ============================================================================
// STAR GEOMETRY
// ============================================================================

/// Radius of the birth zone. Below it stars grow linearly and are not drawn.
pub const BIRTH_DISTANCE: f32 = 0.04;

/// Smallest distance a center-born star can start at.
pub const CENTER_BIRTH_MIN_DISTANCE: f32 = BIRTH_DISTANCE * 0.0001;

/// Upper bound of the pre-easing field birth draw.
pub const FIELD_BIRTH_MAX_DRAW: f32 = 0.8;

/// Stars past this distance are off-screen and retired.
pub const RETIRE_DISTANCE: f32 = 1.0;

/// Stars below this distance are dropped when the effect finishes.
pub const SLOW_DOWN_PURGE_DISTANCE: f32 = 0.15;

/// Stretch factor range drawn per star.
pub const STRETCH_RANGE: (f32, f32) = (0.3, 1.0);

/// Base streak length in dp.
pub const BASE_LINE_LENGTH_DP: f32 = 12.0;

/// Line stroke width in dp.
pub const STROKE_WIDTH_DP: f32 = 2.0;

// ============================================================================
// CAMERA SHAKE
// ============================================================================

/// Full shake amplitude as a fraction of the smaller viewport side.
pub const SHAKE_AMPLITUDE_FACTOR: f32 = 0.05;

/// Shake timeline advance per millisecond.
pub const NOISE_FREQUENCY: f32 = 0.03;

/// A shake timeline past this value is reseeded to a fresh phase in `[0, 1)`.
pub const SHAKE_TIMELINE_WRAP: f32 = 10.0;

/// Octaves of the shake noise.
pub const SHAKE_OCTAVES: u32 = 2;

/// Weight multiplier per shake octave.
pub const SHAKE_ROUGHNESS: f32 = 1.5;

/// Frequency of the first shake octave.
pub const SHAKE_SCALE: f32 = 0.75;

// ============================================================================
// OVERLAYS
// ============================================================================

/// Warp-zone scale reached at the end of a finish.
pub const MAX_WARP_ZONE_SCALE: f32 = 6.0;

/// Warp-zone radius as a multiple of the center glow radius.
pub const WARP_ZONE_FACTOR: f32 = 2.0;

/// Gradient stops of the center glow.
pub const CENTER_GRADIENT_STOPS: [f32; 3] = [0.0, 0.15, 1.0];

/// Gradient stops of the warp-zone overlay.
pub const WARP_ZONE_GRADIENT_STOPS: [f32; 6] = [0.0, 0.1, 0.22, 0.55, 0.7, 1.0];

// ============================================================================
// FULL-FIELD RESTART
// ============================================================================

/// Default number of center-born stars on a full-field restart.
pub const FULL_FIELD_CENTER_STARS: usize = 50;

/// Default number of field-born stars on a full-field restart.
pub const FULL_FIELD_RANDOM_STARS: usize = 600;

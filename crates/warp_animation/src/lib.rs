//! # WARP Animation
//!
//! Easing curves and scalar timelines.
//!
//! The warp effect ramps a handful of scalars (speed, birth rates, shake
//! amplitude, warp-zone scale and alpha) over fixed durations. Instead of a
//! separate animation subsystem, every ramp is a [`Ramp`] sampled with the
//! same effect time that drives the particle simulation.
//!
//! ## Example
//!
//! ```rust
//! use warp_animation::{Easing, Ramp};
//!
//! // Speed ramps up during the second half of a two-second start
//! let speed = Ramp::new(1_000, 0.003, 0.02, Easing::AccelerateDecelerate).with_delay(1_000);
//!
//! assert_eq!(speed.sample(500), 0.003);
//! assert_eq!(speed.sample(2_000), 0.02);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod easing;
pub mod timeline;

pub use easing::{
    accelerate, accelerate_by, accelerate_decelerate, clamp, decelerate, decelerate_by,
    linear_step, smootherstep, Easing,
};
pub use timeline::Ramp;

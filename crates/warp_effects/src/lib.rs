//! # WARP Effects
//!
//! The warp-speed starfield: a field of radiating stars streaked by speed,
//! with a procedurally shaking camera and two radial overlays.
//!
//! ## Architecture
//!
//! - [`StarField`]: particle simulation and projection into line pools
//! - [`Sequencer`]: phase machine that ramps speed, birth rates and shake
//! - [`WarpEffect`]: facade owning both, driven by host clock ticks
//! - [`FrameClock`]: turns host timestamps into `(elapsed, delta)` ticks
//!
//! ## Example
//!
//! ```rust
//! use warp_effects::{EffectConfig, FrameClock, Phase, TickOutcome, WarpEffect};
//!
//! # fn main() -> warp_effects::WarpResult<()> {
//! let mut effect = WarpEffect::new(EffectConfig { seed: Some(7), ..EffectConfig::default() })?;
//! effect.set_viewport(1080.0, 1920.0);
//! effect.start();
//!
//! let mut clock = FrameClock::new();
//! clock.start(0);
//! for frame in 1..=150 {
//!     if let Some(tick) = clock.advance(frame * 16) {
//!         assert_eq!(effect.on_tick(tick.elapsed_ms, tick.delta_ms), TickOutcome::Continue);
//!     }
//! }
//!
//! assert_eq!(effect.phase(), Phase::Cruising);
//! assert!(effect.frame().segment_count() > 0);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod effect;
pub mod error;
pub mod sequencer;
pub mod starfield;
pub mod state;

pub use clock::{FrameClock, Tick};
pub use color::Rgba;
pub use config::{EffectConfig, Palette};
pub use effect::{CenterGlow, Frame, TickOutcome, WarpEffect, WarpZone};
pub use error::{WarpError, WarpResult};
pub use sequencer::{Phase, Sequencer};
pub use starfield::{BirthAccumulator, ColorClass, FieldParams, SpawnStats, Star, StarField};
pub use state::{EffectState, Viewport};

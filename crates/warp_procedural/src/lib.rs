//! # WARP Procedural Generation
//!
//! Deterministic noise for the warp effect's camera shake.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The permutation table is fixed data, identical on
//!    every platform, so every build produces the same shake curve
//! 2. **Pure**: No state, no allocation, no initialization
//! 3. **Bounded**: Output always lies in `[-1, 1]`
//!
//! ## Core Components
//!
//! - `noise_1d`: 1D gradient noise, zero at every integer
//! - `octave_noise`: Weighted sum of noise layers at doubling frequencies
//! - `EffectSeed`: Root seed with derivable sub-seeds for random streams
//!
//! ## Example
//!
//! ```rust
//! use warp_procedural::{noise_1d, octave_noise};
//!
//! assert_eq!(noise_1d(3.0), 0.0);
//!
//! let shake = octave_noise(4.2, 2, 1.5, 0.75);
//! assert!((-1.0..=1.0).contains(&shake));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod noise;
pub mod seed;

pub use noise::{noise_1d, octave_noise, PERMUTATION};
pub use seed::EffectSeed;

//! # WARP Core
//!
//! Frame memory for the warp starfield.
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocations in steady state** - storage grows to a high-water
//!    mark and is then reused every frame
//! 2. **Data-oriented design** - particles and segments live in contiguous arrays
//! 3. **Batch-friendly output** - every line buffer maps to one draw call
//!
//! ## Example
//!
//! ```rust
//! use warp_core::LineBatchPool;
//!
//! let mut pool = LineBatchPool::new();
//! pool.add_segment(0.0, 0.0, 10.0, 10.0);
//! assert_eq!(pool.segment_count(), 1);
//!
//! pool.clear();
//! assert_eq!(pool.segment_count(), 0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod memory;

pub use memory::{LineBatch, LineBatchPool, Segment, SwapArena, SEGMENTS_PER_BATCH};

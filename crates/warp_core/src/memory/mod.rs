//! # Memory Management
//!
//! Reusable storage for per-frame particle and geometry data.
//!
//! ## Design Philosophy
//!
//! Storage grows on demand and is never released during a session. Each
//! frame clears and refills it:
//! - No per-frame heap allocations once warmed up
//! - No node-based containers
//! - Predictable, flat frame cost

mod arena;
mod line_pool;

pub use arena::SwapArena;
pub use line_pool::{LineBatch, LineBatchPool, Segment, SEGMENTS_PER_BATCH};

//! # WARP
//!
//! Warp-speed starfield effect: one import path for hosts.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                         WARP EFFECT                           │
//! ├───────────────────────────────────────────────────────────────┤
//! │                                                               │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐   │
//! │  │ warp_core    │   │ warp_        │   │ warp_animation   │   │
//! │  │              │   │ procedural   │   │                  │   │
//! │  │ • Line pools │   │ • 1D noise   │   │ • Easing curves  │   │
//! │  │ • Arena      │   │ • Seeds      │   │ • Ramps          │   │
//! │  └──────┬───────┘   └──────┬───────┘   └────────┬─────────┘   │
//! │         │                  │                    │             │
//! │         └──────────────────┼────────────────────┘             │
//! │                            ▼                                  │
//! │                  ┌──────────────────┐                         │
//! │                  │ warp_effects     │                         │
//! │                  │ • StarField      │                         │
//! │                  │ • Sequencer      │                         │
//! │                  │ • WarpEffect     │                         │
//! │                  └──────────────────┘                         │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `headless`: full start/cruise/finish runs without a window

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod headless;

// Re-export the layers
pub use warp_animation as animation;
pub use warp_core as core;
pub use warp_effects as effects;
pub use warp_procedural as procedural;

// Re-export commonly used types
pub use headless::{HeadlessConfig, HeadlessReport, HeadlessRunner, PhaseReport};
pub use warp_effects::{
    EffectConfig, Frame, FrameClock, Phase, Rgba, TickOutcome, WarpEffect, WarpError, WarpResult,
};
pub use warp_procedural::EffectSeed;

//! # Warp Effect
//!
//! The host-facing facade. Owns the sequencer, the star field and all
//! scalar state; the host drives it with ticks and reads a [`Frame`] back.
//!
//! ## Frame Flow
//!
//! ```text
//! host clock ──► on_tick(elapsed, delta)
//!                  ├─ Sequencer::advance     (scalars from ramps)
//!                  ├─ StarField::step        (motion, births, shake, lines)
//!                  └─ Sequencer::complete_if_drained
//! renderer   ◄── frame()                     (borrowed pools + paints)
//! ```

use warp_core::LineBatchPool;

use crate::color::Rgba;
use crate::config::EffectConfig;
use crate::constants::{
    CENTER_GRADIENT_STOPS, MAX_FRAME_DELTA_MS, SLOW_DOWN_PURGE_DISTANCE, WARP_ZONE_GRADIENT_STOPS,
};
use crate::error::WarpResult;
use crate::sequencer::{Phase, Sequencer};
use crate::starfield::StarField;
use crate::state::{EffectState, Viewport};

/// What the host should do with its clock after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking.
    Continue,
    /// The effect is idle; the clock can be stopped.
    Stopped,
}

/// Radial gradient behind the stars at the center of the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterGlow {
    /// Gradient radius in pixels.
    pub radius: f32,
    /// Gradient stops.
    pub stops: [f32; 3],
    /// Colors at each stop.
    pub colors: [Rgba; 3],
    /// Paint alpha in `[0, 1]`.
    pub alpha: f32,
}

/// Full-view radial overlay animated at start and finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpZone {
    /// Scale applied around the view center.
    pub scale: f32,
    /// Paint alpha in `[0, 1]`, global alpha included.
    pub alpha: f32,
    /// Unscaled gradient radius in pixels.
    pub radius: f32,
    /// Gradient stops.
    pub stops: [f32; 6],
    /// Colors at each stop.
    pub colors: [Rgba; 6],
}

impl WarpZone {
    /// Returns true if the overlay should be drawn at all.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.scale > 0.0 && self.alpha > 0.0
    }
}

/// Everything the renderer needs to draw one frame.
///
/// Star segments are relative to [`Frame::origin`].
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// View center plus camera offset, in pixels.
    pub origin: (f32, f32),
    /// Camera offset in pixels.
    pub camera_offset: (f32, f32),
    /// Alpha applied to every component.
    pub global_alpha: f32,
    /// Background fill, global alpha applied.
    pub background: Rgba,
    /// Paint of white stars, global alpha applied.
    pub white: Rgba,
    /// Paint of blue stars, global alpha applied.
    pub blue: Rgba,
    /// Line stroke width in pixels.
    pub stroke_width: f32,
    /// Segments of white stars.
    pub white_lines: &'a LineBatchPool,
    /// Segments of blue stars.
    pub blue_lines: &'a LineBatchPool,
    /// Center glow.
    pub center_glow: CenterGlow,
    /// Warp-zone overlay.
    pub warp_zone: WarpZone,
}

impl Frame<'_> {
    /// Total number of star segments in the frame.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.white_lines.segment_count() + self.blue_lines.segment_count()
    }
}

/// The warp-speed starfield effect.
pub struct WarpEffect {
    /// Configuration.
    config: EffectConfig,
    /// Phase machine.
    sequencer: Sequencer,
    /// Star simulation.
    field: StarField,
    /// Shared scalars.
    state: EffectState,
    /// Current drawing surface.
    viewport: Viewport,
    /// Ticks are ignored while paused.
    paused: bool,
    /// Last elapsed time reported by the host clock.
    host_elapsed_ms: i64,
}

impl WarpEffect {
    /// Creates an idle effect with an empty viewport.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::InvalidConfig`](crate::WarpError::InvalidConfig)
    /// if `config` fails [`EffectConfig::validate`].
    pub fn new(config: EffectConfig) -> WarpResult<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: EffectConfig) -> Self {
        let field = StarField::new(config.effect_seed()).with_base_line_length(config.base_line_length());

        Self {
            config,
            sequencer: Sequencer::new(),
            field,
            state: EffectState::default(),
            viewport: Viewport::default(),
            paused: false,
            host_elapsed_ms: 0,
        }
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Returns the current phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    /// Returns true unless idle.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.sequencer.is_running()
    }

    /// Returns true while paused.
    #[inline]
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Effect time since the last start or restart.
    #[inline]
    #[must_use]
    pub const fn elapsed_ms(&self) -> i64 {
        self.sequencer.elapsed_ms()
    }

    /// Last elapsed time reported by the host clock.
    #[inline]
    #[must_use]
    pub const fn host_elapsed_ms(&self) -> i64 {
        self.host_elapsed_ms
    }

    /// Returns the scalar state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &EffectState {
        &self.state
    }

    /// Returns the current viewport.
    #[inline]
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the star field.
    #[inline]
    #[must_use]
    pub const fn field(&self) -> &StarField {
        &self.field
    }

    /// Starts the effect from an empty screen.
    pub fn start(&mut self) {
        self.field.clear();
        self.field.reset_accumulators();
        self.paused = false;
        self.sequencer.start(&mut self.state, self.viewport);
    }

    /// Restarts the effect at cruise speed with the screen already full of
    /// stars.
    pub fn restart_with_full_field(&mut self) {
        let center = self.config.full_field_center_stars;
        let random = self.config.full_field_random_stars;

        self.paused = false;
        self.sequencer.restart_at_cruise(&mut self.state, self.viewport);
        self.field.reset_accumulators();
        self.field.seed_full_field(center, random);
        self.field.project(&self.state.field_params(), self.viewport);

        tracing::debug!(
            "Full-field restart: {} center + {} field stars",
            center,
            random
        );
    }

    /// Finishes the effect. Shake decays and the warp zone fades over
    /// `fade_ms`; the effect goes idle once every star has left the screen.
    ///
    /// Ignored while idle.
    pub fn finish(&mut self, fade_ms: i64) {
        if !self.sequencer.finish(fade_ms, &mut self.state, self.viewport) {
            tracing::debug!("Finish requested while idle, ignoring");
            return;
        }

        let purged = self.field.purge_below(SLOW_DOWN_PURGE_DISTANCE);
        self.field.project(&self.state.field_params(), self.viewport);
        tracing::debug!(
            "Finishing over {}ms, purged {} slow stars, {} left",
            fade_ms,
            purged,
            self.field.len()
        );
    }

    /// Pauses a running effect. Ticks are ignored until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        if self.sequencer.is_running() && !self.paused {
            self.paused = true;
            tracing::debug!("Warp effect paused at {}ms", self.elapsed_ms());
        }
    }

    /// Resumes a paused effect where it left off.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            tracing::debug!("Warp effect resumed at {}ms", self.elapsed_ms());
        }
    }

    /// Sets the alpha applied to every drawn component.
    ///
    /// Clamped to `[0, 1]`; non-finite values are ignored.
    pub fn set_global_alpha(&mut self, alpha: f32) {
        if !alpha.is_finite() {
            tracing::warn!("Ignoring non-finite global alpha {}", alpha);
            return;
        }
        self.state.global_alpha = alpha.clamp(0.0, 1.0);
    }

    /// Sets the drawing surface size. Negative sides become 0.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if !(width >= 0.0 && height >= 0.0) {
            tracing::warn!("Clamping invalid viewport {}x{}", width, height);
        }

        self.viewport = Viewport::new(width, height);
        self.sequencer.refresh_viewport(&mut self.state, self.viewport);
        self.field.project(&self.state.field_params(), self.viewport);

        tracing::debug!(
            "Viewport changed to {}x{}",
            self.viewport.width(),
            self.viewport.height()
        );
    }

    /// Advances the effect by one clock tick.
    ///
    /// Ignored while idle or paused. Negative deltas count as 0 and deltas
    /// above [`MAX_FRAME_DELTA_MS`] are cut to it.
    pub fn on_tick(&mut self, elapsed_ms: i64, delta_ms: i64) -> TickOutcome {
        if !self.sequencer.is_running() {
            return TickOutcome::Stopped;
        }
        if self.paused {
            return TickOutcome::Continue;
        }

        let delta_ms = if delta_ms < 0 {
            tracing::warn!("Clamping negative tick delta {}ms", delta_ms);
            0
        } else if delta_ms > MAX_FRAME_DELTA_MS {
            tracing::debug!(
                "Cutting tick delta {}ms to {}ms",
                delta_ms,
                MAX_FRAME_DELTA_MS
            );
            MAX_FRAME_DELTA_MS
        } else {
            delta_ms
        };
        self.host_elapsed_ms = elapsed_ms;

        self.sequencer.advance(delta_ms, &mut self.state, self.viewport);
        self.field.step(delta_ms, &self.state.field_params(), self.viewport);
        self.state.camera_offset = self.field.camera_offset();

        if self.sequencer.complete_if_drained(self.field.is_empty(), &mut self.state) {
            return TickOutcome::Stopped;
        }
        TickOutcome::Continue
    }

    /// Renderer output for the current state.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        let palette = &self.config.palette;
        let alpha = self.state.global_alpha;
        let (dx, dy) = self.state.camera_offset;

        Frame {
            origin: (
                self.viewport.width() / 2.0 + dx,
                self.viewport.height() / 2.0 + dy,
            ),
            camera_offset: (dx, dy),
            global_alpha: alpha,
            background: palette.background.with_alpha(alpha),
            white: palette.white.with_alpha(alpha),
            blue: palette.blue.with_alpha(alpha),
            stroke_width: self.config.stroke_width(),
            white_lines: self.field.white_lines(),
            blue_lines: self.field.blue_lines(),
            center_glow: CenterGlow {
                radius: self.viewport.center_radius(),
                stops: CENTER_GRADIENT_STOPS,
                colors: palette.center_gradient,
                alpha,
            },
            warp_zone: WarpZone {
                scale: self.state.warp_zone_scale,
                alpha: self.state.warp_zone_alpha * alpha,
                radius: self.viewport.warp_zone_radius(),
                stops: WARP_ZONE_GRADIENT_STOPS,
                colors: palette.warp_zone_gradient,
            },
        }
    }
}

impl Default for WarpEffect {
    fn default() -> Self {
        Self::with_valid_config(EffectConfig::default())
    }
}

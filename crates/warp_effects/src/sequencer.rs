//! # Animation Sequencer
//!
//! Drives the effect's scalars through its phases.
//!
//! ## Phases
//!
//! - **IDLE**: nothing ticks.
//! - **STARTING**: birth rates, speed, shake and the warp zone ramp up over
//!   two seconds. Speed, shake and warp zone wait for the first second.
//! - **CRUISING**: everything holds at full speed.
//! - **FINISHING**: births stop, shake decays and the warp zone stretches
//!   out. Ends once the last star has left the screen.
//!
//! All ramps are sampled with effect time, the sum of accepted tick deltas
//! since the last start. Pausing the ticks pauses every ramp with them.

use warp_animation::{Easing, Ramp};

use crate::constants::{
    BIRTH_RATE_ACCELERATION_MS, FULL_BIRTH_RATE_CENTER, FULL_BIRTH_RATE_RANDOM, FULL_SPEED,
    MAX_WARP_ZONE_SCALE, SPEED_UP_DELAY_MS, SPEED_UP_MS, START_BIRTH_RATE_CENTER,
    START_BIRTH_RATE_RANDOM, START_SPEED,
};
use crate::state::{EffectState, Viewport};

/// Phase of the effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Not running.
    #[default]
    Idle,
    /// Ramping up after a start request.
    Starting,
    /// Holding at full speed.
    Cruising,
    /// Draining after a finish request.
    Finishing,
}

impl Phase {
    /// Upper-case name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Starting => "STARTING",
            Self::Cruising => "CRUISING",
            Self::Finishing => "FINISHING",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ramps of the start sequence. All sample `0 -> 1`.
#[derive(Debug, Clone, Copy)]
struct StartRamps {
    birth_rate: Ramp,
    speed: Ramp,
    warp_zone: Ramp,
}

impl StartRamps {
    fn new() -> Self {
        Self {
            birth_rate: Ramp::new(BIRTH_RATE_ACCELERATION_MS, 0.0, 1.0, Easing::Accelerate),
            speed: Ramp::new(SPEED_UP_MS, 0.0, 1.0, Easing::AccelerateDecelerate)
                .with_delay(SPEED_UP_DELAY_MS),
            warp_zone: Ramp::new(SPEED_UP_MS, 0.0, 1.0, Easing::AccelerateDecelerate)
                .with_delay(SPEED_UP_DELAY_MS),
        }
    }

    fn is_complete(&self, elapsed_ms: i64) -> bool {
        self.birth_rate.is_complete(elapsed_ms)
            && self.speed.is_complete(elapsed_ms)
            && self.warp_zone.is_complete(elapsed_ms)
    }
}

/// Ramps of the finish sequence.
#[derive(Debug, Clone, Copy)]
struct FinishRamps {
    /// Normalized shake level, from its value at the finish request to 0.
    shake: Ramp,
    /// Warp-zone stretch, `0 -> 1`.
    warp_zone: Ramp,
}

/// The effect's phase machine.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    /// Current phase.
    phase: Phase,
    /// Effect time since the last start or restart.
    elapsed_ms: i64,
    /// Shake amplitude as a fraction of the full shake.
    shake_level: f32,
    /// Active start ramps.
    start: Option<StartRamps>,
    /// Active finish ramps.
    finish: Option<FinishRamps>,
}

impl Sequencer {
    /// Creates an idle sequencer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true unless idle.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Effect time since the last start or restart.
    #[inline]
    #[must_use]
    pub const fn elapsed_ms(&self) -> i64 {
        self.elapsed_ms
    }

    /// Shake amplitude as a fraction of the full shake.
    #[inline]
    #[must_use]
    pub const fn shake_level(&self) -> f32 {
        self.shake_level
    }

    /// Begins the start sequence from the start values.
    pub fn start(&mut self, state: &mut EffectState, viewport: Viewport) {
        self.elapsed_ms = 0;
        self.shake_level = 0.0;
        self.start = Some(StartRamps::new());
        self.finish = None;

        state.speed = START_SPEED;
        state.shake_amplitude = 0.0;
        state.warp_zone_alpha = 1.0;
        self.transition_to(Phase::Starting);
        self.apply(state, viewport);
    }

    /// Jumps straight to cruise values, skipping every ramp.
    pub fn restart_at_cruise(&mut self, state: &mut EffectState, viewport: Viewport) {
        self.elapsed_ms = 0;
        self.start = None;
        self.finish = None;
        self.transition_to(Phase::Cruising);
        self.apply(state, viewport);
    }

    /// Begins the finish sequence. The shake decays over `fade_ms`.
    ///
    /// Returns false, changing nothing, while idle.
    pub fn finish(&mut self, fade_ms: i64, state: &mut EffectState, viewport: Viewport) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }

        self.start = None;
        self.finish = Some(FinishRamps {
            shake: Ramp::new(fade_ms, self.shake_level, 0.0, Easing::AccelerateDecelerate)
                .starting_at(self.elapsed_ms),
            warp_zone: Ramp::new(fade_ms, 0.0, 1.0, Easing::Accelerate).starting_at(self.elapsed_ms),
        });
        self.transition_to(Phase::Finishing);
        self.apply(state, viewport);
        true
    }

    /// Advances effect time by `delta_ms` and updates `state`.
    ///
    /// Moves from STARTING to CRUISING once every start ramp has completed.
    /// Does nothing while idle.
    pub fn advance(&mut self, delta_ms: i64, state: &mut EffectState, viewport: Viewport) {
        if self.phase == Phase::Idle {
            return;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms.max(0));

        if self.phase == Phase::Starting
            && self
                .start
                .is_some_and(|ramps| ramps.is_complete(self.elapsed_ms))
        {
            self.start = None;
            self.transition_to(Phase::Cruising);
        }

        self.apply(state, viewport);
    }

    /// Ends a finishing effect once no star is left and the shake has
    /// decayed.
    ///
    /// Returns true if the effect just went idle.
    pub fn complete_if_drained(&mut self, field_empty: bool, state: &mut EffectState) -> bool {
        if self.phase != Phase::Finishing || !field_empty {
            return false;
        }

        let shake_done = self
            .finish
            .map_or(true, |ramps| ramps.shake.is_complete(self.elapsed_ms));
        if !shake_done {
            return false;
        }

        self.finish = None;
        self.shake_level = 0.0;
        state.shake_amplitude = 0.0;
        state.camera_offset = (0.0, 0.0);
        self.transition_to(Phase::Idle);
        tracing::info!("Warp effect finished after {}ms", self.elapsed_ms);
        true
    }

    /// Recomputes the viewport dependent scalars after a resize.
    pub fn refresh_viewport(&self, state: &mut EffectState, viewport: Viewport) {
        if self.phase != Phase::Idle {
            state.shake_amplitude = viewport.full_shake() * self.shake_level;
        }
    }

    /// Writes the scalars of the current phase at the current time.
    fn apply(&mut self, state: &mut EffectState, viewport: Viewport) {
        let t = self.elapsed_ms;

        match self.phase {
            Phase::Idle => {}
            Phase::Starting => {
                let Some(ramps) = self.start else {
                    return;
                };

                let birth = ramps.birth_rate.sample(t);
                state.birth_rate_center =
                    START_BIRTH_RATE_CENTER + (FULL_BIRTH_RATE_CENTER - START_BIRTH_RATE_CENTER) * birth;
                state.birth_rate_random =
                    START_BIRTH_RATE_RANDOM + (FULL_BIRTH_RATE_RANDOM - START_BIRTH_RATE_RANDOM) * birth;

                let speed = ramps.speed.sample(t);
                state.speed = START_SPEED + (FULL_SPEED - START_SPEED) * speed;
                self.shake_level = speed;

                state.warp_zone_scale = ramps.warp_zone.sample(t);
                state.warp_zone_alpha = 1.0;
            }
            Phase::Cruising => {
                state.speed = FULL_SPEED;
                state.birth_rate_center = FULL_BIRTH_RATE_CENTER;
                state.birth_rate_random = FULL_BIRTH_RATE_RANDOM;
                self.shake_level = 1.0;
                state.warp_zone_scale = 1.0;
                state.warp_zone_alpha = 1.0;
            }
            Phase::Finishing => {
                state.birth_rate_center = 0.0;
                state.birth_rate_random = 0.0;

                if let Some(ramps) = self.finish {
                    self.shake_level = ramps.shake.sample(t);

                    let stretch = ramps.warp_zone.sample(t);
                    state.warp_zone_scale = 1.0 + stretch * (MAX_WARP_ZONE_SCALE - 1.0);
                    state.warp_zone_alpha = 1.0 - stretch;
                }
            }
        }

        self.refresh_viewport(state, viewport);
    }

    /// Switches phase and logs the transition.
    fn transition_to(&mut self, phase: Phase) {
        let old = self.phase;
        self.phase = phase;

        tracing::info!(
            "Warp phase transition: {} -> {} at {}ms",
            old.name(),
            phase.name(),
            self.elapsed_ms
        );
    }
}

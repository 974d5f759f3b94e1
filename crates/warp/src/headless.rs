//! # Headless Runner
//!
//! Plays a full effect (start, cruise, finish) against a fixed-rate clock
//! without a window and collects per-phase statistics. Used by the
//! `warp_headless` binary and handy for profiling configs.

use warp_effects::constants::BIRTH_RATE_ACCELERATION_MS;
use warp_effects::{
    EffectConfig, FrameClock, Phase, SpawnStats, TickOutcome, WarpEffect, WarpResult,
};

/// Settings of a headless run.
#[derive(Clone, Debug)]
pub struct HeadlessConfig {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Milliseconds per frame.
    pub frame_ms: i64,
    /// Time spent cruising before the finish request.
    pub cruise_ms: i64,
    /// Fade duration passed to the finish request.
    pub fade_ms: i64,
    /// Give up if the finish has not drained after this long.
    pub drain_limit_ms: i64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1920.0,
            frame_ms: 16, // 60Hz
            cruise_ms: 3_000,
            fade_ms: 500,
            drain_limit_ms: 10_000,
        }
    }
}

/// Statistics of one phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseReport {
    /// The phase.
    pub phase: Phase,
    /// Frames ticked in this phase.
    pub frames: u64,
    /// Effect time spent in this phase.
    pub duration_ms: i64,
    /// Most stars alive at once.
    pub peak_stars: usize,
    /// Stars alive at the last frame of the phase.
    pub final_stars: usize,
    /// Most segments drawn in one frame.
    pub peak_segments: usize,
    /// White line batches allocated by the end of the phase.
    pub white_pools: usize,
    /// Blue line batches allocated by the end of the phase.
    pub blue_pools: usize,
}

impl PhaseReport {
    fn new(phase: Phase) -> Self {
        Self {
            phase,
            frames: 0,
            duration_ms: 0,
            peak_stars: 0,
            final_stars: 0,
            peak_segments: 0,
            white_pools: 0,
            blue_pools: 0,
        }
    }
}

/// Result of a headless run.
#[derive(Clone, Debug, Default)]
pub struct HeadlessReport {
    /// One entry per phase, in the order they were entered.
    pub phases: Vec<PhaseReport>,
    /// Lifetime spawn counters of the field.
    pub spawned: SpawnStats,
    /// True if the effect went idle on its own.
    pub finished: bool,
    /// Total effect time.
    pub elapsed_ms: i64,
}

/// Drives one [`WarpEffect`] through a full run.
pub struct HeadlessRunner {
    effect: WarpEffect,
    clock: FrameClock,
    config: HeadlessConfig,
    now_ms: i64,
    report: HeadlessReport,
}

impl HeadlessRunner {
    /// Creates a runner for an effect built from `effect_config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `effect_config` is invalid.
    pub fn new(effect_config: EffectConfig, config: HeadlessConfig) -> WarpResult<Self> {
        let mut effect = WarpEffect::new(effect_config)?;
        effect.set_viewport(config.width, config.height);

        Ok(Self {
            effect,
            clock: FrameClock::new(),
            config,
            now_ms: 0,
            report: HeadlessReport::default(),
        })
    }

    /// Runs start, cruise and finish and returns the statistics.
    #[must_use]
    pub fn run(mut self) -> HeadlessReport {
        let frame_ms = self.config.frame_ms.max(1);

        self.effect.start();
        self.clock.start(self.now_ms);

        // Start ramps, with headroom in case of a slow clock
        let mut budget = 2 * BIRTH_RATE_ACCELERATION_MS;
        while self.effect.phase() == Phase::Starting && budget > 0 {
            self.frame(frame_ms);
            budget -= frame_ms;
        }

        let mut cruise = self.config.cruise_ms;
        while cruise > 0 {
            self.frame(frame_ms);
            cruise -= frame_ms;
        }

        self.effect.finish(self.config.fade_ms);
        let mut budget = self.config.drain_limit_ms;
        while budget > 0 {
            if self.frame(frame_ms) == TickOutcome::Stopped {
                self.report.finished = true;
                break;
            }
            budget -= frame_ms;
        }

        if !self.report.finished {
            tracing::warn!(
                "Effect still has {} stars after {}ms of finishing",
                self.effect.field().len(),
                self.config.drain_limit_ms
            );
        }

        self.report.spawned = self.effect.field().stats();
        self.report.elapsed_ms = self.effect.elapsed_ms();
        self.report
    }

    /// Ticks one frame and records it under the phase it ran in.
    fn frame(&mut self, frame_ms: i64) -> TickOutcome {
        let phase = self.effect.phase();
        self.now_ms += frame_ms;

        let Some(tick) = self.clock.advance(self.now_ms) else {
            return TickOutcome::Stopped;
        };
        let outcome = self.effect.on_tick(tick.elapsed_ms, tick.delta_ms);

        if self.report.phases.last().map(|r| r.phase) != Some(phase) {
            self.report.phases.push(PhaseReport::new(phase));
        }

        let frame = self.effect.frame();
        let stars = self.effect.field().len();
        if let Some(entry) = self.report.phases.last_mut() {
            entry.frames += 1;
            entry.duration_ms += tick.delta_ms;
            entry.peak_stars = entry.peak_stars.max(stars);
            entry.final_stars = stars;
            entry.peak_segments = entry.peak_segments.max(frame.segment_count());
            entry.white_pools = frame.white_lines.pool_count();
            entry.blue_pools = frame.blue_lines.pool_count();
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short() -> HeadlessConfig {
        HeadlessConfig {
            cruise_ms: 800,
            ..HeadlessConfig::default()
        }
    }

    #[test]
    fn test_run_visits_every_phase() {
        let config = EffectConfig {
            seed: Some(42),
            ..EffectConfig::default()
        };
        let report = HeadlessRunner::new(config, short()).unwrap().run();

        let phases: Vec<Phase> = report.phases.iter().map(|r| r.phase).collect();
        assert_eq!(phases, vec![Phase::Starting, Phase::Cruising, Phase::Finishing]);
        assert!(report.finished);
        assert!(report.spawned.spawned_total() > 0);

        let starting = report.phases[0];
        assert_eq!(starting.duration_ms, 2_000);
        assert_eq!(starting.frames, 125);

        let finishing = report.phases[2];
        assert_eq!(finishing.final_stars, 0);
        assert!(finishing.duration_ms >= 500);
    }

    #[test]
    fn test_empty_viewport_still_finishes() {
        let config = EffectConfig {
            seed: Some(1),
            ..EffectConfig::default()
        };
        let headless = HeadlessConfig {
            width: 0.0,
            height: 0.0,
            ..short()
        };
        let report = HeadlessRunner::new(config, headless).unwrap().run();

        assert!(report.finished);
        assert!(report.phases.iter().all(|r| r.peak_segments == 0));
    }
}

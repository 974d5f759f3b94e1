//! # Warp Lifecycle Integration Test
//!
//! Drives whole effects through start, cruise and finish with a 60 Hz
//! clock and checks what the renderer would see.

use warp_effects::constants::{
    BIRTH_DISTANCE, CENTER_BIRTH_MIN_DISTANCE, FULL_BIRTH_RATE_CENTER, FULL_BIRTH_RATE_RANDOM,
    FULL_SPEED, SLOW_DOWN_PURGE_DISTANCE,
};
use warp_effects::{EffectConfig, FrameClock, Phase, TickOutcome, WarpEffect};

const FRAME_MS: i64 = 16;

fn effect(seed: u64) -> WarpEffect {
    let mut effect = WarpEffect::new(EffectConfig {
        seed: Some(seed),
        ..EffectConfig::default()
    })
    .unwrap();
    effect.set_viewport(1080.0, 1920.0);
    effect
}

/// Ticks `ms` of effect time, checking the distance invariant every frame.
fn run(effect: &mut WarpEffect, clock: &mut FrameClock, now: &mut i64, ms: i64) -> TickOutcome {
    let mut outcome = TickOutcome::Continue;
    for _ in 0..ms / FRAME_MS {
        *now += FRAME_MS;
        let Some(tick) = clock.advance(*now) else {
            break;
        };
        outcome = effect.on_tick(tick.elapsed_ms, tick.delta_ms);
        assert_geometry_matches_stars(effect);
        if outcome == TickOutcome::Stopped {
            break;
        }
    }
    outcome
}

fn assert_geometry_matches_stars(effect: &WarpEffect) {
    let stars = effect.field().stars();
    for star in stars {
        assert!(
            (0.0..=1.0).contains(&star.distance),
            "star at distance {} survived the tick",
            star.distance
        );
    }

    let drawable = stars.iter().filter(|s| !s.is_born()).count();
    assert_eq!(effect.frame().segment_count(), drawable);
}

/// Test: two seconds of 16ms ticks reach cruise with stars on screen.
#[test]
fn test_start_reaches_cruise_in_two_seconds() {
    let mut effect = effect(42);
    let mut clock = FrameClock::new();
    let mut now = 10_000;

    effect.start();
    clock.start(now);
    assert_eq!(effect.phase(), Phase::Starting);

    let outcome = run(&mut effect, &mut clock, &mut now, 2_000);

    assert_eq!(outcome, TickOutcome::Continue);
    assert_eq!(effect.elapsed_ms(), 2_000);
    assert_eq!(effect.phase(), Phase::Cruising);
    assert!((effect.state().birth_rate_center - FULL_BIRTH_RATE_CENTER).abs() < 1e-6);
    assert!((effect.state().birth_rate_random - FULL_BIRTH_RATE_RANDOM).abs() < 1e-6);
    assert_eq!(effect.state().speed, FULL_SPEED);
    assert!(!effect.field().is_empty());
    assert!(effect.frame().warp_zone.is_visible());

    println!(
        "After start: {} stars, {} segments, spawned {}",
        effect.field().len(),
        effect.frame().segment_count(),
        effect.field().stats().spawned_total()
    );
}

/// Test: a full-field restart seeds exactly the configured stars.
#[test]
fn test_restart_seeds_full_field() {
    let mut effect = effect(7);
    effect.restart_with_full_field();

    assert_eq!(effect.phase(), Phase::Cruising);
    assert_eq!(effect.field().len(), 650);

    let stars = effect.field().stars();
    let center: Vec<_> = stars.iter().filter(|s| s.distance < BIRTH_DISTANCE).collect();
    assert_eq!(center.len(), 50);
    for star in &center {
        assert!(star.distance >= CENTER_BIRTH_MIN_DISTANCE);
    }

    // decelerate(U(0.04, 0.8)) lies in [0.0784, 0.96)
    for star in stars.iter().filter(|s| s.distance >= BIRTH_DISTANCE) {
        assert!(star.distance >= 0.0784 - 1e-6 && star.distance < 0.96 + 1e-6);
    }

    assert_eq!(effect.state().speed, FULL_SPEED);
    assert_eq!(effect.state().birth_rate_center, FULL_BIRTH_RATE_CENTER);
    assert!((effect.state().shake_amplitude - 54.0).abs() < 1e-3);
    assert_eq!(effect.state().warp_zone_scale, 1.0);
    assert_eq!(effect.state().warp_zone_alpha, 1.0);
}

/// Test: finishing drains every star and then stops the clock.
#[test]
fn test_finish_drains_to_idle() {
    let mut effect = effect(99);
    let mut clock = FrameClock::new();
    let mut now = 0;

    effect.restart_with_full_field();
    clock.start(now);
    assert!(effect.field().len() >= 500, "only {} stars", effect.field().len());

    let finish_at = effect.elapsed_ms();
    effect.finish(500);
    assert!(effect.field().len() < 650, "nothing was purged");
    assert_eq!(effect.phase(), Phase::Finishing);
    assert!(effect
        .field()
        .stars()
        .iter()
        .all(|s| s.distance >= SLOW_DOWN_PURGE_DISTANCE));

    let outcome = run(&mut effect, &mut clock, &mut now, 5_000);

    assert_eq!(outcome, TickOutcome::Stopped);
    assert_eq!(effect.phase(), Phase::Idle);
    assert!(effect.field().is_empty());
    assert!(effect.elapsed_ms() - finish_at >= 500);
    assert_eq!(effect.state().shake_amplitude, 0.0);
    assert_eq!(effect.frame().camera_offset, (0.0, 0.0));
    assert!(!effect.frame().warp_zone.is_visible());

    // Idle from here on
    assert_eq!(effect.on_tick(now + FRAME_MS, FRAME_MS), TickOutcome::Stopped);
}

/// Test: no new stars are born while finishing.
#[test]
fn test_finish_stops_births() {
    let mut effect = effect(5);
    let mut clock = FrameClock::new();
    let mut now = 0;

    effect.start();
    clock.start(now);
    run(&mut effect, &mut clock, &mut now, 2_500);

    effect.finish(300);
    let spawned = effect.field().stats().spawned_total();
    run(&mut effect, &mut clock, &mut now, 200);

    assert_eq!(effect.field().stats().spawned_total(), spawned);
}

/// Test: a paused effect resumes exactly where it left off.
#[test]
fn test_pause_resume_is_seamless() {
    let mut reference = effect(11);
    let mut paused = effect(11);
    reference.start();
    paused.start();

    for i in 1..=60 {
        reference.on_tick(i * FRAME_MS, FRAME_MS);
        paused.on_tick(i * FRAME_MS, FRAME_MS);
    }

    paused.pause();
    for i in 61..=120 {
        assert_eq!(paused.on_tick(i * FRAME_MS, FRAME_MS), TickOutcome::Continue);
    }
    paused.resume();

    for i in 1..=100 {
        reference.on_tick((60 + i) * FRAME_MS, FRAME_MS);
        paused.on_tick((120 + i) * FRAME_MS, FRAME_MS);
    }

    assert_eq!(reference.elapsed_ms(), paused.elapsed_ms());
    assert_eq!(reference.phase(), paused.phase());
    assert_eq!(reference.state(), paused.state());
    assert_eq!(reference.field().stars(), paused.field().stars());
}

/// Test: the same seed renders the same frames.
#[test]
fn test_seeded_effects_are_reproducible() {
    let mut a = effect(2024);
    let mut b = effect(2024);
    a.start();
    b.start();

    for i in 1..=200 {
        a.on_tick(i * FRAME_MS, FRAME_MS);
        b.on_tick(i * FRAME_MS, FRAME_MS);
    }

    let (fa, fb) = (a.frame(), b.frame());
    assert_eq!(fa.camera_offset, fb.camera_offset);
    assert_eq!(fa.segment_count(), fb.segment_count());

    let coords_a: Vec<f32> = fa.white_lines.batches().flat_map(|batch| batch.coordinates().to_vec()).collect();
    let coords_b: Vec<f32> = fb.white_lines.batches().flat_map(|batch| batch.coordinates().to_vec()).collect();
    assert_eq!(coords_a, coords_b);
}

/// Test: starting again wipes the previous run.
#[test]
fn test_start_clears_previous_run() {
    let mut effect = effect(3);
    effect.restart_with_full_field();
    effect.on_tick(16, 16);

    effect.start();

    assert!(effect.field().is_empty());
    assert_eq!(effect.elapsed_ms(), 0);
    assert_eq!(effect.phase(), Phase::Starting);
}

//! # WARP Headless Runner
//!
//! Plays one full warp effect at 60Hz over a 1080x1920 viewport and prints
//! what a renderer would have been asked to draw.
//!
//! ```bash
//! # Default config
//! ./warp_headless
//!
//! # Custom palette, density and seed
//! ./warp_headless warp.toml
//! ```

use std::process::ExitCode;

use warp::{EffectConfig, HeadlessConfig, HeadlessRunner};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    println!("═══════════════════════════════════════════════════════════════════");
    println!("                    WARP HEADLESS v{}", env!("CARGO_PKG_VERSION"));
    println!("═══════════════════════════════════════════════════════════════════");
    println!();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            println!("  Config:   {path}");
            match EffectConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("  ✗ FATAL: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => {
            println!("  Config:   defaults");
            EffectConfig::default()
        }
    };

    let headless = HeadlessConfig::default();
    let seed = config.effect_seed();
    let config = EffectConfig {
        seed: Some(seed.value()),
        ..config
    };

    println!("  Seed:     {}", seed.value());
    println!("  Density:  {}", config.density);
    println!(
        "  Viewport: {}x{} @ {}ms/frame",
        headless.width, headless.height, headless.frame_ms
    );
    println!();

    let report = match HeadlessRunner::new(config, headless) {
        Ok(runner) => runner.run(),
        Err(e) => {
            eprintln!("  ✗ FATAL: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "  {:<10} {:>7} {:>9} {:>11} {:>11} {:>13}",
        "PHASE", "FRAMES", "TIME", "PEAK STARS", "PEAK LINES", "POOLS (W/B)"
    );
    for phase in &report.phases {
        println!(
            "  {:<10} {:>7} {:>7}ms {:>11} {:>11} {:>8}/{:<4}",
            phase.phase.name(),
            phase.frames,
            phase.duration_ms,
            phase.peak_stars,
            phase.peak_segments,
            phase.white_pools,
            phase.blue_pools
        );
    }
    println!();
    println!(
        "  Spawned:  {} ({} center, {} field)",
        report.spawned.spawned_total(),
        report.spawned.spawned_center,
        report.spawned.spawned_field
    );
    println!("  Retired:  {}", report.spawned.retired);
    println!("  Elapsed:  {}ms", report.elapsed_ms);

    if report.finished {
        println!("  ✓ Effect drained and stopped");
        ExitCode::SUCCESS
    } else {
        eprintln!("  ✗ Effect did not drain in time");
        ExitCode::FAILURE
    }
}

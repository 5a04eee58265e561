#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # LED Cube
//!
//! The animation engine of a 5×5×5 single-colour LED cube.
//!
//! This crate keeps an in-memory model of which voxels are lit, runs a catalogue of
//! procedurally generated light effects over it, and hands a finished frame to the
//! hardware scanning layer once per tick.
//!
//! ## Key Modules
//!
//! * `core` - The clock, random source and frame sink the engine is driven through
//! * `engine_state` - The voxel model, the effects and the scheduler
//! * `config` - Run-time settings loaded from JSON
//!
//! ## Architecture
//!
//! The engine is a plain value advanced synchronously:
//! * The cube is a 5×5 grid of 5-bit column masks, owned by the effect engine
//! * Each effect is a small state machine stepped on a fixed tick period
//! * The scheduler moves through a configurable cycle of effects on a fixed interval
//! * Time, randomness and frame output are collaborators passed in on every call
//!
//! ## Usage
//!
//! ```rust
//! use led_cube::config::CubeConfig;
//! use led_cube::core::{FastRandom, LoggingFrameSink, MonotonicClock};
//! use led_cube::engine_state::CubeEngine;
//!
//! let clock = MonotonicClock::new();
//! let mut engine = CubeEngine::from_config(&CubeConfig::default(), &clock).unwrap();
//! engine.render_once(&clock, &mut FastRandom::new(), &mut LoggingFrameSink::new());
//! ```

use std::time::Duration;

use log::{error, info};

pub mod config;
pub mod core;
pub mod engine_state;

use crate::config::CubeConfig;
use crate::core::{FastRandom, LoggingFrameSink, MonotonicClock};
use crate::engine_state::CubeEngine;

/// Runs the cube forever on the native clock, logging frames instead of scanning them
/// out.
///
/// Configuration comes from the file named by `LED_CUBE_CONFIG`, or the defaults.
/// Exits the process with status 1 if the configuration is invalid.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match CubeConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let clock = MonotonicClock::new();
    let mut rng = match config.seed {
        Some(seed) => FastRandom::seeded(seed),
        None => FastRandom::new(),
    };
    let mut sink = LoggingFrameSink::new();

    let mut engine = match CubeEngine::from_config(&config, &clock) {
        Ok(engine) => engine,
        Err(err) => {
            error!("Failed to build engine: {}", err);
            std::process::exit(1);
        }
    };

    let pause = Duration::from_micros(config.frame_pause_micros);
    loop {
        engine.render_once(&clock, &mut rng, &mut sink);
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }
}

//! # LED Cube Entry Point
//!
//! This is the main entry point for the native build of the cube engine.
//! It simply calls into the library's `run()` function, which loads the configuration
//! and renders forever.
//!
//! ## Usage
//!
//! ```bash
//! LED_CUBE_CONFIG=cube.json RUST_LOG=debug cargo run --release
//! ```

fn main() {
    led_cube::run();
}

//! # Voxels
//!
//! The voxel state model of the LED cube and the geometry that mutates it.
//!
//! ## Architecture
//!
//! * **Cube**: The bit-packed 5×5×5 grid, its primitive set/clear/get operations and
//!   the `Frame` snapshot handed to the scanning hardware
//! * **Shapes**: Plane fills, whole-cube shifts and wireframe outlines built on the cube
//! * **Axis**: Axes and the six signed shift directions
//! * **Corner**: The eight corners of the volume and outline anchoring
//!
//! ## Bounds
//!
//! Coordinates are validated in exactly one place, inside `cube`. Everything built on
//! top inherits the same contract: writes outside the volume are dropped and reads
//! outside it are unlit.

pub mod axis;
pub mod corner;
pub mod cube;
pub mod shapes;

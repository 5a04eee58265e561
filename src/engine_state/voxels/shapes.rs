//! # Shape Operations
//!
//! Geometric operations built on top of the voxel primitives: plane fills, whole-cube
//! shifts and wireframe cube outlines.

use super::axis::{Axis, ShiftDirection};
use super::cube::{VoxelCube, COLUMN_MASK, CUBE_DIMENSION};

const DIM: usize = CUBE_DIMENSION as usize;

impl VoxelCube {
    /// Lights every voxel on the plane at `position` along `axis`.
    ///
    /// For the X and Y axes the plane's columns are fully lit and the rest of the cube is
    /// left alone. For the Z axis every column is *replaced* by the single bit
    /// `position`, so anything lit off that plane is cleared.
    ///
    /// An out of range `position` is a no-op.
    pub fn fill_plane(&mut self, axis: Axis, position: i32) {
        if !(0..CUBE_DIMENSION).contains(&position) {
            return;
        }
        let position = position as usize;
        match axis {
            Axis::X => self.columns[position] = [COLUMN_MASK; DIM],
            Axis::Y => {
                for row in self.columns.iter_mut() {
                    row[position] = COLUMN_MASK;
                }
            }
            Axis::Z => self.columns = [[1 << position; DIM]; DIM],
        }
    }

    /// Moves the whole cube contents one voxel in `direction`.
    ///
    /// Voxels pushed past the boundary are dropped and the vacated boundary plane is
    /// left unlit.
    pub fn shift(&mut self, direction: ShiftDirection) {
        match direction {
            ShiftDirection::PosX => {
                self.columns.copy_within(0..DIM - 1, 1);
                self.columns[0] = [0; DIM];
            }
            ShiftDirection::NegX => {
                self.columns.copy_within(1..DIM, 0);
                self.columns[DIM - 1] = [0; DIM];
            }
            ShiftDirection::PosY => {
                for row in self.columns.iter_mut() {
                    row.copy_within(0..DIM - 1, 1);
                    row[0] = 0;
                }
            }
            ShiftDirection::NegY => {
                for row in self.columns.iter_mut() {
                    row.copy_within(1..DIM, 0);
                    row[DIM - 1] = 0;
                }
            }
            ShiftDirection::PosZ => {
                for column in self.columns.iter_mut().flatten() {
                    *column = (*column << 1) & COLUMN_MASK;
                }
            }
            ShiftDirection::NegZ => {
                for column in self.columns.iter_mut().flatten() {
                    *column = (*column >> 1) & COLUMN_MASK;
                }
            }
        }
    }

    /// Lights the 12 edges of the axis aligned cube with its lowest corner at
    /// `(x, y, z)` and side length `size`.
    ///
    /// Only the outline is drawn, never faces or interior. Edge voxels that fall outside
    /// the volume are skipped, and a `size` of zero or less draws nothing. Any anchor
    /// and size are accepted; the work done never exceeds one pass over the volume.
    pub fn draw_hollow_cube(&mut self, x: i32, y: i32, z: i32, size: i32) {
        if size <= 0 {
            return;
        }
        let far = i64::from(size) - 1;
        let bounds = [x, y, z].map(|low| (i64::from(low), i64::from(low) + far));

        // A voxel is on an edge when it lies in the box and on at least two of its faces
        let on_edge = |point: [i32; 3]| {
            let mut faces = 0;
            for (coordinate, &(low, high)) in point.into_iter().zip(bounds.iter()) {
                let coordinate = i64::from(coordinate);
                if coordinate < low || coordinate > high {
                    return false;
                }
                if coordinate == low || coordinate == high {
                    faces += 1;
                }
            }
            faces >= 2
        };

        for px in 0..CUBE_DIMENSION {
            for py in 0..CUBE_DIMENSION {
                for pz in 0..CUBE_DIMENSION {
                    if on_edge([px, py, pz]) {
                        self.set(px, py, pz);
                    }
                }
            }
        }
    }
}

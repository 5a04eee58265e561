//! # Voxel Cube
//!
//! The bit-packed 5×5×5 model of which LEDs are lit.
//!
//! ## Memory Layout
//!
//! The cube is stored as a 5×5 grid of column masks: `columns[x][y]` is a byte whose
//! bit `z` is set exactly when voxel `(x, y, z)` is lit. Only the low five bits of each
//! byte are meaningful and the upper three are kept at zero by every writer.
//!
//! For example, a cube with only `(1, 2, 0)` and `(1, 2, 4)` lit stores
//! `columns[1][2] == 0b1_0001` and zero everywhere else.
//!
//! ## Bounds
//!
//! All coordinate validation lives in this file. Writers silently ignore coordinates
//! outside `[0, 5)` and `get` reports them as unlit, so shapes and effects may compute
//! coordinates freely without guarding each call.

use cgmath::Point3;

/// The width of the cube along every axis, in voxels.
pub const CUBE_DIMENSION: i32 = 5;
/// The number of voxels in one plane of the cube (CUBE_DIMENSION²).
pub const CUBE_PLANE_SIZE: i32 = CUBE_DIMENSION * CUBE_DIMENSION;
/// The total number of voxels in the cube (CUBE_DIMENSION³).
pub const CUBE_SIZE: i32 = CUBE_PLANE_SIZE * CUBE_DIMENSION;
/// The value of a fully lit column: one bit per meaningful z position.
pub const COLUMN_MASK: u8 = 0x1F;

const DIM: usize = CUBE_DIMENSION as usize;

/// A read-only snapshot of the cube handed to the frame sink.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute and the `Pod` derive let the snapshot be viewed as the
/// 25 raw column bytes the scanning hardware expects, without copying.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Frame {
    /// Column masks, indexed `[x][y]`, bit `z`.
    pub columns: [[u8; DIM]; DIM],
}

impl Frame {
    /// Returns the 25 column bytes in `[x][y]` order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Returns whether voxel `(x, y, z)` is lit in this snapshot.
    /// Out of range coordinates read as unlit.
    pub fn is_lit(&self, x: i32, y: i32, z: i32) -> bool {
        match locate(x, y, z) {
            Some((x, y, bit)) => self.columns[x][y] & bit != 0,
            None => false,
        }
    }

    /// Builds the transfer packets for a multiplexed scan, one per layer `x`.
    ///
    /// Byte 0 selects the layer (`1 << x`), bytes 1 to 5 are that layer's column masks
    /// for `y = 0..5`.
    pub fn layer_packets(&self) -> [[u8; DIM + 1]; DIM] {
        let mut packets = [[0u8; DIM + 1]; DIM];
        for (layer, packet) in packets.iter_mut().enumerate() {
            packet[0] = 1 << layer;
            packet[1..].copy_from_slice(&self.columns[layer]);
        }
        packets
    }
}

/// Validates a coordinate triple and resolves it to `(x, y, z bit)`.
fn locate(x: i32, y: i32, z: i32) -> Option<(usize, usize, u8)> {
    let range = 0..CUBE_DIMENSION;
    if range.contains(&x) && range.contains(&y) && range.contains(&z) {
        Some((x as usize, y as usize, 1 << z))
    } else {
        None
    }
}

/// The live voxel state of the cube.
///
/// There is exactly one cube per engine. Effects mutate it in place through the
/// primitives below and the shape operations in `shapes`.
///
/// # Examples
/// ```
/// use led_cube::engine_state::voxels::cube::VoxelCube;
///
/// let mut cube = VoxelCube::new();
/// cube.set(1, 2, 3);
/// assert!(cube.get(1, 2, 3));
/// cube.set(1, 2, 7); // ignored, z is out of range
/// assert_eq!(cube.count_lit(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoxelCube {
    pub(super) columns: [[u8; DIM]; DIM],
}

impl VoxelCube {
    /// Creates a cube with every voxel unlit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lights voxel `(x, y, z)`. No effect if any coordinate is out of range.
    pub fn set(&mut self, x: i32, y: i32, z: i32) {
        if let Some((x, y, bit)) = locate(x, y, z) {
            self.columns[x][y] |= bit;
        }
    }

    /// Unlights voxel `(x, y, z)`. No effect if any coordinate is out of range.
    pub fn clear(&mut self, x: i32, y: i32, z: i32) {
        if let Some((x, y, bit)) = locate(x, y, z) {
            self.columns[x][y] &= !bit;
        }
    }

    /// Returns whether voxel `(x, y, z)` is lit; `false` for out of range coordinates.
    pub fn get(&self, x: i32, y: i32, z: i32) -> bool {
        match locate(x, y, z) {
            Some((x, y, bit)) => self.columns[x][y] & bit != 0,
            None => false,
        }
    }

    /// [`VoxelCube::set`] taking a point.
    pub fn set_point(&mut self, point: Point3<i32>) {
        self.set(point.x, point.y, point.z);
    }

    /// [`VoxelCube::clear`] taking a point.
    pub fn clear_point(&mut self, point: Point3<i32>) {
        self.clear(point.x, point.y, point.z);
    }

    /// [`VoxelCube::get`] taking a point.
    pub fn get_point(&self, point: Point3<i32>) -> bool {
        self.get(point.x, point.y, point.z)
    }

    /// Returns the mask of column `(x, y)`, or `None` when out of range.
    pub fn column(&self, x: i32, y: i32) -> Option<u8> {
        locate(x, y, 0).map(|(x, y, _)| self.columns[x][y])
    }

    /// Replaces the mask of column `(x, y)`. Bits above z = 4 are dropped.
    pub fn set_column(&mut self, x: i32, y: i32, mask: u8) {
        if let Some((x, y, _)) = locate(x, y, 0) {
            self.columns[x][y] = mask & COLUMN_MASK;
        }
    }

    /// Unlights every voxel.
    pub fn clear_all(&mut self) {
        self.columns = [[0; DIM]; DIM];
    }

    /// Lights every voxel.
    pub fn fill_all(&mut self) {
        self.columns = [[COLUMN_MASK; DIM]; DIM];
    }

    /// Number of lit voxels.
    pub fn count_lit(&self) -> i32 {
        self.columns
            .iter()
            .flatten()
            .map(|column| column.count_ones() as i32)
            .sum()
    }

    /// Returns `true` when no voxel is lit.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().flatten().all(|&column| column == 0)
    }

    /// Returns `true` when every voxel is lit.
    pub fn is_full(&self) -> bool {
        self.columns.iter().flatten().all(|&column| column == COLUMN_MASK)
    }

    /// Finds the `n`-th voxel (zero based, scanning x, then y, then z) whose lit state
    /// equals `lit`.
    ///
    /// # Returns
    /// The voxel position, or `None` if fewer than `n + 1` voxels are in that state.
    pub fn nth_voxel(&self, lit: bool, n: i32) -> Option<Point3<i32>> {
        let mut remaining = n;
        for x in 0..CUBE_DIMENSION {
            for y in 0..CUBE_DIMENSION {
                for z in 0..CUBE_DIMENSION {
                    if self.get(x, y, z) == lit {
                        if remaining == 0 {
                            return Some(Point3::new(x, y, z));
                        }
                        remaining -= 1;
                    }
                }
            }
        }
        None
    }

    /// Takes a self-consistent snapshot for the frame sink.
    pub fn frame(&self) -> Frame {
        Frame {
            columns: self.columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_coordinates() -> impl Iterator<Item = (i32, i32, i32)> {
        (0..CUBE_DIMENSION).flat_map(|x| {
            (0..CUBE_DIMENSION).flat_map(move |y| (0..CUBE_DIMENSION).map(move |z| (x, y, z)))
        })
    }

    #[test]
    fn test_set_then_get_then_clear() {
        for (x, y, z) in all_coordinates() {
            let mut cube = VoxelCube::new();
            cube.set(x, y, z);
            assert!(cube.get(x, y, z), "({}, {}, {}) should be lit", x, y, z);
            assert_eq!(cube.count_lit(), 1);
            cube.clear(x, y, z);
            assert!(!cube.get(x, y, z), "({}, {}, {}) should be unlit", x, y, z);
            assert!(cube.is_empty());
        }
    }

    #[test]
    fn test_clear_only_touches_its_own_voxel() {
        let mut cube = VoxelCube::new();
        cube.fill_all();
        cube.clear(3, 1, 2);
        assert!(!cube.get(3, 1, 2));
        assert_eq!(cube.count_lit(), CUBE_SIZE - 1);
        cube.clear(3, 1, 2);
        assert!(!cube.get(3, 1, 2), "clearing twice must not toggle the voxel back on");
    }

    #[test]
    fn test_out_of_range_is_a_no_op() {
        let mut cube = VoxelCube::new();
        for (x, y, z) in [(0, 0, 5), (0, 0, -1), (5, 0, 0), (0, 5, 0), (-1, 2, 2), (9, 9, 9)] {
            cube.set(x, y, z);
            assert!(!cube.get(x, y, z));
        }
        assert!(cube.is_empty());

        cube.fill_all();
        for (x, y, z) in [(0, 0, 5), (0, 0, 200), (-3, 0, 0)] {
            cube.clear(x, y, z);
            assert!(!cube.get(x, y, z));
        }
        assert!(cube.is_full());
    }

    #[test]
    fn test_fill_and_clear_all() {
        let mut cube = VoxelCube::new();
        cube.fill_all();
        assert!(all_coordinates().all(|(x, y, z)| cube.get(x, y, z)));
        assert_eq!(cube.count_lit(), CUBE_SIZE);
        assert!(cube.frame().as_bytes().iter().all(|&b| b == COLUMN_MASK));

        cube.clear_all();
        assert!(all_coordinates().all(|(x, y, z)| !cube.get(x, y, z)));
    }

    #[test]
    fn test_set_column_masks_high_bits() {
        let mut cube = VoxelCube::new();
        cube.set_column(2, 2, 0xFF);
        assert_eq!(cube.column(2, 2), Some(COLUMN_MASK));
        assert_eq!(cube.column(5, 0), None);
    }

    #[test]
    fn test_nth_voxel() {
        let mut cube = VoxelCube::new();
        cube.set(0, 0, 3);
        cube.set(4, 4, 4);
        assert_eq!(cube.nth_voxel(true, 0), Some(Point3::new(0, 0, 3)));
        assert_eq!(cube.nth_voxel(true, 1), Some(Point3::new(4, 4, 4)));
        assert_eq!(cube.nth_voxel(true, 2), None);
        assert_eq!(cube.nth_voxel(false, 0), Some(Point3::new(0, 0, 0)));
        assert_eq!(cube.nth_voxel(false, 3), Some(Point3::new(0, 0, 4)));
    }

    #[test]
    fn test_layer_packets() {
        let mut cube = VoxelCube::new();
        cube.set(2, 1, 0);
        cube.set(2, 4, 4);
        let packets = cube.frame().layer_packets();
        assert_eq!(packets[2], [0x04, 0x00, 0x01, 0x00, 0x00, 0x10]);
        assert_eq!(packets[0], [0x01, 0, 0, 0, 0, 0]);
        assert_eq!(packets[4][0], 0x10);
    }

    #[test]
    fn test_frame_is_a_snapshot() {
        let mut cube = VoxelCube::new();
        cube.set(1, 1, 1);
        let frame = cube.frame();
        cube.clear_all();
        assert!(frame.is_lit(1, 1, 1));
        assert!(!frame.is_lit(1, 1, 5));
    }
}

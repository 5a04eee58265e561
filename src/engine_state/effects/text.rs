//! Scrolls a string of digits through the cube, one glyph plane at a time.
//!
//! A glyph is stamped onto the `y = 0` plane (row `i` of the glyph into layer `x = i`,
//! glyph columns along z) and every step shifts the whole cube one cell along +y. After
//! five steps the glyph has scrolled out and the next character is stamped.

use crate::core::RandomSource;
use crate::engine_state::voxels::axis::ShiftDirection;
use crate::engine_state::voxels::cube::{VoxelCube, CUBE_DIMENSION};

use super::{Effect, Transition};

/// 5×5 bitmaps of the digits 0 to 9. Each row is a five bit mask, row 0 at the top.
pub static DIGIT_GLYPHS: [[u8; 5]; 10] = [
    [0x0E, 0x11, 0x11, 0x11, 0x0E], // 0
    [0x02, 0x06, 0x0A, 0x02, 0x02], // 1
    [0x0E, 0x02, 0x0E, 0x08, 0x0E], // 2
    [0x0E, 0x02, 0x0E, 0x02, 0x0E], // 3
    [0x0A, 0x0A, 0x0E, 0x02, 0x02], // 4
    [0x0E, 0x08, 0x0E, 0x02, 0x0E], // 5
    [0x0E, 0x08, 0x0E, 0x0A, 0x0E], // 6
    [0x0E, 0x02, 0x02, 0x02, 0x02], // 7
    [0x0E, 0x0A, 0x0E, 0x0A, 0x0E], // 8
    [0x0E, 0x0A, 0x0E, 0x02, 0x0E], // 9
];

/// Returns the glyph for `character`, or `None` if it is not a decimal digit.
pub fn glyph(character: char) -> Option<&'static [u8; 5]> {
    character
        .to_digit(10)
        .map(|digit| &DIGIT_GLYPHS[digit as usize])
}

/// The scrolling text.
#[derive(Clone, Debug)]
pub struct Text {
    /// Characters to scroll, wrapping after the last.
    pub characters: Vec<char>,
    /// Index of the character currently on screen.
    pub index: usize,
    /// How far the current glyph has scrolled; `None` before the first glyph.
    pub column: Option<i32>,
}

impl Text {
    /// Creates a scroller for `text`. Characters without a glyph scroll by as blanks.
    pub fn new(text: &str) -> Self {
        Self {
            characters: text.chars().collect(),
            index: 0,
            column: None,
        }
    }

    fn stamp(&self, cube: &mut VoxelCube) {
        let Some(rows) = self.characters.get(self.index).and_then(|c| glyph(*c)) else {
            return;
        };
        for (x, row) in rows.iter().enumerate() {
            cube.set_column(x as i32, 0, *row);
        }
    }
}

impl Effect for Text {
    fn setup<R: RandomSource>(&mut self, cube: &mut VoxelCube, _rng: &mut R) {
        cube.clear_all();
        self.index = 0;
        self.column = None;
    }

    fn advance<R: RandomSource>(&mut self, cube: &mut VoxelCube, _rng: &mut R) -> Transition {
        cube.shift(ShiftDirection::PosY);

        let column = match self.column {
            None => 0,
            Some(column) if column + 1 >= CUBE_DIMENSION => {
                if !self.characters.is_empty() {
                    self.index = (self.index + 1) % self.characters.len();
                }
                0
            }
            Some(column) => column + 1,
        };
        self.column = Some(column);

        if column == 0 {
            self.stamp(cube);
        }
        Transition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::ScriptedRandom;

    fn plane_at(cube: &VoxelCube, y: i32) -> [u8; 5] {
        let mut rows = [0u8; 5];
        for (x, row) in rows.iter_mut().enumerate() {
            *row = cube.column(x as i32, y).unwrap_or(0);
        }
        rows
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(glyph('8'), Some(&DIGIT_GLYPHS[8]));
        assert_eq!(glyph('x'), None);
        assert!(DIGIT_GLYPHS.iter().flatten().all(|row| row & 0xE0 == 0));
    }

    #[test]
    fn test_scrolls_and_advances_characters() {
        let mut text = Text::new("12");
        let mut cube = VoxelCube::new();
        let mut rng = ScriptedRandom::new(&[]);
        text.setup(&mut cube, &mut rng);

        text.advance(&mut cube, &mut rng);
        assert_eq!(plane_at(&cube, 0), DIGIT_GLYPHS[1]);

        for y in 1..5 {
            text.advance(&mut cube, &mut rng);
            assert_eq!(plane_at(&cube, y), DIGIT_GLYPHS[1]);
            assert_eq!(plane_at(&cube, 0), [0; 5]);
        }

        // Fifth shift pushes the first glyph out and stamps the second
        text.advance(&mut cube, &mut rng);
        assert_eq!(text.index, 1);
        assert_eq!(plane_at(&cube, 0), DIGIT_GLYPHS[2]);
        assert_eq!(cube.count_lit(), DIGIT_GLYPHS[2].iter().map(|r| r.count_ones() as i32).sum::<i32>());
    }

    #[test]
    fn test_wraps_to_first_character() {
        let mut text = Text::new("70");
        let mut cube = VoxelCube::new();
        let mut rng = ScriptedRandom::new(&[]);
        text.setup(&mut cube, &mut rng);
        for _ in 0..11 {
            text.advance(&mut cube, &mut rng);
        }
        assert_eq!(text.index, 0);
        assert_eq!(plane_at(&cube, 0), DIGIT_GLYPHS[7]);
    }

    #[test]
    fn test_empty_and_unknown_text_stay_dark() {
        let mut rng = ScriptedRandom::new(&[]);
        for source in ["", "ab"] {
            let mut text = Text::new(source);
            let mut cube = VoxelCube::new();
            text.setup(&mut cube, &mut rng);
            for _ in 0..12 {
                text.advance(&mut cube, &mut rng);
            }
            assert!(cube.is_empty());
        }
    }
}

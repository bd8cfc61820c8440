use std::{convert::TryFrom, fmt};

/// The number of rows in a character cell
pub const ROW_COUNT: usize = 8;

/// The number of pixels in each row of a character cell
pub const COLUMN_COUNT: usize = 5;

/// The bits of a row which the controller displays
pub const ROW_MASK: u8 = 0b0001_1111;

pub type Rows = [u8; ROW_COUNT];

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BitmapError {
    #[error("Expected 8 rows, got {count}")]
    WrongRowCount { count: usize },
    #[error("Row {row} has value {value:#010b}, which does not fit in 5 columns")]
    RowOutOfRange { row: usize, value: u8 },
}

/// The pixels of one character cell, top row first.
///
/// Within each row, the most significant of the low five bits is the leftmost pixel.
/// A `Bitmap` never has bits set outside of [`ROW_MASK`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Bitmap(Rows);

impl Bitmap {
    pub const fn new(rows: Rows) -> Result<Self, BitmapError> {
        let mut row = 0;
        while row < ROW_COUNT {
            let value = rows[row];
            if value & !ROW_MASK != 0 {
                return Err(BitmapError::RowOutOfRange { row, value });
            }
            row += 1;
        }

        Ok(Self(rows))
    }

    /// As [`Bitmap::new`], but panics on bad rows, so that a bad constant fails to compile
    pub const fn from_rows(rows: Rows) -> Self {
        match Self::new(rows) {
            Ok(bitmap) => bitmap,
            Err(_) => panic!("bitmap row has bits set outside of the five pixel columns"),
        }
    }

    pub const fn rows(&self) -> &Rows {
        &self.0
    }

    pub fn row(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Whether the pixel at `column` (0 is leftmost) of `row` (0 is topmost) is lit
    pub fn pixel(&self, row: usize, column: usize) -> bool {
        column < COLUMN_COUNT
            && self
                .row(row)
                .map_or(false, |value| value & (1 << (COLUMN_COUNT - 1 - column)) != 0)
    }

    pub fn pixels(&self) -> impl Iterator<Item = [bool; COLUMN_COUNT]> + '_ {
        (0..ROW_COUNT).map(move |row| {
            let mut pixels = [false; COLUMN_COUNT];
            for (column, pixel) in pixels.iter_mut().enumerate() {
                *pixel = self.pixel(row, column);
            }
            pixels
        })
    }

    pub fn lit_pixel_count(&self) -> u32 {
        self.0.iter().map(|row| row.count_ones()).sum()
    }

    /// The indices of the rows which are not the same in `self` and `other`
    pub fn differing_rows<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = usize> + 'a {
        self.0
            .iter()
            .zip(other.0.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(index, _)| index)
    }
}

impl TryFrom<&[u8]> for Bitmap {
    type Error = BitmapError;

    fn try_from(rows: &[u8]) -> Result<Self, Self::Error> {
        let rows = Rows::try_from(rows).map_err(|_| BitmapError::WrongRowCount { count: rows.len() })?;
        Self::new(rows)
    }
}

impl TryFrom<Vec<u8>> for Bitmap {
    type Error = BitmapError;

    fn try_from(rows: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(rows.as_slice())
    }
}

impl From<Bitmap> for Vec<u8> {
    fn from(bitmap: Bitmap) -> Self {
        bitmap.0.to_vec()
    }
}

impl From<Bitmap> for Rows {
    fn from(bitmap: Bitmap) -> Self {
        bitmap.0
    }
}

impl AsRef<[u8]> for Bitmap {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.pixels().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for pixel in row.iter() {
                f.write_str(if *pixel { "#" } else { "." })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKERBOARD: Rows = [
        0b10101, 0b01010, 0b10101, 0b01010, 0b10101, 0b01010, 0b10101, 0b01010,
    ];

    #[test]
    fn rows_with_high_bits_are_rejected() {
        let mut rows = CHECKERBOARD;
        rows[3] = 0b0010_0000;

        assert_eq!(
            Bitmap::new(rows),
            Err(BitmapError::RowOutOfRange {
                row: 3,
                value: 0b0010_0000
            })
        );
    }

    #[test]
    fn the_first_bad_row_is_reported() {
        let rows = [0, 0xFF, 0, 0x80, 0, 0, 0, 0];

        assert_eq!(
            Bitmap::new(rows),
            Err(BitmapError::RowOutOfRange { row: 1, value: 0xFF })
        );
    }

    #[test]
    fn slices_must_have_eight_rows() {
        assert_eq!(
            Bitmap::try_from(&CHECKERBOARD[..7]),
            Err(BitmapError::WrongRowCount { count: 7 })
        );
        assert_eq!(
            Bitmap::try_from(vec![0; 9]),
            Err(BitmapError::WrongRowCount { count: 9 })
        );
        assert_eq!(
            Bitmap::try_from(&CHECKERBOARD[..]),
            Ok(Bitmap::from_rows(CHECKERBOARD))
        );
    }

    #[test]
    fn leftmost_pixel_is_the_highest_bit() {
        let bitmap = Bitmap::from_rows([0b10000, 0b00001, 0, 0, 0, 0, 0, 0]);

        assert!(bitmap.pixel(0, 0));
        assert!(!bitmap.pixel(0, 4));
        assert!(bitmap.pixel(1, 4));
        assert!(!bitmap.pixel(1, 0));
        assert!(!bitmap.pixel(8, 0));
        assert!(!bitmap.pixel(0, 5));
    }

    #[test]
    fn counts_lit_pixels() {
        assert_eq!(Bitmap::from_rows(CHECKERBOARD).lit_pixel_count(), 20);
        assert_eq!(Bitmap::from_rows([0; ROW_COUNT]).lit_pixel_count(), 0);
    }

    #[test]
    fn displays_as_pixel_art() {
        let bitmap = Bitmap::from_rows([0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111, 0, 0]);

        assert_eq!(
            bitmap.to_string(),
            "#####\n#...#\n#...#\n#...#\n#...#\n#####\n.....\n....."
        );
    }

    #[test]
    fn finds_differing_rows() {
        let a = Bitmap::from_rows(CHECKERBOARD);
        let mut rows = CHECKERBOARD;
        rows[0] = 0;
        rows[6] = 0b11111;
        let b = Bitmap::from_rows(rows);

        assert_eq!(a.differing_rows(&b).collect::<Vec<_>>(), vec![0, 6]);
        assert_eq!(a.differing_rows(&a).count(), 0);
    }
}

//! Custom characters for 5x8 character LCDs, such as those driven by an HD44780.
//!
//! Each glyph is eight rows of five pixels, top row first, ready to be written to the
//! character generator RAM of the display. Choosing a slot for each glyph is left to the driver.

use std::{fmt, str::FromStr};

mod bitmap;
pub mod encoding;
mod table;

pub use bitmap::{Bitmap, BitmapError, Rows, COLUMN_COUNT, ROW_COUNT, ROW_MASK};
pub use table::{GlyphTable, TableError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize, thiserror::Error)]
#[error("Unknown glyph: {0:?}")]
pub struct UnknownGlyph(pub String);

/// A named custom character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct Glyph<S: AsRef<str> = &'static str> {
    pub name: S,
    #[serde(rename = "rows")]
    pub bitmap: Bitmap,
}

impl<S: AsRef<str>> Glyph<S> {
    pub const fn new(name: S, bitmap: Bitmap) -> Self {
        Self { name, bitmap }
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub const fn rows(&self) -> &Rows {
        self.bitmap.rows()
    }

    pub fn to_owned_name(&self) -> Glyph<String> {
        Glyph {
            name: self.name().to_owned(),
            bitmap: self.bitmap,
        }
    }
}

/// The pound sterling sign
pub const POUND_CHAR: Glyph = Glyph::new(
    "poundChar",
    Bitmap::from_rows([
        0b00111, //
        0b01100, //
        0b01000, //
        0b11110, //
        0b01000, //
        0b01000, //
        0b11111, //
        0b00000, //
    ]),
);

/// An unticked checkbox
pub const EMPTY_SQUARE: Glyph = Glyph::new(
    "emptySquare",
    Bitmap::from_rows([
        0b11111, //
        0b10001, //
        0b10001, //
        0b10001, //
        0b10001, //
        0b11111, //
        0b00000, //
        0b00000, //
    ]),
);

/// A ticked checkbox
pub const FILLED_SQUARE: Glyph = Glyph::new(
    "filledSquare",
    Bitmap::from_rows([
        0b11111, //
        0b11111, //
        0b11111, //
        0b11111, //
        0b11111, //
        0b11111, //
        0b00000, //
        0b00000, //
    ]),
);

pub const EMPTY_SQUARE_BOTTOM_UNDERLINED: Glyph = Glyph::new(
    "emptySquareBottomUnderlined",
    Bitmap::from_rows([
        0b11111, //
        0b10001, //
        0b10001, //
        0b10001, //
        0b10001, //
        0b11111, //
        0b00000, //
        0b11111, // underline
    ]),
);

pub const FILLED_SQUARE_BOTTOM_UNDERLINED: Glyph = Glyph::new(
    "filledSquareBottomUnderlined",
    Bitmap::from_rows([
        0b11111, //
        0b11111, //
        0b11111, //
        0b11111, //
        0b11111, //
        0b11111, //
        0b00000, //
        0b11111, // underline
    ]),
);

pub const GLYPHS: [Glyph; 5] = [
    POUND_CHAR,
    EMPTY_SQUARE,
    FILLED_SQUARE,
    EMPTY_SQUARE_BOTTOM_UNDERLINED,
    FILLED_SQUARE_BOTTOM_UNDERLINED,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinGlyph {
    PoundChar,
    EmptySquare,
    FilledSquare,
    EmptySquareBottomUnderlined,
    FilledSquareBottomUnderlined,
}

impl BuiltinGlyph {
    pub const ALL: [Self; 5] = [
        Self::PoundChar,
        Self::EmptySquare,
        Self::FilledSquare,
        Self::EmptySquareBottomUnderlined,
        Self::FilledSquareBottomUnderlined,
    ];

    pub const fn glyph(self) -> Glyph {
        match self {
            Self::PoundChar => POUND_CHAR,
            Self::EmptySquare => EMPTY_SQUARE,
            Self::FilledSquare => FILLED_SQUARE,
            Self::EmptySquareBottomUnderlined => EMPTY_SQUARE_BOTTOM_UNDERLINED,
            Self::FilledSquareBottomUnderlined => FILLED_SQUARE_BOTTOM_UNDERLINED,
        }
    }

    pub const fn name(self) -> &'static str {
        self.glyph().name
    }

    pub const fn bitmap(self) -> Bitmap {
        self.glyph().bitmap
    }
}

impl fmt::Display for BuiltinGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for BuiltinGlyph {
    type Err = UnknownGlyph;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|glyph| glyph.name() == name)
            .ok_or_else(|| UnknownGlyph(name.into()))
    }
}

/// Find the builtin glyph called `name`
pub fn lookup(name: &str) -> Result<Glyph, UnknownGlyph> {
    name.parse::<BuiltinGlyph>().map(BuiltinGlyph::glyph)
}

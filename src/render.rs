use std::io::Write;

use crossterm::style::{style, Attribute, Color, Stylize};
use lcd_glyphs::{Glyph, GlyphTable};

use crate::config::Config;

#[derive(Clone, Copy, Debug)]
pub struct PixelStyle {
    pub lit: char,
    pub unlit: char,
    pub colour: bool,
}

impl<'a> From<&'a Config> for PixelStyle {
    fn from(config: &'a Config) -> Self {
        Self {
            lit: config.lit_pixel,
            unlit: config.unlit_pixel,
            colour: config.colour,
        }
    }
}

/// Draw `glyph` as its name followed by eight lines of pixels
pub fn draw<S: AsRef<str>>(
    w: &mut impl Write,
    glyph: &Glyph<S>,
    pixel_style: PixelStyle,
) -> std::io::Result<()> {
    if pixel_style.colour {
        writeln!(w, "{}", style(glyph.name()).attribute(Attribute::Bold))?;
    } else {
        writeln!(w, "{}", glyph.name())?;
    }

    for row in glyph.bitmap.pixels() {
        for &pixel in row.iter() {
            match (pixel, pixel_style.colour) {
                (true, true) => write!(w, "{}", style(pixel_style.lit).with(Color::Green))?,
                (true, false) => write!(w, "{}", pixel_style.lit)?,
                (false, true) => write!(w, "{}", style(pixel_style.unlit).with(Color::DarkGrey))?,
                (false, false) => write!(w, "{}", pixel_style.unlit)?,
            }
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Draw the glyphs called `names`, or every glyph in `table` if `names` is empty.
///
/// Nothing is drawn if any name is unknown
pub fn show<S: AsRef<str>>(
    w: &mut impl Write,
    table: &GlyphTable<S>,
    names: &[String],
    pixel_style: PixelStyle,
) -> anyhow::Result<()> {
    let glyphs = if names.is_empty() {
        table.iter().collect::<Vec<_>>()
    } else {
        names
            .iter()
            .map(|name| table.lookup(name))
            .collect::<Result<Vec<_>, _>>()?
    };

    for glyph in glyphs {
        draw(w, glyph, pixel_style)?;
    }

    Ok(())
}

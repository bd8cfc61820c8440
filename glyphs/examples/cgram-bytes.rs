//! Print the bytes a driver would write to character generator RAM, one glyph per slot

fn main() -> anyhow::Result<()> {
    // Use a glyph table file if one is given, otherwise the builtin glyphs
    let table = match std::env::args().nth(1) {
        Some(path) => lcd_glyphs::GlyphTable::from_file(path)?,
        None => lcd_glyphs::GlyphTable::builtin().to_owned_names(),
    };

    for (slot, glyph) in table.iter().enumerate().take(8) {
        let rows = glyph
            .rows()
            .iter()
            .map(|row| format!("{:#04x}", row))
            .collect::<Vec<_>>()
            .join(", ");

        println!("{} {:<30} [{}]", slot, glyph.name(), rows);
    }

    Ok(())
}

use std::{collections::HashMap, io::Write};

use anyhow::Result;
use lcd_glyphs::{encoding, GlyphTable};

use crate::command::ExportFormat;

pub fn export<S: AsRef<str> + serde::Serialize>(
    w: &mut impl Write,
    table: &GlyphTable<S>,
    format: ExportFormat,
) -> Result<()> {
    match format {
        ExportFormat::Toml => write!(w, "{}", table.to_toml()?)?,
        ExportFormat::Rust => write_rust(w, table)?,
        ExportFormat::Postcard => write_postcard(w, table)?,
    }

    Ok(())
}

/// `poundChar` becomes `POUND_CHAR`
fn constant_name(name: &str) -> String {
    let mut constant = String::with_capacity(name.len() + 4);
    let mut previous = None::<char>;

    for c in name.chars() {
        if c.is_ascii_uppercase()
            && previous.map_or(false, |p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            constant.push('_');
        }

        if c.is_ascii_alphanumeric() {
            constant.push(c.to_ascii_uppercase());
        } else {
            constant.push('_');
        }

        previous = Some(c);
    }

    if constant.starts_with(|c: char| c.is_ascii_digit()) || constant == "_" {
        constant.insert(0, '_');
    }

    constant
}

/// The constant name of each glyph, in table order
fn constant_names<S: AsRef<str>>(table: &GlyphTable<S>) -> Result<Vec<String>> {
    let mut glyph_names = HashMap::new();

    table
        .iter()
        .map(|glyph| {
            let constant = constant_name(glyph.name());
            if let Some(other) = glyph_names.insert(constant.clone(), glyph.name()) {
                anyhow::bail!(
                    "Glyphs {:?} and {:?} would both be exported as {}",
                    other,
                    glyph.name(),
                    constant
                );
            }
            Ok(constant)
        })
        .collect()
}

fn write_rust<S: AsRef<str>>(w: &mut impl Write, table: &GlyphTable<S>) -> Result<()> {
    let constants = constant_names(table)?;

    writeln!(w, "// Generated by glyph-tool v{}", env!("CARGO_PKG_VERSION"))?;

    for (glyph, constant) in table.iter().zip(constants) {
        writeln!(w)?;
        writeln!(w, "/// {}", glyph.name())?;
        writeln!(w, "pub const {}: [u8; 8] = [", constant)?;
        for row in glyph.rows() {
            writeln!(w, "    0b{:05b},", row)?;
        }
        writeln!(w, "];")?;
    }

    Ok(())
}

/// One hex encoded frame per line
fn write_postcard<S: AsRef<str> + serde::Serialize>(
    w: &mut impl Write,
    table: &GlyphTable<S>,
) -> Result<()> {
    let mut buffer = Vec::new();

    for glyph in table {
        let frame = encoding::encode_value(glyph, &mut buffer)?;
        writeln!(w, "{}", hex::encode(frame))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use lcd_glyphs::Glyph;

    use super::*;

    fn export_builtin(format: ExportFormat) -> String {
        let mut buffer = Vec::new();
        export(&mut buffer, &GlyphTable::builtin(), format).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn constant_names() {
        assert_eq!(constant_name("poundChar"), "POUND_CHAR");
        assert_eq!(
            constant_name("emptySquareBottomUnderlined"),
            "EMPTY_SQUARE_BOTTOM_UNDERLINED"
        );
        assert_eq!(constant_name("tick"), "TICK");
        assert_eq!(constant_name("arrow-up"), "ARROW_UP");
        assert_eq!(constant_name("2up"), "_2UP");
        assert_eq!(constant_name("café"), "CAF_");
        assert_eq!(constant_name("-"), "__");
    }

    #[test]
    fn rust_export_rejects_clashing_constants() {
        let table = GlyphTable::new(vec![
            lcd_glyphs::POUND_CHAR,
            Glyph::new("pound_char", lcd_glyphs::FILLED_SQUARE.bitmap),
        ])
        .unwrap();

        let mut buffer = Vec::new();
        let err = export(&mut buffer, &table, ExportFormat::Rust).unwrap_err();

        assert!(err.to_string().contains("POUND_CHAR"), "{}", err);
        assert!(buffer.is_empty());
    }

    #[test]
    fn rust_export_keeps_names_inside_comments() {
        let table = GlyphTable::new(vec![Glyph::new(
            "tick */ fn main() {}",
            lcd_glyphs::EMPTY_SQUARE.bitmap,
        )])
        .unwrap();

        let mut buffer = Vec::new();
        export(&mut buffer, &table, ExportFormat::Rust).unwrap();
        let source = String::from_utf8(buffer).unwrap();

        assert!(source
            .lines()
            .filter(|line| line.contains("fn main"))
            .all(|line| line.starts_with("///")));
        assert!(source.contains("pub const TICK____FN_MAIN_____: [u8; 8] = ["));
    }

    #[test]
    fn rust_export_uses_binary_literals() {
        let source = export_builtin(ExportFormat::Rust);

        assert!(source.contains(
            "pub const POUND_CHAR: [u8; 8] = [\n    0b00111,\n    0b01100,\n    0b01000,\n    0b11110,\n    0b01000,\n    0b01000,\n    0b11111,\n    0b00000,\n];\n"
        ));
        assert_eq!(source.matches("pub const").count(), 5);
    }

    #[test]
    fn toml_export_can_be_reloaded() {
        let source = export_builtin(ExportFormat::Toml);

        let table = GlyphTable::from_toml_str(&source).unwrap();

        assert_eq!(table, GlyphTable::builtin().to_owned_names());
    }

    #[test]
    fn postcard_export_decodes() {
        let source = export_builtin(ExportFormat::Postcard);

        let names = source
            .lines()
            .map(|line| {
                let mut frame = hex::decode(line).unwrap();
                encoding::decode_value::<lcd_glyphs::Glyph<String>>(&mut frame)
                    .unwrap()
                    .name
            })
            .collect::<Vec<_>>();

        assert_eq!(names, GlyphTable::builtin().names().collect::<Vec<_>>());
    }
}

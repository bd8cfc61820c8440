use std::{io::Write, path::PathBuf};

use anyhow::Result;
use lcd_glyphs::GlyphTable;

/// Load each glyph table in `paths`, reporting on each one, and fail if any are bad
pub fn check_tables(w: &mut impl Write, paths: &[PathBuf]) -> Result<()> {
    let mut failure_count = 0;

    for path in paths {
        match GlyphTable::from_file(path) {
            Ok(table) => writeln!(w, "{}: {} glyphs OK", path.display(), table.len())?,
            Err(err) => {
                tracing::debug!(path = %path.display(), "Bad glyph table: {:?}", err);
                writeln!(w, "{}: {}", path.display(), err)?;
                failure_count += 1;
            }
        }
    }

    if failure_count > 0 {
        anyhow::bail!("{} of {} glyph tables are bad", failure_count, paths.len());
    }

    Ok(())
}

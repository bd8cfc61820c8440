use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{Glyph, UnknownGlyph, GLYPHS};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Failed to read glyph table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Bad glyph table: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to write glyph table: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Glyph {index} has no name")]
    EmptyName { index: usize },
    #[error("Glyph {0:?} is defined more than once")]
    DuplicateName(String),
    #[error("Glyph name {0:?} contains control characters")]
    ControlCharacterInName(String),
}

/// A list of uniquely named glyphs, such as is stored in a glyph table file:
///
/// ```toml
/// [[Glyph]]
/// name = "poundChar"
/// rows = [0b00111, 0b01100, 0b01000, 0b11110, 0b01000, 0b01000, 0b11111, 0b00000]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GlyphTable<S: AsRef<str> = String> {
    #[serde(rename = "Glyph")]
    glyphs: Vec<Glyph<S>>,
}

#[derive(serde::Deserialize)]
struct TableFile {
    #[serde(rename = "Glyph", default)]
    glyphs: Vec<Glyph<String>>,
}

impl GlyphTable<&'static str> {
    pub fn builtin() -> Self {
        Self {
            glyphs: GLYPHS.to_vec(),
        }
    }
}

impl<S: AsRef<str>> GlyphTable<S> {
    pub fn new(glyphs: Vec<Glyph<S>>) -> Result<Self, TableError> {
        let mut names = HashSet::new();

        for (index, glyph) in glyphs.iter().enumerate() {
            let name = glyph.name();
            if name.is_empty() {
                return Err(TableError::EmptyName { index });
            }
            if name.chars().any(char::is_control) {
                return Err(TableError::ControlCharacterInName(name.into()));
            }
            if !names.insert(name) {
                return Err(TableError::DuplicateName(name.into()));
            }
        }

        Ok(Self { glyphs })
    }

    pub fn lookup(&self, name: &str) -> Result<&Glyph<S>, UnknownGlyph> {
        self.glyphs
            .iter()
            .find(|glyph| glyph.name() == name)
            .ok_or_else(|| UnknownGlyph(name.into()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.glyphs.iter().map(Glyph::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Glyph<S>> {
        self.glyphs.iter()
    }

    pub fn glyphs(&self) -> &[Glyph<S>] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn to_owned_names(&self) -> GlyphTable<String> {
        GlyphTable {
            glyphs: self.glyphs.iter().map(Glyph::to_owned_name).collect(),
        }
    }
}

impl<S: AsRef<str> + serde::Serialize> GlyphTable<S> {
    pub fn to_toml(&self) -> Result<String, TableError> {
        Ok(toml::to_string(self)?)
    }
}

impl GlyphTable<String> {
    pub fn from_toml_str(source: &str) -> Result<Self, TableError> {
        let TableFile { glyphs } = toml::from_str(source)?;
        Self::new(glyphs)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();

        let source = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_owned(),
            source,
        })?;

        let table = Self::from_toml_str(&source)?;

        tracing::debug!(path = %path.display(), glyphs = table.len(), "Loaded glyph table");

        Ok(table)
    }
}

impl<'a, S: AsRef<str>> IntoIterator for &'a GlyphTable<S> {
    type Item = &'a Glyph<S>;
    type IntoIter = std::slice::Iter<'a, Glyph<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

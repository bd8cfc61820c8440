//! A description of the glyph-tool configuration file

use std::{collections::BTreeMap, convert::TryFrom, fmt, path::PathBuf};

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;

#[derive(Clone, serde::Deserialize)]
#[serde(try_from = "LogFilterSource")]
pub struct LogLevelFilter {
    pub filter: Targets,
}

/// `log_level` is either a filter directive such as `"warn,lcd_glyphs=debug"`,
/// or a table of target names to levels
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LogFilterSource {
    Directives(String),
    Targets(BTreeMap<String, String>),
}

impl TryFrom<LogFilterSource> for LogLevelFilter {
    type Error = String;

    fn try_from(source: LogFilterSource) -> Result<Self, Self::Error> {
        let filter = match source {
            LogFilterSource::Directives(directives) => directives
                .parse::<Targets>()
                .map_err(|err| format!("{err}, got {directives:?}"))?,
            LogFilterSource::Targets(targets) => Targets::new().with_targets(
                targets
                    .into_iter()
                    .map(|(target, level)| match level.parse::<LevelFilter>() {
                        Ok(level) => Ok((target, level)),
                        Err(err) => Err(format!("{err}, got {level:?} for {target}")),
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };

        Ok(Self { filter })
    }
}

impl fmt::Display for LogLevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.filter.fmt(f)
    }
}

impl fmt::Debug for LogLevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_string().fmt(f)
    }
}

impl Default for LogLevelFilter {
    fn default() -> Self {
        Self {
            filter: Targets::new().with_default(tracing::Level::WARN),
        }
    }
}

/// A description of the glyph-tool configuration file
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevelFilter,

    /// A glyph table file to use instead of the builtin glyphs
    pub table: Option<PathBuf>,

    /// Drawn for each lit pixel by `show`
    pub lit_pixel: char,

    /// Drawn for each unlit pixel by `show`
    pub unlit_pixel: char,

    pub colour: bool,
}

impl Config {
    pub const DEFAULT_PATH: &'static str = match option_env!("GLYPH_TOOL_CONFIG_PATH") {
        Some(path) => path,
        None => "glyph-tool.toml",
    };

    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml_str(&source)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load the config file at `path`, or at the default path if no path is given.
    ///
    /// A missing file at the default path is not an error
    pub fn load(path: Option<&std::path::Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if std::path::Path::new(Self::DEFAULT_PATH).exists() => {
                Self::from_file(Self::DEFAULT_PATH)
            }
            None => Ok(Self::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevelFilter::default(),
            table: None,
            lit_pixel: '#',
            unlit_pixel: '.',
            colour: true,
        }
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const USAGE: &str = "\
Usage: glyph-tool [OPTIONS] COMMAND

Commands:
    list                    List the names of the glyphs
    show [NAME...]          Draw the named glyphs, or all glyphs
    check PATH...           Validate glyph table files
    export toml|rust|postcard
                            Write the glyph table to stdout

Options:
    -c, --config PATH       Configuration file
    -t, --table PATH        Glyph table file to use instead of the builtin glyphs
    -V, --version           Print version
    -h, --help              Print this message";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Toml,
    Rust,
    Postcard,
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(format: &str) -> Result<Self> {
        match format {
            "toml" => Ok(Self::Toml),
            "rust" => Ok(Self::Rust),
            "postcard" => Ok(Self::Postcard),
            _ => Err(anyhow::Error::msg(format!(
                "Unknown export format {:?}, expected toml, rust or postcard",
                format
            ))),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Show(Vec<String>),
    Check(Vec<PathBuf>),
    Export(ExportFormat),
    Version,
    Help,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Arguments {
    pub config_path: Option<PathBuf>,
    pub table_path: Option<PathBuf>,
    pub command: Command,
}

impl Arguments {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut config_path = None;
        let mut table_path = None;

        let mut args = args.into_iter();

        let command = loop {
            let arg = match args.next() {
                Some(arg) => arg,
                None => break Command::Help,
            };

            match arg.as_str() {
                "-c" | "--config" => {
                    config_path = Some(args.next().context("No config specified")?.into());
                }
                "-t" | "--table" => {
                    table_path = Some(args.next().context("No glyph table specified")?.into());
                }
                "-V" | "--version" => break Command::Version,
                "-h" | "--help" => break Command::Help,
                "list" => break Command::List,
                "show" => break Command::Show(args.by_ref().collect()),
                "check" => {
                    let paths = args.by_ref().map(PathBuf::from).collect::<Vec<_>>();
                    if paths.is_empty() {
                        anyhow::bail!("No glyph tables to check");
                    }
                    break Command::Check(paths);
                }
                "export" => {
                    break Command::Export(args.next().context("No export format specified")?.parse()?)
                }
                _ => return Err(anyhow::Error::msg(format!("Unhandled argument {:?}", arg))),
            }
        };

        if let Some(arg) = args.next() {
            anyhow::bail!("Unexpected argument {:?}", arg);
        }

        Ok(Self {
            config_path,
            table_path,
            command,
        })
    }
}

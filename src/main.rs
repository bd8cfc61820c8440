#![warn(clippy::pedantic)]

use std::{io::Write, process::ExitCode};

use anyhow::{Context, Result};
use lcd_glyphs::GlyphTable;
use tracing_subscriber::prelude::*;

mod check;
mod command;
mod config;
mod export;
mod render;

use command::{Arguments, Command};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let arguments = Arguments::parse(std::env::args().skip(1))?;

    let (config, config_error) = match config::Config::load(arguments.config_path.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (config::Config::default(), Some(err)),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(config.log_level.filter.clone())
        .init();

    if let Some(err) = config_error {
        tracing::error!("{:#}", err);
    }

    tracing::debug!(log_level = %config.log_level, "Configured");

    let table_path = arguments.table_path.or_else(|| config.table.clone());

    let load_table = || -> Result<GlyphTable> {
        match &table_path {
            Some(path) => GlyphTable::from_file(path)
                .with_context(|| format!("Failed to load glyph table {}", path.display())),
            None => Ok(GlyphTable::builtin().to_owned_names()),
        }
    };

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    match arguments.command {
        Command::List => {
            for name in load_table()?.names() {
                writeln!(stdout, "{}", name)?;
            }
        }
        Command::Show(names) => render::show(
            &mut stdout,
            &load_table()?,
            &names,
            render::PixelStyle::from(&config),
        )?,
        Command::Check(paths) => check::check_tables(&mut stdout, &paths)?,
        Command::Export(format) => export::export(&mut stdout, &load_table()?, format)?,
        Command::Version => {
            writeln!(stdout, "{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        }
        Command::Help => writeln!(stdout, "{}", command::USAGE)?,
    }

    Ok(())
}

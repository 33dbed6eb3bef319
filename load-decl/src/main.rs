//! CLI entrypoint for `load-decl`.

use std::io::Write;

use clap::Parser;
use load_decl_cli::cli::Args;
use load_decl_cli::error::LoadDeclCliError;
use load_decl_cli::{logging, run, settings};

fn main() -> Result<(), LoadDeclCliError> {
    let args = Args::parse();
    let settings = settings::load_settings(&args)?;
    logging::init(&settings.log_level)?;
    let rendered = run(&settings)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

//! Command-line interface definitions for `load-decl`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `load-decl`.
#[derive(Debug, Default, Parser)]
#[command(name = "load-decl")]
#[command(about = "Unify load declaration files into a single load mapping")]
#[command(version)]
pub struct Args {
    /// Recipe whose sibling `.load.yml` file is used when no declaration
    /// files are given.
    #[arg(long, value_name = "path")]
    pub recipe: Option<Utf8PathBuf>,
    /// Declaration file to unify (repeat for several; earlier files win
    /// priority ties).
    #[arg(long = "load-declarations", value_name = "path")]
    pub load_declarations: Vec<Utf8PathBuf>,
    /// TOML settings file.
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Print single-line JSON.
    #[arg(long = "compact")]
    pub should_compact: bool,
    /// Include the aggregated channel declarations in the output.
    #[arg(long = "include-channels")]
    pub should_include_channels: bool,
    /// Log filter used when `RUST_LOG` is unset (for example `debug`).
    #[arg(long, value_name = "filter")]
    pub log_level: Option<String>,
}

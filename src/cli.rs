/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

/// yamlfmt — reformat a YAML file with canonical formatting.
#[derive(Debug, Parser)]
#[command(
    name = "yamlfmt",
    about = "Reformat a YAML file with canonical formatting",
    version
)]
pub struct Cli {
    /// YAML file to read in and format.
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Directory to write the formatted output to.
    /// Created (recursively) when it does not exist.
    #[arg(long, value_name = "PATH")]
    pub output_dir: PathBuf,
}

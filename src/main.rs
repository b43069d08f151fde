#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! yamlfmt — reformat a YAML file with canonical formatting.

mod cli;
mod format;

use clap::Parser;
use clap::error::ErrorKind;

use cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(0);
        }
        // Usage errors share the uniform failure exit code.
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    };

    match format::run(&cli) {
        Ok(()) => {}
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}

/// Errors from the format layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reformatting a YAML file.
///
/// Every variant is terminal: the caller prints the message and exits with
/// code 1. Messages keep the operation prefix on the first line and the
/// underlying error text on the next.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The stat call on the input path failed for a reason other than
    /// not-found (e.g. a permission error on a parent directory).
    #[error("Error checking if input file {} exists:\n{source}", path.display())]
    CheckInputFile {
        /// The input path that was being checked.
        path: PathBuf,
        /// The underlying stat error.
        source: io::Error,
    },

    /// The input path does not exist, or exists but is not a regular file.
    #[error("Input file {} does not exist", path.display())]
    InputFileMissing {
        /// The missing input path.
        path: PathBuf,
    },

    /// The stat call on the output directory failed for a reason other than
    /// not-found.
    #[error("Error checking if output directory {} exists:\n{source}", path.display())]
    CheckOutputDir {
        /// The output directory that was being checked.
        path: PathBuf,
        /// The underlying stat error.
        source: io::Error,
    },

    /// Recursive creation of the output directory failed.
    #[error("Error creating output directory {}:\n{source}", path.display())]
    CreateOutputDir {
        /// The output directory that could not be created.
        path: PathBuf,
        /// The underlying filesystem error.
        source: io::Error,
    },

    /// Reading the input file failed.
    #[error("Error reading input file {}:\n{source}", path.display())]
    ReadInputFile {
        /// The input path that could not be read.
        path: PathBuf,
        /// The underlying read error.
        source: io::Error,
    },

    /// The input bytes are not valid YAML.
    #[error("Could not parse contents of {} as YAML:\n{source}", path.display())]
    ParseYaml {
        /// The input path whose contents failed to parse.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_yaml::Error,
    },

    /// Re-encoding the decoded document failed. Practically unreachable for
    /// a document that just decoded successfully.
    #[error("Could not serialize contents of {} as formatted YAML:\n{source}", path.display())]
    SerializeYaml {
        /// The input path whose document failed to re-encode.
        path: PathBuf,
        /// The underlying encode error.
        source: serde_yaml::Error,
    },

    /// Writing the formatted output failed.
    #[error("Couldn't write formatted YAML to {}:\n{source}", path.display())]
    WriteOutputFile {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying write error.
        source: io::Error,
    },
}

/// The reformat pipeline: precondition checks, decode, re-encode, write.
use std::fs;
use std::io;
use std::path::Path;

use serde_yaml::Value;

use super::errors::FormatError;
use super::fs_check::{dir_exists, file_exists};
use crate::cli::Cli;

/// Run the full pipeline for one invocation.
///
/// Checks that the input exists and is a regular file, creates the output
/// directory when absent, reformats the document, and writes it to
/// `<output-dir>/<basename(input)>`. The output file is only touched after
/// the read and the decode/encode both succeeded.
///
/// # Errors
///
/// Returns `FormatError` on any precondition, parse, or I/O failure. All
/// failures are terminal; nothing is retried.
pub fn run(cli: &Cli) -> Result<(), FormatError> {
    let input = cli.file.as_path();
    let output_dir = cli.output_dir.as_path();

    let input_ok = file_exists(input).map_err(|source| FormatError::CheckInputFile {
        path: input.to_path_buf(),
        source,
    })?;
    if !input_ok {
        return Err(FormatError::InputFileMissing {
            path: input.to_path_buf(),
        });
    }

    let dir_ok = dir_exists(output_dir).map_err(|source| FormatError::CheckOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    if !dir_ok {
        create_output_dir(output_dir).map_err(|source| FormatError::CreateOutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;
    }

    // A regular file always has a final path component.
    let Some(file_name) = input.file_name() else {
        return Err(FormatError::InputFileMissing {
            path: input.to_path_buf(),
        });
    };

    let bytes = fs::read(input).map_err(|source| FormatError::ReadInputFile {
        path: input.to_path_buf(),
        source,
    })?;

    let formatted = reformat(input, &bytes)?;

    let output_path = output_dir.join(file_name);
    fs::write(&output_path, formatted).map_err(|source| FormatError::WriteOutputFile {
        path: output_path.clone(),
        source,
    })?;

    Ok(())
}

/// Decode `bytes` as one YAML document and re-encode it canonically.
///
/// `input` only names the source file in error messages.
///
/// # Errors
///
/// Returns `FormatError::ParseYaml` for malformed input, and
/// `FormatError::SerializeYaml` if the decoded document fails to re-encode.
pub fn reformat(input: &Path, bytes: &[u8]) -> Result<String, FormatError> {
    let doc: Value = serde_yaml::from_slice(bytes).map_err(|source| FormatError::ParseYaml {
        path: input.to_path_buf(),
        source,
    })?;
    serde_yaml::to_string(&doc).map_err(|source| FormatError::SerializeYaml {
        path: input.to_path_buf(),
        source,
    })
}

/// Create the output directory tree with restricted permissions.
#[cfg(unix)]
fn create_output_dir(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o760).create(path)
}

#[cfg(not(unix))]
fn create_output_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn cli(file: PathBuf, output_dir: PathBuf) -> Cli {
        Cli { file, output_dir }
    }

    #[test]
    fn test_reformat_round_trip_is_structurally_equal() {
        let src = b"b: 2\na:    1\nlist:\n    - x\n    - true\n    - null\n";
        let out = reformat(Path::new("in.yml"), src).unwrap();
        let before: Value = serde_yaml::from_slice(src).unwrap();
        let after: Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reformat_normalizes_indentation() {
        let out = reformat(Path::new("in.yml"), b"a:\n        b: 1\n").unwrap();
        assert_eq!(out, "a:\n  b: 1\n");
    }

    #[test]
    fn test_reformat_malformed_is_parse_error() {
        let err = reformat(Path::new("in.yml"), b"{a: b").unwrap_err();
        assert!(matches!(err, FormatError::ParseYaml { .. }));
        assert!(err.to_string().contains("Could not parse contents of"));
    }

    #[test]
    fn test_run_writes_to_output_dir_under_basename() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nested").join("data.yml");
        fs::create_dir_all(input.parent().unwrap()).unwrap();
        fs::write(&input, "name: test\ncount: 3\n").unwrap();
        let out_dir = dir.path().join("out");

        run(&cli(input.clone(), out_dir.clone())).unwrap();

        let written = fs::read_to_string(out_dir.join("data.yml")).unwrap();
        let before: Value = serde_yaml::from_str("name: test\ncount: 3\n").unwrap();
        let after: Value = serde_yaml::from_str(&written).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_run_creates_nested_output_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.yml");
        fs::write(&input, "a: 1\n").unwrap();
        let out_dir = dir.path().join("a").join("b").join("c");

        run(&cli(input, out_dir.clone())).unwrap();

        assert!(out_dir.join("data.yml").is_file());
    }

    #[test]
    fn test_run_missing_input_reports_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.yml");
        let out_dir = dir.path().join("out");

        let err = run(&cli(input, out_dir.clone())).unwrap_err();

        assert!(matches!(err, FormatError::InputFileMissing { .. }));
        assert!(err.to_string().contains("does not exist"));
        // The input check runs before any directory creation.
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_run_directory_input_reports_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("actually_a_dir");
        fs::create_dir(&input).unwrap();
        let out_dir = dir.path().join("out");

        let err = run(&cli(input, out_dir)).unwrap_err();

        assert!(matches!(err, FormatError::InputFileMissing { .. }));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_run_malformed_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.yml");
        fs::write(&input, "{a: b").unwrap();
        let out_dir = dir.path().join("out");

        let err = run(&cli(input, out_dir.clone())).unwrap_err();

        assert!(matches!(err, FormatError::ParseYaml { .. }));
        assert!(!out_dir.join("bad.yml").exists());
    }

    #[test]
    fn test_run_twice_overwrites_deterministically() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.yml");
        fs::write(&input, "z: 1\ny: [2, 3]\n").unwrap();
        let out_dir = dir.path().join("out");
        let args = cli(input, out_dir.clone());

        run(&args).unwrap();
        let first = fs::read(out_dir.join("data.yml")).unwrap();
        run(&args).unwrap();
        let second = fs::read(out_dir.join("data.yml")).unwrap();

        assert_eq!(first, second);
    }
}

//! Command-line interface: read one markdown file, write the renumbered result to another.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::error::{Error, Result};
use crate::renumber::{FootnoteRenumberer, Renumbered};

/// Renumber markdown footnotes in order of first reference.
#[derive(Parser, Debug)]
#[command(name = "footnote-sort")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Markdown file to read (UTF-8)
    pub input: PathBuf,

    /// File to write the result to, replaced if it exists
    pub output: PathBuf,
}

/// Run the CLI with the process arguments.
pub fn run() -> Result<()> {
    run_from(std::env::args_os())
}

/// Run the CLI with explicit arguments, the first being the program name.
///
/// `--help` and `--version` print and exit the process; any other argument
/// error becomes [`Error::Usage`] before a file is touched.
pub fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => return Err(Error::Usage(Cli::command().render_usage().to_string())),
        },
    };
    sort_file(&cli.input, &cli.output)
}

/// Read `input`, renumber its footnotes and write the result to `output`.
///
/// Nothing is written unless the input was read and decoded in full.
pub fn sort_file(input: &Path, output: &Path) -> Result<()> {
    let bytes = fs::read(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8(bytes).map_err(|_| Error::Encoding {
        path: input.to_path_buf(),
    })?;

    let Renumbered { text, report } = FootnoteRenumberer::new(&source).run();
    for entry in &report.dangling {
        tracing::warn!(
            label = %entry.label,
            location = %entry.first_seen,
            "footnote reference has no definition"
        );
    }
    for label in &report.duplicates {
        tracing::warn!(%label, "footnote defined more than once, keeping every definition");
    }
    for dropped in &report.dropped {
        tracing::info!(
            label = %dropped.label,
            location = %dropped.location,
            "dropped unreferenced footnote definition"
        );
    }

    fs::write(output, &text).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %output.display(),
        footnotes = report.labels.len(),
        "wrote renumbered markdown"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_argument_count_is_usage_error() {
        let err = run_from(["footnote-sort", "only-one.md"]).unwrap_err();
        match err {
            Error::Usage(usage) => {
                assert!(usage.contains("footnote-sort"));
                assert!(usage.contains("<INPUT>"));
                assert!(usage.contains("<OUTPUT>"));
            }
            other => panic!("expected usage error, got {other:?}"),
        }
        assert!(matches!(
            run_from(["footnote-sort", "a.md", "b.md", "c.md"]),
            Err(Error::Usage(_))
        ));
        assert!(matches!(run_from(["footnote-sort"]), Err(Error::Usage(_))));
    }

    #[test]
    fn sorts_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");
        fs::write(&path, "b[^b] a[^a]\n\n[^a]: A\n[^b]: B\n").unwrap();
        sort_file(&path, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "b[^1] a[^2]\n\n[^1]: B\n[^2]: A"
        );
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.md");
        let output = dir.path().join("out.md");
        let err = sort_file(&input, &output).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("latin1.md");
        let output = dir.path().join("out.md");
        fs::write(&input, b"caf\xe9[^a]\n").unwrap();
        let err = sort_file(&input, &output).unwrap_err();
        assert!(matches!(err, Error::Encoding { .. }));
        assert!(err.to_string().contains("not valid UTF-8"));
        assert!(!output.exists());
    }
}

use crate::classify::list_files_with_classification;
use crate::error::ListError;
use crate::format::{format_detail_line, format_detailed_listing};
use crate::metadata::{list_files_with_details, scan_entries};
use crate::reader::list_files_in_directory;
use std::io::{self, Write};

/// Everything one invocation needs, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOptions {
    pub dirname: String,
    pub long_format: bool,
    pub filetype: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Bare,
    Long,
    Filetype,
    Combined,
}

impl ListingOptions {
    #[must_use]
    pub fn mode(&self) -> Mode {
        match (self.long_format, self.filetype) {
            (true, true) => Mode::Combined,
            (true, false) => Mode::Long,
            (false, true) => Mode::Filetype,
            (false, false) => Mode::Bare,
        }
    }
}

/// Produces the output lines for the selected mode.
///
/// Combined mode gathers detail and suffix in a single pass, so each line's
/// suffix always belongs to the entry on that line.
pub fn render(opts: &ListingOptions) -> Result<Vec<String>, ListError> {
    let dirname = opts.dirname.as_str();
    let mode = opts.mode();
    log::debug!("Listing '{dirname}' in {mode:?} mode");

    let lines = match mode {
        Mode::Combined => scan_entries(dirname)?
            .iter()
            .map(|entry| {
                let mut line = format_detail_line(&entry.detail);
                if let Some(suffix) = entry.kind.suffix() {
                    line.push(suffix);
                }
                line
            })
            .collect(),
        Mode::Long => format_detailed_listing(&list_files_with_details(dirname)?),
        Mode::Filetype => list_files_with_classification(dirname)?,
        Mode::Bare => list_files_in_directory(dirname)?,
    };
    Ok(lines)
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    List(#[from] ListError),
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Writes the listing to `out`.
///
/// A missing or unreadable directory is reported on `diag` and treated as an
/// empty listing; anything else is returned to the caller.
pub fn run<W: Write, D: Write>(
    opts: &ListingOptions,
    out: &mut W,
    diag: &mut D,
) -> Result<(), RunError> {
    let lines = match render(opts) {
        Ok(lines) => lines,
        Err(e) if e.is_recoverable() => {
            writeln!(diag, "{e}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

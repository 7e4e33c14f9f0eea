use crate::error::{EngineError, Result};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Name used for standard input in diagnostics and output.
pub const STDIN_NAME: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Path(PathBuf),
}

/// Something to count, and the name to print next to its counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub source: Source,
    /// `None` when stdin is read implicitly; nothing is printed after the counts then.
    pub name: Option<String>,
}

impl Input {
    /// Standard input read because no operand was given.
    #[must_use]
    pub const fn implicit_stdin() -> Self {
        Self {
            source: Source::Stdin,
            name: None,
        }
    }

    /// `-` is standard input, anything else a path.
    #[must_use]
    pub fn from_operand(operand: &str) -> Self {
        let source = if operand == STDIN_NAME {
            Source::Stdin
        } else {
            Source::Path(PathBuf::from(operand))
        };
        Self {
            source,
            name: Some(operand.to_owned()),
        }
    }

    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self.source, Source::Stdin)
    }

    /// Name for diagnostics, falling back to `-` for implicit stdin.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(STDIN_NAME)
    }
}

/// Reads a NUL-terminated list of input names.
///
/// The outer `Result` fails when the list cannot be read at all; entry-level
/// problems (empty names, `-` inside a list read from stdin) are returned in
/// place so the remaining names are still counted.
///
/// # Errors
/// Returns [`EngineError::FilesFrom`] if the list cannot be opened or read.
pub fn read_files0(list: &Input) -> Result<Vec<Result<Input>>> {
    let list_name = list.display_name().to_owned();
    let to_err = |source: io::Error| EngineError::FilesFrom {
        name: list_name.clone(),
        source,
    };

    let mut raw = Vec::new();
    match &list.source {
        Source::Stdin => {
            io::stdin().lock().read_to_end(&mut raw).map_err(to_err)?;
        }
        Source::Path(path) => {
            File::open(path)
                .and_then(|mut f| f.read_to_end(&mut raw))
                .map_err(to_err)?;
        }
    }

    let entries = parse_files0(&raw, &list_name, list.is_stdin());
    log::debug!("read {} names from {list_name}", entries.len());
    Ok(entries)
}

/// Splits `raw` on NUL bytes. A trailing terminator does not yield an empty entry.
#[must_use]
pub fn parse_files0(raw: &[u8], list_name: &str, from_stdin: bool) -> Vec<Result<Input>> {
    if raw.is_empty() {
        return Vec::new();
    }

    let body = raw.strip_suffix(b"\0").unwrap_or(raw);
    body.split(|&b| b == 0)
        .enumerate()
        .map(|(i, name)| {
            if name.is_empty() {
                return Err(EngineError::EmptyFileName {
                    list: list_name.to_owned(),
                    index: i + 1,
                });
            }
            if from_stdin && name == STDIN_NAME.as_bytes() {
                return Err(EngineError::StdinInFilesFromStdin);
            }
            Ok(Input {
                source: Source::Path(PathBuf::from(os_string_from_bytes(name))),
                name: Some(String::from_utf8_lossy(name).into_owned()),
            })
        })
        .collect()
}

#[cfg(unix)]
fn os_string_from_bytes(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::OsStr::from_bytes(bytes).to_os_string()
}

#[cfg(not(unix))]
fn os_string_from_bytes(bytes: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(bytes).into_owned())
}

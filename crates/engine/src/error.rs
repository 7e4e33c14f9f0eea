use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{name}: {}", describe_io(.source))]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot open '{name}' for reading: {}", describe_io(.source))]
    FilesFrom {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{list}:{index}: invalid zero-length file name")]
    EmptyFileName { list: String, index: usize },

    #[error("when reading file names from standard input, no file name of '-' allowed")]
    StdinInFilesFromStdin,
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// The system message of an I/O error, without the `(os error N)` suffix.
fn describe_io(err: &io::Error) -> String {
    let text = err.to_string();
    if let Some(code) = err.raw_os_error()
        && let Some(message) = text.strip_suffix(&format!(" (os error {code})"))
    {
        return message.to_owned();
    }
    text
}

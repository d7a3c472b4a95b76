use std::io;
use std::path::PathBuf;

/// Everything that can stop a run. All variants are fatal.
#[derive(Debug, thiserror::Error)]
pub enum FreqError {
    #[error("Fatal: incorrect arguments.\nusage: $ {program} file-to-analyze")]
    Usage { program: String },
    #[error("Fatal: cannot open file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Fatal: cannot write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, FreqError>;

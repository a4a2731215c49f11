use crate::bytecode::{CompileError, UnsupportedInstruction};
use crate::runtime::RuntimeError;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Anything that aborts a `tapec` run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("cannot read '{}': {source}", .path.display())]
    ReadSource { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

impl Error {
    /// The `,` that stopped either backend, if that is what happened.
    pub fn unsupported(&self) -> Option<&UnsupportedInstruction> {
        match self {
            Error::Compile(CompileError::Unsupported(u)) => Some(u),
            Error::Runtime(RuntimeError::Unsupported(u)) => Some(u),
            _ => None,
        }
    }
}

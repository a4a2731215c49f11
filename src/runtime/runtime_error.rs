use crate::bytecode::UnsupportedInstruction;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("runtime error: {0}")]
    Unsupported(#[from] UnsupportedInstruction),

    /// The pointer left the tape and the current instruction touched the cell.
    #[error("runtime error: cell {pointer} is outside the tape (instruction {ip:04})")]
    PointerOutOfRange { pointer: isize, ip: usize },

    #[error("runtime error: execution step limit exceeded ({0})")]
    StepLimitExceeded(u64),

    #[error("runtime error: cannot write output: {0}")]
    Io(#[from] io::Error),
}

impl RuntimeError {
    pub fn out_of_range(pointer: usize, ip: usize) -> Self {
        RuntimeError::PointerOutOfRange {
            // a pointer that walked left of cell 0 has wrapped; show it signed
            pointer: pointer as isize,
            ip,
        }
    }
}

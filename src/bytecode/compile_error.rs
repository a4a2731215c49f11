/// A `,` reached a backend. Reading input is part of the language but neither
/// the interpreter nor the C generator implements it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported instruction: READ at {index:04} (input is not implemented)")]
pub struct UnsupportedInstruction {
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A `]` with nothing open on the loop stack
    #[error("compile error: missing loop start for ']' at instruction {index:04}")]
    UnmatchedLoopEnd { index: usize },

    /// A `[` still open after the whole program was read
    #[error("compile error: missing loop end for '[' at instruction {index:04}")]
    UnmatchedLoopStart { index: usize },

    #[error("compile error: {0}")]
    Unsupported(#[from] UnsupportedInstruction),
}

impl CompileError {
    pub fn missing_loop_start(index: usize) -> Self {
        CompileError::UnmatchedLoopEnd { index }
    }

    pub fn missing_loop_end(index: usize) -> Self {
        CompileError::UnmatchedLoopStart { index }
    }

    pub fn unsupported(index: usize) -> Self {
        CompileError::Unsupported(UnsupportedInstruction { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_loop_start_display() {
        let err = CompileError::missing_loop_start(7);

        let msg = err.to_string();
        assert!(msg.contains("missing loop start"));
        assert!(msg.contains("0007"));
        assert!(matches!(err, CompileError::UnmatchedLoopEnd { index: 7 }));
    }

    #[test]
    fn test_missing_loop_end_display() {
        let err = CompileError::missing_loop_end(0);

        let msg = err.to_string();
        assert!(msg.contains("missing loop end"));
        assert!(matches!(err, CompileError::UnmatchedLoopStart { index: 0 }));
    }

    #[test]
    fn test_unsupported_display() {
        let err = CompileError::unsupported(3);

        let msg = err.to_string();
        assert!(msg.starts_with("compile error:"));
        assert!(msg.contains("READ"));
        assert!(msg.contains("not implemented"));
    }

    #[test]
    fn test_unsupported_from() {
        let err: CompileError = UnsupportedInstruction { index: 2 }.into();
        assert_eq!(err, CompileError::unsupported(2));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = CompileError::missing_loop_end(1);
        let _: &dyn std::error::Error = &err;
    }
}

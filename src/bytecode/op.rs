use serde::{Deserialize, Serialize};

// =============================================================================
// INSTRUCTION - one step of a compiled tape program
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Shift the tape pointer by the operand.
    Move(i32),
    /// Add the operand to the current cell, wrapping at 8 bits.
    Mod(i32),

    // ==========================================================================
    // Loops: operand is a placeholder (0) until the loop resolver runs,
    // afterwards it is the index of the matching counterpart.
    // ==========================================================================
    /// Jump past the matching `LoopClose` when the current cell is zero.
    LoopOpen(usize),
    /// Jump back to the matching `LoopOpen` when the current cell is nonzero.
    LoopClose(usize),

    // ==========================================================================
    // Produced by the peephole optimizer only
    // ==========================================================================
    /// Store a literal in the current cell (`[-]`, optionally followed by `+`/`-`).
    SetCell(i32),
    /// Stride the pointer by the operand until the current cell is zero (`[>]`, `[<<]`, ...).
    SearchZeroCell(i32),

    // I/O
    Print,
    /// Declared by the language, rejected by both backends.
    Read,

    /// Sentinel appended by the loop resolver.
    End,
}

impl Instruction {
    /// Translate one source character. Anything that is not a command is a comment.
    pub fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '<' => Instruction::Move(-1),
            '>' => Instruction::Move(1),
            '-' => Instruction::Mod(-1),
            '+' => Instruction::Mod(1),
            '.' => Instruction::Print,
            ',' => Instruction::Read,
            '[' => Instruction::LoopOpen(0),
            ']' => Instruction::LoopClose(0),
            _ => return None,
        })
    }

    /// Upper-case mnemonic used by the disassembler and diagnostics.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Move(_) => "MOVE",
            Instruction::Mod(_) => "MOD",
            Instruction::LoopOpen(_) => "LOOP_OPEN",
            Instruction::LoopClose(_) => "LOOP_CLOSE",
            Instruction::SetCell(_) => "SET_CELL",
            Instruction::SearchZeroCell(_) => "SEARCH_ZERO",
            Instruction::Print => "PRINT",
            Instruction::Read => "READ",
            Instruction::End => "END",
        }
    }
}

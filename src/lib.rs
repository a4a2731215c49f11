//! # tapec
//!
//! Compiler for the eight-command tape language (`< > - + . , [ ]`).
//!
//! Source text is translated one instruction per command, rewritten by a
//! peephole optimizer, and loop-resolved into a [`Program`]. A program is then
//! either run by the [`Interpreter`] or turned into C by [`codegen::c::generate`].

pub mod bytecode;
pub mod codegen;
pub mod error;
pub mod frontend;
pub mod runtime;

pub use bytecode::{CompileError, Compiler, Instruction, Program};
pub use error::{Error, Result};
pub use runtime::{Interpreter, InterpreterConfig, RuntimeError};

/// Translate, optimize and resolve `source` with the default pipeline.
pub fn compile(source: &str) -> std::result::Result<Program, CompileError> {
    Compiler::new().compile(source)
}

/// Compile `source` and return the equivalent C program.
pub fn generate_c(source: &str) -> Result<String> {
    let program = compile(source)?;
    Ok(codegen::c::generate(&program)?)
}

use crate::bytecode::{Instruction, compile_error::CompileError, resolve::resolve_loops};
use serde::Serialize;
use std::ops::Deref;

/// A resolved instruction stream, ready for either backend.
///
/// Only [`Program::resolve`] builds one, so every `Program` ends in exactly one
/// `End` and its loop operands point at each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    ops: Vec<Instruction>,
}

impl Program {
    pub fn resolve(mut ops: Vec<Instruction>) -> Result<Self, CompileError> {
        resolve_loops(&mut ops)?;
        Ok(Self { ops })
    }

    pub fn ops(&self) -> &[Instruction] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<Instruction> {
        self.ops
    }
}

impl Deref for Program {
    type Target = [Instruction];

    fn deref(&self) -> &Self::Target {
        &self.ops
    }
}

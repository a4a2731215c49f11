use crate::{
    bytecode::{Program, compile_error::CompileError, optimize::optimize},
    frontend::lexer::Lexer,
};

/// Drives source text through translation, optimization and loop resolution.
pub struct Compiler {
    optimize: bool,
}

impl Default for Compiler {
    fn default() -> Self {
        Self { optimize: true }
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the one-instruction-per-command stream, e.g. to compare against
    /// the optimized program.
    pub fn without_optimizer(mut self) -> Self {
        self.optimize = false;
        self
    }

    pub fn compile(&self, source: &str) -> Result<Program, CompileError> {
        let mut ops = Lexer::new(source).translate();

        if self.optimize {
            ops = optimize(&ops);
        }

        Program::resolve(ops)
    }
}

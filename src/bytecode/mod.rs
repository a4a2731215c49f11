pub mod compile;
pub mod compile_error;
pub mod disasm;
pub mod ir;
pub mod op;
pub mod optimize;
pub mod resolve;

pub use compile::Compiler;
pub use compile_error::{CompileError, UnsupportedInstruction};
pub use ir::Program;
pub use op::Instruction;

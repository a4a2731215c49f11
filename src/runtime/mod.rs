pub mod interpreter;
pub mod runtime_error;

pub use interpreter::{Interpreter, InterpreterConfig, TAPE_LEN};
pub use runtime_error::RuntimeError;

pub mod lexer;
pub mod token_dumper;

pub use lexer::{Lexer, Span, Spanned};

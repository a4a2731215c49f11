use crate::bytecode::Instruction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub col: usize,
}

/// A command together with where it appeared in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    pub op: Instruction,
    pub span: Span,
}

/// Turns source text into instructions. Every character that is not one of
/// the eight commands is a comment, so lexing cannot fail.
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn current(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.current();
        if ch == Some('\n') {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        self.pos += 1;
        ch
    }

    fn span(&self) -> Span {
        Span {
            line: self.line,
            col: self.col,
        }
    }

    pub fn tokenize(&mut self) -> Vec<Spanned> {
        let mut tokens = Vec::new();

        loop {
            let span = self.span();
            let Some(ch) = self.advance() else {
                break;
            };

            if let Some(op) = Instruction::from_char(ch) {
                tokens.push(Spanned { op, span });
            }
        }

        tokens
    }

    /// The raw instruction stream, in source order, without positions.
    pub fn translate(mut self) -> Vec<Instruction> {
        let ops: Vec<Instruction> = self.tokenize().into_iter().map(|s| s.op).collect();
        log::debug!("translated {} source chars into {} instructions", self.source.len(), ops.len());
        ops
    }
}

use crate::bytecode::Instruction;
use crate::frontend::lexer::Spanned;
use std::fmt::Write;

pub struct TokenDumper {
    pub color: bool,
    pub show_debug_repr: bool, // if false, prints the source character instead
}

impl Default for TokenDumper {
    fn default() -> Self {
        Self {
            color: true,
            show_debug_repr: true,
        }
    }
}

impl TokenDumper {
    // ANSI colors
    const RESET: &'static str = "\x1b[0m";
    const GRN: &'static str = "\x1b[32m";
    const YEL: &'static str = "\x1b[33m";
    const CYN: &'static str = "\x1b[36m";
    const MAG: &'static str = "\x1b[35m";
    const RED: &'static str = "\x1b[31m";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_color(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.show_debug_repr = false;
        self
    }

    pub fn dump(&self, tokens: &[Spanned]) {
        print!("{}", self.render(tokens));
    }

    pub fn render(&self, tokens: &[Spanned]) -> String {
        let mut out = String::new();
        for s in tokens {
            self.render_one(&mut out, s);
        }
        out
    }

    fn render_one(&self, out: &mut String, s: &Spanned) {
        let line = s.span.line;
        let col = s.span.col;

        let kind = self.kind(&s.op);
        let colr = if self.color { self.color(&s.op) } else { "" };
        let reset = if self.color { Self::RESET } else { "" };

        // writing into a String cannot fail
        let _ = if self.show_debug_repr {
            writeln!(
                out,
                "[{:02}:{:02}] {}{:<8} {:?}{}",
                line, col, colr, kind, s.op, reset
            )
        } else {
            writeln!(
                out,
                "[{:02}:{:02}] {}{:<8} '{}'{}",
                line,
                col,
                colr,
                kind,
                source_char(&s.op),
                reset
            )
        };
    }

    fn kind(&self, op: &Instruction) -> &'static str {
        use Instruction::*;
        match op {
            Move(_) => "MOVE",
            Mod(_) => "MOD",
            LoopOpen(_) | LoopClose(_) => "LOOP",
            Print | Read => "IO",
            SetCell(_) | SearchZeroCell(_) | End => "SYNTH",
        }
    }

    fn color(&self, op: &Instruction) -> &'static str {
        use Instruction::*;
        match op {
            Move(_) => Self::YEL,
            Mod(_) => Self::CYN,
            LoopOpen(_) | LoopClose(_) => Self::MAG,
            Print => Self::GRN,
            Read => Self::RED,
            _ => Self::RESET,
        }
    }
}

fn source_char(op: &Instruction) -> char {
    use Instruction::*;
    match op {
        Move(n) if *n < 0 => '<',
        Move(_) => '>',
        Mod(n) if *n < 0 => '-',
        Mod(_) => '+',
        Print => '.',
        Read => ',',
        LoopOpen(_) => '[',
        LoopClose(_) => ']',
        // never produced by the lexer
        SetCell(_) | SearchZeroCell(_) | End => '?',
    }
}

use crate::bytecode::{CompileError, Instruction, Program, UnsupportedInstruction};
use crate::runtime::TAPE_LEN;
use std::fmt::{Display, Write};

/// Line-oriented text sink that indents by loop depth.
struct Emitter {
    out: String,
    depth: usize,
}

impl Emitter {
    const INDENT: &'static str = "  ";

    fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    fn line(&mut self, text: impl Display) {
        for _ in 0..self.depth {
            self.out.push_str(Self::INDENT);
        }
        // writing into a String cannot fail
        let _ = writeln!(self.out, "{}", text);
    }

    fn open(&mut self, text: impl Display) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }
}

/// Translate a resolved program into a freestanding C program.
///
/// The tape is `char memory[30000]`, the pointer a `size_t`. Loops become
/// `while` blocks, so the resolved jump targets are not used here; only their
/// nesting matters. Cell operands are written already wrapped to 8 bits.
pub fn generate(program: &Program) -> Result<String, CompileError> {
    let mut e = Emitter::new();

    e.line("#include <stdio.h>");
    e.line("#include <stdlib.h>");
    e.line("#include <string.h>");
    e.line("");
    e.open("int main(void) {");
    e.line(format_args!("char memory[{}];", TAPE_LEN));
    e.line("memset(memory, 0, sizeof(memory));");
    e.line("size_t pos = 0;");

    for (ip, op) in program.iter().enumerate() {
        match *op {
            Instruction::Move(n) => e.line(format_args!("pos += {};", n)),
            Instruction::Mod(n) => e.line(format_args!("memory[pos] += {};", n as i8)),
            Instruction::LoopOpen(_) => e.open("while (memory[pos] != 0) {"),
            Instruction::LoopClose(_) => e.close(),
            Instruction::SetCell(v) => e.line(format_args!("memory[pos] = {};", v as i8)),
            Instruction::SearchZeroCell(k) => {
                e.line(format_args!("while (memory[pos] != 0) {{ pos += {}; }}", k))
            }
            Instruction::Print => e.line("putchar(memory[pos]);"),
            Instruction::Read => return Err(UnsupportedInstruction { index: ip }.into()),
            Instruction::End => {}
        }
    }

    e.line("return 0;");
    e.close();

    log::debug!("generated {} bytes of C", e.out.len());
    Ok(e.out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::Compiler;

    fn gen_c(source: &str) -> Result<String, CompileError> {
        let program = Compiler::new().compile(source).expect("program should compile");
        generate(&program)
    }

    /// The statements between the prologue and `return 0;`.
    fn body(source: &str) -> Vec<String> {
        let text = gen_c(source).expect("generation should succeed");
        let lines: Vec<&str> = text.lines().collect();
        let start = lines
            .iter()
            .position(|l| l.trim() == "size_t pos = 0;")
            .expect("prologue")
            + 1;
        let end = lines
            .iter()
            .rposition(|l| l.trim() == "return 0;")
            .expect("epilogue");
        lines[start..end].iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_empty_program_is_complete() {
        let text = gen_c("").unwrap();
        assert_eq!(
            text,
            "#include <stdio.h>\n\
             #include <stdlib.h>\n\
             #include <string.h>\n\
             \n\
             int main(void) {\n  \
               char memory[30000];\n  \
               memset(memory, 0, sizeof(memory));\n  \
               size_t pos = 0;\n  \
               return 0;\n\
             }\n"
        );
    }

    #[test]
    fn test_arithmetic_and_print() {
        assert_eq!(
            body("+++>>-<."),
            vec![
                "  memory[pos] += 3;",
                "  pos += 2;",
                "  memory[pos] += -1;",
                "  pos += -1;",
                "  putchar(memory[pos]);",
            ]
        );
    }

    #[test]
    fn test_zero_merges_are_emitted() {
        assert_eq!(body("<>+-"), vec!["  pos += 0;", "  memory[pos] += 0;"]);
    }

    #[test]
    fn test_nested_loops_indent() {
        assert_eq!(
            body("+[>[.<]]"),
            vec![
                "  memory[pos] += 1;",
                "  while (memory[pos] != 0) {",
                "    pos += 1;",
                "    while (memory[pos] != 0) {",
                "      putchar(memory[pos]);",
                "      pos += -1;",
                "    }",
                "  }",
            ]
        );
    }

    #[test]
    fn test_idioms() {
        assert_eq!(
            body("[-]+++[<<]"),
            vec![
                "  memory[pos] = 3;",
                "  while (memory[pos] != 0) { pos += -2; }",
            ]
        );
    }

    #[test]
    fn test_cell_operands_wrapped() {
        let source = format!("{}[-]{}", "+".repeat(200), "+".repeat(300));
        assert_eq!(body(&source), vec!["  memory[pos] += -56;", "  memory[pos] = 44;"]);
    }

    #[test]
    fn test_read_is_unsupported() {
        let err = gen_c("+,").unwrap_err();
        assert_eq!(err, CompileError::unsupported(1));
    }

    #[test]
    fn test_read_inside_loop_still_rejected() {
        // generation is static, unlike interpretation
        assert!(matches!(gen_c("[,]"), Err(CompileError::Unsupported(_))));
    }
}

use crate::bytecode::{Instruction, Program};
use std::fmt::Write;

/// Print disassembly of a resolved program
pub fn print_program(program: &Program) {
    println!("════════════════════════════════════════");
    println!(" main");
    println!(" {} instructions", program.len());
    println!("════════════════════════════════════════");
    print!("{}", disassemble(program));
}

/// Disassemble a slice of instructions, one line per instruction.
///
/// Lines that some loop jumps to are preceded by a rule and marked with `►`.
pub fn disassemble(ops: &[Instruction]) -> String {
    let jump_targets = collect_jump_targets(ops);
    let mut out = String::new();

    for (ip, op) in ops.iter().enumerate() {
        let target = jump_targets.contains(&ip);
        if target {
            out.push_str("      ┌──────────────────────────────────\n");
        }

        let marker = if target { "► " } else { "  " };
        // writing into a String cannot fail
        let _ = writeln!(out, "{:04} {}{}", ip, marker, format_op(op, ip));
    }

    out
}

fn collect_jump_targets(ops: &[Instruction]) -> Vec<usize> {
    let mut targets = Vec::new();

    for op in ops {
        if let Instruction::LoopOpen(target) | Instruction::LoopClose(target) = op {
            // execution resumes after the counterpart
            let resume = target + 1;
            if !targets.contains(&resume) {
                targets.push(resume);
            }
        }
    }

    targets
}

fn format_op(op: &Instruction, ip: usize) -> String {
    let name = op.mnemonic();

    match op {
        Instruction::Move(n) => format!("{:<12}{:+}", name, n),
        Instruction::Mod(n) => format!("{:<12}{:+}", name, n),
        Instruction::SetCell(n) => format!("{:<12}{}", name, n),
        Instruction::SearchZeroCell(n) => format!("{:<12}{:+}   ; stride until cell == 0", name, n),

        Instruction::LoopOpen(target) => {
            let direction = if *target < ip { "↑" } else { "↓" };
            format!("{:<12}{} (→ {:04}) ; if cell == 0", name, direction, target)
        }
        Instruction::LoopClose(target) => {
            let direction = if *target < ip { "↑" } else { "↓" };
            format!("{:<12}{} (→ {:04}) ; if cell != 0", name, direction, target)
        }

        Instruction::Print => format!("{:<12}; ( cell -- )", name),
        Instruction::Read => format!("{:<12}; unsupported", name),
        Instruction::End => name.to_string(),
    }
}

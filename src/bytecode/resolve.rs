use crate::bytecode::{Instruction, compile_error::CompileError};

/// Pair every `LoopOpen` with its `LoopClose` and append the `End` sentinel.
///
/// Each bracket's operand is rewritten to the index of its counterpart, so the
/// backends can jump without searching. On error the vector is left partially
/// rewritten and must be discarded.
pub fn resolve_loops(ops: &mut Vec<Instruction>) -> Result<(), CompileError> {
    let mut open: Vec<usize> = Vec::new();

    for i in 0..ops.len() {
        match ops[i] {
            Instruction::LoopOpen(_) => open.push(i),
            Instruction::LoopClose(_) => {
                let start = open.pop().ok_or(CompileError::missing_loop_start(i))?;

                ops[start] = Instruction::LoopOpen(i);
                ops[i] = Instruction::LoopClose(start);
            }
            _ => {}
        }
    }

    if let Some(&start) = open.last() {
        return Err(CompileError::missing_loop_end(start));
    }

    ops.push(Instruction::End);
    log::debug!("resolved loops: {} instructions incl. END", ops.len());
    Ok(())
}

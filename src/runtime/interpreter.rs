use crate::bytecode::{Instruction, Program, UnsupportedInstruction};
use crate::runtime::runtime_error::RuntimeError;
use std::io::{self, Write};

/// Number of cells on the tape, shared with the C generator.
pub const TAPE_LEN: usize = 30_000;

#[derive(Debug, Clone, Default)]
pub struct InterpreterConfig {
    /// Abort after this many executed instructions (each scan stride counts as one).
    pub max_steps: Option<u64>,
}

/// Executes a resolved program against a zeroed tape of signed 8-bit cells.
///
/// The pointer moves without any bounds check; only an instruction that reads
/// or writes the cell under an off-tape pointer fails.
pub struct Interpreter<W: Write = io::Stdout> {
    tape: Vec<i8>,
    pointer: usize,
    out: W,
    config: InterpreterConfig,
    steps: u64,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self::with_config(out, InterpreterConfig::default())
    }

    pub fn with_config(out: W, config: InterpreterConfig) -> Self {
        Self {
            tape: vec![0; TAPE_LEN],
            pointer: 0,
            out,
            config,
            steps: 0,
        }
    }

    pub fn tape(&self) -> &[i8] {
        &self.tape
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn reset_execution_state(&mut self) {
        self.tape.fill(0);
        self.pointer = 0;
        self.steps = 0;
    }

    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        self.reset_execution_state();

        let ops = program.ops();
        let mut ip = 0;

        loop {
            self.check_limits()?;

            // `Program` ends in `End` and its loop targets are in range
            match ops[ip] {
                Instruction::Move(n) => self.shift(n),
                Instruction::Mod(n) => {
                    let cell = self.cell(ip)?;
                    *cell = cell.wrapping_add(n as i8);
                }
                Instruction::LoopOpen(target) => {
                    if *self.cell(ip)? == 0 {
                        ip = target;
                    }
                }
                Instruction::LoopClose(target) => {
                    if *self.cell(ip)? != 0 {
                        ip = target;
                    }
                }
                Instruction::SetCell(value) => *self.cell(ip)? = value as i8,
                Instruction::SearchZeroCell(stride) => {
                    while *self.cell(ip)? != 0 {
                        self.shift(stride);
                        self.check_limits()?;
                    }
                }
                Instruction::Print => {
                    let byte = *self.cell(ip)? as u8;
                    self.out.write_all(&[byte])?;
                    self.out.flush()?;
                }
                Instruction::Read => return Err(UnsupportedInstruction { index: ip }.into()),
                Instruction::End => break,
            }

            ip += 1;
        }

        log::debug!("program finished after {} steps", self.steps);
        Ok(())
    }

    fn shift(&mut self, by: i32) {
        self.pointer = self.pointer.wrapping_add_signed(by as isize);
    }

    fn cell(&mut self, ip: usize) -> Result<&mut i8, RuntimeError> {
        let pointer = self.pointer;
        self.tape
            .get_mut(pointer)
            .ok_or_else(|| RuntimeError::out_of_range(pointer, ip))
    }

    fn check_limits(&mut self) -> Result<(), RuntimeError> {
        self.steps += 1;

        if let Some(max) = self.config.max_steps {
            if self.steps > max {
                return Err(RuntimeError::StepLimitExceeded(max));
            }
        }

        Ok(())
    }
}

//! Peephole optimizer.
//!
//! One forward pass over the raw instruction stream with a lookback of at most
//! two pending instructions. Pending instructions have not been emitted yet, so
//! later input can still merge into them or collapse them into an idiom.
//!
//! Rules, checked in this order against each incoming `cur`:
//!
//! | prepre     | pre         | cur         | result                          |
//! |------------|-------------|-------------|---------------------------------|
//! |            | `Move(a)`   | `Move(b)`   | pre = `Move(a + b)`             |
//! |            | `Mod(a)`    | `Mod(b)`    | pre = `Mod(a + b)`              |
//! | `LoopOpen` | `Mod(-1)`   | `LoopClose` | drop prepre, pre = `SetCell(0)` |
//! | `LoopOpen` | `Move(k)`   | `LoopClose` | drop prepre, pre = `SearchZeroCell(k)` |
//! |            | `SetCell(v)`| `Mod(m)`    | pre = `SetCell(v + m)`          |
//!
//! The last rule is stated for any `v` so that `[-]+++` folds to `SetCell(3)`
//! even though the increments arrive one at a time. Anything else emits prepre
//! and shifts the window. Merges that sum to zero are kept as `Move(0)` /
//! `Mod(0)`.

use crate::bytecode::Instruction;

/// The pending instructions, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    #[default]
    Empty,
    One(Instruction),
    Two(Instruction, Instruction),
}

impl Window {
    fn with(prepre: Option<Instruction>, pre: Instruction) -> Self {
        match prepre {
            Some(prepre) => Window::Two(prepre, pre),
            None => Window::One(pre),
        }
    }

    fn split(self) -> (Option<Instruction>, Option<Instruction>) {
        match self {
            Window::Empty => (None, None),
            Window::One(pre) => (None, Some(pre)),
            Window::Two(prepre, pre) => (Some(prepre), Some(pre)),
        }
    }
}

#[derive(Debug, Default)]
pub struct Optimizer {
    window: Window,
    out: Vec<Instruction>,
}

impl Optimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Instructions already emitted; pending ones are still in the window.
    pub fn emitted(&self) -> &[Instruction] {
        &self.out
    }

    pub fn push(&mut self, cur: Instruction) {
        use Instruction::*;

        let (prepre, pre) = self.window.split();

        self.window = match (prepre, pre, cur) {
            (prepre, Some(Move(a)), Move(b)) => Window::with(prepre, Move(a.wrapping_add(b))),
            (prepre, Some(Mod(a)), Mod(b)) => Window::with(prepre, Mod(a.wrapping_add(b))),
            (Some(LoopOpen(_)), Some(Mod(-1)), LoopClose(_)) => Window::One(SetCell(0)),
            (Some(LoopOpen(_)), Some(Move(k)), LoopClose(_)) => Window::One(SearchZeroCell(k)),
            (prepre, Some(SetCell(v)), Mod(m)) => Window::with(prepre, SetCell(v.wrapping_add(m))),
            (prepre, pre, cur) => {
                if let Some(prepre) = prepre {
                    self.out.push(prepre);
                }
                match pre {
                    Some(pre) => Window::Two(pre, cur),
                    None => Window::One(cur),
                }
            }
        };
    }

    /// Flush the window and return the optimized stream.
    pub fn finish(mut self) -> Vec<Instruction> {
        let (prepre, pre) = self.window.split();
        self.out.extend(prepre);
        self.out.extend(pre);
        self.out
    }
}

pub fn optimize(input: &[Instruction]) -> Vec<Instruction> {
    let mut optimizer = Optimizer::new();
    for &op in input {
        optimizer.push(op);
    }
    let out = optimizer.finish();

    log::debug!("optimized {} -> {} instructions", input.len(), out.len());
    out
}

//! Property-based tests for the compilation pipeline using `proptest`.

use proptest::prelude::*;
use tapec::bytecode::optimize::optimize;
use tapec::frontend::lexer::Lexer;
use tapec::{Compiler, Instruction, Interpreter, InterpreterConfig, RuntimeError};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Arbitrary text: commands, comments and unbalanced brackets.
fn arb_source() -> impl Strategy<Value = String> {
    "[-+<>.,\\[\\]a-z \n]{0,64}"
}

/// Programs whose brackets always balance. No `,` so they can be executed.
fn arb_balanced() -> impl Strategy<Value = String> {
    let leaf = "[-+<>.]{0,8}";
    leaf.prop_recursive(4, 64, 4, |inner| {
        prop::collection::vec(
            prop_oneof![inner.clone(), inner.prop_map(|body| format!("[{}]", body))],
            1..4,
        )
        .prop_map(|parts| parts.concat())
    })
}

fn run_bounded(source: &str, optimize: bool) -> Result<Vec<u8>, RuntimeError> {
    let mut compiler = Compiler::new();
    if !optimize {
        compiler = compiler.without_optimizer();
    }
    let program = compiler.compile(source).expect("balanced program should compile");

    let config = InterpreterConfig {
        max_steps: Some(20_000),
    };
    let mut vm = Interpreter::with_config(Vec::new(), config);
    vm.run(&program)?;
    Ok(vm.into_output())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn optimizer_is_idempotent(source in arb_source()) {
        let once = optimize(&Lexer::new(&source).translate());
        let twice = optimize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn optimizer_never_grows(source in arb_source()) {
        let raw = Lexer::new(&source).translate();
        prop_assert!(optimize(&raw).len() <= raw.len());
    }

    #[test]
    fn translation_ignores_comments(source in arb_source()) {
        let commands: String = source.chars().filter(|c| "<>-+.,[]".contains(*c)).collect();
        prop_assert_eq!(Lexer::new(&source).translate(), Lexer::new(&commands).translate());
    }

    #[test]
    fn balanced_programs_resolve_symmetrically(source in arb_balanced()) {
        let program = Compiler::new().compile(&source).expect("balanced program should compile");

        for (i, op) in program.iter().enumerate() {
            match *op {
                Instruction::LoopOpen(j) => {
                    prop_assert!(j > i);
                    prop_assert_eq!(program[j], Instruction::LoopClose(i));
                }
                Instruction::LoopClose(j) => {
                    prop_assert!(j < i);
                    prop_assert_eq!(program[j], Instruction::LoopOpen(i));
                }
                _ => {}
            }
        }

        prop_assert_eq!(program.last(), Some(&Instruction::End));
        prop_assert_eq!(program.iter().filter(|op| **op == Instruction::End).count(), 1);
    }

    #[test]
    fn optimized_output_matches_unoptimized(source in arb_balanced()) {
        // The optimized program never needs more steps than the plain one, so
        // whenever the plain run finishes the optimized run must agree with it.
        if let Ok(expected) = run_bounded(&source, false) {
            let actual = run_bounded(&source, true);
            prop_assert!(actual.is_ok(), "optimized run failed: {:?}", actual);
            prop_assert_eq!(actual.unwrap(), expected);
        }
    }
}

// ---------------------------------------------------------------------------
// Fixed cases from the language reference
// ---------------------------------------------------------------------------

#[test]
fn unmatched_brackets_fail() {
    assert!(matches!(
        tapec::compile("+]"),
        Err(tapec::CompileError::UnmatchedLoopEnd { .. })
    ));
    assert!(matches!(
        tapec::compile("[+"),
        Err(tapec::CompileError::UnmatchedLoopStart { .. })
    ));
}

#[test]
fn generate_c_rejects_read() {
    let err = tapec::generate_c(",").unwrap_err();
    assert_eq!(err.unsupported().map(|u| u.index), Some(0));
}

//! Evaluator tests, split by feature.

mod gc_cycle;

use crate::environment::{new_environment, EnvRef};
use crate::gc::Gc;
use crate::lexer::Lexer;
use crate::object::Value;
use crate::parser::Parser;

/// Parses and evaluates `source` against a fresh top-level environment and
/// a collector with a threshold high enough not to trigger mid-test,
/// returning the inspected form of the result.
fn run(source: &str) -> String {
    let (value, gc) = eval(source);
    value.inspect(&gc)
}

fn eval(source: &str) -> (Value, Gc) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(), "unexpected parse errors: {:?}", parser.errors());

    let env: EnvRef = new_environment();
    let mut gc = Gc::new(10_000);
    let value = crate::eval::eval_program(&program, &env, &mut gc);
    (value, gc)
}

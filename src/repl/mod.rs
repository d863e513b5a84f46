//! The read-eval-print loop.
//!
//! Grounded in the broader Rust ecosystem's line-editing crate of choice
//! for small interpreters, [`rustyline`], rather than a hand-rolled
//! `stdin().lines()` loop: it gives history and basic editing for free.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::diagnostics;
use crate::environment::{new_environment, EnvRef};
use crate::gc::Gc;
use crate::lexer::Lexer;
use crate::object::{HeapObject, Value};
use crate::parser::Parser;

const PROMPT: &str = ">> ";

/// Runs the REPL against a persistent top-level environment until `exit`
/// is entered or the input stream ends.
pub fn run(gc_threshold: usize) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let env: EnvRef = new_environment();
    let mut gc = Gc::new(gc_threshold);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line == "exit" {
                    break;
                }
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();
                eval_line(line, &env, &mut gc);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn eval_line(line: &str, env: &EnvRef, gc: &mut Gc) {
    let mut parser = Parser::new(Lexer::new(line));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        diagnostics::report_parse_errors("<repl>", line, parser.errors());
        return;
    }

    let result = crate::eval::eval_program(&program, env, gc);
    if gc.should_collect() {
        gc.collect(env, result);
    }

    if result.is_error(gc) {
        diagnostics::report_eval_error("<repl>", line, result, gc);
        return;
    }

    if should_print(result, gc) {
        println!("{}", result.inspect(gc));
    }
}

/// Suppresses printing for `null` and function values; everything else
/// prints its inspected form.
fn should_print(value: Value, gc: &Gc) -> bool {
    if value.is_null() {
        return false;
    }
    match value {
        Value::Heap(h) => !matches!(gc.get(h), HeapObject::Function { .. }),
        _ => true,
    }
}

//! The recursive tree-walking evaluator.

mod builtins;
mod expr;

#[cfg(test)]
mod tests;

use crate::ast::{Program, Stmt};
use crate::environment::EnvRef;
use crate::gc::Gc;
use crate::object::Value;

/// Walks `program`'s statements in order against `env`, allocating through
/// `gc` and running a collection cycle after any top-level statement once
/// the live count reaches the collector's threshold.
///
/// A `return` at the top level yields its inner value directly (there's no
/// enclosing function to bubble past); an error value short-circuits the
/// whole program immediately.
pub fn eval_program(program: &Program, env: &EnvRef, gc: &mut Gc) -> Value {
    let mut result = Value::Null;
    for stmt in &program.statements {
        result = eval_statement(stmt, env, gc);

        if gc.should_collect() {
            gc.collect(env, result);
        }

        if result.is_error(gc) {
            return result;
        }
        if result.is_return(gc) {
            return result.unwrap_return(gc);
        }
    }
    result
}

fn eval_statement(stmt: &Stmt, env: &EnvRef, gc: &mut Gc) -> Value {
    match stmt {
        Stmt::Let { name, value } => {
            let evaluated = expr::eval_expr(value, env, gc);
            if evaluated.is_error(gc) {
                return evaluated;
            }
            env.borrow_mut().set(name.clone(), evaluated);
            Value::Null
        }
        Stmt::Return { value } => {
            let evaluated = expr::eval_expr(value, env, gc);
            if evaluated.is_error(gc) {
                return evaluated;
            }
            gc.alloc_return(evaluated)
        }
        Stmt::Expression(expr) => expr::eval_expr(expr, env, gc),
    }
}

/// Evaluates a block's statements, returning the first return-wrapper or
/// error *without unwrapping it* so nested blocks can bubble a `return` up
/// to the function-application boundary where it's unwrapped exactly once.
pub(super) fn eval_block(statements: &[Stmt], env: &EnvRef, gc: &mut Gc) -> Value {
    let mut result = Value::Null;
    for stmt in statements {
        result = eval_statement(stmt, env, gc);
        if result.is_error(gc) || result.is_return(gc) {
            return result;
        }
    }
    result
}

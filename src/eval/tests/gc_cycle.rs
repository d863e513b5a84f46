use crate::environment::new_environment;
use crate::gc::Gc;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// A collection cycle at any allowed trigger point must not change the
/// observable result, only how many live values are left behind.
#[test]
fn collection_mid_program_does_not_change_the_result() {
    let source = "let a = 1; let b = 2; let c = 3; let d = 4; a + b + c + d;";
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());

    let env = new_environment();
    let mut gc = Gc::new(1); // collect after every single statement
    let result = crate::eval::eval_program(&program, &env, &mut gc);
    assert_eq!(result.inspect(&gc), "10");
}

#[test]
fn a_low_threshold_actually_runs_collection_cycles() {
    let source = "let a = 1; let b = 2; let c = 3;";
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let env = new_environment();
    let mut gc = Gc::new(1);
    crate::eval::eval_program(&program, &env, &mut gc);
    assert!(gc.cycles_run() > 0);
}

#[test]
fn bindings_survive_a_collection_cycle_triggered_by_a_later_statement() {
    let source = "let kept = 42; let a = 1; let b = 2; let c = 3; let d = 4; kept;";
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let env = new_environment();
    let mut gc = Gc::new(2);
    let result = crate::eval::eval_program(&program, &env, &mut gc);
    assert_eq!(result.inspect(&gc), "42");
}

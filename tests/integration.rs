//! End-to-end tests for the Quill interpreter: lex -> parse -> evaluate a
//! whole program and assert on its inspected output, the way the compiler's
//! own `tests/integration.rs` builds-and-runs a whole Lak program.

use quill::ast::printer::program_to_string;
use quill::environment::new_environment;
use quill::eval::eval_program;
use quill::gc::Gc;
use quill::lexer::Lexer;
use quill::parser::Parser;

fn run(source: &str) -> String {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(), "unexpected parse errors: {:?}", parser.errors());

    let env = new_environment();
    let mut gc = Gc::new(100);
    let value = eval_program(&program, &env, &mut gc);
    value.inspect(&gc)
}

fn print_source(source: &str) -> String {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(), "unexpected parse errors: {:?}", parser.errors());
    program_to_string(&program)
}

// ===================
// End-to-end scenarios
// ===================

#[test]
fn scenario_integer_arithmetic() {
    assert_eq!(run("5 + 5 + 5 + 5 - 10;"), "10");
}

#[test]
fn scenario_if_else_with_comparison() {
    let source = "let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };";
    assert_eq!(run(source), "10");
}

#[test]
fn scenario_closures_build_an_adder() {
    let source = "let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(2);";
    assert_eq!(run(source), "4");
}

#[test]
fn scenario_map_over_an_array() {
    let source = "let map = fn(arr, f) { let iter = fn(arr, acc) { if (len(arr) == 0) { acc } else { iter(cdr(arr), push(acc, f(first(arr)))) } }; iter(arr, []); }; map([1,2,3,4], fn(x){ x*2 });";
    assert_eq!(run(source), "[2, 4, 6, 8]");
}

#[test]
fn scenario_string_concatenation() {
    assert_eq!(run(r#""Hello" + " " + "World!";"#), "Hello World!");
}

#[test]
fn scenario_type_mismatch_error() {
    assert_eq!(run("5 + true;"), "ERROR: type mismatch: INTEGER + BOOLEAN");
}

// ===================
// Parser precedence scenarios
// ===================

#[test]
fn precedence_prefix_minus_binds_tighter_than_star() {
    assert_eq!(print_source("-a * b;"), "((-a) * b)");
}

#[test]
fn precedence_left_associative_chain() {
    assert_eq!(
        print_source("a + b * c + d / e - f;"),
        "(((a + (b * c)) + (d / e)) - f)"
    );
}

#[test]
fn precedence_index_binds_tighter_than_product() {
    assert_eq!(
        print_source("a * [1, 2, 3, 4][b * c] * d;"),
        "((a * ([1, 2, 3, 4][(b * c)])) * d)"
    );
}

#[test]
fn precedence_call_arguments_each_fully_parenthesized() {
    assert_eq!(
        print_source("add(a * b[2], b[1], 2 * [1, 2][1]);"),
        "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"
    );
}

#[test]
fn precedence_bang_wraps_grouped_equality() {
    assert_eq!(print_source("!(true == true);"), "(!(true == true))");
}

// ===================
// Universal invariants and boundary behaviours
// ===================

#[test]
fn valid_programs_produce_no_parse_diagnostics() {
    let mut parser = Parser::new(Lexer::new("let x = 5; return x + 1;"));
    parser.parse_program();
    assert!(parser.errors().is_empty());
}

#[test]
fn determinism_same_expression_same_environment_same_result() {
    let source = "let f = fn(x) { x * 2 }; f(21);";
    assert_eq!(run(source), run(source));
}

#[test]
fn collection_does_not_change_observable_results() {
    let mut parser = Parser::new(Lexer::new("let a = 1; let b = 2; let c = 3; a + b + c;"));
    let program = parser.parse_program();
    let env = new_environment();
    let mut gc = Gc::new(1); // collects after every statement
    let value = eval_program(&program, &env, &mut gc);
    assert_eq!(value.inspect(&gc), "6");
}

#[test]
fn push_grows_length_by_one_without_mutating_input() {
    let source = "let arr = [1, 2]; let grown = push(arr, 3); [len(arr), len(grown)];";
    assert_eq!(run(source), "[2, 3]");
}

#[test]
fn cdr_of_push_has_the_original_elements() {
    assert_eq!(run("cdr(push([1, 2, 3], 4));"), "[2, 3, 4]");
}

#[test]
fn indexing_empty_or_out_of_range_is_null_not_an_error() {
    assert_eq!(run("[][0];"), "NULL");
    assert_eq!(run("[1, 2][10];"), "NULL");
}

#[test]
fn dividing_zero_by_nonzero_is_zero() {
    assert_eq!(run("0 / 3;"), "0");
}

#[test]
fn string_length_counts_bytes_not_code_points() {
    assert_eq!(run(r#"len("hello");"#), "5");
}

#[test]
fn bang_truthiness_table() {
    assert_eq!(run("!0;"), "true");
    assert_eq!(run("!1;"), "false");
    assert_eq!(run(r#"!"some string";"#), "false");
}

use crate::ast::Expr;
use crate::lexer::Lexer;
use crate::parser::Parser;

fn parse(source: &str) -> crate::ast::Program {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(), "unexpected errors: {:?}", parser.errors());
    program
}

#[test]
fn call_expression_parses_function_and_arguments() {
    let program = parse("add(1, 2 * 3, 4 + 5);");
    match &program.statements[0] {
        crate::ast::Stmt::Expression(Expr::Call { function, arguments }) => {
            assert!(matches!(**function, Expr::Identifier(ref name) if name == "add"));
            assert_eq!(arguments.len(), 3);
            assert!(matches!(arguments[0], Expr::IntLiteral(1)));
        }
        other => panic!("expected call expression, got {other:?}"),
    }
}

#[test]
fn call_expression_with_no_arguments() {
    let program = parse("noop();");
    match &program.statements[0] {
        crate::ast::Stmt::Expression(Expr::Call { arguments, .. }) => {
            assert!(arguments.is_empty());
        }
        other => panic!("expected call expression, got {other:?}"),
    }
}

#[test]
fn array_literal_parses_elements() {
    let program = parse("[1, 2 * 2, 3 + 3];");
    match &program.statements[0] {
        crate::ast::Stmt::Expression(Expr::ArrayLiteral { elements }) => {
            assert_eq!(elements.len(), 3);
            assert!(matches!(elements[0], Expr::IntLiteral(1)));
        }
        other => panic!("expected array literal, got {other:?}"),
    }
}

#[test]
fn empty_array_literal_parses() {
    let program = parse("[];");
    match &program.statements[0] {
        crate::ast::Stmt::Expression(Expr::ArrayLiteral { elements }) => {
            assert!(elements.is_empty());
        }
        other => panic!("expected array literal, got {other:?}"),
    }
}

#[test]
fn index_expression_parses_left_and_index() {
    let program = parse("myArray[1 + 1];");
    match &program.statements[0] {
        crate::ast::Stmt::Expression(Expr::Index { left, index }) => {
            assert!(matches!(**left, Expr::Identifier(ref name) if name == "myArray"));
            assert!(matches!(**index, Expr::Infix { .. }));
        }
        other => panic!("expected index expression, got {other:?}"),
    }
}

use crate::lexer::Lexer;
use crate::parser::Parser;

fn errors_for(source: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program();
    parser.errors().to_vec()
}

#[test]
fn missing_identifier_after_let_is_reported() {
    let errors = errors_for("let = 5;");
    assert!(!errors.is_empty());
    assert!(errors[0].contains("identifier"));
}

#[test]
fn missing_assign_after_let_name_is_reported() {
    let errors = errors_for("let x 5;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("`=`"));
}

#[test]
fn unbalanced_group_is_reported() {
    let errors = errors_for("(1 + 2;");
    assert!(!errors.is_empty());
    assert!(errors[0].contains("`)`"));
}

#[test]
fn unknown_prefix_token_is_reported() {
    let errors = errors_for(")");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("no prefix parse function"));
}

#[test]
fn parser_resynchronizes_after_an_error_instead_of_aborting() {
    // A malformed `let` does not stop the parser: it drops the bad
    // statement, advances token-by-token, and keeps going, including
    // diagnostics for whatever tokens it resynchronizes across.
    let errors = errors_for("let = 1; let = 2;");
    assert!(errors.len() >= 2);
    assert!(errors.iter().filter(|e| e.contains("identifier")).count() == 2);
}

#[test]
fn program_is_still_returned_when_errors_are_present() {
    let mut parser = Parser::new(Lexer::new("let x = 5; let = ; let y = 10;"));
    let program = parser.parse_program();
    assert!(!parser.errors().is_empty());
    // the well-formed statements around the bad one are still present
    assert!(program.statements.len() >= 2);
}

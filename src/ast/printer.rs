//! Fully parenthesized pretty-printer for the Quill AST.
//!
//! [`program_to_string`] is total on valid ASTs and serves as the canonical
//! oracle for parser precedence tests.

use super::{Block, Expr, Program, Stmt};

/// Renders a whole program in its canonical parenthesized surface form.
pub fn program_to_string(program: &Program) -> String {
    block_body_to_string(&program.statements)
}

fn block_body_to_string(statements: &[Stmt]) -> String {
    statements.iter().map(stmt_to_string).collect()
}

/// Renders a block's statements with no surrounding braces, used both by
/// `if`/function-literal printing here and by function value inspection.
pub fn block_to_string(block: &Block) -> String {
    block_body_to_string(&block.statements)
}

fn stmt_to_string(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Let { name, value } => format!("let {name} = {};", expr_to_string(value)),
        Stmt::Return { value } => format!("return {};", expr_to_string(value)),
        Stmt::Expression(expr) => expr_to_string(expr),
    }
}

/// Renders a single expression in its canonical parenthesized form.
pub fn expr_to_string(expr: &Expr) -> String {
    match expr {
        Expr::IntLiteral(value) => value.to_string(),
        Expr::BoolLiteral(value) => value.to_string(),
        Expr::StringLiteral(value) => format!("{value:?}"),
        Expr::Identifier(name) => name.clone(),
        Expr::Prefix { op, right } => format!("({}{})", op.as_str(), expr_to_string(right)),
        Expr::Infix { left, op, right } => format!(
            "({} {} {})",
            expr_to_string(left),
            op.as_str(),
            expr_to_string(right)
        ),
        Expr::If {
            condition,
            consequence,
            alternative,
        } => {
            let mut out = format!("if{} {}", expr_to_string(condition), block_to_string(consequence));
            if let Some(alt) = alternative {
                out.push_str(&format!("else{}", block_to_string(alt)));
            }
            out
        }
        Expr::FunctionLiteral { parameters, body } => {
            format!("fn({}) {}", parameters.join(", "), block_to_string(body))
        }
        Expr::Call { function, arguments } => format!(
            "{}({})",
            expr_to_string(function),
            arguments.iter().map(expr_to_string).collect::<Vec<_>>().join(", ")
        ),
        Expr::ArrayLiteral { elements } => format!(
            "[{}]",
            elements.iter().map(expr_to_string).collect::<Vec<_>>().join(", ")
        ),
        Expr::Index { left, index } => {
            format!("({}[{}])", expr_to_string(left), expr_to_string(index))
        }
    }
}

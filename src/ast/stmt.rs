//! Statement nodes for the Quill AST.

use super::Expr;

/// A single statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `let <name> = <value>;`
    Let { name: String, value: Expr },
    /// `return <value>;`
    Return { value: Expr },
    /// An expression evaluated for its value or side effect.
    Expression(Expr),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn let_stmt_holds_name_and_value() {
        let stmt = Stmt::Let {
            name: "x".to_string(),
            value: Expr::IntLiteral(5),
        };
        match stmt {
            Stmt::Let { name, value } => {
                assert_eq!(name, "x");
                assert!(matches!(value, Expr::IntLiteral(5)));
            }
            _ => panic!("expected Let"),
        }
    }
}

//! Expression nodes for the Quill AST.

use super::Block;

/// A prefix operator: `!` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    /// `!`
    Bang,
    /// `-`
    Minus,
}

impl PrefixOp {
    /// The surface-syntax lexeme for this operator, used by the printer.
    pub fn as_str(self) -> &'static str {
        match self {
            PrefixOp::Bang => "!",
            PrefixOp::Minus => "-",
        }
    }
}

/// An infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
}

impl InfixOp {
    /// The surface-syntax lexeme for this operator, used by the printer and
    /// by evaluator error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            InfixOp::Plus => "+",
            InfixOp::Minus => "-",
            InfixOp::Asterisk => "*",
            InfixOp::Slash => "/",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
        }
    }
}

/// An expression node.
///
/// Function literals carry their parameter list and body, but never an
/// environment: the environment is captured only at *evaluation* time, when
/// the function literal is evaluated into a runtime function value. The AST
/// node itself is environment-free.
#[derive(Debug, Clone)]
pub enum Expr {
    /// An integer literal, already parsed from its decimal lexeme.
    IntLiteral(i64),
    /// A boolean literal.
    BoolLiteral(bool),
    /// A string literal.
    StringLiteral(String),
    /// A variable reference.
    Identifier(String),
    /// A prefix expression: operator applied to one operand.
    Prefix { op: PrefixOp, right: Box<Expr> },
    /// An infix expression: operator applied to two operands.
    Infix {
        left: Box<Expr>,
        op: InfixOp,
        right: Box<Expr>,
    },
    /// An `if`/`else` expression. `alternative` is `None` when the `else`
    /// branch is omitted.
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    /// A function literal: parameter names and a body block.
    FunctionLiteral { parameters: Vec<String>, body: Block },
    /// A function call: a callee expression applied to argument
    /// expressions.
    Call { function: Box<Expr>, arguments: Vec<Expr> },
    /// An array literal.
    ArrayLiteral { elements: Vec<Expr> },
    /// An index expression: `left[index]`.
    Index { left: Box<Expr>, index: Box<Expr> },
}

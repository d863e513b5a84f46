use std::rc::Rc;

use super::builtins;
use crate::ast::{Expr, InfixOp, PrefixOp};
use crate::environment::{new_enclosed, EnvRef};
use crate::gc::Gc;
use crate::object::{BuiltinKind, HeapObject, Value};

pub(super) fn eval_expr(expr: &Expr, env: &EnvRef, gc: &mut Gc) -> Value {
    match expr {
        Expr::IntLiteral(value) => gc.alloc_integer(*value),
        Expr::BoolLiteral(value) => Value::Bool(*value),
        Expr::StringLiteral(value) => gc.alloc_string(value.clone()),
        Expr::Identifier(name) => eval_identifier(name, env, gc),
        Expr::Prefix { op, right } => eval_prefix(*op, right, env, gc),
        Expr::Infix { left, op, right } => eval_infix(*op, left, right, env, gc),
        Expr::If { condition, consequence, alternative } => {
            eval_if(condition, consequence, alternative.as_ref(), env, gc)
        }
        Expr::FunctionLiteral { parameters, body } => {
            gc.alloc_function(Rc::new(parameters.clone()), Rc::new(body.clone()), env.clone())
        }
        Expr::Call { function, arguments } => eval_call(function, arguments, env, gc),
        Expr::ArrayLiteral { elements } => eval_array_literal(elements, env, gc),
        Expr::Index { left, index } => eval_index(left, index, env, gc),
    }
}

fn eval_identifier(name: &str, env: &EnvRef, gc: &mut Gc) -> Value {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(kind) = BuiltinKind::lookup(name) {
        return gc.alloc_builtin(kind);
    }
    gc.alloc_error(format!("identifier not found: {name}"))
}

fn eval_prefix(op: PrefixOp, right: &Expr, env: &EnvRef, gc: &mut Gc) -> Value {
    let right = eval_expr(right, env, gc);
    if right.is_error(gc) {
        return right;
    }
    match op {
        PrefixOp::Bang => Value::Bool(!right.is_truthy(gc)),
        PrefixOp::Minus => match right {
            Value::Heap(h) => match gc.get(h) {
                HeapObject::Integer(n) => {
                    let n = *n;
                    gc.alloc_integer(-n)
                }
                _ => gc.alloc_error(format!("unknown operator: -{}", right.type_name(gc))),
            },
            _ => gc.alloc_error(format!("unknown operator: -{}", right.type_name(gc))),
        },
    }
}

fn eval_infix(op: InfixOp, left: &Expr, right: &Expr, env: &EnvRef, gc: &mut Gc) -> Value {
    let left = eval_expr(left, env, gc);
    if left.is_error(gc) {
        return left;
    }
    let right = eval_expr(right, env, gc);
    if right.is_error(gc) {
        return right;
    }

    match (as_integer(left, gc), as_integer(right, gc)) {
        (Some(l), Some(r)) => return eval_integer_infix(op, l, r, gc),
        _ => {}
    }

    if let (Value::Bool(l), Value::Bool(r)) = (left, right) {
        return match op {
            InfixOp::Eq => Value::Bool(l == r),
            InfixOp::NotEq => Value::Bool(l != r),
            _ => gc.alloc_error(format!(
                "unknown operator: {} {} {}",
                left.type_name(gc),
                op.as_str(),
                right.type_name(gc)
            )),
        };
    }

    match (as_string(left, gc), as_string(right, gc)) {
        (Some(l), Some(r)) if op == InfixOp::Plus => return gc.alloc_string(l + &r),
        (Some(_), Some(_)) => {
            return gc.alloc_error(format!("unknown operator: STRING {} STRING", op.as_str()))
        }
        _ => {}
    }

    if left.type_name(gc) != right.type_name(gc) {
        return gc.alloc_error(format!(
            "type mismatch: {} {} {}",
            left.type_name(gc),
            op.as_str(),
            right.type_name(gc)
        ));
    }

    gc.alloc_error(format!(
        "unknown operator: {} {} {}",
        left.type_name(gc),
        op.as_str(),
        right.type_name(gc)
    ))
}

fn as_integer(value: Value, gc: &Gc) -> Option<i64> {
    match value {
        Value::Heap(h) => match gc.get(h) {
            HeapObject::Integer(n) => Some(*n),
            _ => None,
        },
        _ => None,
    }
}

fn as_string(value: Value, gc: &Gc) -> Option<String> {
    match value {
        Value::Heap(h) => match gc.get(h) {
            HeapObject::String(s) => Some(s.clone()),
            _ => None,
        },
        _ => None,
    }
}

fn eval_integer_infix(op: InfixOp, l: i64, r: i64, gc: &mut Gc) -> Value {
    match op {
        InfixOp::Plus => gc.alloc_integer(l.wrapping_add(r)),
        InfixOp::Minus => gc.alloc_integer(l.wrapping_sub(r)),
        InfixOp::Asterisk => gc.alloc_integer(l.wrapping_mul(r)),
        InfixOp::Slash => {
            if r == 0 {
                gc.alloc_error("division by zero")
            } else {
                gc.alloc_integer(l.wrapping_div(r))
            }
        }
        InfixOp::Lt => Value::Bool(l < r),
        InfixOp::Gt => Value::Bool(l > r),
        InfixOp::Eq => Value::Bool(l == r),
        InfixOp::NotEq => Value::Bool(l != r),
    }
}

fn eval_if(
    condition: &Expr,
    consequence: &crate::ast::Block,
    alternative: Option<&crate::ast::Block>,
    env: &EnvRef,
    gc: &mut Gc,
) -> Value {
    let condition = eval_expr(condition, env, gc);
    if condition.is_error(gc) {
        return condition;
    }
    if condition.is_truthy(gc) {
        super::eval_block(&consequence.statements, env, gc)
    } else if let Some(alt) = alternative {
        super::eval_block(&alt.statements, env, gc)
    } else {
        Value::Null
    }
}

fn eval_call(function: &Expr, arguments: &[Expr], env: &EnvRef, gc: &mut Gc) -> Value {
    let callee = eval_expr(function, env, gc);
    if callee.is_error(gc) {
        return callee;
    }

    let mut args = Vec::with_capacity(arguments.len());
    for arg in arguments {
        let value = eval_expr(arg, env, gc);
        if value.is_error(gc) {
            return value;
        }
        args.push(value);
    }

    apply_function(callee, args, gc)
}

fn apply_function(callee: Value, args: Vec<Value>, gc: &mut Gc) -> Value {
    let Value::Heap(handle) = callee else {
        return gc.alloc_error(format!("not a function: {}", callee.type_name(gc)));
    };

    match gc.get(handle).clone() {
        HeapObject::Function { parameters, body, env } => {
            let call_env = new_enclosed(env);
            for (name, value) in parameters.iter().zip(args.into_iter()) {
                call_env.borrow_mut().set(name.clone(), value);
            }
            let result = super::eval_block(&body.statements, &call_env, gc);
            result.unwrap_return(gc)
        }
        HeapObject::Builtin(kind) => builtins::apply(kind, args, gc),
        _ => gc.alloc_error(format!("not a function: {}", callee.type_name(gc))),
    }
}

fn eval_array_literal(elements: &[Expr], env: &EnvRef, gc: &mut Gc) -> Value {
    let mut values = Vec::with_capacity(elements.len());
    for element in elements {
        let value = eval_expr(element, env, gc);
        if value.is_error(gc) {
            return value;
        }
        values.push(value);
    }
    gc.alloc_array(values)
}

fn eval_index(left: &Expr, index: &Expr, env: &EnvRef, gc: &mut Gc) -> Value {
    let left = eval_expr(left, env, gc);
    if left.is_error(gc) {
        return left;
    }
    let index = eval_expr(index, env, gc);
    if index.is_error(gc) {
        return index;
    }

    match (left, as_integer(index, gc)) {
        (Value::Heap(h), Some(i)) => match gc.get(h).clone() {
            HeapObject::Array(elements) => {
                if i >= 0 && (i as usize) < elements.len() {
                    elements[i as usize]
                } else {
                    Value::Null
                }
            }
            _ => gc.alloc_error(format!("index operator not supported: {}", left.type_name(gc))),
        },
        _ => gc.alloc_error(format!("index operator not supported: {}", left.type_name(gc))),
    }
}

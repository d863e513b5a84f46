//! Dispatch table for the six built-in functions.

use crate::gc::Gc;
use crate::object::{BuiltinKind, HeapObject, Value};

pub(super) fn apply(kind: BuiltinKind, args: Vec<Value>, gc: &mut Gc) -> Value {
    match kind {
        BuiltinKind::Len => len(args, gc),
        BuiltinKind::First => first(args, gc),
        BuiltinKind::Last => last(args, gc),
        BuiltinKind::Cdr => cdr(args, gc),
        BuiltinKind::Push => push(args, gc),
        BuiltinKind::Print => print(args, gc),
    }
}

fn wrong_arity(_name: &str, got: usize, want: usize, gc: &mut Gc) -> Value {
    gc.alloc_error(format!("wrong number of arguments. got={got}, want={want}"))
}

fn len(args: Vec<Value>, gc: &mut Gc) -> Value {
    if args.len() != 1 {
        return wrong_arity("len", args.len(), 1, gc);
    }
    match args[0] {
        Value::Heap(h) => match gc.get(h) {
            HeapObject::String(s) => gc.alloc_integer(s.len() as i64),
            HeapObject::Array(elements) => {
                let n = elements.len() as i64;
                gc.alloc_integer(n)
            }
            _ => {
                let type_name = args[0].type_name(gc);
                gc.alloc_error(format!("argument to `len` not supported, got {type_name}"))
            }
        },
        _ => {
            let type_name = args[0].type_name(gc);
            gc.alloc_error(format!("argument to `len` not supported, got {type_name}"))
        }
    }
}

fn first(args: Vec<Value>, gc: &mut Gc) -> Value {
    if args.len() != 1 {
        return wrong_arity("first", args.len(), 1, gc);
    }
    with_array(args[0], gc, |elements| elements.first().copied().unwrap_or(Value::Null))
}

fn last(args: Vec<Value>, gc: &mut Gc) -> Value {
    if args.len() != 1 {
        return wrong_arity("last", args.len(), 1, gc);
    }
    with_array(args[0], gc, |elements| elements.last().copied().unwrap_or(Value::Null))
}

fn cdr(args: Vec<Value>, gc: &mut Gc) -> Value {
    if args.len() != 1 {
        return wrong_arity("cdr", args.len(), 1, gc);
    }
    let Value::Heap(h) = args[0] else {
        let type_name = args[0].type_name(gc);
        return gc.alloc_error(format!("argument to `cdr` must be ARRAY, got {type_name}"));
    };
    let HeapObject::Array(elements) = gc.get(h) else {
        let type_name = args[0].type_name(gc);
        return gc.alloc_error(format!("argument to `cdr` must be ARRAY, got {type_name}"));
    };
    if elements.is_empty() {
        return Value::Null;
    }
    let rest = elements[1..].to_vec();
    gc.alloc_array(rest)
}

fn push(args: Vec<Value>, gc: &mut Gc) -> Value {
    if args.len() != 2 {
        return wrong_arity("push", args.len(), 2, gc);
    }
    let Value::Heap(h) = args[0] else {
        let type_name = args[0].type_name(gc);
        return gc.alloc_error(format!("argument to `push` must be ARRAY, got {type_name}"));
    };
    let HeapObject::Array(elements) = gc.get(h) else {
        let type_name = args[0].type_name(gc);
        return gc.alloc_error(format!("argument to `push` must be ARRAY, got {type_name}"));
    };
    let mut extended = elements.clone();
    extended.push(args[1]);
    gc.alloc_array(extended)
}

fn print(args: Vec<Value>, gc: &mut Gc) -> Value {
    for arg in &args {
        println!("{}", arg.inspect(gc));
    }
    Value::Null
}

fn with_array(value: Value, gc: &mut Gc, f: impl FnOnce(&[Value]) -> Value) -> Value {
    let Value::Heap(h) = value else {
        let type_name = value.type_name(gc);
        return gc.alloc_error(format!("argument must be ARRAY, got {type_name}"));
    };
    match gc.get(h) {
        HeapObject::Array(elements) => f(elements),
        _ => {
            let type_name = value.type_name(gc);
            gc.alloc_error(format!("argument must be ARRAY, got {type_name}"))
        }
    }
}

//! The mark phase: traversal from roots, idempotent on cycles.

use super::{Gc, Slot};
use crate::environment::EnvRef;
use crate::object::{HeapObject, Value};

/// Marks every binding reachable from `env`, then its outer chain. Safe to
/// call on the same environment more than once; redundant but not
/// infinite, since the values it marks are what actually stop recursion.
pub fn mark_env(gc: &mut Gc, env: &EnvRef) {
    let bindings: Vec<Value> = env.borrow().bindings().map(|(_, v)| v).collect();
    for value in bindings {
        mark_value(gc, value);
    }
    if let Some(outer) = env.borrow().outer().cloned() {
        mark_env(gc, &outer);
    }
}

/// Marks `value` and, for container/closure kinds, recurses into what it
/// holds. An already-marked handle is skipped, which is what makes a cycle
/// through a closure's captured environment terminate.
pub fn mark_value(gc: &mut Gc, value: Value) {
    let Value::Heap(handle) = value else { return };

    let already_marked = match &gc.slots[handle] {
        Slot::Occupied { marked, .. } => *marked,
        Slot::Free => return,
    };
    if already_marked {
        return;
    }

    enum Children {
        None,
        One(Value),
        Many(Vec<Value>),
        Env(EnvRef),
    }

    let children = {
        let Slot::Occupied { marked, object } = &mut gc.slots[handle] else {
            unreachable!()
        };
        *marked = true;
        match object {
            HeapObject::Return(inner) => Children::One(*inner),
            HeapObject::Array(elements) => Children::Many(elements.clone()),
            HeapObject::Function { env, .. } => Children::Env(env.clone()),
            HeapObject::Integer(_) | HeapObject::String(_) | HeapObject::Error(_) | HeapObject::Builtin(_) => {
                Children::None
            }
        }
    };

    match children {
        Children::None => {}
        Children::One(inner) => mark_value(gc, inner),
        Children::Many(elements) => {
            for element in elements {
                mark_value(gc, element);
            }
        }
        Children::Env(env) => mark_env(gc, &env),
    }
}

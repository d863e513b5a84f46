//! Lexical environments: name-to-value bindings with an outer-scope chain.
//!
//! Environments are not collector-owned heap values; they live by ordinary
//! reference counting, anchored by the evaluator's active frames and by
//! function values that capture them. An environment outlives every
//! function value that closes over it for exactly as long as `Rc` says it
//! should.

mod hash_table;

use std::cell::RefCell;
use std::rc::Rc;

use hash_table::HashTable;

use crate::object::Value;

/// A shared handle to an [`Environment`]. Cloning is cheap (refcount bump);
/// function values and nested scopes both hold one of these.
pub type EnvRef = Rc<RefCell<Environment>>;

pub struct Environment {
    table: HashTable,
    outer: Option<EnvRef>,
}

impl Environment {
    /// `get` first checks this scope's own table, then walks outward. A
    /// miss anywhere in the chain returns `None`; the caller (the
    /// evaluator) is the one that then consults the built-in table and
    /// finally gives up with an error.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.table.get(name) {
            return Some(value);
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds `name` in *this* scope, shadowing (but not mutating) any
    /// binding of the same name in an outer scope.
    pub fn set(&mut self, name: String, value: Value) {
        self.table.insert(name, value);
    }

    pub fn outer(&self) -> Option<&EnvRef> {
        self.outer.as_ref()
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, Value)> {
        self.table.iter()
    }
}

/// Creates an empty top-level environment with no outer scope.
pub fn new_environment() -> EnvRef {
    Rc::new(RefCell::new(Environment {
        table: HashTable::new(),
        outer: None,
    }))
}

/// Creates an empty environment enclosing `outer`, used on function
/// application to give each call its own parameter bindings.
pub fn new_enclosed(outer: EnvRef) -> EnvRef {
    Rc::new(RefCell::new(Environment {
        table: HashTable::new(),
        outer: Some(outer),
    }))
}

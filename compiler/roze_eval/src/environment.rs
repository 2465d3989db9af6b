//! Two-tier execution environment.
//!
//! The global tier holds named functions. It is filled once when a program
//! starts and shared by every activation. The local tier belongs to a single
//! function or pipeline-stage activation and has no parent: a function body
//! never sees its caller's locals.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use roze_ir::Name;

use crate::Value;

/// Error returned by the environment's fallible operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvError {
    /// Name is in neither tier.
    Undefined,
    /// Local assignment to a name held by the global tier.
    GlobalReassignment,
    /// A second global registration under the same name.
    DuplicateGlobal,
}

type Bindings = FxHashMap<Name, Value>;

/// Variables visible to one activation.
#[derive(Debug, Default)]
pub struct Environment {
    /// Shared by every activation of one program run.
    global: Rc<RefCell<Bindings>>,
    local: Bindings,
}

impl Environment {
    /// An environment with empty global and local tiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh activation: same global tier, empty local tier.
    pub fn child(&self) -> Self {
        Environment {
            global: Rc::clone(&self.global),
            local: Bindings::default(),
        }
    }

    /// Look up `name`, global tier first.
    pub fn get(&self, name: Name) -> Result<Value, EnvError> {
        self.lookup(name).ok_or(EnvError::Undefined)
    }

    /// Like [`get`](Self::get), without the error.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.global.borrow().get(&name) {
            return Some(value.clone());
        }
        self.local.get(&name).cloned()
    }

    pub fn is_global(&self, name: Name) -> bool {
        self.global.borrow().contains_key(&name)
    }

    /// Bind or rebind `name` in the local tier.
    pub fn set_local(&mut self, name: Name, value: Value) -> Result<(), EnvError> {
        if self.is_global(name) {
            return Err(EnvError::GlobalReassignment);
        }
        self.local.insert(name, value);
        Ok(())
    }

    /// Register a global. Each name may be registered once.
    pub fn set_global(&mut self, name: Name, value: Value) -> Result<(), EnvError> {
        let mut global = self.global.borrow_mut();
        if global.contains_key(&name) {
            return Err(EnvError::DuplicateGlobal);
        }
        global.insert(name, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests;

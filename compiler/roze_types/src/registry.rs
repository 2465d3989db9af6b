//! Name to type map for one compilation.

use rustc_hash::FxHashMap;
use roze_ir::Name;

use crate::Type;

/// Outcome of recording an assignment's type.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Recorded {
    /// First assignment to the name.
    New,
    /// Same type as before, or `Unknown` on either side.
    Unchanged,
    /// Previously `Unknown`, now fixed to a concrete type.
    Refined,
    /// A concrete type different from the one already fixed.
    Conflict { existing: Type },
}

/// Types of named variables, mutated only by the compiler.
///
/// Once a name has a concrete type, assigning a different concrete type is
/// a conflict. `Unknown` on either side defers the check to run time.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    types: FxHashMap<Name, Type>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: Name) -> Option<Type> {
        self.types.get(&name).copied()
    }

    /// Type of `name`, or `Unknown` when it has none recorded.
    pub fn type_of(&self, name: Name) -> Type {
        self.get(name).unwrap_or(Type::Unknown)
    }

    /// Record that `name` is assigned a value of type `ty`.
    ///
    /// On conflict the existing entry is kept.
    pub fn record(&mut self, name: Name, ty: Type) -> Recorded {
        match self.types.get(&name).copied() {
            None => {
                self.types.insert(name, ty);
                Recorded::New
            }
            Some(existing) if existing == ty || ty.is_unknown() => Recorded::Unchanged,
            Some(Type::Unknown) => {
                tracing::trace!(?name, %ty, "refined unknown variable type");
                self.types.insert(name, ty);
                Recorded::Refined
            }
            Some(existing) => Recorded::Conflict { existing },
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

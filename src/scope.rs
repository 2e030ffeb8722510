//! Lexical block scope.
//!
//! [`BlockScope`] tracks the local variables visible while analyzing one
//! function body: declaration with stack-slot allocation, nested block
//! depths, and name resolution. Identifier analysis is its only consumer.

use rustc_hash::FxHashMap;

use crate::error::SemanticError;
use crate::location::Location;
use crate::types::ValueType;

/// A declared local variable.
#[derive(Debug, Clone)]
pub struct LocalVar {
    /// Variable name.
    pub name: String,
    /// Variable type.
    pub ty: ValueType,
    /// Stack slot index.
    pub slot: u32,
    /// Block depth where declared (0 = function scope).
    pub depth: u32,
    /// Where the variable was declared.
    pub location: Location,
}

/// The local scope for one function body.
#[derive(Debug, Default)]
pub struct BlockScope {
    variables: FxHashMap<String, LocalVar>,
    depth: u32,
    next_slot: u32,
}

impl BlockScope {
    /// Create an empty function-level scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a nested block.
    pub fn push_block(&mut self) {
        self.depth += 1;
    }

    /// Leave the current block, dropping variables declared in it.
    pub fn pop_block(&mut self) {
        debug_assert!(self.depth > 0, "pop_block at function scope");
        self.variables.retain(|_, var| var.depth < self.depth);
        self.depth = self.depth.saturating_sub(1);
    }

    /// Declare a variable in the current block.
    ///
    /// Declaring a name that is already visible is an error; Rill does not
    /// allow shadowing within one function body.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        ty: ValueType,
        location: Location,
    ) -> Result<u32, SemanticError> {
        let name = name.into();
        if self.variables.contains_key(&name) {
            return Err(SemanticError::Redeclaration { name, location });
        }
        let slot = self.next_slot;
        self.next_slot += 1;
        self.variables.insert(
            name.clone(),
            LocalVar {
                name,
                ty,
                slot,
                depth: self.depth,
                location,
            },
        );
        Ok(slot)
    }

    /// Resolve a name to its declaration, if visible.
    pub fn resolve(&self, name: &str) -> Option<&LocalVar> {
        self.variables.get(name)
    }

    /// Number of stack slots this scope has allocated so far.
    pub fn slot_count(&self) -> u32 {
        self.next_slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Primitive;

    #[test]
    fn declare_and_resolve() {
        let mut scope = BlockScope::new();
        let slot = scope
            .declare("x", ValueType::reference("Widget"), Location::default())
            .unwrap();
        assert_eq!(slot, 0);

        let var = scope.resolve("x").unwrap();
        assert_eq!(var.ty, ValueType::reference("Widget"));
        assert_eq!(var.slot, 0);
        assert!(scope.resolve("y").is_none());
    }

    #[test]
    fn redeclaration_rejected() {
        let mut scope = BlockScope::new();
        scope
            .declare("x", ValueType::Primitive(Primitive::Int), Location::default())
            .unwrap();
        let err = scope
            .declare("x", ValueType::Primitive(Primitive::Int), Location::new(2, 1, 1))
            .unwrap_err();
        assert!(matches!(err, SemanticError::Redeclaration { .. }));
    }

    #[test]
    fn block_variables_dropped_on_pop() {
        let mut scope = BlockScope::new();
        scope
            .declare("outer", ValueType::Primitive(Primitive::Int), Location::default())
            .unwrap();

        scope.push_block();
        scope
            .declare("inner", ValueType::Primitive(Primitive::Bool), Location::default())
            .unwrap();
        assert!(scope.resolve("inner").is_some());
        scope.pop_block();

        assert!(scope.resolve("inner").is_none());
        assert!(scope.resolve("outer").is_some());
    }

    #[test]
    fn slots_are_sequential() {
        let mut scope = BlockScope::new();
        let a = scope
            .declare("a", ValueType::Primitive(Primitive::Int), Location::default())
            .unwrap();
        let b = scope
            .declare("b", ValueType::Primitive(Primitive::Int), Location::default())
            .unwrap();
        assert_eq!((a, b), (0, 1));
        assert_eq!(scope.slot_count(), 2);
    }
}

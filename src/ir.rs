//! The lowered intermediate representation.
//!
//! Analysis turns the AST into this tree. IR nodes carry resolved types and
//! source locations and have no further type-checking responsibility; the
//! code generator walks them directly. Once a node is attached to a parent
//! it is owned by that parent.
//!
//! A [`NullSafeNode`] tells the code generator: evaluate the wrapped child,
//! test for null, branch to "produce null" without evaluating anything
//! further in the enclosing chain, otherwise continue with the non-null
//! value. The wrapped type is validated as a reference type during
//! analysis, never here.

use crate::location::Location;
use crate::types::{TypeId, ValueType};

/// A lowered IR node.
#[derive(Debug, Clone, PartialEq)]
pub enum IrNode {
    /// A constant value.
    Constant(ConstantNode),
    /// Read a local variable slot.
    LoadLocal(LoadLocalNode),
    /// Read a field off a receiver.
    LoadField(LoadFieldNode),
    /// Invoke a method on a receiver.
    InvokeMethod(InvokeMethodNode),
    /// Widen a value to another primitive type.
    Cast(CastNode),
    /// Null-check guard around a member access.
    NullSafe(NullSafeNode),
}

impl IrNode {
    /// The resolved type of the value this node produces.
    pub fn ty(&self) -> ValueType {
        match self {
            Self::Constant(n) => n.ty,
            Self::LoadLocal(n) => n.ty,
            Self::LoadField(n) => n.ty,
            Self::InvokeMethod(n) => n.ty,
            Self::Cast(n) => n.ty,
            Self::NullSafe(n) => n.ty,
        }
    }

    /// The source location this node lowers.
    pub fn location(&self) -> Location {
        match self {
            Self::Constant(n) => n.location,
            Self::LoadLocal(n) => n.location,
            Self::LoadField(n) => n.location,
            Self::InvokeMethod(n) => n.location,
            Self::Cast(n) => n.location,
            Self::NullSafe(n) => n.location,
        }
    }
}

/// A constant value in the IR.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Int(i32),
    Long(i64),
    Double(f64),
    Bool(bool),
    Str(String),
    Null,
}

/// A constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantNode {
    /// The constant value.
    pub value: ConstantValue,
    /// Resolved type.
    pub ty: ValueType,
    /// Source location.
    pub location: Location,
}

/// A local variable read.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadLocalNode {
    /// Stack slot to read.
    pub slot: u32,
    /// Resolved type.
    pub ty: ValueType,
    /// Source location.
    pub location: Location,
}

/// A field read.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFieldNode {
    /// The receiver.
    pub object: Box<IrNode>,
    /// The class owning the field.
    pub class: TypeId,
    /// The field name.
    pub field: String,
    /// Resolved type of the field.
    pub ty: ValueType,
    /// Source location.
    pub location: Location,
}

/// A method invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeMethodNode {
    /// The receiver.
    pub object: Box<IrNode>,
    /// The class owning the method.
    pub class: TypeId,
    /// The method name.
    pub method: String,
    /// Lowered arguments, in call order.
    pub args: Vec<IrNode>,
    /// Resolved return type.
    pub ty: ValueType,
    /// Source location.
    pub location: Location,
}

/// A primitive widening conversion inserted during analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct CastNode {
    /// The value being widened.
    pub child: Box<IrNode>,
    /// The target type.
    pub ty: ValueType,
    /// Source location.
    pub location: Location,
}

/// A null-safe guard wrapping exactly one child.
#[derive(Debug, Clone, PartialEq)]
pub struct NullSafeNode {
    /// The guarded access.
    pub child: Box<IrNode>,
    /// Resolved type, adopted verbatim from the child.
    pub ty: ValueType,
    /// Source location of the guard.
    pub location: Location,
}

impl NullSafeNode {
    /// Wrap a lowered access in a guard, adopting the child's type.
    pub fn wrap(child: IrNode, location: Location) -> Self {
        let ty = child.ty();
        Self {
            child: Box::new(child),
            ty,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Primitive;

    fn int_constant(value: i32) -> IrNode {
        IrNode::Constant(ConstantNode {
            value: ConstantValue::Int(value),
            ty: ValueType::Primitive(Primitive::Int),
            location: Location::new(1, 1, 1),
        })
    }

    #[test]
    fn node_reports_type_and_location() {
        let node = int_constant(7);
        assert_eq!(node.ty(), ValueType::Primitive(Primitive::Int));
        assert_eq!(node.location(), Location::new(1, 1, 1));
    }

    #[test]
    fn guard_adopts_child_type() {
        let child = IrNode::LoadLocal(LoadLocalNode {
            slot: 0,
            ty: ValueType::reference("Widget"),
            location: Location::new(2, 5, 1),
        });
        let guard = NullSafeNode::wrap(child, Location::new(2, 5, 4));
        assert_eq!(guard.ty, ValueType::reference("Widget"));
        assert_eq!(guard.child.location(), Location::new(2, 5, 1));
    }
}

//! The Rill type model.
//!
//! A value in Rill is either a primitive (never nullable) or a reference to
//! a scripted/registered class (always nullable). [`ValueType`] encodes that
//! split as a closed sum so the two cases can never be confused, and
//! [`TypeId`] gives reference types a deterministic hash-based identity
//! computed from their qualified name.

use std::fmt;

use xxhash_rust::xxh64::xxh64;

/// Seed mixed into type-name hashes so identifiers for other entity
/// domains (methods, fields) can never collide with type identities.
const TYPE_SEED: u64 = 0x52494c4c_54595045; // "RILLTYPE"

/// A deterministic 64-bit identity for a reference type.
///
/// Computed from the qualified class name, so the same name always yields
/// the same id regardless of registration order. This allows forward
/// references and makes ids stable across compilations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeId(pub u64);

impl TypeId {
    /// Compute the id for a qualified type name.
    pub fn of(name: &str) -> Self {
        Self(xxh64(name.as_bytes(), TYPE_SEED))
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({:#018x})", self.0)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// A primitive type. Primitive values can never hold null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    /// The source-level name of this primitive.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Char => "char",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    /// Whether this primitive is numeric (participates in widening).
    pub fn is_numeric(self) -> bool {
        !matches!(self, Primitive::Bool)
    }

    /// Rank in the numeric widening order byte < short/char < int < long <
    /// float < double. `None` for bool, which never widens.
    fn widening_rank(self) -> Option<u8> {
        match self {
            Primitive::Bool => None,
            Primitive::Byte => Some(0),
            Primitive::Short | Primitive::Char => Some(1),
            Primitive::Int => Some(2),
            Primitive::Long => Some(3),
            Primitive::Float => Some(4),
            Primitive::Double => Some(5),
        }
    }

    /// Whether a value of this primitive implicitly widens to `target`.
    pub fn widens_to(self, target: Primitive) -> bool {
        match (self.widening_rank(), target.widening_rank()) {
            (Some(from), Some(to)) => from < to,
            _ => false,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The resolved type of an expression.
///
/// Exactly one of the two cases holds by construction: a [`Primitive`] can
/// never hold null, a `Reference` always can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A primitive value type.
    Primitive(Primitive),
    /// A reference to a registered class; nullable.
    Reference(TypeId),
}

impl ValueType {
    /// Convenience constructor for a reference type by class name.
    pub fn reference(name: &str) -> Self {
        ValueType::Reference(TypeId::of(name))
    }

    /// Whether values of this type can never be null.
    pub fn is_primitive(&self) -> bool {
        matches!(self, ValueType::Primitive(_))
    }

    /// Whether values of this type may be null.
    pub fn is_nullable(&self) -> bool {
        matches!(self, ValueType::Reference(_))
    }
}

impl From<Primitive> for ValueType {
    fn from(p: Primitive) -> Self {
        ValueType::Primitive(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_id_determinism() {
        assert_eq!(TypeId::of("Widget"), TypeId::of("Widget"));
        assert_ne!(TypeId::of("Widget"), TypeId::of("String"));
    }

    #[test]
    fn primitives_are_not_nullable() {
        let ty = ValueType::Primitive(Primitive::Int);
        assert!(ty.is_primitive());
        assert!(!ty.is_nullable());
    }

    #[test]
    fn references_are_nullable() {
        let ty = ValueType::reference("Widget");
        assert!(!ty.is_primitive());
        assert!(ty.is_nullable());
    }

    #[test]
    fn widening_order() {
        assert!(Primitive::Byte.widens_to(Primitive::Int));
        assert!(Primitive::Int.widens_to(Primitive::Long));
        assert!(Primitive::Int.widens_to(Primitive::Double));
        assert!(Primitive::Float.widens_to(Primitive::Double));
        assert!(!Primitive::Long.widens_to(Primitive::Int));
        assert!(!Primitive::Bool.widens_to(Primitive::Int));
        assert!(!Primitive::Int.widens_to(Primitive::Int));
    }

    #[test]
    fn char_and_short_share_rank() {
        // Neither widens to the other; both widen to int.
        assert!(!Primitive::Char.widens_to(Primitive::Short));
        assert!(!Primitive::Short.widens_to(Primitive::Char));
        assert!(Primitive::Char.widens_to(Primitive::Int));
    }
}

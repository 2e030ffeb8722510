//! Analysis inputs and outputs.
//!
//! [`AnalyzeInput`] describes what the surrounding context expects of an
//! expression; it is built fresh for every analyze call and discarded after.
//! [`AnalyzeOutput`] pairs the expression's resolved type with the IR it
//! lowered to. The type is non-optional, so a successful analysis always
//! has one.

use bitflags::bitflags;

use crate::ir::IrNode;
use crate::location::Location;
use crate::types::ValueType;

bitflags! {
    /// Structural context flags for one analyze call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AnalyzeFlags: u8 {
        /// The expression sits directly under a null-safe guard. An access
        /// analyzed with this flag must reject a primitive receiver, since
        /// a primitive can never be the null the guard tests for.
        const NULL_SAFE = 1 << 0;
    }
}

/// Read-only contextual expectations for one analyze call.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeInput {
    /// The type the surrounding context demands, if any. Drives implicit
    /// widening; absence means the expression's own type stands.
    pub expected: Option<ValueType>,
    /// Structural context flags.
    pub flags: AnalyzeFlags,
    /// Where the enclosing null-safe guard sits, when [`AnalyzeFlags::NULL_SAFE`]
    /// is set. Nullability errors raised against the guard report here.
    pub guard: Option<Location>,
}

impl AnalyzeInput {
    /// An input with no expectations.
    pub fn none() -> Self {
        Self::default()
    }

    /// An input expecting the given type.
    pub fn expecting(expected: ValueType) -> Self {
        Self {
            expected: Some(expected),
            flags: AnalyzeFlags::empty(),
            guard: None,
        }
    }

    /// An expectation-free input marking the child of a null-safe guard
    /// located at `guard`.
    pub fn guarded(guard: Location) -> Self {
        Self {
            expected: None,
            flags: AnalyzeFlags::NULL_SAFE,
            guard: Some(guard),
        }
    }

    /// Whether this analysis sits directly under a null-safe guard.
    pub fn is_guarded(&self) -> bool {
        self.flags.contains(AnalyzeFlags::NULL_SAFE)
    }
}

/// The result of analyzing one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeOutput {
    /// The expression's resolved type.
    pub actual: ValueType,
    /// The IR the expression lowered to.
    pub node: IrNode,
}

impl AnalyzeOutput {
    /// Pair a resolved type with its lowering.
    pub fn new(actual: ValueType, node: IrNode) -> Self {
        Self { actual, node }
    }
}

//! Null-safe guard analysis.
//!
//! Implements `guarded?.rest` semantics: if the receiver evaluates to null
//! at runtime the whole chain evaluates to null without evaluating the rest.
//! The guard itself is type-transparent - it adopts its child's resolved
//! type verbatim - and any node wrapping another while forwarding its type
//! follows this same shape: analyze the child, adopt and validate the type,
//! build the wrapping IR node.

use crate::analysis::{AnalyzeInput, AnalyzeOutput};
use crate::ast::NullSafeExpr;
use crate::error::SemanticError;
use crate::ir::{IrNode, NullSafeNode};

use super::{ExprAnalyzer, Result};

/// Analyze a null-safe guard.
///
/// The guard imposes no expected type on its child; any coercion belongs to
/// the child's own context. The adopted type must be a reference type: a
/// guarded chain may produce null, which a primitive can never hold.
pub fn analyze_null_safe(
    analyzer: &mut ExprAnalyzer<'_>,
    guard: &NullSafeExpr,
) -> Result<AnalyzeOutput> {
    let guarded = analyzer.analyze(&guard.guarded, AnalyzeInput::guarded(guard.location))?;

    let actual = guarded.actual;
    if actual.is_primitive() {
        return Err(SemanticError::InvalidNullability {
            message: format!(
                "result of null-safe operator must be nullable, found '{}'",
                analyzer.type_name(actual)
            ),
            location: guard.location,
        });
    }

    Ok(AnalyzeOutput::new(
        actual,
        IrNode::NullSafe(NullSafeNode::wrap(guarded.node, guard.location)),
    ))
}

//! Identifier analysis.
//!
//! Resolves a name through the active block scope to its declared type and
//! stack slot.

use crate::analysis::AnalyzeOutput;
use crate::ast::IdentExpr;
use crate::error::SemanticError;
use crate::ir::{IrNode, LoadLocalNode};

use super::{ExprAnalyzer, Result};

/// Analyze an identifier reference.
pub fn analyze_ident(analyzer: &mut ExprAnalyzer<'_>, ident: &IdentExpr) -> Result<AnalyzeOutput> {
    let var = analyzer
        .scope()
        .resolve(&ident.name)
        .ok_or_else(|| SemanticError::UndefinedVariable {
            name: ident.name.clone(),
            location: ident.location,
        })?;

    Ok(AnalyzeOutput::new(
        var.ty,
        IrNode::LoadLocal(LoadLocalNode {
            slot: var.slot,
            ty: var.ty,
            location: ident.location,
        }),
    ))
}

//! Expression analysis and lowering.
//!
//! [`ExprAnalyzer`] walks an AST expression bottom-up: children are analyzed
//! first, the node's own type is computed from the rules of its kind, and
//! the matching IR node is built. Dispatch is a single match over the closed
//! [`Expr`] sum, one submodule per expression kind:
//!
//! - [`literals`] - literal values
//! - [`identifiers`] - scope lookups
//! - [`member`] - field access and method calls
//! - [`null_safe`] - the null-safe guard
//!
//! When the caller supplies an expected type, analysis checks the resolved
//! type against it and inserts a widening [`CastNode`] where the primitive
//! widening rules allow; anything else is a type mismatch. Errors abort the
//! analysis of the current unit and propagate to the caller unchanged.

mod identifiers;
mod literals;
pub(crate) mod member;
mod null_safe;

use crate::analysis::{AnalyzeInput, AnalyzeOutput};
use crate::ast::Expr;
use crate::error::SemanticError;
use crate::ir::{CastNode, IrNode};
use crate::location::Location;
use crate::registry::ScriptRegistry;
use crate::scope::BlockScope;
use crate::types::ValueType;

type Result<T> = std::result::Result<T, SemanticError>;

/// Analyzes expressions and lowers them to IR.
///
/// Holds a shared reference to the whole-program registry and the active
/// block scope; neither is mutated during analysis. One analyzer serves one
/// compilation unit, start to finish, on a single thread.
pub struct ExprAnalyzer<'a> {
    /// Whole-program symbol registry, read-only during analysis.
    registry: &'a ScriptRegistry,
    /// The active lexical scope.
    scope: &'a BlockScope,
    /// Number of analyze dispatches performed. Each AST node is analyzed
    /// exactly once per compilation.
    nodes_analyzed: usize,
}

impl<'a> ExprAnalyzer<'a> {
    /// Create an analyzer over a registry and scope.
    pub fn new(registry: &'a ScriptRegistry, scope: &'a BlockScope) -> Self {
        Self {
            registry,
            scope,
            nodes_analyzed: 0,
        }
    }

    /// Analyze one expression under the given contextual input.
    ///
    /// Returns the expression's resolved type paired with its lowering, or
    /// the first rule violation found. Inputs are constructed fresh per
    /// call; nothing about them outlives the call.
    pub fn analyze(&mut self, expr: &Expr, input: AnalyzeInput) -> Result<AnalyzeOutput> {
        self.nodes_analyzed += 1;
        let output = match expr {
            Expr::Literal(lit) => literals::analyze_literal(self, lit, input)?,
            Expr::Ident(ident) => identifiers::analyze_ident(self, ident)?,
            Expr::Member(access) => member::analyze_member(self, access, input)?,
            Expr::NullSafe(guard) => null_safe::analyze_null_safe(self, guard)?,
        };
        self.apply_expectation(output, input, expr.location())
    }

    /// Check a resolved type against the input's expectation, inserting a
    /// widening cast where the primitive rules allow.
    fn apply_expectation(
        &self,
        output: AnalyzeOutput,
        input: AnalyzeInput,
        location: Location,
    ) -> Result<AnalyzeOutput> {
        let Some(expected) = input.expected else {
            return Ok(output);
        };
        if output.actual == expected {
            return Ok(output);
        }
        if let (ValueType::Primitive(from), ValueType::Primitive(to)) = (output.actual, expected)
            && from.widens_to(to)
        {
            return Ok(AnalyzeOutput::new(
                expected,
                IrNode::Cast(CastNode {
                    child: Box::new(output.node),
                    ty: expected,
                    location,
                }),
            ));
        }
        Err(SemanticError::TypeMismatch {
            message: format!(
                "expected '{}', got '{}'",
                self.type_name(expected),
                self.type_name(output.actual)
            ),
            location,
        })
    }

    /// The registry this analyzer resolves against.
    pub fn registry(&self) -> &'a ScriptRegistry {
        self.registry
    }

    /// The active scope.
    pub fn scope(&self) -> &'a BlockScope {
        self.scope
    }

    /// How many analyze dispatches have run.
    pub fn nodes_analyzed(&self) -> usize {
        self.nodes_analyzed
    }

    /// The display name of a type, for error messages.
    pub fn type_name(&self, ty: ValueType) -> String {
        self.registry.type_name(ty)
    }
}

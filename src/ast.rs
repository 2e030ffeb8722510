//! Expression AST nodes.
//!
//! The parser hands the analyzer one [`Expr`] per source construct. Nodes
//! own their children exclusively (a tree, never a DAG), and every node
//! records the [`Location`] the parser captured for diagnostics.
//!
//! A null-safe guard ([`NullSafeExpr`]) wraps the member access it protects;
//! the parser's chain grouping decides where each guard sits and analysis
//! preserves that grouping verbatim in the IR. The guarded child is required
//! at construction; the type makes a guard without one unrepresentable.

use crate::location::Location;

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal value.
    Literal(LiteralExpr),
    /// Identifier reference.
    Ident(IdentExpr),
    /// Member access via the dot operator.
    Member(MemberExpr),
    /// Null-safe guard around a member access.
    NullSafe(NullSafeExpr),
}

impl Expr {
    /// Get the location of this expression.
    pub fn location(&self) -> Location {
        match self {
            Self::Literal(e) => e.location,
            Self::Ident(e) => e.location,
            Self::Member(e) => e.location,
            Self::NullSafe(e) => e.location,
        }
    }

    /// Count the nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Literal(_) | Self::Ident(_) => 1,
            Self::Member(e) => {
                let args = match &e.access {
                    MemberAccess::Field(_) => 0,
                    MemberAccess::Method { args, .. } => {
                        args.iter().map(Expr::node_count).sum::<usize>()
                    }
                };
                1 + e.object.node_count() + args
            }
            Self::NullSafe(e) => 1 + e.guarded.node_count(),
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    /// The literal kind.
    pub kind: LiteralKind,
    /// Source location.
    pub location: Location,
}

/// The kind of literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralKind {
    /// Integer literal. Types as `int` when the value fits, else `long`.
    Int(i64),
    /// Floating-point literal.
    Double(f64),
    /// Boolean literal.
    Bool(bool),
    /// String literal.
    Str(String),
    /// Null literal.
    Null,
}

/// An identifier reference.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentExpr {
    /// The referenced name.
    pub name: String,
    /// Source location.
    pub location: Location,
}

/// A member access: `obj.field` or `obj.method(args)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    /// The receiver expression.
    pub object: Box<Expr>,
    /// What is being accessed.
    pub access: MemberAccess,
    /// Source location.
    pub location: Location,
}

/// What the dot operator accesses.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberAccess {
    /// Field access: `obj.field`.
    Field(String),
    /// Method call: `obj.method(args)`.
    Method {
        /// The method name.
        name: String,
        /// The call arguments.
        args: Vec<Expr>,
    },
}

/// A null-safe guard: `guarded` evaluates to null when its receiver is null,
/// without evaluating the rest of the access.
#[derive(Debug, Clone, PartialEq)]
pub struct NullSafeExpr {
    /// The member access guarded by the null check.
    pub guarded: Box<Expr>,
    /// Source location.
    pub location: Location,
}

impl NullSafeExpr {
    /// Wrap an access in a guard. The child is required by construction.
    pub fn new(guarded: Expr, location: Location) -> Self {
        Self {
            guarded: Box::new(guarded),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Expr {
        Expr::Ident(IdentExpr {
            name: name.to_string(),
            location: Location::new(1, 1, name.len() as u32),
        })
    }

    #[test]
    fn location_of_nested_access() {
        let loc = Location::new(1, 1, 6);
        let expr = Expr::Member(MemberExpr {
            object: Box::new(ident("a")),
            access: MemberAccess::Field("b".to_string()),
            location: loc,
        });
        assert_eq!(expr.location(), loc);
    }

    #[test]
    fn node_count_includes_arguments() {
        let call = Expr::Member(MemberExpr {
            object: Box::new(ident("a")),
            access: MemberAccess::Method {
                name: "f".to_string(),
                args: vec![ident("x"), ident("y")],
            },
            location: Location::default(),
        });
        assert_eq!(call.node_count(), 4);
    }

    #[test]
    fn guard_owns_its_child() {
        let guard = NullSafeExpr::new(ident("a"), Location::new(1, 1, 3));
        let expr = Expr::NullSafe(guard);
        assert_eq!(expr.node_count(), 2);
    }
}

//! Rill Semantic Analyzer
//!
//! Semantic analysis and IR lowering for the Rill scripting language.
//! Analysis is a single bidirectional pass over the parsed expression tree:
//! each node is visited exactly once, resolves its type against the script
//! registry and the enclosing scope, and lowers into a typed IR node.
//!
//! ## Modules
//!
//! - [`analysis`]: Per-node analysis inputs and outputs
//! - [`analyzer`]: Expression analyzer with bidirectional type checking
//! - [`ast`]: Parsed expression tree definitions
//! - [`error`]: Semantic error types
//! - [`ir`]: Typed IR produced by lowering
//! - [`location`]: Source locations for diagnostics
//! - [`registry`]: Script-visible classes, fields, and methods
//! - [`scope`]: Local variable scopes
//! - [`types`]: Value types and type identity

pub mod analysis;
pub mod analyzer;
pub mod ast;
pub mod error;
pub mod ir;
pub mod location;
pub mod registry;
pub mod scope;
pub mod types;

pub use analysis::{AnalyzeFlags, AnalyzeInput, AnalyzeOutput};
pub use analyzer::ExprAnalyzer;
pub use ast::{Expr, IdentExpr, LiteralExpr, LiteralKind, MemberAccess, MemberExpr, NullSafeExpr};
pub use error::SemanticError;
pub use ir::{ConstantValue, IrNode, NullSafeNode};
pub use location::Location;
pub use registry::{ClassEntry, FieldEntry, MethodEntry, ScriptRegistry};
pub use scope::{BlockScope, LocalVar};
pub use types::{Primitive, TypeId, ValueType};

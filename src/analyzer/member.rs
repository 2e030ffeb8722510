//! Member access analysis.
//!
//! Handles both faces of the dot operator:
//! - Field access: `obj.field`
//! - Method calls: `obj.method(args)`
//!
//! The receiver is analyzed first; the member is then resolved on the
//! receiver's class entry. Arguments are analyzed in check mode against the
//! resolved parameter types, so implicit widening happens per argument.
//!
//! Primitive receivers have no members. When the access sits directly under
//! a null-safe guard the rejection is a nullability error - a primitive can
//! never be the null the guard tests for - otherwise it is a plain type
//! error.

use crate::analysis::{AnalyzeInput, AnalyzeOutput};
use crate::ast::{MemberAccess, MemberExpr};
use crate::error::SemanticError;
use crate::ir::{InvokeMethodNode, IrNode, LoadFieldNode};
use crate::registry::ClassEntry;
use crate::types::{TypeId, ValueType};

use super::{ExprAnalyzer, Result};

/// Analyze a member access expression.
pub fn analyze_member(
    analyzer: &mut ExprAnalyzer<'_>,
    member: &MemberExpr,
    input: AnalyzeInput,
) -> Result<AnalyzeOutput> {
    let object = analyzer.analyze(&member.object, AnalyzeInput::none())?;

    let class_id = match object.actual {
        ValueType::Reference(id) => id,
        ValueType::Primitive(_) => {
            let type_name = analyzer.type_name(object.actual);
            return Err(if input.is_guarded() {
                SemanticError::InvalidNullability {
                    message: format!(
                        "result of null-safe operator must be nullable; \
                         receiver type '{type_name}' can never be null"
                    ),
                    // The violated rule belongs to the guard, so the error
                    // points there rather than at the access.
                    location: input.guard.unwrap_or(member.location),
                }
            } else {
                SemanticError::TypeMismatch {
                    message: format!("type '{type_name}' has no members"),
                    location: member.location,
                }
            });
        }
    };

    let class = analyzer
        .registry()
        .get_class(class_id)
        .ok_or_else(|| SemanticError::Internal {
            message: format!("receiver type {class_id} is not registered"),
        })?;

    match &member.access {
        MemberAccess::Field(name) => analyze_field(member, class, class_id, name, object),
        MemberAccess::Method { name, args } => {
            analyze_method(analyzer, member, class, class_id, name, args, object)
        }
    }
}

fn analyze_field(
    member: &MemberExpr,
    class: &ClassEntry,
    class_id: TypeId,
    name: &str,
    object: AnalyzeOutput,
) -> Result<AnalyzeOutput> {
    let field = class
        .find_field(name)
        .ok_or_else(|| SemanticError::UnknownField {
            field: name.to_string(),
            type_name: class.name.clone(),
            location: member.location,
        })?;

    Ok(AnalyzeOutput::new(
        field.ty,
        IrNode::LoadField(LoadFieldNode {
            object: Box::new(object.node),
            class: class_id,
            field: field.name.clone(),
            ty: field.ty,
            location: member.location,
        }),
    ))
}

fn analyze_method(
    analyzer: &mut ExprAnalyzer<'_>,
    member: &MemberExpr,
    class: &ClassEntry,
    class_id: TypeId,
    name: &str,
    args: &[crate::ast::Expr],
    object: AnalyzeOutput,
) -> Result<AnalyzeOutput> {
    // Parser guarantee; a node without a name is structurally broken.
    if name.is_empty() {
        return Err(SemanticError::MalformedNode {
            message: "method call without a method name".to_string(),
            location: member.location,
        });
    }

    let method = match class.find_method(name, args.len()) {
        Some(m) => m,
        None => {
            if let Some(other) = class.find_method_named(name) {
                return Err(SemanticError::ArgumentCountMismatch {
                    name: format!("{}.{}", class.name, name),
                    expected: other.params.len(),
                    got: args.len(),
                    location: member.location,
                });
            }
            return Err(SemanticError::UnknownMethod {
                method: name.to_string(),
                type_name: class.name.clone(),
                location: member.location,
            });
        }
    };

    let mut lowered_args = Vec::with_capacity(args.len());
    for (arg, param) in args.iter().zip(&method.params) {
        let out = analyzer.analyze(arg, AnalyzeInput::expecting(*param))?;
        lowered_args.push(out.node);
    }

    Ok(AnalyzeOutput::new(
        method.return_type,
        IrNode::InvokeMethod(InvokeMethodNode {
            object: Box::new(object.node),
            class: class_id,
            method: method.name.clone(),
            args: lowered_args,
            ty: method.return_type,
            location: member.location,
        }),
    ))
}

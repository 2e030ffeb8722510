//! Literal analysis.
//!
//! Resolves the type of literal values and lowers them to constants.

use crate::analysis::{AnalyzeInput, AnalyzeOutput};
use crate::ast::{LiteralExpr, LiteralKind};
use crate::error::SemanticError;
use crate::ir::{ConstantNode, ConstantValue, IrNode};
use crate::types::{Primitive, ValueType};

use super::{ExprAnalyzer, Result};

/// Analyze a literal expression.
pub fn analyze_literal(
    analyzer: &mut ExprAnalyzer<'_>,
    lit: &LiteralExpr,
    input: AnalyzeInput,
) -> Result<AnalyzeOutput> {
    let (value, ty) = match &lit.kind {
        // Integer literals type as int when the value fits, long otherwise.
        LiteralKind::Int(v) => match i32::try_from(*v) {
            Ok(narrow) => (
                ConstantValue::Int(narrow),
                ValueType::Primitive(Primitive::Int),
            ),
            Err(_) => (
                ConstantValue::Long(*v),
                ValueType::Primitive(Primitive::Long),
            ),
        },
        LiteralKind::Double(v) => (
            ConstantValue::Double(*v),
            ValueType::Primitive(Primitive::Double),
        ),
        LiteralKind::Bool(v) => (
            ConstantValue::Bool(*v),
            ValueType::Primitive(Primitive::Bool),
        ),
        LiteralKind::Str(v) => {
            let string_type =
                analyzer
                    .registry()
                    .string_type()
                    .ok_or_else(|| SemanticError::Internal {
                        message: "no 'String' class registered".to_string(),
                    })?;
            (
                ConstantValue::Str(v.clone()),
                ValueType::Reference(string_type),
            )
        }
        // Null has no type of its own; it adopts an expected reference type.
        LiteralKind::Null => {
            let ty = match input.expected {
                Some(expected @ ValueType::Reference(_)) => expected,
                Some(expected @ ValueType::Primitive(_)) => {
                    return Err(SemanticError::TypeMismatch {
                        message: format!(
                            "cannot assign null to primitive type '{}'",
                            analyzer.type_name(expected)
                        ),
                        location: lit.location,
                    });
                }
                None => {
                    return Err(SemanticError::TypeMismatch {
                        message: "cannot determine the type of null without context".to_string(),
                        location: lit.location,
                    });
                }
            };
            (ConstantValue::Null, ty)
        }
    };

    Ok(AnalyzeOutput::new(
        ty,
        IrNode::Constant(ConstantNode {
            value,
            ty,
            location: lit.location,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::registry::ScriptRegistry;
    use crate::scope::BlockScope;

    fn literal(kind: LiteralKind) -> LiteralExpr {
        LiteralExpr {
            kind,
            location: Location::new(1, 1, 1),
        }
    }

    fn analyze(kind: LiteralKind, input: AnalyzeInput) -> Result<AnalyzeOutput> {
        let registry = ScriptRegistry::with_builtins();
        let scope = BlockScope::new();
        let mut analyzer = ExprAnalyzer::new(&registry, &scope);
        analyze_literal(&mut analyzer, &literal(kind), input)
    }

    #[test]
    fn small_int_is_int() {
        let out = analyze(LiteralKind::Int(42), AnalyzeInput::none()).unwrap();
        assert_eq!(out.actual, ValueType::Primitive(Primitive::Int));
    }

    #[test]
    fn large_int_is_long() {
        let out = analyze(
            LiteralKind::Int(i64::from(i32::MAX) + 1),
            AnalyzeInput::none(),
        )
        .unwrap();
        assert_eq!(out.actual, ValueType::Primitive(Primitive::Long));
    }

    #[test]
    fn string_uses_registered_class() {
        let out = analyze(LiteralKind::Str("hi".to_string()), AnalyzeInput::none()).unwrap();
        assert_eq!(out.actual, ValueType::reference("String"));
    }

    #[test]
    fn string_without_builtin_fails() {
        let registry = ScriptRegistry::new();
        let scope = BlockScope::new();
        let mut analyzer = ExprAnalyzer::new(&registry, &scope);
        let err = analyze_literal(
            &mut analyzer,
            &literal(LiteralKind::Str("hi".to_string())),
            AnalyzeInput::none(),
        )
        .unwrap_err();
        assert!(matches!(err, SemanticError::Internal { .. }));
    }

    #[test]
    fn null_adopts_expected_reference() {
        let out = analyze(
            LiteralKind::Null,
            AnalyzeInput::expecting(ValueType::reference("String")),
        )
        .unwrap();
        assert_eq!(out.actual, ValueType::reference("String"));
    }

    #[test]
    fn null_rejected_for_primitive_expectation() {
        let err = analyze(
            LiteralKind::Null,
            AnalyzeInput::expecting(ValueType::Primitive(Primitive::Int)),
        )
        .unwrap_err();
        assert!(matches!(err, SemanticError::TypeMismatch { .. }));
    }

    #[test]
    fn null_rejected_without_context() {
        let err = analyze(LiteralKind::Null, AnalyzeInput::none()).unwrap_err();
        assert!(matches!(err, SemanticError::TypeMismatch { .. }));
    }
}

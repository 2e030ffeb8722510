//! Semantic error types.
//!
//! Every rule violation detected during analysis is a [`SemanticError`].
//! Analysis errors are fatal for the current compilation unit: they propagate
//! to the caller unmodified and no partial IR is emitted. User-facing
//! variants carry the [`Location`] of the offending construct.

use thiserror::Error;

use crate::location::Location;

/// An error raised during semantic analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SemanticError {
    /// An identifier could not be resolved in the active scope.
    #[error("at {location}: undefined variable '{name}'")]
    UndefinedVariable {
        /// The variable name that wasn't found.
        name: String,
        /// Where the variable was referenced.
        location: Location,
    },

    /// A field does not exist on the receiver's type.
    #[error("at {location}: unknown field '{field}' on type '{type_name}'")]
    UnknownField {
        /// The field name that wasn't found.
        field: String,
        /// The type on which the field was accessed.
        type_name: String,
        /// Where the field was referenced.
        location: Location,
    },

    /// A method does not exist on the receiver's type.
    #[error("at {location}: unknown method '{method}' on type '{type_name}'")]
    UnknownMethod {
        /// The method name that wasn't found.
        method: String,
        /// The type on which the method was called.
        type_name: String,
        /// Where the method was called.
        location: Location,
    },

    /// An actual type is incompatible with a required type.
    #[error("at {location}: {message}")]
    TypeMismatch {
        /// Description of the mismatch.
        message: String,
        /// Where the mismatch occurred.
        location: Location,
    },

    /// Wrong number of arguments in a method call.
    #[error("at {location}: {name} expects {expected} argument(s), got {got}")]
    ArgumentCountMismatch {
        /// The method name.
        name: String,
        /// Expected number of arguments.
        expected: usize,
        /// Actual number of arguments provided.
        got: usize,
        /// Where the call occurred.
        location: Location,
    },

    /// A nullable-only construct was applied to a non-nullable type.
    #[error("at {location}: {message}")]
    InvalidNullability {
        /// Description of the violation.
        message: String,
        /// Where the construct occurred.
        location: Location,
    },

    /// A variable was declared twice in the same scope.
    #[error("at {location}: variable '{name}' redeclared")]
    Redeclaration {
        /// The variable name.
        name: String,
        /// Where the redeclaration occurred.
        location: Location,
    },

    /// A node violated a structural invariant the parser guarantees.
    ///
    /// Unreachable for well-formed parser output; treated as internal/fatal
    /// rather than a user diagnostic.
    #[error("at {location}: malformed node: {message}")]
    MalformedNode {
        /// What was structurally wrong.
        message: String,
        /// Where the node originated.
        location: Location,
    },

    /// An internal analyzer invariant failed.
    #[error("internal error: {message}")]
    Internal {
        /// The error message.
        message: String,
    },
}

impl SemanticError {
    /// Get the source location where this error occurred.
    pub fn location(&self) -> Location {
        match self {
            SemanticError::UndefinedVariable { location, .. } => *location,
            SemanticError::UnknownField { location, .. } => *location,
            SemanticError::UnknownMethod { location, .. } => *location,
            SemanticError::TypeMismatch { location, .. } => *location,
            SemanticError::ArgumentCountMismatch { location, .. } => *location,
            SemanticError::InvalidNullability { location, .. } => *location,
            SemanticError::Redeclaration { location, .. } => *location,
            SemanticError::MalformedNode { location, .. } => *location,
            SemanticError::Internal { .. } => Location::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_variable_display() {
        let err = SemanticError::UndefinedVariable {
            name: "count".to_string(),
            location: Location::new(3, 7, 5),
        };
        assert_eq!(format!("{err}"), "at 3:7: undefined variable 'count'");
    }

    #[test]
    fn invalid_nullability_display() {
        let err = SemanticError::InvalidNullability {
            message: "result of null-safe operator must be nullable".to_string(),
            location: Location::new(1, 2, 10),
        };
        assert!(format!("{err}").contains("must be nullable"));
        assert_eq!(err.location(), Location::new(1, 2, 10));
    }

    #[test]
    fn internal_has_default_location() {
        let err = SemanticError::Internal {
            message: "bad state".to_string(),
        };
        assert_eq!(err.location(), Location::default());
    }

    #[test]
    fn argument_count_display() {
        let err = SemanticError::ArgumentCountMismatch {
            name: "substring".to_string(),
            expected: 2,
            got: 1,
            location: Location::new(2, 4, 9),
        };
        assert_eq!(
            format!("{err}"),
            "at 2:4: substring expects 2 argument(s), got 1"
        );
    }
}

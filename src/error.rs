//! Construction errors.
//!
//! Every variant names the node type and, where there is one, the offending
//! field, so the caller can correct the input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value was rejected by the field's declared type.
    #[error("parameter `{field}` of {node} must be of type {expected} (found {found})")]
    TypeMismatch {
        node: &'static str,
        field: &'static str,
        expected: String,
        found: &'static str,
    },

    #[error("{node} has no parameter named `{field}`")]
    UnknownField { node: &'static str, field: String },

    #[error("missing required parameter `{field}` of type {expected} for {node}")]
    MissingField {
        node: &'static str,
        field: &'static str,
        expected: String,
    },

    #[error("parameter `{field}` of {node} was given both positionally and by keyword")]
    DuplicateField { node: &'static str, field: &'static str },

    #[error("{node} takes at most {max} positional arguments but {given} were given")]
    TooManyPositional {
        node: &'static str,
        max: usize,
        given: usize,
    },
}

impl ValidationError {
    pub fn node(&self) -> &'static str {
        match self {
            ValidationError::TypeMismatch { node, .. }
            | ValidationError::UnknownField { node, .. }
            | ValidationError::MissingField { node, .. }
            | ValidationError::DuplicateField { node, .. }
            | ValidationError::TooManyPositional { node, .. } => *node,
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::TypeMismatch { field, .. }
            | ValidationError::MissingField { field, .. }
            | ValidationError::DuplicateField { field, .. } => Some(*field),
            ValidationError::UnknownField { field, .. } => Some(field.as_str()),
            ValidationError::TooManyPositional { .. } => None,
        }
    }

    /// The declared type the field expected, for mismatches and omissions.
    pub fn expected(&self) -> Option<&str> {
        match self {
            ValidationError::TypeMismatch { expected, .. }
            | ValidationError::MissingField { expected, .. } => Some(expected.as_str()),
            _ => None,
        }
    }
}

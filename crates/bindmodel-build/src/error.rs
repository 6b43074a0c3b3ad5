use crate::emit::EmitError;
use bindmodel_schema::prelude::*;
use thiserror::Error as ThisError;

///
/// ProcessError
///
/// Why one candidate was skipped. Never escapes a round; each one becomes a
/// [`Diagnostic`] at the candidate's location.
///

#[derive(Debug, ThisError)]
pub enum ProcessError {
    #[error("{marker} annotations can only be on a class (element: {name})")]
    NotAClass { marker: String, name: String },

    #[error("{marker} annotations must not be on abstract classes (class: {name})")]
    AbstractClass { marker: String, name: String },

    #[error("{marker} annotations must not be on private classes (class: {name})")]
    PrivateClass { marker: String, name: String },

    #[error("classes with {marker} annotations cannot be nested unless static (class: {name})")]
    NestedClass { marker: String, name: String },

    #[error("classes with {marker} annotations must extend {base} (class: {name})")]
    NotASubtype {
        marker: String,
        name: String,
        base: String,
    },

    #[error("{marker} annotations can only be on a method (element: {name})")]
    NotAMethod { marker: String, name: String },

    #[error(
        "methods annotated with {marker} must have exactly {expected} parameter(s) (method: {name}, found {found})"
    )]
    WrongArity {
        marker: String,
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("methods annotated with {marker} cannot be private or static (method: {name})")]
    PrivateOrStatic { marker: String, name: String },

    #[error("invalid {member} value '{value}' for {ty} property (method: {name})")]
    InvalidDefault {
        name: String,
        member: String,
        value: String,
        ty: TypeRef,
    },

    #[error("{marker} annotations can only be used in classes annotated with {component_marker} (method: {name})")]
    OrphanMember {
        marker: String,
        component_marker: String,
        name: String,
    },

    #[error("duplicate setter for '{name}' of type {ty} on {model}")]
    DuplicateAttribute {
        model: String,
        name: String,
        ty: TypeRef,
    },

    #[error("field '{field}' on {model} is already generated for another type")]
    FieldNameCollision { model: String, field: String },

    #[error("generated class {generated} is already produced by {previous}")]
    DuplicateGeneratedName { generated: String, previous: DeclId },

    #[error("{context}: {message}")]
    Internal { context: String, message: String },

    #[error("error generating model class: {0}")]
    Emit(#[from] EmitError),
}

impl ProcessError {
    pub(crate) fn internal(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Internal {
            context: context.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NotAClass { .. }
            | Self::AbstractClass { .. }
            | Self::PrivateClass { .. }
            | Self::NestedClass { .. }
            | Self::NotASubtype { .. }
            | Self::NotAMethod { .. }
            | Self::WrongArity { .. }
            | Self::PrivateOrStatic { .. }
            | Self::InvalidDefault { .. } => ErrorClass::Structural,

            Self::OrphanMember { .. }
            | Self::DuplicateAttribute { .. }
            | Self::FieldNameCollision { .. }
            | Self::DuplicateGeneratedName { .. } => ErrorClass::Semantic,

            Self::Internal { .. } | Self::Emit(_) => ErrorClass::Internal,
        }
    }

    /// Attach the candidate's location.
    #[must_use]
    pub fn at(&self, decl: &Declaration) -> Diagnostic {
        Diagnostic::new(Location::of(decl), self.class(), self.to_string())
    }
}

//! Declaration inputs and model descriptors shared by the bindmodel engine.
//!
//! The discovery side of a build hands over [`decl::RoundInput`]; the engine
//! in `bindmodel-build` turns it into [`node::ModelDescriptor`]s for an
//! external source emitter.

pub mod config;
pub mod decl;
pub mod diagnostic;
pub mod error;
pub mod node;
pub mod types;

use crate::config::ConfigError;
use thiserror::Error as ThisError;

/// Separator between the semantic name and the type token in field names.
pub const FIELD_TOKEN_SEPARATOR: char = '_';

/// Prefix recognised on setter-style property methods.
pub const SETTER_PREFIX: &str = "set";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::ProcessorConfig,
        decl::{
            Annotation, AnnotationMember, DeclId, DeclKind, Declaration, Modifier, Nesting,
            Parameter, RoundInput,
        },
        diagnostic::{Diagnostic, DiagnosticSink, ErrorClass, Location, TracingSink},
        err,
        error::ErrorTree,
        node::*,
        types::{ClassRef, Primitive, TypeRef},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}

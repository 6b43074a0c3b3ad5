use crate::error::ProcessError;
use bindmodel_schema::prelude::*;

///
/// MemberRole
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemberRole {
    Property,
    Reset,
}

impl MemberRole {
    /// Required parameter count.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Property => 1,
            Self::Reset => 0,
        }
    }

    #[must_use]
    pub fn marker(self, config: &ProcessorConfig) -> String {
        match self {
            Self::Property => ProcessorConfig::marker_label(&config.property_marker),
            Self::Reset => ProcessorConfig::marker_label(&config.reset_marker),
        }
    }
}

/// Check a property or reset candidate: a method with the role's arity that
/// is neither private nor static.
pub fn validate_member(
    decl: &Declaration,
    role: MemberRole,
    config: &ProcessorConfig,
) -> Result<(), ProcessError> {
    let marker = role.marker(config);
    let name = decl.name.clone();

    if decl.kind != DeclKind::Method {
        return Err(ProcessError::NotAMethod { marker, name });
    }

    if decl.parameters.len() != role.arity() {
        return Err(ProcessError::WrongArity {
            marker,
            name,
            expected: role.arity(),
            found: decl.parameters.len(),
        });
    }

    if decl.has_modifier(Modifier::Private) || decl.has_modifier(Modifier::Static) {
        return Err(ProcessError::PrivateOrStatic { marker, name });
    }

    Ok(())
}

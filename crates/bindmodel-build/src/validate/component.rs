use crate::error::ProcessError;
use bindmodel_schema::prelude::*;

/// Check a component candidate: concrete non-private class, not an inner
/// (non-static nested) class, and a subtype of the base view type.
pub fn validate_component(
    decl: &Declaration,
    config: &ProcessorConfig,
) -> Result<(), ProcessError> {
    let marker = ProcessorConfig::marker_label(&config.component_marker);
    let name = decl.name.clone();

    if decl.kind != DeclKind::Class {
        return Err(ProcessError::NotAClass { marker, name });
    }
    if decl.has_modifier(Modifier::Abstract) {
        return Err(ProcessError::AbstractClass { marker, name });
    }
    if decl.has_modifier(Modifier::Private) {
        return Err(ProcessError::PrivateClass { marker, name });
    }

    // local and anonymous classes can never be static
    if decl.nesting.is_nested()
        && !(decl.nesting == Nesting::Member && decl.has_modifier(Modifier::Static))
    {
        return Err(ProcessError::NestedClass { marker, name });
    }

    if !decl.is_subtype_of(&config.base_view_type) {
        return Err(ProcessError::NotASubtype {
            marker,
            name,
            base: config.base_view_type.clone(),
        });
    }

    Ok(())
}

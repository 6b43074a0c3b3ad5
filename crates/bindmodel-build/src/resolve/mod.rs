//! Turning validated declarations into descriptors.

mod default;
mod name;

pub use default::{
    BOOLEAN_DEFAULT_MEMBER, DOUBLE_DEFAULT_MEMBER, FLOAT_DEFAULT_MEMBER, INT_DEFAULT_MEMBER,
    resolve_default,
};
pub use name::{derive_attribute_name, generated_class_name};

use crate::error::ProcessError;
use bindmodel_schema::prelude::*;

/// Member of the component marker naming the layout resource.
pub const LAYOUT_MEMBER: &str = "defaultLayout";

/// Build the empty descriptor for a validated component.
#[must_use]
pub fn build_model(decl: &Declaration, config: &ProcessorConfig) -> ModelDescriptor {
    let component_type = decl.class_ref();
    let generated = ClassRef::new(
        decl.package.clone(),
        generated_class_name(&decl.name, config),
    );
    let supertype = TypeRef::Parameterized {
        raw: ClassRef::parse(&config.base_model_type),
        args: vec![TypeRef::Class(component_type.clone())],
    };
    let layout = decl
        .annotation(&config.component_marker)
        .and_then(|marker| marker.member(LAYOUT_MEMBER))
        .map(ToString::to_string);

    ModelDescriptor {
        component: decl.id.clone(),
        component_type,
        generated,
        supertype,
        layout,
        attributes: Vec::new(),
        reset_actions: Vec::new(),
    }
}

/// Resolve a validated property method into an attribute descriptor.
///
/// Every parameter annotation is copied onto both accessors; nullable
/// markers additionally make the attribute optional.
pub fn resolve_property(
    decl: &Declaration,
    config: &ProcessorConfig,
) -> Result<AttributeDescriptor, ProcessError> {
    let param = decl.parameters.first().ok_or_else(|| {
        ProcessError::internal("resolving property", format!("{} has no parameter", decl.id))
    })?;

    let name = derive_attribute_name(&decl.name);
    let mut attr = AttributeDescriptor::new(
        name,
        param.ty.clone(),
        decl.name.clone(),
        AttributeKind::Declared {
            parameter: param.name.clone(),
        },
    );

    // TODO: exclude non-hashable types (click listeners) from equality once
    // the host can tell us which parameter types implement hashCode.
    attr.flags.include_in_equality = true;
    attr.flags.optional = param.annotations.iter().any(|a| config.is_nullable_marker(a));

    for annotation in &param.annotations {
        attr.annotate_accessors(annotation.clone());
    }

    attr.default_value = resolve_default(decl, &param.ty, config)?;

    Ok(attr)
}

/// Resolve `decl` and append it to `model`, rejecting a second setter for the
/// same `(name, type)` and any field-name clash.
pub fn attach_property<'a>(
    model: &'a mut ModelDescriptor,
    decl: &Declaration,
    config: &ProcessorConfig,
) -> Result<&'a AttributeDescriptor, ProcessError> {
    let attr = resolve_property(decl, config)?;
    let model_name = model.generated.to_string();

    if model.has_attribute(&attr.name, &attr.ty) {
        return Err(ProcessError::DuplicateAttribute {
            model: model_name,
            name: attr.name,
            ty: attr.ty,
        });
    }
    if model.attribute_by_field(&attr.field_name).is_some() {
        return Err(ProcessError::FieldNameCollision {
            model: model_name,
            field: attr.field_name,
        });
    }

    tracing::trace!(model = %model_name, field = %attr.field_name, "attached attribute");
    model.attributes.push(attr);

    model
        .attributes
        .last()
        .ok_or_else(|| ProcessError::internal("attaching property", "attribute list is empty"))
}

//! Resource-id companions for text attributes.
//!
//! A text property such as `setTitle(CharSequence)` gets an `int` sibling
//! (`title_Int`) so callers can pass a string resource instead. An explicit
//! `int` setter with the same semantic name suppresses the companion.

use bindmodel_schema::prelude::*;

const RESOURCE_TYPE: TypeRef = TypeRef::Primitive(Primitive::Int);

/// Append resource-id overloads to `model`; returns how many were added.
///
/// Candidates are collected in attribute order and appended after the scan,
/// so the attribute list is never mutated while it is being read. Running
/// this twice adds nothing the second time.
pub fn synthesize_overloads(model: &mut ModelDescriptor, config: &ProcessorConfig) -> usize {
    let mut pending: Vec<AttributeDescriptor> = Vec::new();

    for attr in &model.attributes {
        if !config.is_text_type(&attr.ty) {
            continue;
        }
        if model.has_attribute(&attr.name, &RESOURCE_TYPE)
            || pending.iter().any(|p| p.name == attr.name)
        {
            continue;
        }

        // a declared type whose token is also `Int` already owns the field
        let field = AttributeDescriptor::field_name_for(&attr.name, &RESOURCE_TYPE);
        if model.attribute_by_field(&field).is_some() {
            tracing::debug!(
                model = %model.generated,
                field = %field,
                "resource overload skipped, field already declared"
            );
            continue;
        }

        pending.push(resource_overload(attr, config));
    }

    let added = pending.len();
    for overload in pending {
        tracing::trace!(
            model = %model.generated,
            field = %overload.field_name,
            "synthesized resource overload"
        );
        model.attributes.push(overload);
    }

    added
}

fn resource_overload(source: &AttributeDescriptor, config: &ProcessorConfig) -> AttributeDescriptor {
    let mut overload = AttributeDescriptor::new(
        source.name.clone(),
        RESOURCE_TYPE,
        source.origin_setter.clone(),
        AttributeKind::SynthesizedOverload {
            source_field: source.field_name.clone(),
        },
    );

    overload.flags.optional = source.flags.optional;
    overload.flags.include_in_equality = true;
    overload.annotate_accessors(Annotation::marker(&config.resource_marker));

    overload
}

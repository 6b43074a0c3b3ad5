use crate::prelude::*;

///
/// ResetAction
///
/// Zero-argument component method replayed when the model unbinds.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResetAction {
    pub method: String,
}

impl ResetAction {
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }
}

///
/// ModelDescriptor
///
/// Everything the source emitter needs to write one generated model class.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub component: DeclId,

    /// The bound component type.
    pub component_type: ClassRef,

    /// Generated class, in the component's package.
    pub generated: ClassRef,

    /// Base model type parameterized by the component type.
    pub supertype: TypeRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    pub attributes: Vec<AttributeDescriptor>,
    pub reset_actions: Vec<ResetAction>,
}

impl ModelDescriptor {
    #[must_use]
    pub fn generated_class_name(&self) -> &str {
        self.generated.simple_name()
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str, ty: &TypeRef) -> bool {
        self.attribute(name, ty).is_some()
    }

    #[must_use]
    pub fn attribute(&self, name: &str, ty: &TypeRef) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|a| a.matches(name, ty))
    }

    #[must_use]
    pub fn attribute_by_field(&self, field_name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|a| a.field_name == field_name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.field_name.as_str())
    }

    /// Attributes that participate in equals/hashCode.
    pub fn equality_attributes(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.attributes
            .iter()
            .filter(|a| a.flags.include_in_equality)
    }

    /// Methods to call on unbind, in registration order.
    pub fn unbind_calls(&self) -> impl Iterator<Item = &str> {
        self.reset_actions.iter().map(|r| r.method.as_str())
    }
}

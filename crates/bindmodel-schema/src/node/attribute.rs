use crate::{FIELD_TOKEN_SEPARATOR, prelude::*};
use std::fmt;

///
/// AttributeKind
///
/// Declared attributes come from a property method; synthesized overloads are
/// companions added after resolution (resource-id variants of text props).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AttributeKind {
    Declared {
        /// Source parameter name.
        parameter: String,
    },
    SynthesizedOverload {
        /// Field name of the attribute this overload was derived from.
        source_field: String,
    },
}

///
/// AttributeFlags
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct AttributeFlags {
    pub include_in_equality: bool,
    pub optional: bool,
    pub generate_getter: bool,
    pub generate_setter: bool,
    pub has_final_modifier: bool,
    pub package_private: bool,
}

impl Default for AttributeFlags {
    fn default() -> Self {
        Self {
            include_in_equality: true,
            optional: false,
            generate_getter: true,
            generate_setter: true,
            has_final_modifier: false,
            package_private: false,
        }
    }
}

///
/// DefaultValue
///
/// Initial value of a primitive attribute when the caller never sets it.
///

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    Int(i32),
    Float(f32),
    Double(f64),
    Boolean(bool),
}

impl DefaultValue {
    /// Zero value for primitives that carry a default member.
    #[must_use]
    pub const fn zero_for(primitive: Primitive) -> Option<Self> {
        match primitive {
            Primitive::Int => Some(Self::Int(0)),
            Primitive::Float => Some(Self::Float(0.0)),
            Primitive::Double => Some(Self::Double(0.0)),
            Primitive::Boolean => Some(Self::Boolean(false)),
            _ => None,
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}f"),
            Self::Double(v) => write!(f, "{v:?}d"),
            Self::Boolean(v) => write!(f, "{v}"),
        }
    }
}

///
/// AttributeDescriptor
///
/// One generated field and its accessor pair. `(name, ty)` is unique within a
/// model; `field_name` is derived from it and unique as well.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AttributeDescriptor {
    /// Semantic name derived from the source method (`setTitle` -> `title`).
    pub name: String,
    pub field_name: String,
    pub ty: TypeRef,

    /// Method invoked on the bound component to apply this value.
    pub origin_setter: String,

    #[serde(flatten)]
    pub kind: AttributeKind,
    pub flags: AttributeFlags,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub getter_annotations: Vec<Annotation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub setter_annotations: Vec<Annotation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
}

impl AttributeDescriptor {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ty: TypeRef,
        origin_setter: impl Into<String>,
        kind: AttributeKind,
    ) -> Self {
        let name = name.into();
        let field_name = Self::field_name_for(&name, &ty);

        Self {
            name,
            field_name,
            ty,
            origin_setter: origin_setter.into(),
            kind,
            flags: AttributeFlags::default(),
            getter_annotations: Vec::new(),
            setter_annotations: Vec::new(),
            default_value: None,
        }
    }

    /// `{name}_{token}`, the collision-free field name for a `(name, ty)` pair.
    #[must_use]
    pub fn field_name_for(name: &str, ty: &TypeRef) -> String {
        format!("{name}{FIELD_TOKEN_SEPARATOR}{}", ty.token())
    }

    #[must_use]
    pub fn matches(&self, name: &str, ty: &TypeRef) -> bool {
        self.name == name && self.ty == *ty
    }

    #[must_use]
    pub const fn is_overload(&self) -> bool {
        matches!(self.kind, AttributeKind::SynthesizedOverload { .. })
    }

    /// Copy an annotation onto both generated accessors.
    pub fn annotate_accessors(&mut self, annotation: Annotation) {
        self.getter_annotations.push(annotation.clone());
        self.setter_annotations.push(annotation);
    }

    #[must_use]
    pub fn setter_name(&self) -> &str {
        &self.name
    }

    /// Overloads append the type token so that two getters sharing a name
    /// but returning different types stay distinct.
    #[must_use]
    pub fn getter_name(&self) -> String {
        if self.is_overload() {
            format!("{}{}", self.name, self.ty.token())
        } else {
            self.name.clone()
        }
    }
}

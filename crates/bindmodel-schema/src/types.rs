use crate::prelude::*;
use convert_case::{Case, Casing};
use std::fmt;

///
/// Primitive
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
}

impl Primitive {
    /// Source-level keyword, e.g. `int`.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
        }
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Boolean | Self::Char)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

///
/// ClassRef
///
/// A declared class type. `name` is relative to `package` and may be dotted
/// for nested classes (`Map.Entry`).
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ClassRef {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package: String,
    pub name: String,
}

impl ClassRef {
    #[must_use]
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Split a qualified name on its last `.`; nested classes cannot be
    /// told apart from packages this way, so callers with nesting should use
    /// [`ClassRef::new`].
    #[must_use]
    pub fn parse(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((package, name)) => Self::new(package, name),
            None => Self::new("", qualified),
        }
    }

    /// Innermost simple name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Match against a configured name; unqualified names compare by simple
    /// name only.
    #[must_use]
    pub fn matches_name(&self, configured: &str) -> bool {
        if configured.contains('.') {
            self.qualified_name() == configured
        } else {
            self.simple_name() == configured
        }
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}.", self.package)?;
        }
        f.write_str(&self.name)
    }
}

///
/// TypeRef
///
/// Declared type of a property parameter or generated attribute.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Primitive(Primitive),
    Class(ClassRef),
    Array(Box<Self>),
    Parameterized { raw: ClassRef, args: Vec<Self> },
    TypeVariable(String),
}

impl TypeRef {
    #[must_use]
    pub fn class(qualified: &str) -> Self {
        Self::Class(ClassRef::parse(qualified))
    }

    #[must_use]
    pub fn array_of(component: Self) -> Self {
        Self::Array(Box::new(component))
    }

    #[must_use]
    pub fn is_primitive(&self, primitive: Primitive) -> bool {
        matches!(self, Self::Primitive(p) if *p == primitive)
    }

    #[must_use]
    pub const fn as_primitive(&self) -> Option<Primitive> {
        match self {
            Self::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    /// Class part of a plain or parameterized reference.
    #[must_use]
    pub const fn class_ref(&self) -> Option<&ClassRef> {
        match self {
            Self::Class(class) | Self::Parameterized { raw: class, .. } => Some(class),
            _ => None,
        }
    }

    /// Human-readable token used to suffix field and accessor names.
    ///
    /// Primitives are capitalised (`Float`), classes use their simple name,
    /// arrays append `Array` to the component token, parameterized types use
    /// the raw type, and type variables are capitalised.
    #[must_use]
    pub fn token(&self) -> String {
        match self {
            Self::Primitive(p) => p.keyword().to_case(Case::Pascal),
            Self::Class(class) | Self::Parameterized { raw: class, .. } => {
                class.simple_name().to_string()
            }
            Self::Array(component) => format!("{}Array", component.token()),
            Self::TypeVariable(name) => capitalize_first(name),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Class(class) => write!(f, "{class}"),
            Self::Array(component) => write!(f, "{component}[]"),
            Self::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            Self::TypeVariable(name) => f.write_str(name),
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_tokens_are_capitalised() {
        assert_eq!(TypeRef::Primitive(Primitive::Float).token(), "Float");
        assert_eq!(TypeRef::Primitive(Primitive::Int).token(), "Int");
        assert_eq!(TypeRef::Primitive(Primitive::Boolean).token(), "Boolean");
    }

    #[test]
    fn class_and_container_tokens() {
        let text = TypeRef::class("java.lang.CharSequence");
        assert_eq!(text.token(), "CharSequence");

        let nested = TypeRef::Class(ClassRef::new("java.util", "Map.Entry"));
        assert_eq!(nested.token(), "Entry");

        let list = TypeRef::Parameterized {
            raw: ClassRef::parse("java.util.List"),
            args: vec![TypeRef::class("java.lang.String")],
        };
        assert_eq!(list.token(), "List");

        let matrix = TypeRef::array_of(TypeRef::array_of(TypeRef::Primitive(Primitive::Int)));
        assert_eq!(matrix.token(), "IntArrayArray");

        assert_eq!(TypeRef::TypeVariable("item".into()).token(), "Item");
    }

    #[test]
    fn display_renders_source_form() {
        let ty = TypeRef::Parameterized {
            raw: ClassRef::parse("java.util.Map"),
            args: vec![
                TypeRef::class("java.lang.String"),
                TypeRef::array_of(TypeRef::Primitive(Primitive::Long)),
            ],
        };

        assert_eq!(ty.to_string(), "java.util.Map<java.lang.String, long[]>");
    }

    #[test]
    fn configured_names_match_by_qualified_or_simple_name() {
        let class = ClassRef::parse("android.support.annotation.Nullable");

        assert!(class.matches_name("android.support.annotation.Nullable"));
        assert!(class.matches_name("Nullable"));
        assert!(!class.matches_name("androidx.annotation.Nullable"));
    }

    #[test]
    fn type_refs_deserialize_from_tagged_json() {
        let ty: TypeRef = serde_json::from_str(r#"{"array":{"primitive":"byte"}}"#)
            .expect("array json should parse");

        assert_eq!(ty, TypeRef::array_of(TypeRef::Primitive(Primitive::Byte)));
    }
}

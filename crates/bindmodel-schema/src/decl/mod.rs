//! Declarations handed over by the host's discovery pass.

mod annotation;

pub use annotation::{Annotation, AnnotationMember};

use crate::prelude::*;
use derive_more::Display;

///
/// DeclId
///
/// Opaque identity assigned by the discovery collaborator. Members point at
/// their owner through `Declaration::enclosing`.
///

#[derive(
    Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct DeclId(pub String);

impl DeclId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeclId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

///
/// DeclKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum DeclKind {
    Annotation,
    Class,
    Constructor,
    Enum,
    Field,
    Interface,
    Method,
}

///
/// Modifier
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum Modifier {
    Abstract,
    Final,
    Private,
    Protected,
    Public,
    Static,
}

///
/// Nesting
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Nesting {
    #[default]
    TopLevel,
    Member,
    Local,
    Anonymous,
}

impl Nesting {
    #[must_use]
    pub const fn is_nested(self) -> bool {
        !matches!(self, Self::TopLevel)
    }
}

///
/// Parameter
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

///
/// Declaration
///
/// One annotated element. Classes carry `supertypes` (every resolved
/// ancestor, qualified); methods carry `parameters` and `enclosing`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Declaration {
    pub id: DeclId,
    pub name: String,
    pub kind: DeclKind,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,

    #[serde(default)]
    pub nesting: Nesting,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosing: Option<DeclId>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supertypes: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Declaration {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            id: DeclId::new(id),
            name: name.into(),
            kind,
            package: String::new(),
            modifiers: Vec::new(),
            nesting: Nesting::TopLevel,
            enclosing: None,
            supertypes: Vec::new(),
            parameters: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Public top-level class in `package`; the id is the qualified name.
    #[must_use]
    pub fn class(package: &str, name: &str) -> Self {
        let id = if package.is_empty() {
            name.to_string()
        } else {
            format!("{package}.{name}")
        };

        Self::new(id, name, DeclKind::Class)
            .in_package(package)
            .with_modifier(Modifier::Public)
    }

    /// Public method declared in `owner`; the id is `owner#name(param types)`.
    #[must_use]
    pub fn method(owner: &DeclId, name: &str, parameters: Vec<Parameter>) -> Self {
        let signature = parameters
            .iter()
            .map(|p| p.ty.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut decl = Self::new(format!("{owner}#{name}({signature})"), name, DeclKind::Method)
            .with_modifier(Modifier::Public)
            .enclosed_by(owner.clone());
        decl.nesting = Nesting::Member;
        decl.parameters = parameters;
        decl
    }

    #[must_use]
    pub fn in_package(mut self, package: &str) -> Self {
        self.package = package.to_string();
        self
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        if !self.modifiers.contains(&modifier) {
            self.modifiers.push(modifier);
        }
        self
    }

    #[must_use]
    pub fn without_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.retain(|m| *m != modifier);
        self
    }

    #[must_use]
    pub const fn nested(mut self, nesting: Nesting) -> Self {
        self.nesting = nesting;
        self
    }

    #[must_use]
    pub fn enclosed_by(mut self, owner: DeclId) -> Self {
        self.enclosing = Some(owner);
        self
    }

    #[must_use]
    pub fn extends(mut self, supertype: &str) -> Self {
        self.supertypes.push(supertype.to_string());
        self
    }

    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// First annotation matching a configured marker name.
    #[must_use]
    pub fn annotation(&self, configured: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.is(configured))
    }

    /// True when `base` is the declaration itself or one of its supertypes.
    #[must_use]
    pub fn is_subtype_of(&self, base: &str) -> bool {
        self.class_ref().matches_name(base)
            || self
                .supertypes
                .iter()
                .any(|s| ClassRef::parse(s).matches_name(base))
    }

    #[must_use]
    pub fn class_ref(&self) -> ClassRef {
        ClassRef::new(self.package.clone(), self.name.clone())
    }
}

///
/// RoundInput
///
/// The three ordered declaration sets for one round.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoundInput {
    #[serde(default)]
    pub components: Vec<Declaration>,

    #[serde(default)]
    pub properties: Vec<Declaration>,

    #[serde(default)]
    pub resets: Vec<Declaration>,
}

impl RoundInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len() + self.properties.len() + self.resets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_ids_encode_owner_and_signature() {
        let owner = Declaration::class("com.example", "CardView");
        let method = Declaration::method(
            &owner.id,
            "setHeading",
            vec![Parameter::new("heading", TypeRef::class("java.lang.CharSequence"))],
        );

        assert_eq!(
            method.id.as_str(),
            "com.example.CardView#setHeading(java.lang.CharSequence)"
        );
        assert_eq!(method.enclosing.as_ref(), Some(&owner.id));
        assert!(method.has_modifier(Modifier::Public));
    }

    #[test]
    fn subtype_check_uses_declared_ancestors() {
        let view = Declaration::class("com.example", "CardView")
            .extends("android.widget.FrameLayout")
            .extends("android.view.View");

        assert!(view.is_subtype_of("android.view.View"));
        assert!(view.is_subtype_of("FrameLayout"));
        assert!(!view.is_subtype_of("android.app.Activity"));
    }

    #[test]
    fn round_input_parses_with_missing_sets() {
        let input: RoundInput = serde_json::from_str(
            r#"{
                "components": [{
                    "id": "com.example.CardView",
                    "name": "CardView",
                    "kind": "class",
                    "package": "com.example",
                    "modifiers": ["public"],
                    "supertypes": ["android.view.View"]
                }]
            }"#,
        )
        .expect("round json should parse");

        assert_eq!(input.len(), 1);
        assert_eq!(input.components[0].nesting, Nesting::TopLevel);
        assert!(input.properties.is_empty());
    }
}

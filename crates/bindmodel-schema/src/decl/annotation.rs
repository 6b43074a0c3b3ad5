use crate::prelude::*;

///
/// Annotation
///
/// Metadata attached by the source author. Members are kept as raw source
/// text so unknown annotation shapes can be re-emitted without being
/// interpreted.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Annotation {
    pub ty: ClassRef,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<AnnotationMember>,
}

impl Annotation {
    /// Marker annotation without members.
    #[must_use]
    pub fn marker(qualified: &str) -> Self {
        Self {
            ty: ClassRef::parse(qualified),
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push(AnnotationMember {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn is(&self, configured: &str) -> bool {
        self.ty.matches_name(configured)
    }

    /// Raw value of the named member, if the author supplied it.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&str> {
        self.members
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value.as_str())
    }
}

///
/// AnnotationMember
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AnnotationMember {
    pub name: String,
    pub value: String,
}

//! Processor configuration, loaded from `bindmodel.toml`.

use crate::prelude::*;
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(ErrorTree),
}

///
/// ProcessorConfig
///
/// Names the marker annotations and platform types the engine recognises.
/// Entries without a package match by simple name.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessorConfig {
    /// Every component must extend this type.
    pub base_view_type: String,

    /// Generic base class of generated models.
    pub base_model_type: String,

    /// Trailing token removed from component names before suffixing.
    pub strip_suffix: String,
    pub model_suffix: String,
    pub generated_suffix: String,

    pub component_marker: String,
    pub property_marker: String,
    pub reset_marker: String,

    pub nullable_markers: Vec<String>,

    /// Types that receive a resource-id overload.
    pub text_types: Vec<String>,

    /// Annotation placed on synthesized resource-id accessors.
    pub resource_marker: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            base_view_type: "android.view.View".to_string(),
            base_model_type: "com.airbnb.epoxy.EpoxyModel".to_string(),
            strip_suffix: "View".to_string(),
            model_suffix: "Model".to_string(),
            generated_suffix: String::new(),
            component_marker: "com.airbnb.epoxy.ModelView".to_string(),
            property_marker: "com.airbnb.epoxy.ModelProp".to_string(),
            reset_marker: "com.airbnb.epoxy.ResetView".to_string(),
            nullable_markers: vec![
                "android.support.annotation.Nullable".to_string(),
                "androidx.annotation.Nullable".to_string(),
            ],
            text_types: vec![
                "java.lang.CharSequence".to_string(),
                "java.lang.String".to_string(),
            ],
            resource_marker: "android.support.annotation.StringRes".to_string(),
        }
    }
}

impl ProcessorConfig {
    /// Parse and validate a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate().map_err(ConfigError::Invalid)?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        for (key, value) in [
            ("base_view_type", &self.base_view_type),
            ("base_model_type", &self.base_model_type),
        ] {
            if !value.contains('.') {
                errs.add_for(key, format!("'{value}' must be a qualified type name"));
            }
        }

        for (key, value) in [
            ("component_marker", &self.component_marker),
            ("property_marker", &self.property_marker),
            ("reset_marker", &self.reset_marker),
            ("resource_marker", &self.resource_marker),
        ] {
            if value.trim().is_empty() {
                errs.add_for(key, "must not be empty");
            }
        }

        if self.model_suffix.is_empty() && self.generated_suffix.is_empty() {
            err!(
                errs,
                "model_suffix and generated_suffix are both empty; generated classes would shadow their components"
            );
        }

        for (i, marker) in self.nullable_markers.iter().enumerate() {
            if marker.trim().is_empty() {
                errs.add_for(format!("nullable_markers[{i}]"), "must not be empty");
            }
        }

        for (i, ty) in self.text_types.iter().enumerate() {
            if ty.trim().is_empty() {
                errs.add_for(format!("text_types[{i}]"), "must not be empty");
            }
        }

        errs.result()
    }

    #[must_use]
    pub fn is_nullable_marker(&self, annotation: &Annotation) -> bool {
        self.nullable_markers.iter().any(|m| annotation.is(m))
    }

    #[must_use]
    pub fn is_text_type(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Class(class) => self.text_types.iter().any(|t| class.matches_name(t)),
            _ => false,
        }
    }

    /// Simple name of a configured marker, for messages (`@ModelProp`).
    #[must_use]
    pub fn marker_label(marker: &str) -> String {
        format!("@{}", ClassRef::parse(marker).simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ProcessorConfig::default()
            .validate()
            .expect("default config should validate");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ProcessorConfig::from_toml_str(
            r#"
            strip_suffix = "Widget"
            text_types = ["java.lang.CharSequence"]
            "#,
        )
        .expect("partial config should load");

        assert_eq!(config.strip_suffix, "Widget");
        assert_eq!(config.model_suffix, "Model");
        assert_eq!(config.text_types.len(), 1);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ProcessorConfig::from_toml_str("colour = \"blue\"")
            .expect_err("unknown key should fail");

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_values_are_all_reported() {
        let err = ProcessorConfig::from_toml_str(
            r#"
            base_view_type = "View"
            model_suffix = ""
            resource_marker = " "
            "#,
        )
        .expect_err("invalid config should fail");

        let ConfigError::Invalid(tree) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(tree.len(), 3, "every invalid key should be reported: {tree}");
    }

    #[test]
    fn text_types_match_class_refs_only() {
        let config = ProcessorConfig::default();

        assert!(config.is_text_type(&TypeRef::class("java.lang.String")));
        assert!(!config.is_text_type(&TypeRef::Primitive(Primitive::Int)));
        assert!(!config.is_text_type(&TypeRef::array_of(TypeRef::class("java.lang.String"))));
    }

    #[test]
    fn nullable_markers_match_by_qualified_name() {
        let config = ProcessorConfig::default();

        assert!(config.is_nullable_marker(&Annotation::marker("androidx.annotation.Nullable")));
        assert!(!config.is_nullable_marker(&Annotation::marker("javax.annotation.Nonnull")));
    }
}

use bindmodel_schema::{SETTER_PREFIX, prelude::*};

/// Semantic attribute name for a property method.
///
/// `set` followed by an ASCII uppercase letter and ASCII word characters
/// loses the prefix and has its new leading character lowercased
/// (`setTitle` -> `title`, `setURL` -> `uRL`). Anything else is kept verbatim.
#[must_use]
pub fn derive_attribute_name(method: &str) -> String {
    let Some(rest) = method.strip_prefix(SETTER_PREFIX) else {
        return method.to_string();
    };

    let mut chars = rest.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() && chars.clone().all(is_word_char) => {
            first.to_ascii_lowercase().to_string() + chars.as_str()
        }
        _ => method.to_string(),
    }
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Generated class name for a component: strip the configured suffix unless
/// it is the whole name, then append the model suffixes.
#[must_use]
pub fn generated_class_name(component: &str, config: &ProcessorConfig) -> String {
    let base = match component.strip_suffix(config.strip_suffix.as_str()) {
        Some(stripped) if !stripped.is_empty() && !config.strip_suffix.is_empty() => stripped,
        _ => component,
    };

    format!("{base}{}{}", config.model_suffix, config.generated_suffix)
}

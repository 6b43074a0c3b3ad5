use crate::error::ProcessError;
use bindmodel_schema::prelude::*;

pub const INT_DEFAULT_MEMBER: &str = "intDefault";
pub const FLOAT_DEFAULT_MEMBER: &str = "floatDefault";
pub const DOUBLE_DEFAULT_MEMBER: &str = "doubleDefault";
pub const BOOLEAN_DEFAULT_MEMBER: &str = "booleanDefault";

/// Default value for a primitive property, read from the property marker's
/// typed default member. Missing members yield the type's zero value;
/// non-primitive and other primitive types have no default.
pub fn resolve_default(
    decl: &Declaration,
    ty: &TypeRef,
    config: &ProcessorConfig,
) -> Result<Option<DefaultValue>, ProcessError> {
    let Some(primitive) = ty.as_primitive() else {
        return Ok(None);
    };
    let Some(zero) = DefaultValue::zero_for(primitive) else {
        return Ok(None);
    };

    let member = match primitive {
        Primitive::Int => INT_DEFAULT_MEMBER,
        Primitive::Float => FLOAT_DEFAULT_MEMBER,
        Primitive::Double => DOUBLE_DEFAULT_MEMBER,
        _ => BOOLEAN_DEFAULT_MEMBER,
    };

    let raw = decl
        .annotation(&config.property_marker)
        .and_then(|marker| marker.member(member));
    let Some(raw) = raw else {
        return Ok(Some(zero));
    };

    parse_literal(zero, raw.trim())
        .map(Some)
        .ok_or_else(|| ProcessError::InvalidDefault {
            name: decl.name.clone(),
            member: member.to_string(),
            value: raw.to_string(),
            ty: ty.clone(),
        })
}

// Parse a source literal into the same variant as `zero`. Floating point
// defaults must be finite; `NaN` and `inf` have no plain source literal.
fn parse_literal(zero: DefaultValue, raw: &str) -> Option<DefaultValue> {
    match zero {
        DefaultValue::Int(_) => raw.parse().ok().map(DefaultValue::Int),
        DefaultValue::Float(_) => raw
            .strip_suffix(['f', 'F'])
            .unwrap_or(raw)
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .map(DefaultValue::Float),
        DefaultValue::Double(_) => raw
            .strip_suffix(['d', 'D'])
            .unwrap_or(raw)
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(DefaultValue::Double),
        DefaultValue::Boolean(_) => raw.parse().ok().map(DefaultValue::Boolean),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(ty: TypeRef, marker: Annotation) -> Declaration {
        Declaration::method(
            &DeclId::new("com.example.CounterView"),
            "setCount",
            vec![Parameter::new("count", ty)],
        )
        .annotated(marker)
    }

    fn marker() -> Annotation {
        Annotation::marker("com.airbnb.epoxy.ModelProp")
    }

    fn resolve(decl: &Declaration) -> Result<Option<DefaultValue>, ProcessError> {
        resolve_default(decl, &decl.parameters[0].ty, &ProcessorConfig::default())
    }

    #[test]
    fn reads_typed_members() {
        let int = prop(
            TypeRef::Primitive(Primitive::Int),
            marker().with_member(INT_DEFAULT_MEMBER, "5"),
        );
        let float = prop(
            TypeRef::Primitive(Primitive::Float),
            marker().with_member(FLOAT_DEFAULT_MEMBER, "0.5f"),
        );
        let double = prop(
            TypeRef::Primitive(Primitive::Double),
            marker().with_member(DOUBLE_DEFAULT_MEMBER, "2.25"),
        );
        let boolean = prop(
            TypeRef::Primitive(Primitive::Boolean),
            marker().with_member(BOOLEAN_DEFAULT_MEMBER, "true"),
        );

        assert_eq!(resolve(&int).unwrap(), Some(DefaultValue::Int(5)));
        assert_eq!(resolve(&float).unwrap(), Some(DefaultValue::Float(0.5)));
        assert_eq!(resolve(&double).unwrap(), Some(DefaultValue::Double(2.25)));
        assert_eq!(resolve(&boolean).unwrap(), Some(DefaultValue::Boolean(true)));
    }

    #[test]
    fn missing_member_yields_zero_value() {
        let int = prop(TypeRef::Primitive(Primitive::Int), marker());
        let boolean = prop(
            TypeRef::Primitive(Primitive::Boolean),
            marker().with_member(INT_DEFAULT_MEMBER, "3"),
        );

        assert_eq!(resolve(&int).unwrap(), Some(DefaultValue::Int(0)));
        assert_eq!(resolve(&boolean).unwrap(), Some(DefaultValue::Boolean(false)));
    }

    #[test]
    fn reference_and_wide_types_have_no_default() {
        let text = prop(TypeRef::class("java.lang.String"), marker());
        let long = prop(TypeRef::Primitive(Primitive::Long), marker());

        assert_eq!(resolve(&text).unwrap(), None);
        assert_eq!(resolve(&long).unwrap(), None);
    }

    #[test]
    fn malformed_literal_is_structural_error() {
        let decl = prop(
            TypeRef::Primitive(Primitive::Int),
            marker().with_member(INT_DEFAULT_MEMBER, "five"),
        );
        let err = resolve(&decl).expect_err("non-numeric int default should fail");

        assert_eq!(err.class(), ErrorClass::Structural);
        assert!(err.to_string().contains("'five'"));
    }

    #[test]
    fn non_finite_float_defaults_are_rejected() {
        for (ty, member, raw) in [
            (Primitive::Float, FLOAT_DEFAULT_MEMBER, "NaN"),
            (Primitive::Float, FLOAT_DEFAULT_MEMBER, "inff"),
            (Primitive::Double, DOUBLE_DEFAULT_MEMBER, "Infinity"),
            (Primitive::Double, DOUBLE_DEFAULT_MEMBER, "-inf"),
        ] {
            let decl = prop(TypeRef::Primitive(ty), marker().with_member(member, raw));
            let err = resolve(&decl).expect_err("non-finite default should fail");

            assert!(
                matches!(err, ProcessError::InvalidDefault { .. }),
                "{raw} should be an invalid default, got {err}"
            );
        }
    }
}

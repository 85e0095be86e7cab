//! Identifier shape checks.
//!
//! Character scans over ASCII letters; non-ASCII characters are neither upper
//! nor lower case here.

#[must_use]
pub fn has_consecutive_uppercase(name: &str) -> bool {
    has_uppercase_run(name.as_bytes())
}

#[must_use]
pub fn starts_uppercase(name: &str) -> bool {
    name.as_bytes().first().is_some_and(u8::is_ascii_uppercase)
}

#[must_use]
pub fn starts_lowercase(name: &str) -> bool {
    name.as_bytes().first().is_some_and(u8::is_ascii_lowercase)
}

/// `^_[a-z]{2,}`
#[must_use]
pub fn starts_with_underscore_then_two_lowercase(name: &str) -> bool {
    name.strip_prefix('_').is_some_and(starts_with_two_lowercase)
}

/// `^[a-z]{2,}`
#[must_use]
pub fn starts_with_two_lowercase(name: &str) -> bool {
    matches!(name.as_bytes(), [a, b, ..] if a.is_ascii_lowercase() && b.is_ascii_lowercase())
}

#[must_use]
pub fn ends_uppercase(name: &str) -> bool {
    name.as_bytes().last().is_some_and(u8::is_ascii_uppercase)
}

/// `^I[A-Z][a-z]`
#[must_use]
pub fn has_interface_prefix(name: &str) -> bool {
    matches!(
        name.as_bytes(),
        [b'I', upper, lower, ..] if upper.is_ascii_uppercase() && lower.is_ascii_lowercase()
    )
}

/// `^I[A-Z].*[A-Z]{2,}`: an uppercase run after the mandated `I` + capital pair.
#[must_use]
pub fn has_uppercase_run_after_interface_prefix(name: &str) -> bool {
    match name.as_bytes() {
        [b'I', upper, rest @ ..] if upper.is_ascii_uppercase() => has_uppercase_run(rest),
        _ => false,
    }
}

fn has_uppercase_run(bytes: &[u8]) -> bool {
    bytes
        .windows(2)
        .any(|w| w[0].is_ascii_uppercase() && w[1].is_ascii_uppercase())
}

/// Composite naming shapes used by the naming rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameShape {
    /// Types, methods and visible members: `PascalCase`.
    NonPrivateMember,
    /// `_camelCase` private fields.
    PrivateField,
    /// Locals and parameters: `camelCase` with two leading lowercase letters.
    LocalVariable,
    /// `IPascalCase` interfaces.
    Interface,
    /// Private fields without an underscore: `camelCase`.
    CamelCaseField,
}

impl NameShape {
    /// True when `name` does not have this shape.
    #[must_use]
    pub fn violated_by(self, name: &str) -> bool {
        match self {
            Self::NonPrivateMember => {
                has_consecutive_uppercase(name) || !starts_uppercase(name) || ends_uppercase(name)
            }
            Self::PrivateField => {
                has_consecutive_uppercase(name)
                    || !starts_with_underscore_then_two_lowercase(name)
                    || ends_uppercase(name)
            }
            Self::LocalVariable => {
                has_consecutive_uppercase(name)
                    || !starts_with_two_lowercase(name)
                    || ends_uppercase(name)
            }
            Self::Interface => {
                !has_interface_prefix(name)
                    || has_uppercase_run_after_interface_prefix(name)
                    || ends_uppercase(name)
            }
            Self::CamelCaseField => {
                starts_uppercase(name) || has_consecutive_uppercase(name) || ends_uppercase(name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives() {
        assert!(has_consecutive_uppercase("XMLReader"));
        assert!(!has_consecutive_uppercase("XmlReader"));
        assert!(starts_uppercase("Order"));
        assert!(!starts_uppercase("_order"));
        assert!(starts_lowercase("order"));
        assert!(!starts_lowercase(""));
        assert!(starts_with_underscore_then_two_lowercase("_field1"));
        assert!(!starts_with_underscore_then_two_lowercase("_f"));
        assert!(!starts_with_underscore_then_two_lowercase("field"));
        assert!(starts_with_two_lowercase("id"));
        assert!(!starts_with_two_lowercase("iD"));
        assert!(ends_uppercase("TypeNameG"));
        assert!(!ends_uppercase("TypeName1"));
    }

    #[test]
    fn interface_prefix() {
        assert!(has_interface_prefix("IOrder"));
        assert!(!has_interface_prefix("Order"));
        assert!(!has_interface_prefix("IORDER"));
        assert!(!has_uppercase_run_after_interface_prefix("IOrderService"));
        assert!(has_uppercase_run_after_interface_prefix("IOrderDBService"));
        assert!(!has_uppercase_run_after_interface_prefix("Order"));
    }

    #[test]
    fn non_private_member_shape() {
        assert!(!NameShape::NonPrivateMember.violated_by("TypeName"));
        assert!(NameShape::NonPrivateMember.violated_by("TypeNameG"));
        assert!(NameShape::NonPrivateMember.violated_by("typeName"));
        assert!(NameShape::NonPrivateMember.violated_by("HTTPClient"));
    }

    #[test]
    fn private_field_shape() {
        assert!(!NameShape::PrivateField.violated_by("_field1"));
        assert!(NameShape::PrivateField.violated_by("Field1"));
        assert!(NameShape::PrivateField.violated_by("_fieldX"));
    }

    #[test]
    fn local_variable_shape() {
        assert!(!NameShape::LocalVariable.violated_by("count"));
        assert!(NameShape::LocalVariable.violated_by("x"));
        assert!(NameShape::LocalVariable.violated_by("Count"));
        assert!(NameShape::LocalVariable.violated_by("myURL"));
    }

    #[test]
    fn interface_shape() {
        assert!(!NameShape::Interface.violated_by("IOrderService"));
        assert!(NameShape::Interface.violated_by("OrderService"));
        assert!(NameShape::Interface.violated_by("IOrderDBService"));
        assert!(NameShape::Interface.violated_by("IOrderX"));
    }

    #[test]
    fn camel_case_field_shape() {
        assert!(!NameShape::CamelCaseField.violated_by("fieldName"));
        assert!(NameShape::CamelCaseField.violated_by("FieldName"));
        assert!(NameShape::CamelCaseField.violated_by("fieldTOrename"));
    }
}

//! Naming rules.

use crate::codes::{NAMING_CONVENTION, PRIVATE_FIELD_NAME_CASING, PRIVATE_FIELD_NAMING_UNDERSCORE};
use crate::formatter::naming_message;
use crate::pattern::NameShape;
use canon_rule_abi::{DeclarationFacts, DeclarationKind, Finding, Rule, RuleDefinition};

/// Shape the naming convention expects for a declaration, if it checks one.
///
/// Non-visible fields and properties are left to the private field rules.
#[must_use]
pub fn shape_for(facts: &DeclarationFacts) -> Option<NameShape> {
    match facts.kind {
        DeclarationKind::Class | DeclarationKind::Method | DeclarationKind::Constructor => {
            Some(NameShape::NonPrivateMember)
        }
        DeclarationKind::Field | DeclarationKind::Property => facts
            .is_externally_visible()
            .then_some(NameShape::NonPrivateMember),
        DeclarationKind::Interface => Some(NameShape::Interface),
        DeclarationKind::LocalVariable | DeclarationKind::Parameter => {
            Some(NameShape::LocalVariable)
        }
        _ => None,
    }
}

/// CAP0004 - types, members, locals and parameters follow their casing shape.
#[derive(Debug, Default, Clone, Copy)]
pub struct NamingConvention;

impl Rule for NamingConvention {
    fn definition(&self) -> &'static RuleDefinition {
        &NAMING_CONVENTION
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        let shape = shape_for(facts)?;
        let name = facts.name()?;
        shape.violated_by(name).then(|| {
            NAMING_CONVENTION.finding(
                NAMING_CONVENTION.default_severity,
                facts.location,
                naming_message(shape, name),
            )
        })
    }
}

fn private_field_name(facts: &DeclarationFacts) -> Option<&str> {
    if facts.kind != DeclarationKind::Field || facts.is_externally_visible() {
        return None;
    }
    facts.name()
}

/// CAP0017 - private fields are `_camelCase`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrivateFieldNamingUnderscore;

impl Rule for PrivateFieldNamingUnderscore {
    fn definition(&self) -> &'static RuleDefinition {
        &PRIVATE_FIELD_NAMING_UNDERSCORE
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        let name = private_field_name(facts)?;
        NameShape::PrivateField.violated_by(name).then(|| {
            PRIVATE_FIELD_NAMING_UNDERSCORE.finding(
                PRIVATE_FIELD_NAMING_UNDERSCORE.default_severity,
                facts.location,
                naming_message(NameShape::PrivateField, name),
            )
        })
    }
}

/// CAP0018 - private fields without an underscore are at least `camelCase`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrivateFieldNameCasing;

impl Rule for PrivateFieldNameCasing {
    fn definition(&self) -> &'static RuleDefinition {
        &PRIVATE_FIELD_NAME_CASING
    }

    fn evaluate(&self, facts: &DeclarationFacts) -> Option<Finding> {
        let name = private_field_name(facts)?;
        if name.starts_with('_') || !NameShape::CamelCaseField.violated_by(name) {
            return None;
        }
        Some(PRIVATE_FIELD_NAME_CASING.finding(
            PRIVATE_FIELD_NAME_CASING.default_severity,
            facts.location,
            naming_message(NameShape::CamelCaseField, name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{facts, private, public};
    use canon_rule_abi::{Modifier, Severity};

    #[test]
    fn pascal_case_type_passes() {
        assert!(NamingConvention
            .evaluate(&public(DeclarationKind::Class, "TypeName"))
            .is_none());
    }

    #[test]
    fn trailing_capital_fails() {
        let finding = NamingConvention
            .evaluate(&public(DeclarationKind::Class, "TypeNameG"))
            .unwrap();
        assert_eq!(finding.rule_id, "CAP0004");
        assert_eq!(finding.severity, Severity::Error);
        assert!(finding.message.contains("must start with one upper case character"));
        assert!(finding.message.contains("not end with uppercase character"));
    }

    #[test]
    fn private_fields_are_not_pascal_checked() {
        assert!(NamingConvention
            .evaluate(&private(DeclarationKind::Field, "_count"))
            .is_none());
        assert!(NamingConvention
            .evaluate(&public(DeclarationKind::Field, "count"))
            .is_some());
    }

    #[test]
    fn protected_property_is_visible() {
        let property =
            facts(DeclarationKind::Property, "totalAmount").with_modifiers([Modifier::Protected]);
        assert!(NamingConvention.evaluate(&property).is_some());
    }

    #[test]
    fn interfaces_need_prefix() {
        assert!(NamingConvention
            .evaluate(&public(DeclarationKind::Interface, "IOrderService"))
            .is_none());
        let finding = NamingConvention
            .evaluate(&public(DeclarationKind::Interface, "OrderService"))
            .unwrap();
        assert!(finding.message.contains("must start with character I"));
    }

    #[test]
    fn locals_and_parameters_are_camel_case() {
        assert!(NamingConvention
            .evaluate(&facts(DeclarationKind::LocalVariable, "total"))
            .is_none());
        assert!(NamingConvention
            .evaluate(&facts(DeclarationKind::Parameter, "Total"))
            .is_some());
        let finding = NamingConvention
            .evaluate(&facts(DeclarationKind::LocalVariable, "x"))
            .unwrap();
        assert!(finding.message.contains("at least two lower case character"));
    }

    #[test]
    fn namespaces_are_not_checked() {
        assert!(NamingConvention
            .evaluate(&facts(DeclarationKind::Namespace, "acme.orders"))
            .is_none());
    }

    #[test]
    fn underscore_field_passes() {
        assert!(PrivateFieldNamingUnderscore
            .evaluate(&private(DeclarationKind::Field, "_field1"))
            .is_none());
    }

    #[test]
    fn field_without_underscore_warns() {
        let finding = PrivateFieldNamingUnderscore
            .evaluate(&private(DeclarationKind::Field, "Field1"))
            .unwrap();
        assert_eq!(finding.rule_id, "CAP0017");
        assert_eq!(finding.severity, Severity::Warning);
        assert!(finding
            .message
            .contains("underscore character followed by at least two lower case characters"));
    }

    #[test]
    fn fields_without_modifiers_are_private() {
        assert!(PrivateFieldNamingUnderscore
            .evaluate(&facts(DeclarationKind::Field, "count"))
            .is_some());
    }

    #[test]
    fn visible_fields_skip_private_rules() {
        let field = public(DeclarationKind::Field, "Count");
        assert!(PrivateFieldNamingUnderscore.evaluate(&field).is_none());
        assert!(PrivateFieldNameCasing.evaluate(&field).is_none());
    }

    #[test]
    fn casing_checks_only_non_underscore_fields() {
        let finding = PrivateFieldNameCasing
            .evaluate(&private(DeclarationKind::Field, "FieldWithAcronymOfXMLToUpdate"))
            .unwrap();
        assert_eq!(finding.rule_id, "CAP0018");
        assert!(PrivateFieldNameCasing
            .evaluate(&private(DeclarationKind::Field, "_FieldName"))
            .is_none());
        assert!(PrivateFieldNameCasing
            .evaluate(&private(DeclarationKind::Field, "fieldName"))
            .is_none());
    }
}

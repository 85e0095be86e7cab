//! Output formatting and finding display

use canon_csharp::{Fix, RuleCode};
use canon_rule_abi::{Finding, Severity};
use serde::Serialize;

#[derive(Serialize)]
pub struct SerializableFinding {
    pub path: String,
    pub line: usize,
    pub col: usize,
    pub rule_id: String,
    pub rule_name: String,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fixes: Vec<Fix>,
}

impl SerializableFinding {
    #[must_use]
    pub fn new(path: &str, finding: &Finding, fixes: Vec<Fix>) -> Self {
        Self {
            path: path.to_string(),
            line: finding.location.line,
            col: finding.location.column,
            rule_id: finding.rule_id.clone(),
            rule_name: finding.rule_name.clone(),
            severity: finding.severity,
            message: finding.message.clone(),
            fixes,
        }
    }
}

const fn status(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌",
        Severity::Warning => "⚠️",
    }
}

/// `path:line:col: ❌ CAP0001 ExplicitAccessModifiers: message`, expanded
/// through the rule's message template when the code is known.
#[must_use]
pub fn format_finding(path: &str, finding: &Finding) -> String {
    let text = RuleCode::lookup(&finding.rule_id).map_or_else(
        || format!("{}: {}", finding.rule_name, finding.message),
        |code| code.definition().render(&finding.message),
    );
    format!(
        "{path}:{line}:{col}: {status} {rule} {text}",
        line = finding.location.line,
        col = finding.location.column,
        status = status(finding.severity),
        rule = finding.rule_id,
    )
}

pub fn print_finding(path: &str, finding: &Finding, fixes: &[Fix]) {
    println!("{}", format_finding(path, finding));
    for fix in fixes {
        println!("    fix: {fix}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon_rule_abi::Location;

    fn finding(rule_id: &str, rule_name: &str, severity: Severity, message: &str) -> Finding {
        Finding {
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            severity,
            location: Location { line: 3, column: 11 },
            message: message.to_string(),
        }
    }

    #[test]
    fn human_line_uses_template() {
        let f = finding(
            "CAP0001",
            "ExplicitAccessModifiers",
            Severity::Error,
            "MyClass must include an access modifier.",
        );
        assert_eq!(
            format_finding("src/MyClass.cs", &f),
            "src/MyClass.cs:3:11: ❌ CAP0001 ExplicitAccessModifiers: MyClass must include an access modifier."
        );
    }

    #[test]
    fn quoted_template_and_warning_marker() {
        let f = finding("CAP0008", "GodClass", Severity::Warning, "too big");
        assert_eq!(
            format_finding("A.cs", &f),
            "A.cs:3:11: ⚠️ CAP0008 GodClass 'too big'"
        );
    }

    #[test]
    fn unknown_code_falls_back_to_name() {
        let f = finding("EXT0001", "External", Severity::Error, "boom");
        assert_eq!(format_finding("A.cs", &f), "A.cs:3:11: ❌ EXT0001 External: boom");
    }

    #[test]
    fn json_omits_empty_fixes() {
        let f = finding("CAP0012", "IfStatement", Severity::Error, "braces");
        let json = serde_json::to_string(&SerializableFinding::new("A.cs", &f, Vec::new())).unwrap();
        assert!(!json.contains("fixes"));
        assert!(json.contains("\"severity\":\"error\""));
    }
}

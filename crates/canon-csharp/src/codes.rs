//! Rule identity table.
//!
//! Every code is written out by hand. Suppression files reference these
//! strings, so a code is never derived from variant position and a retired
//! code is never handed to a new rule.

use canon_rule_abi::{Category, RuleDefinition, Severity};

/// Codes that belonged to retired rules.
pub const RESERVED_CODES: &[&str] = &["CAP0009"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCode {
    ExplicitAccessModifiers,
    XmlComments,
    StaticClass,
    NamingConvention,
    LargeCommentedCode,
    Comments,
    MonsterMethod,
    GodClass,
    FileHierarchy,
    OneTypePerFile,
    IfStatement,
    LoopStatement,
    MethodComplexity,
    ConstructorParameters,
    MethodParameters,
    PrivateFieldNamingUnderscore,
    PrivateFieldNameCasing,
    SingleConstructor,
}

impl RuleCode {
    pub const ALL: [Self; 18] = [
        Self::ExplicitAccessModifiers,
        Self::XmlComments,
        Self::StaticClass,
        Self::NamingConvention,
        Self::LargeCommentedCode,
        Self::Comments,
        Self::MonsterMethod,
        Self::GodClass,
        Self::FileHierarchy,
        Self::OneTypePerFile,
        Self::IfStatement,
        Self::LoopStatement,
        Self::MethodComplexity,
        Self::ConstructorParameters,
        Self::MethodParameters,
        Self::PrivateFieldNamingUnderscore,
        Self::PrivateFieldNameCasing,
        Self::SingleConstructor,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExplicitAccessModifiers => "CAP0001",
            Self::XmlComments => "CAP0002",
            Self::StaticClass => "CAP0003",
            Self::NamingConvention => "CAP0004",
            Self::LargeCommentedCode => "CAP0005",
            Self::Comments => "CAP0006",
            Self::MonsterMethod => "CAP0007",
            Self::GodClass => "CAP0008",
            Self::FileHierarchy => "CAP0010",
            Self::OneTypePerFile => "CAP0011",
            Self::IfStatement => "CAP0012",
            Self::LoopStatement => "CAP0013",
            Self::MethodComplexity => "CAP0014",
            Self::ConstructorParameters => "CAP0015",
            Self::MethodParameters => "CAP0016",
            Self::PrivateFieldNamingUnderscore => "CAP0017",
            Self::PrivateFieldNameCasing => "CAP0018",
            Self::SingleConstructor => "CAP0019",
        }
    }

    #[must_use]
    pub const fn definition(self) -> &'static RuleDefinition {
        match self {
            Self::ExplicitAccessModifiers => &EXPLICIT_ACCESS_MODIFIERS,
            Self::XmlComments => &XML_COMMENTS,
            Self::StaticClass => &STATIC_CLASS,
            Self::NamingConvention => &NAMING_CONVENTION,
            Self::LargeCommentedCode => &LARGE_COMMENTED_CODE,
            Self::Comments => &COMMENTS,
            Self::MonsterMethod => &MONSTER_METHOD,
            Self::GodClass => &GOD_CLASS,
            Self::FileHierarchy => &FILE_HIERARCHY,
            Self::OneTypePerFile => &ONE_TYPE_PER_FILE,
            Self::IfStatement => &IF_STATEMENT,
            Self::LoopStatement => &LOOP_STATEMENT,
            Self::MethodComplexity => &METHOD_COMPLEXITY,
            Self::ConstructorParameters => &CONSTRUCTOR_PARAMETERS,
            Self::MethodParameters => &METHOD_PARAMETERS,
            Self::PrivateFieldNamingUnderscore => &PRIVATE_FIELD_NAMING_UNDERSCORE,
            Self::PrivateFieldNameCasing => &PRIVATE_FIELD_NAME_CASING,
            Self::SingleConstructor => &SINGLE_CONSTRUCTOR,
        }
    }

    /// Look a rule up by code (`CAP0014`) or name (`MethodComplexity`).
    #[must_use]
    pub fn lookup(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| {
            code.as_str().eq_ignore_ascii_case(key) || code.definition().name == key
        })
    }
}

const fn define(
    code: RuleCode,
    name: &'static str,
    category: Category,
    default_severity: Severity,
    message_template: &'static str,
    enabled_by_default: bool,
) -> RuleDefinition {
    RuleDefinition {
        code: code.as_str(),
        name,
        category,
        default_severity,
        message_template,
        enabled_by_default,
    }
}

pub static EXPLICIT_ACCESS_MODIFIERS: RuleDefinition = define(
    RuleCode::ExplicitAccessModifiers,
    "ExplicitAccessModifiers",
    Category::CodeStructure,
    Severity::Error,
    "{name}: {0}",
    true,
);

pub static XML_COMMENTS: RuleDefinition = define(
    RuleCode::XmlComments,
    "XmlComments",
    Category::Comments,
    Severity::Warning,
    "{name} '{0}'",
    false,
);

pub static STATIC_CLASS: RuleDefinition = define(
    RuleCode::StaticClass,
    "StaticClass",
    Category::StaticClass,
    Severity::Warning,
    "{name}: {0}",
    true,
);

pub static NAMING_CONVENTION: RuleDefinition = define(
    RuleCode::NamingConvention,
    "NamingConvention",
    Category::NamingConvention,
    Severity::Error,
    "{name}: {0}",
    true,
);

pub static LARGE_COMMENTED_CODE: RuleDefinition = define(
    RuleCode::LargeCommentedCode,
    "LargeCommentedCode",
    Category::Comments,
    Severity::Error,
    "{name}: {0}",
    true,
);

pub static COMMENTS: RuleDefinition = define(
    RuleCode::Comments,
    "Comments",
    Category::Comments,
    Severity::Error,
    "{name} '{0}'",
    true,
);

pub static MONSTER_METHOD: RuleDefinition = define(
    RuleCode::MonsterMethod,
    "MonsterMethod",
    Category::CodeStructure,
    Severity::Error,
    "{name}: {0}",
    true,
);

pub static GOD_CLASS: RuleDefinition = define(
    RuleCode::GodClass,
    "GodClass",
    Category::CodeStructure,
    Severity::Error,
    "{name} '{0}'",
    true,
);

pub static FILE_HIERARCHY: RuleDefinition = define(
    RuleCode::FileHierarchy,
    "FileHierarchy",
    Category::CodeStructure,
    Severity::Error,
    "{name}: {0}",
    false,
);

pub static ONE_TYPE_PER_FILE: RuleDefinition = define(
    RuleCode::OneTypePerFile,
    "OneTypePerFile",
    Category::CodeStructure,
    Severity::Error,
    "{name}: {0}",
    true,
);

pub static IF_STATEMENT: RuleDefinition = define(
    RuleCode::IfStatement,
    "IfStatement",
    Category::CodeStructure,
    Severity::Error,
    "{name}: {0}",
    true,
);

pub static LOOP_STATEMENT: RuleDefinition = define(
    RuleCode::LoopStatement,
    "LoopStatement",
    Category::CodeStructure,
    Severity::Error,
    "{name}: {0}",
    true,
);

pub static METHOD_COMPLEXITY: RuleDefinition = define(
    RuleCode::MethodComplexity,
    "MethodComplexity",
    Category::CodeStructure,
    Severity::Error,
    "{name}: {0}",
    true,
);

pub static CONSTRUCTOR_PARAMETERS: RuleDefinition = define(
    RuleCode::ConstructorParameters,
    "ConstructorParameters",
    Category::CodeStructure,
    Severity::Error,
    "{name}: {0}",
    true,
);

pub static METHOD_PARAMETERS: RuleDefinition = define(
    RuleCode::MethodParameters,
    "MethodParameters",
    Category::CodeStructure,
    Severity::Error,
    "{name}: {0}",
    true,
);

pub static PRIVATE_FIELD_NAMING_UNDERSCORE: RuleDefinition = define(
    RuleCode::PrivateFieldNamingUnderscore,
    "PrivateFieldNamingUnderscore",
    Category::NamingConvention,
    Severity::Warning,
    "{name}: {0}",
    true,
);

pub static PRIVATE_FIELD_NAME_CASING: RuleDefinition = define(
    RuleCode::PrivateFieldNameCasing,
    "PrivateFieldNameCasing",
    Category::NamingConvention,
    Severity::Warning,
    "{name}: {0}",
    true,
);

pub static SINGLE_CONSTRUCTOR: RuleDefinition = define(
    RuleCode::SingleConstructor,
    "SingleConstructor",
    Category::CodeStructure,
    Severity::Error,
    "{name}: {0}",
    true,
);

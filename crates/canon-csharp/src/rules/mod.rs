//! Rule evaluators. Each one maps a single declaration to at most one finding.

mod access;
mod braces;
mod comments;
mod large_comments;
mod naming;
mod parameters;
mod single_constructor;
mod size;
mod static_class;
mod structure;
mod xml_docs;

pub use access::ExplicitAccessModifiers;
pub use braces::{IfStatement, LoopStatement, is_bare_exit};
pub use comments::{
    Comments, DEFAULT_MAX_COMMENT_LINES, DEFAULT_MAX_DOCUMENTATION_LINES, comment_violation,
};
pub use large_comments::{DEFAULT_MAX_COMMENTED_LINES, LargeCommentedCode};
pub use naming::{NamingConvention, PrivateFieldNameCasing, PrivateFieldNamingUnderscore, shape_for};
pub use parameters::{ConstructorParameters, MethodParameters};
pub use single_constructor::SingleConstructor;
pub use size::{
    DEFAULT_MAX_CLASS_MEMBERS, DEFAULT_MAX_STATEMENTS, GodClass, MethodComplexity, MonsterMethod,
};
pub use static_class::StaticClass;
pub use structure::{FileHierarchy, OneTypePerFile};
pub use xml_docs::{XmlComments, has_valid_comments};

#[cfg(test)]
pub(crate) mod test_support {
    use canon_rule_abi::{DeclarationFacts, DeclarationKind, Modifier};

    pub fn facts(kind: DeclarationKind, name: &str) -> DeclarationFacts {
        DeclarationFacts::new(kind, name)
    }

    pub fn public(kind: DeclarationKind, name: &str) -> DeclarationFacts {
        DeclarationFacts::new(kind, name).with_modifiers([Modifier::Public])
    }

    pub fn private(kind: DeclarationKind, name: &str) -> DeclarationFacts {
        DeclarationFacts::new(kind, name).with_modifiers([Modifier::Private])
    }
}

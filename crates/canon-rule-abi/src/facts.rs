//! Declaration facts produced by the external syntax walker.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Kind of syntax node the facts were extracted from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    #[default]
    Class,
    Interface,
    Enum,
    Method,
    Constructor,
    Property,
    Field,
    LocalVariable,
    Parameter,
    Namespace,
    IfStatement,
    ElseClause,
    ForStatement,
    ForEachStatement,
    WhileStatement,
}

impl DeclarationKind {
    #[must_use]
    pub const fn is_loop(self) -> bool {
        matches!(
            self,
            Self::ForStatement | Self::ForEachStatement | Self::WhileStatement
        )
    }

    /// Keyword used when reporting on statements.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Property => "property",
            Self::Field => "field",
            Self::LocalVariable => "local",
            Self::Parameter => "parameter",
            Self::Namespace => "namespace",
            Self::IfStatement => "If",
            Self::ElseClause => "Else",
            Self::ForStatement => "for",
            Self::ForEachStatement => "foreach",
            Self::WhileStatement => "while",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Internal,
    Protected,
    Private,
    Static,
    ReadOnly,
    Const,
    Abstract,
    Virtual,
    Override,
    Sealed,
    Async,
    Partial,
    Extern,
    New,
    Unsafe,
    Volatile,
    /// `this` on an extension method receiver parameter.
    This,
}

impl Modifier {
    pub const ACCESS: [Self; 4] = [Self::Public, Self::Internal, Self::Protected, Self::Private];

    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Static => "static",
            Self::ReadOnly => "readonly",
            Self::Const => "const",
            Self::Abstract => "abstract",
            Self::Virtual => "virtual",
            Self::Override => "override",
            Self::Sealed => "sealed",
            Self::Async => "async",
            Self::Partial => "partial",
            Self::Extern => "extern",
            Self::New => "new",
            Self::Unsafe => "unsafe",
            Self::Volatile => "volatile",
            Self::This => "this",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    SingleLine,
    MultiLine,
    XmlDoc,
}

/// One comment trivia attached to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSpan {
    pub kind: CommentKind,
    pub text: String,
}

impl CommentSpan {
    #[must_use]
    pub fn single_line(text: impl Into<String>) -> Self {
        Self {
            kind: CommentKind::SingleLine,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn multi_line(text: impl Into<String>) -> Self {
        Self {
            kind: CommentKind::MultiLine,
            text: text.into(),
        }
    }
}

/// XML documentation block (`/// ...`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    /// Full content of the documentation trivia.
    pub text: String,
    /// Inner text of the `<summary>` element, if one exists.
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterFacts {
    pub name: String,
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
}

/// Constructs that add one path to a method's cyclomatic complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchConstruct {
    If,
    While,
    For,
    ForEach,
    CaseLabel,
    DefaultLabel,
    Continue,
    Catch,
    Conditional,
    Coalesce,
    LogicalAnd,
    LogicalOr,
}

impl BranchConstruct {
    pub const ALL: [Self; 12] = [
        Self::If,
        Self::While,
        Self::For,
        Self::ForEach,
        Self::CaseLabel,
        Self::DefaultLabel,
        Self::Continue,
        Self::Catch,
        Self::Conditional,
        Self::Coalesce,
        Self::LogicalAnd,
        Self::LogicalOr,
    ];
}

/// Shape of the statement embedded in an if/else/loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum EmbeddedStatement {
    Block,
    /// `else if`: the else body is itself an if statement.
    If,
    Single { text: String },
}

/// Source position of the reported token. The host owns its meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// Read-only snapshot of one visited declaration or statement.
///
/// Every field except `kind` is optional in the serialized form; missing
/// data makes a rule inapplicable rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclarationFacts {
    pub kind: DeclarationKind,
    pub name: Option<String>,
    pub modifiers: BTreeSet<Modifier>,
    pub enclosed_in_interface: bool,
    pub parameters: Vec<ParameterFacts>,
    pub statement_count: Option<usize>,
    pub leading_comments: Vec<CommentSpan>,
    pub trailing_comments: Vec<CommentSpan>,
    /// Comments attached to the closing brace of the body.
    pub body_comments: Vec<CommentSpan>,
    pub doc_comment: Option<DocComment>,
    pub body_text: Option<String>,
    pub branch_counts: BTreeMap<BranchConstruct, usize>,
    pub enclosing_namespace: Option<String>,
    pub file_path: Option<String>,
    /// Class, interface and enum declarations directly inside a namespace.
    pub sibling_type_count: usize,
    pub non_private_method_count: usize,
    pub non_private_constructor_count: usize,
    pub constructor_count: usize,
    pub attributes: Vec<String>,
    pub is_extension_method_host: bool,
    pub embedded_statement: Option<EmbeddedStatement>,
    pub location: Location,
}

impl DeclarationFacts {
    #[must_use]
    pub fn new(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Name, or `None` when the walker could not identify one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    #[must_use]
    pub fn has_access_modifier(&self) -> bool {
        Modifier::ACCESS.iter().any(|m| self.has_modifier(*m))
    }

    /// public, internal or protected.
    #[must_use]
    pub fn is_externally_visible(&self) -> bool {
        self.has_modifier(Modifier::Public)
            || self.has_modifier(Modifier::Internal)
            || self.has_modifier(Modifier::Protected)
    }

    #[must_use]
    pub const fn parameter_count(&self) -> usize {
        self.parameters.len()
    }
}

//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for C# syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.

use smol_str::SmolStr;
use text_size::TextRange;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == kind)
}

fn significant_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia())
}

// ============================================================================
// Compilation unit and namespaces
// ============================================================================

ast_node!(CompilationUnit, SOURCE_FILE);

impl CompilationUnit {
    pub fn usings(&self) -> impl Iterator<Item = UsingDirective> + '_ {
        self.0.children().filter_map(UsingDirective::cast)
    }

    /// Every using scope in the file, outermost first
    pub fn scopes(&self) -> impl Iterator<Item = UsingScope> + '_ {
        self.0.descendants().filter_map(UsingScope::cast)
    }
}

ast_node!(NamespaceDeclaration, NAMESPACE_DECL);

impl NamespaceDeclaration {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }
}

ast_node!(NamespaceBody, NAMESPACE_BODY);

impl NamespaceBody {
    pub fn usings(&self) -> impl Iterator<Item = UsingDirective> + '_ {
        self.0.children().filter_map(UsingDirective::cast)
    }
}

ast_node!(FileScopedNamespace, FILE_SCOPED_NAMESPACE_DECL);

impl FileScopedNamespace {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn usings(&self) -> impl Iterator<Item = UsingDirective> + '_ {
        self.0.children().filter_map(UsingDirective::cast)
    }
}

/// A lexical scope whose direct using directives are ordered together
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UsingScope {
    CompilationUnit(CompilationUnit),
    Namespace(NamespaceBody),
    FileScopedNamespace(FileScopedNamespace),
}

impl AstNode for UsingScope {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_using_scope()
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::SOURCE_FILE => Some(Self::CompilationUnit(CompilationUnit(node))),
            SyntaxKind::NAMESPACE_BODY => Some(Self::Namespace(NamespaceBody(node))),
            SyntaxKind::FILE_SCOPED_NAMESPACE_DECL => {
                Some(Self::FileScopedNamespace(FileScopedNamespace(node)))
            }
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::CompilationUnit(n) => n.syntax(),
            Self::Namespace(n) => n.syntax(),
            Self::FileScopedNamespace(n) => n.syntax(),
        }
    }
}

impl UsingScope {
    /// Name of the enclosing namespace, `None` for the compilation unit
    pub fn namespace_name(&self) -> Option<SmolStr> {
        let name = match self {
            Self::CompilationUnit(_) => None,
            Self::Namespace(body) => body
                .syntax()
                .parent()
                .and_then(NamespaceDeclaration::cast)
                .and_then(|decl| decl.name()),
            Self::FileScopedNamespace(ns) => ns.name(),
        };
        name.map(|name| name.text())
    }

    /// Direct using directives of this scope in source order
    pub fn usings(&self) -> Vec<UsingDirective> {
        self.syntax()
            .children()
            .filter_map(UsingDirective::cast)
            .collect()
    }
}

// ============================================================================
// Using directives
// ============================================================================

ast_node!(UsingDirective, USING_DIRECTIVE);

impl UsingDirective {
    /// `global using ...`
    pub fn is_global(&self) -> bool {
        has_token(&self.0, SyntaxKind::GLOBAL_KW)
    }

    /// `using static ...`
    pub fn is_static(&self) -> bool {
        has_token(&self.0, SyntaxKind::STATIC_KW)
    }

    /// The alias identifier of `using Alias = Target;`
    pub fn alias(&self) -> Option<SmolStr> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::NAME_EQUALS)?
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::IDENT)
            .map(|t| SmolStr::new(t.text()))
    }

    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    /// Target name with any leading `global::` removed
    pub fn target_name(&self) -> Option<SmolStr> {
        self.name().map(|name| name.normalized()).filter(|n| !n.is_empty())
    }

    /// Range from the first to the last significant token, excluding the
    /// comments attached to the directive.
    pub fn anchor_range(&self) -> TextRange {
        let mut tokens = self
            .0
            .children_with_tokens()
            .filter(|e| !e.kind().is_trivia());
        let first = tokens.next();
        let last = tokens.last().or_else(|| first.clone());
        match (first, last) {
            (Some(first), Some(last)) => first.text_range().cover(last.text_range()),
            _ => self.0.text_range(),
        }
    }

    /// The scope this directive belongs to
    pub fn scope(&self) -> Option<UsingScope> {
        self.0.parent().and_then(UsingScope::cast)
    }
}

ast_node!(Name, NAME);

impl Name {
    /// Source text without trivia, e.g. `global::System.Collections.Generic`
    pub fn text(&self) -> SmolStr {
        let mut text = String::new();
        for token in significant_tokens(&self.0) {
            text.push_str(token.text());
            if token.kind() == SyntaxKind::COMMA {
                text.push(' ');
            }
        }
        SmolStr::new(text)
    }

    pub fn has_global_qualifier(&self) -> bool {
        let mut tokens = significant_tokens(&self.0);
        matches!(
            (tokens.next(), tokens.next()),
            (Some(first), Some(second))
                if first.kind() == SyntaxKind::GLOBAL_KW && second.kind() == SyntaxKind::COLON_COLON
        )
    }

    /// Text with a leading `global::` qualifier stripped
    pub fn normalized(&self) -> SmolStr {
        let text = self.text();
        if self.has_global_qualifier() {
            if let Some(rest) = text.strip_prefix("global::") {
                return SmolStr::new(rest);
            }
        }
        text
    }
}

// ============================================================================
// Delimited lists
// ============================================================================

ast_node!(ParameterList, PARAMETER_LIST);
ast_node!(BracketedParameterList, BRACKETED_PARAMETER_LIST);
ast_node!(ArgumentList, ARGUMENT_LIST);

/// The opening and closing delimiter of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPair {
    pub open: SyntaxToken,
    pub close: SyntaxToken,
    pub has_content_between: bool,
}

/// Any parenthesized or bracketed parameter/argument list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DelimitedList {
    Parameters(ParameterList),
    BracketedParameters(BracketedParameterList),
    Arguments(ArgumentList),
}

impl AstNode for DelimitedList {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::PARAMETER_LIST
                | SyntaxKind::BRACKETED_PARAMETER_LIST
                | SyntaxKind::ARGUMENT_LIST
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::PARAMETER_LIST => Some(Self::Parameters(ParameterList(node))),
            SyntaxKind::BRACKETED_PARAMETER_LIST => {
                Some(Self::BracketedParameters(BracketedParameterList(node)))
            }
            SyntaxKind::ARGUMENT_LIST => Some(Self::Arguments(ArgumentList(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Parameters(n) => n.syntax(),
            Self::BracketedParameters(n) => n.syntax(),
            Self::Arguments(n) => n.syntax(),
        }
    }
}

impl DelimitedList {
    fn delimiter_kinds(&self) -> (SyntaxKind, SyntaxKind) {
        match self {
            Self::BracketedParameters(_) => (SyntaxKind::L_BRACKET, SyntaxKind::R_BRACKET),
            Self::Parameters(_) | Self::Arguments(_) => (SyntaxKind::L_PAREN, SyntaxKind::R_PAREN),
        }
    }

    /// Open and close tokens; `None` if either is missing from the source
    pub fn delimiters(&self) -> Option<DelimiterPair> {
        let (open_kind, close_kind) = self.delimiter_kinds();
        let node = self.syntax();
        let open = node.first_token().filter(|t| t.kind() == open_kind)?;
        let close = node.last_token().filter(|t| t.kind() == close_kind)?;
        if open == close {
            return None;
        }
        let has_content_between = significant_tokens(node).any(|t| t != open && t != close);
        Some(DelimiterPair {
            open,
            close,
            has_content_between,
        })
    }

    /// The list a delimiter-placement rule inspects for a declaration or expression
    pub fn of_owner(owner: &SyntaxNode) -> Option<Self> {
        match owner.kind() {
            SyntaxKind::METHOD_DECL => MethodDeclaration::cast(owner.clone())?
                .parameter_list()
                .map(Self::Parameters),
            SyntaxKind::CONSTRUCTOR_DECL => ConstructorDeclaration::cast(owner.clone())?
                .parameter_list()
                .map(Self::Parameters),
            SyntaxKind::INDEXER_DECL => IndexerDeclaration::cast(owner.clone())?
                .parameter_list()
                .map(Self::BracketedParameters),
            SyntaxKind::INVOCATION_EXPR => InvocationExpression::cast(owner.clone())?
                .argument_list()
                .map(Self::Arguments),
            SyntaxKind::OBJECT_CREATION_EXPR => ObjectCreationExpression::cast(owner.clone())?
                .argument_list()
                .map(Self::Arguments),
            _ => None,
        }
    }
}

// ============================================================================
// List owners
// ============================================================================

ast_node!(MethodDeclaration, METHOD_DECL);

impl MethodDeclaration {
    pub fn parameter_list(&self) -> Option<ParameterList> {
        self.0.children().find_map(ParameterList::cast)
    }
}

ast_node!(ConstructorDeclaration, CONSTRUCTOR_DECL);

impl ConstructorDeclaration {
    pub fn parameter_list(&self) -> Option<ParameterList> {
        self.0.children().find_map(ParameterList::cast)
    }

    pub fn has_initializer(&self) -> bool {
        self.0
            .children()
            .any(|n| n.kind() == SyntaxKind::CONSTRUCTOR_INITIALIZER)
    }
}

ast_node!(IndexerDeclaration, INDEXER_DECL);

impl IndexerDeclaration {
    pub fn parameter_list(&self) -> Option<BracketedParameterList> {
        self.0.children().find_map(BracketedParameterList::cast)
    }
}

ast_node!(InvocationExpression, INVOCATION_EXPR);

impl InvocationExpression {
    /// The argument list of this call; nested calls own their own lists
    pub fn argument_list(&self) -> Option<ArgumentList> {
        self.0.children().filter_map(ArgumentList::cast).last()
    }
}

ast_node!(ObjectCreationExpression, OBJECT_CREATION_EXPR);

impl ObjectCreationExpression {
    pub fn argument_list(&self) -> Option<ArgumentList> {
        self.0.children().find_map(ArgumentList::cast)
    }

    pub fn has_initializer(&self) -> bool {
        self.0
            .children()
            .any(|n| n.kind() == SyntaxKind::INITIALIZER_EXPR)
    }
}

//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! It covers the C# surface the style rules look at; everything else is kept
//! as plain tokens.

/// All syntax kinds (tokens and nodes) in the C# tree
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (namespaces, using directives, declarations, lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,
    PREPROCESSOR_DIRECTIVE, // #region, #if, ...

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier or @verbatim identifier
    NUMBER,  // 42, 0x2A, 3.14f
    STRING,  // "text", @"text", $"text"
    CHAR,    // 'c'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,              // {
    R_BRACE,              // }
    L_BRACKET,            // [
    R_BRACKET,            // ]
    L_PAREN,              // (
    R_PAREN,              // )
    SEMICOLON,            // ;
    COLON,                // :
    COLON_COLON,          // ::
    DOT,                  // .
    DOT_DOT,              // ..
    COMMA,                // ,
    EQ,                   // =
    EQ_EQ,                // ==
    BANG_EQ,              // !=
    LT,                   // <
    GT,                   // >
    LT_EQ,                // <=
    GT_EQ,                // >=
    LT_LT,                // <<
    ARROW,                // ->
    FAT_ARROW,            // =>
    PLUS,                 // +
    MINUS,                // -
    STAR,                 // *
    SLASH,                // /
    PERCENT,              // %
    CARET,                // ^
    TILDE,                // ~
    BANG,                 // !
    AMP,                  // &
    PIPE,                 // |
    AMP_AMP,              // &&
    PIPE_PIPE,            // ||
    PLUS_PLUS,            // ++
    MINUS_MINUS,          // --
    QUESTION,             // ?
    QUESTION_QUESTION,    // ??
    QUESTION_DOT,         // ?.
    COMPOUND_ASSIGN,      // += -= *= /= %= &= |= ^= <<= ??=

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    // Declarations
    USING_KW,
    STATIC_KW,
    NAMESPACE_KW,
    CLASS_KW,
    STRUCT_KW,
    INTERFACE_KW,
    ENUM_KW,
    DELEGATE_KW,
    EVENT_KW,
    OPERATOR_KW,
    IMPLICIT_KW,
    EXPLICIT_KW,
    EXTERN_KW,

    // Modifiers
    PUBLIC_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    INTERNAL_KW,
    ABSTRACT_KW,
    SEALED_KW,
    VIRTUAL_KW,
    OVERRIDE_KW,
    READONLY_KW,
    CONST_KW,
    UNSAFE_KW,
    VOLATILE_KW,

    // Expressions
    NEW_KW,
    THIS_KW,
    BASE_KW,
    TYPEOF_KW,
    SIZEOF_KW,
    DEFAULT_KW,
    CHECKED_KW,
    UNCHECKED_KW,
    IS_KW,
    AS_KW,
    NULL_KW,
    TRUE_KW,
    FALSE_KW,
    REF_KW,
    OUT_KW,
    IN_KW,
    PARAMS_KW,

    // Statements
    IF_KW,
    ELSE_KW,
    WHILE_KW,
    DO_KW,
    FOR_KW,
    FOREACH_KW,
    SWITCH_KW,
    CASE_KW,
    BREAK_KW,
    CONTINUE_KW,
    RETURN_KW,
    THROW_KW,
    TRY_KW,
    CATCH_KW,
    FINALLY_KW,
    LOCK_KW,
    GOTO_KW,
    FIXED_KW,

    // Built-in type names (int, string, object, ...)
    PREDEFINED_TYPE,

    // Contextual: `global` in `global using` / `global::`
    GLOBAL_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    USING_DIRECTIVE,
    NAME_EQUALS,        // `Alias =` in an alias directive
    NAME,               // qualified name, possibly `global::`-prefixed
    NAMESPACE_DECL,
    FILE_SCOPED_NAMESPACE_DECL,
    NAMESPACE_BODY,
    ATTRIBUTE_LIST,
    TYPE_DECL,
    TYPE_BODY,
    DELEGATE_DECL,
    METHOD_DECL,
    CONSTRUCTOR_DECL,
    CONSTRUCTOR_INITIALIZER,
    OPERATOR_DECL,
    INDEXER_DECL,
    MEMBER_DECL,        // fields, properties, events, destructors
    PARAMETER_LIST,
    BRACKETED_PARAMETER_LIST,
    PARAMETER,
    ARGUMENT_LIST,
    BRACKETED_ARGUMENT_LIST,
    ARGUMENT,
    BLOCK,
    STATEMENT,
    INVOCATION_EXPR,
    OBJECT_CREATION_EXPR,
    ELEMENT_ACCESS_EXPR,
    INITIALIZER_EXPR,
    PAREN_EXPR,
    BRACKET_EXPR,
    GENERIC_ARGS,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace, comment or preprocessor line)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE
                | Self::LINE_COMMENT
                | Self::BLOCK_COMMENT
                | Self::PREPROCESSOR_DIRECTIVE
        )
    }

    /// Check if this is a comment token
    pub fn is_comment(self) -> bool {
        matches!(self, Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::USING_KW as u16) && (self as u16) <= (Self::GLOBAL_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::COMPOUND_ASSIGN as u16)
    }

    /// Declaration modifiers that may precede a member
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::PUBLIC_KW
                | Self::PRIVATE_KW
                | Self::PROTECTED_KW
                | Self::INTERNAL_KW
                | Self::STATIC_KW
                | Self::ABSTRACT_KW
                | Self::SEALED_KW
                | Self::VIRTUAL_KW
                | Self::OVERRIDE_KW
                | Self::READONLY_KW
                | Self::CONST_KW
                | Self::EXTERN_KW
                | Self::UNSAFE_KW
                | Self::VOLATILE_KW
                | Self::NEW_KW
        )
    }

    /// Nodes whose direct using directives form one ordering scope
    pub fn is_using_scope(self) -> bool {
        matches!(
            self,
            Self::SOURCE_FILE | Self::NAMESPACE_BODY | Self::FILE_SCOPED_NAMESPACE_DECL
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CSharpLanguage {}

impl rowan::Language for CSharpLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<CSharpLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<CSharpLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<CSharpLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<CSharpLanguage>;

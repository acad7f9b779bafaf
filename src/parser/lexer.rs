//! Logos-based lexer for C#
//!
//! Fast tokenization using the logos crate. Every byte of the input ends up
//! in exactly one token so the tree built on top stays lossless.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\x0C\x{FEFF}]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Preprocessor,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"@?[\p{XID_Start}_][\p{XID_Continue}]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[a-zA-Z]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+[a-zA-Z]*")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r#"@"([^"]|"")*""#)]
    #[regex(r#"\$"([^"\\\n]|\\.)*""#)]
    #[regex(r#"(\$@|@\$)"([^"]|"")*""#)]
    String,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    Char,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("::")]
    ColonColon,

    #[token("..")]
    DotDot,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("<<")]
    LtLt,

    #[token("->")]
    Arrow,

    #[token("=>")]
    FatArrow,

    #[token("&&")]
    AmpAmp,

    #[token("||")]
    PipePipe,

    #[token("++")]
    PlusPlus,

    #[token("--")]
    MinusMinus,

    #[token("??")]
    QuestionQuestion,

    #[token("?.")]
    QuestionDot,

    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<=")]
    #[token("??=")]
    CompoundAssign,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("?")]
    Question,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("using")]
    UsingKw,
    #[token("static")]
    StaticKw,
    #[token("namespace")]
    NamespaceKw,
    #[token("class")]
    ClassKw,
    #[token("struct")]
    StructKw,
    #[token("interface")]
    InterfaceKw,
    #[token("enum")]
    EnumKw,
    #[token("delegate")]
    DelegateKw,
    #[token("event")]
    EventKw,
    #[token("operator")]
    OperatorKw,
    #[token("implicit")]
    ImplicitKw,
    #[token("explicit")]
    ExplicitKw,
    #[token("extern")]
    ExternKw,
    #[token("public")]
    PublicKw,
    #[token("private")]
    PrivateKw,
    #[token("protected")]
    ProtectedKw,
    #[token("internal")]
    InternalKw,
    #[token("abstract")]
    AbstractKw,
    #[token("sealed")]
    SealedKw,
    #[token("virtual")]
    VirtualKw,
    #[token("override")]
    OverrideKw,
    #[token("readonly")]
    ReadonlyKw,
    #[token("const")]
    ConstKw,
    #[token("unsafe")]
    UnsafeKw,
    #[token("volatile")]
    VolatileKw,
    #[token("new")]
    NewKw,
    #[token("this")]
    ThisKw,
    #[token("base")]
    BaseKw,
    #[token("typeof")]
    TypeofKw,
    #[token("sizeof")]
    SizeofKw,
    #[token("default")]
    DefaultKw,
    #[token("checked")]
    CheckedKw,
    #[token("unchecked")]
    UncheckedKw,
    #[token("is")]
    IsKw,
    #[token("as")]
    AsKw,
    #[token("null")]
    NullKw,
    #[token("true")]
    TrueKw,
    #[token("false")]
    FalseKw,
    #[token("ref")]
    RefKw,
    #[token("out")]
    OutKw,
    #[token("in")]
    InKw,
    #[token("params")]
    ParamsKw,
    #[token("if")]
    IfKw,
    #[token("else")]
    ElseKw,
    #[token("while")]
    WhileKw,
    #[token("do")]
    DoKw,
    #[token("for")]
    ForKw,
    #[token("foreach")]
    ForeachKw,
    #[token("switch")]
    SwitchKw,
    #[token("case")]
    CaseKw,
    #[token("break")]
    BreakKw,
    #[token("continue")]
    ContinueKw,
    #[token("return")]
    ReturnKw,
    #[token("throw")]
    ThrowKw,
    #[token("try")]
    TryKw,
    #[token("catch")]
    CatchKw,
    #[token("finally")]
    FinallyKw,
    #[token("lock")]
    LockKw,
    #[token("goto")]
    GotoKw,
    #[token("fixed")]
    FixedKw,

    #[token("bool")]
    #[token("byte")]
    #[token("sbyte")]
    #[token("char")]
    #[token("decimal")]
    #[token("double")]
    #[token("float")]
    #[token("int")]
    #[token("uint")]
    #[token("long")]
    #[token("ulong")]
    #[token("short")]
    #[token("ushort")]
    #[token("object")]
    #[token("string")]
    #[token("void")]
    PredefinedType,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,
            LogosToken::Preprocessor => SyntaxKind::PREPROCESSOR_DIRECTIVE,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::Number => SyntaxKind::NUMBER,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::Char => SyntaxKind::CHAR,
            LogosToken::ColonColon => SyntaxKind::COLON_COLON,
            LogosToken::DotDot => SyntaxKind::DOT_DOT,
            LogosToken::EqEq => SyntaxKind::EQ_EQ,
            LogosToken::BangEq => SyntaxKind::BANG_EQ,
            LogosToken::LtEq => SyntaxKind::LT_EQ,
            LogosToken::GtEq => SyntaxKind::GT_EQ,
            LogosToken::LtLt => SyntaxKind::LT_LT,
            LogosToken::Arrow => SyntaxKind::ARROW,
            LogosToken::FatArrow => SyntaxKind::FAT_ARROW,
            LogosToken::AmpAmp => SyntaxKind::AMP_AMP,
            LogosToken::PipePipe => SyntaxKind::PIPE_PIPE,
            LogosToken::PlusPlus => SyntaxKind::PLUS_PLUS,
            LogosToken::MinusMinus => SyntaxKind::MINUS_MINUS,
            LogosToken::QuestionQuestion => SyntaxKind::QUESTION_QUESTION,
            LogosToken::QuestionDot => SyntaxKind::QUESTION_DOT,
            LogosToken::CompoundAssign => SyntaxKind::COMPOUND_ASSIGN,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::Lt => SyntaxKind::LT,
            LogosToken::Gt => SyntaxKind::GT,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::Percent => SyntaxKind::PERCENT,
            LogosToken::Caret => SyntaxKind::CARET,
            LogosToken::Tilde => SyntaxKind::TILDE,
            LogosToken::Bang => SyntaxKind::BANG,
            LogosToken::Amp => SyntaxKind::AMP,
            LogosToken::Pipe => SyntaxKind::PIPE,
            LogosToken::Question => SyntaxKind::QUESTION,
            LogosToken::UsingKw => SyntaxKind::USING_KW,
            LogosToken::StaticKw => SyntaxKind::STATIC_KW,
            LogosToken::NamespaceKw => SyntaxKind::NAMESPACE_KW,
            LogosToken::ClassKw => SyntaxKind::CLASS_KW,
            LogosToken::StructKw => SyntaxKind::STRUCT_KW,
            LogosToken::InterfaceKw => SyntaxKind::INTERFACE_KW,
            LogosToken::EnumKw => SyntaxKind::ENUM_KW,
            LogosToken::DelegateKw => SyntaxKind::DELEGATE_KW,
            LogosToken::EventKw => SyntaxKind::EVENT_KW,
            LogosToken::OperatorKw => SyntaxKind::OPERATOR_KW,
            LogosToken::ImplicitKw => SyntaxKind::IMPLICIT_KW,
            LogosToken::ExplicitKw => SyntaxKind::EXPLICIT_KW,
            LogosToken::ExternKw => SyntaxKind::EXTERN_KW,
            LogosToken::PublicKw => SyntaxKind::PUBLIC_KW,
            LogosToken::PrivateKw => SyntaxKind::PRIVATE_KW,
            LogosToken::ProtectedKw => SyntaxKind::PROTECTED_KW,
            LogosToken::InternalKw => SyntaxKind::INTERNAL_KW,
            LogosToken::AbstractKw => SyntaxKind::ABSTRACT_KW,
            LogosToken::SealedKw => SyntaxKind::SEALED_KW,
            LogosToken::VirtualKw => SyntaxKind::VIRTUAL_KW,
            LogosToken::OverrideKw => SyntaxKind::OVERRIDE_KW,
            LogosToken::ReadonlyKw => SyntaxKind::READONLY_KW,
            LogosToken::ConstKw => SyntaxKind::CONST_KW,
            LogosToken::UnsafeKw => SyntaxKind::UNSAFE_KW,
            LogosToken::VolatileKw => SyntaxKind::VOLATILE_KW,
            LogosToken::NewKw => SyntaxKind::NEW_KW,
            LogosToken::ThisKw => SyntaxKind::THIS_KW,
            LogosToken::BaseKw => SyntaxKind::BASE_KW,
            LogosToken::TypeofKw => SyntaxKind::TYPEOF_KW,
            LogosToken::SizeofKw => SyntaxKind::SIZEOF_KW,
            LogosToken::DefaultKw => SyntaxKind::DEFAULT_KW,
            LogosToken::CheckedKw => SyntaxKind::CHECKED_KW,
            LogosToken::UncheckedKw => SyntaxKind::UNCHECKED_KW,
            LogosToken::IsKw => SyntaxKind::IS_KW,
            LogosToken::AsKw => SyntaxKind::AS_KW,
            LogosToken::NullKw => SyntaxKind::NULL_KW,
            LogosToken::TrueKw => SyntaxKind::TRUE_KW,
            LogosToken::FalseKw => SyntaxKind::FALSE_KW,
            LogosToken::RefKw => SyntaxKind::REF_KW,
            LogosToken::OutKw => SyntaxKind::OUT_KW,
            LogosToken::InKw => SyntaxKind::IN_KW,
            LogosToken::ParamsKw => SyntaxKind::PARAMS_KW,
            LogosToken::IfKw => SyntaxKind::IF_KW,
            LogosToken::ElseKw => SyntaxKind::ELSE_KW,
            LogosToken::WhileKw => SyntaxKind::WHILE_KW,
            LogosToken::DoKw => SyntaxKind::DO_KW,
            LogosToken::ForKw => SyntaxKind::FOR_KW,
            LogosToken::ForeachKw => SyntaxKind::FOREACH_KW,
            LogosToken::SwitchKw => SyntaxKind::SWITCH_KW,
            LogosToken::CaseKw => SyntaxKind::CASE_KW,
            LogosToken::BreakKw => SyntaxKind::BREAK_KW,
            LogosToken::ContinueKw => SyntaxKind::CONTINUE_KW,
            LogosToken::ReturnKw => SyntaxKind::RETURN_KW,
            LogosToken::ThrowKw => SyntaxKind::THROW_KW,
            LogosToken::TryKw => SyntaxKind::TRY_KW,
            LogosToken::CatchKw => SyntaxKind::CATCH_KW,
            LogosToken::FinallyKw => SyntaxKind::FINALLY_KW,
            LogosToken::LockKw => SyntaxKind::LOCK_KW,
            LogosToken::GotoKw => SyntaxKind::GOTO_KW,
            LogosToken::FixedKw => SyntaxKind::FIXED_KW,
            LogosToken::PredefinedType => SyntaxKind::PREDEFINED_TYPE,
        }
    }
}

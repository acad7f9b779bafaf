//! Recursive descent parser for C#
//!
//! Builds a rowan GreenNode tree from tokens.
//! The parser is tolerant: it understands declarations, using directives and
//! the call-shaped expressions the style rules inspect, and keeps everything
//! else as plain tokens. Every input byte ends up in the tree.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse C# source code into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

/// Contextual identifiers that act as member modifiers
const CONTEXTUAL_MODIFIERS: &[&str] = &["partial", "async", "required", "file", "scoped"];

/// Tokens that can start a namespace member, used to resynchronize after errors
const MEMBER_RECOVERY: &[SyntaxKind] = &[
    SyntaxKind::USING_KW,
    SyntaxKind::NAMESPACE_KW,
    SyntaxKind::CLASS_KW,
    SyntaxKind::STRUCT_KW,
    SyntaxKind::INTERFACE_KW,
    SyntaxKind::ENUM_KW,
    SyntaxKind::DELEGATE_KW,
    SyntaxKind::PUBLIC_KW,
    SyntaxKind::INTERNAL_KW,
    SyntaxKind::L_BRACKET,
    SyntaxKind::R_BRACE,
];

/// Tokens that may follow a closing `>` of type arguments in an expression
const GENERIC_FOLLOW: &[SyntaxKind] = &[
    SyntaxKind::L_PAREN,
    SyntaxKind::R_PAREN,
    SyntaxKind::L_BRACKET,
    SyntaxKind::R_BRACKET,
    SyntaxKind::R_BRACE,
    SyntaxKind::COLON,
    SyntaxKind::SEMICOLON,
    SyntaxKind::COMMA,
    SyntaxKind::DOT,
    SyntaxKind::QUESTION,
    SyntaxKind::EQ_EQ,
    SyntaxKind::BANG_EQ,
    SyntaxKind::IDENT,
];

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        self.current().is_some_and(|t| kinds.contains(&t.kind))
    }

    fn at_contextual(&self, text: &str) -> bool {
        self.at(SyntaxKind::IDENT) && self.current_text() == text
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Index of the `n`th non-trivia token from the current position
    fn nth_index(&self, n: usize) -> Option<usize> {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.kind.is_trivia())
            .nth(n)
            .map(|(idx, _)| self.pos + idx)
    }

    /// Look ahead, skipping trivia
    fn nth(&self, n: usize) -> Option<SyntaxKind> {
        self.nth_index(n).map(|idx| self.tokens[idx].kind)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Bump the current token, re-tagging it (used for contextual keywords)
    fn bump_as(&mut self, kind: SyntaxKind) {
        if let Some(token) = self.current() {
            self.builder.token(kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().is_some_and(|t| t.kind.is_trivia()) {
            self.bump();
        }
    }

    /// Skip trivia only when the next significant token is `kind`
    fn skip_trivia_before(&mut self, kind: SyntaxKind) -> bool {
        if self.nth(0) == Some(kind) {
            self.skip_trivia();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .or_else(|| {
                self.tokens
                    .last()
                    .map(|t| TextRange::empty(t.offset + TextSize::of(t.text)))
            })
            .unwrap_or_else(|| TextRange::empty(TextSize::new(0)));
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
            consumed = true;
        }
        if !consumed && !self.at_eof() {
            self.bump();
        }
        self.builder.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Consume trivia in front of a member and return the checkpoint the
    /// member node should start at.
    ///
    /// Comment lines directly above a member (no blank line in between) are
    /// kept inside the member node so they travel with it when members are
    /// reordered.
    fn member_leading_trivia(&mut self) -> Checkpoint {
        loop {
            match self.current().map(|t| t.kind) {
                Some(kind) if kind.is_comment() => {
                    if self.comment_run_attaches() {
                        let checkpoint = self.builder.checkpoint();
                        self.skip_trivia();
                        return checkpoint;
                    }
                    self.bump();
                }
                Some(kind) if kind.is_trivia() => self.bump(),
                _ => return self.builder.checkpoint(),
            }
        }
    }

    /// True if the comment run starting here is followed by a member without
    /// an intervening blank line.
    ///
    /// A run at the very start of the file is a file header and stays with
    /// the compilation unit.
    fn comment_run_attaches(&self) -> bool {
        if self.tokens[..self.pos].iter().all(|t| t.kind.is_trivia()) {
            return false;
        }
        let mut idx = self.pos;
        while let Some(token) = self.tokens.get(idx) {
            match token.kind {
                SyntaxKind::LINE_COMMENT | SyntaxKind::BLOCK_COMMENT => idx += 1,
                SyntaxKind::WHITESPACE if token.text.matches('\n').count() <= 1 => idx += 1,
                SyntaxKind::WHITESPACE | SyntaxKind::PREPROCESSOR_DIRECTIVE => return false,
                kind => return kind != SyntaxKind::R_BRACE,
            }
        }
        false
    }

    /// Pull a same-line comment after a member's last token into the member
    fn eat_trailing_comment(&mut self) {
        let inline_ws = self
            .current()
            .is_some_and(|t| t.kind == SyntaxKind::WHITESPACE && !t.text.contains('\n'));
        let comment_at = if inline_ws { self.pos + 1 } else { self.pos };
        if self
            .tokens
            .get(comment_at)
            .is_some_and(|t| t.kind.is_comment() && !t.text.contains('\n'))
        {
            if inline_ws {
                self.bump();
            }
            self.bump();
        }
    }

    // =========================================================================
    // Grammar rules: namespaces and using directives
    // =========================================================================

    /// SourceFile = NamespaceMember*
    fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SOURCE_FILE);
        self.parse_namespace_members(false);
        self.skip_trivia();
        self.finish_node();
    }

    /// Members of the compilation unit or a namespace, up to `}` or EOF
    fn parse_namespace_members(&mut self, until_brace: bool) {
        loop {
            let pos_before = self.pos;
            let checkpoint = self.member_leading_trivia();
            if self.at_eof() || (until_brace && self.at(SyntaxKind::R_BRACE)) {
                break;
            }
            if self.at(SyntaxKind::R_BRACE) {
                self.error_recover("unbalanced '}'", MEMBER_RECOVERY);
                continue;
            }
            self.parse_namespace_member(checkpoint);
            // Safety: if we didn't make progress, force-skip a token
            if self.pos == pos_before && !self.at_eof() {
                self.error(format!("stuck on token: {:?}", self.current_kind()));
                self.bump();
            }
        }
    }

    /// NamespaceMember = UsingDirective | Namespace | Member
    fn parse_namespace_member(&mut self, checkpoint: Checkpoint) {
        match self.current_kind() {
            SyntaxKind::USING_KW => self.parse_using_directive(checkpoint),
            SyntaxKind::IDENT
                if self.current_text() == "global" && self.nth(1) == Some(SyntaxKind::USING_KW) =>
            {
                self.parse_using_directive(checkpoint)
            }
            SyntaxKind::NAMESPACE_KW => self.parse_namespace(checkpoint),
            _ => self.parse_member(checkpoint),
        }
    }

    /// UsingDirective = 'global'? 'using' 'static'? (Ident '=')? Name ';'
    fn parse_using_directive(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::USING_DIRECTIVE);

        if self.at_contextual("global") {
            self.bump_as(SyntaxKind::GLOBAL_KW);
            self.skip_trivia();
        }
        self.expect(SyntaxKind::USING_KW);
        self.skip_trivia();

        if self.eat(SyntaxKind::STATIC_KW) {
            self.skip_trivia();
        }

        if self.at(SyntaxKind::IDENT) && self.nth(1) == Some(SyntaxKind::EQ) {
            self.start_node(SyntaxKind::NAME_EQUALS);
            self.bump();
            self.skip_trivia();
            self.bump();
            self.finish_node();
            self.skip_trivia();
        }

        if self.at_any(&[SyntaxKind::IDENT, SyntaxKind::PREDEFINED_TYPE]) {
            self.parse_name();
        } else {
            self.error("expected name in using directive");
        }

        if self.skip_trivia_before(SyntaxKind::SEMICOLON) {
            self.bump();
            self.eat_trailing_comment();
        } else {
            self.error("expected ';' after using directive");
        }

        self.finish_node();
    }

    /// Name = (Ident '::')? Ident GenericArgs? ('.' Ident GenericArgs?)*
    fn parse_name(&mut self) {
        self.start_node(SyntaxKind::NAME);

        if self.at(SyntaxKind::IDENT) && self.nth(1) == Some(SyntaxKind::COLON_COLON) {
            if self.current_text() == "global" {
                self.bump_as(SyntaxKind::GLOBAL_KW);
            } else {
                self.bump();
            }
            self.skip_trivia();
            self.bump();
            self.skip_trivia();
        }

        loop {
            if !self.eat(SyntaxKind::IDENT) && !self.eat(SyntaxKind::PREDEFINED_TYPE) {
                self.error("expected identifier");
                break;
            }
            if self.skip_trivia_before(SyntaxKind::LT) {
                self.parse_generic_args();
            }
            if self.skip_trivia_before(SyntaxKind::DOT) {
                self.bump();
                self.skip_trivia();
            } else {
                break;
            }
        }

        self.finish_node();
    }

    /// GenericArgs = '<' ... '>' (balanced)
    fn parse_generic_args(&mut self) {
        self.start_node(SyntaxKind::GENERIC_ARGS);
        self.bump(); // <
        let mut depth = 1usize;
        while !self.at_eof() && depth > 0 {
            match self.current_kind() {
                SyntaxKind::LT => depth += 1,
                SyntaxKind::GT => depth -= 1,
                SyntaxKind::SEMICOLON | SyntaxKind::L_BRACE | SyntaxKind::R_BRACE => {
                    self.error("unterminated type argument list");
                    break;
                }
                _ => {}
            }
            self.bump();
        }
        self.finish_node();
    }

    /// Namespace = 'namespace' Name (NamespaceBody ';'? | ';' NamespaceMember*)
    fn parse_namespace(&mut self, checkpoint: Checkpoint) {
        let file_scoped = self.namespace_is_file_scoped();
        let kind = if file_scoped {
            SyntaxKind::FILE_SCOPED_NAMESPACE_DECL
        } else {
            SyntaxKind::NAMESPACE_DECL
        };
        self.start_node_at(checkpoint, kind);

        self.expect(SyntaxKind::NAMESPACE_KW);
        self.skip_trivia();
        if self.at(SyntaxKind::IDENT) {
            self.parse_name();
        } else {
            self.error("expected namespace name");
        }

        if file_scoped {
            self.skip_trivia();
            self.expect(SyntaxKind::SEMICOLON);
            self.parse_namespace_members(false);
        } else {
            self.skip_trivia();
            self.parse_namespace_body();
            if self.skip_trivia_before(SyntaxKind::SEMICOLON) {
                self.bump();
            }
        }

        self.finish_node();
    }

    fn namespace_is_file_scoped(&self) -> bool {
        self.tokens[self.pos..]
            .iter()
            .map(|t| t.kind)
            .find(|k| matches!(k, SyntaxKind::SEMICOLON | SyntaxKind::L_BRACE))
            == Some(SyntaxKind::SEMICOLON)
    }

    /// NamespaceBody = '{' NamespaceMember* '}'
    fn parse_namespace_body(&mut self) {
        self.start_node(SyntaxKind::NAMESPACE_BODY);
        if self.expect(SyntaxKind::L_BRACE) {
            self.parse_namespace_members(true);
            self.expect(SyntaxKind::R_BRACE);
        }
        self.finish_node();
    }

    // =========================================================================
    // Grammar rules: type members
    // =========================================================================

    /// Member = AttributeList* Modifier* (TypeDecl | Delegate | Method | ...)
    fn parse_member(&mut self, checkpoint: Checkpoint) {
        while self.at(SyntaxKind::L_BRACKET) {
            self.parse_balanced(
                SyntaxKind::ATTRIBUTE_LIST,
                SyntaxKind::L_BRACKET,
                SyntaxKind::R_BRACKET,
            );
            self.skip_trivia();
        }

        while self.at_modifier() {
            self.bump();
            self.skip_trivia();
        }

        match self.current_kind() {
            SyntaxKind::CLASS_KW
            | SyntaxKind::STRUCT_KW
            | SyntaxKind::INTERFACE_KW
            | SyntaxKind::ENUM_KW => self.parse_type_declaration(checkpoint),
            SyntaxKind::IDENT
                if self.current_text() == "record"
                    && matches!(
                        self.nth(1),
                        Some(SyntaxKind::IDENT | SyntaxKind::CLASS_KW | SyntaxKind::STRUCT_KW)
                    ) =>
            {
                self.parse_type_declaration(checkpoint)
            }
            SyntaxKind::NAMESPACE_KW => self.parse_namespace(checkpoint),
            SyntaxKind::DELEGATE_KW => {
                self.bump();
                self.skip_trivia();
                self.parse_member_head(checkpoint, Some(SyntaxKind::DELEGATE_DECL));
            }
            _ => self.parse_member_head(checkpoint, None),
        }
    }

    fn at_modifier(&self) -> bool {
        let kind = self.current_kind();
        if kind.is_modifier() {
            // `new` at member start is a modifier; `static` before `using` never reaches here
            return true;
        }
        kind == SyntaxKind::IDENT
            && CONTEXTUAL_MODIFIERS.contains(&self.current_text())
            && matches!(
                self.nth(1),
                Some(next) if next == SyntaxKind::IDENT || next.is_keyword()
            )
    }

    /// TypeDecl = ('class' | 'struct' | 'interface' | 'enum' | 'record') Head (TypeBody | ';')
    fn parse_type_declaration(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::TYPE_DECL);
        let is_enum = self.at(SyntaxKind::ENUM_KW);
        self.bump();
        self.skip_trivia();

        // record class / record struct
        if self.at_any(&[SyntaxKind::CLASS_KW, SyntaxKind::STRUCT_KW]) {
            self.bump();
            self.skip_trivia();
        }

        let mut after_name = false;
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::L_BRACE | SyntaxKind::SEMICOLON | SyntaxKind::R_BRACE => break,
                SyntaxKind::L_PAREN if after_name => {
                    self.parse_parameter_list();
                    after_name = false;
                }
                SyntaxKind::L_PAREN => self.parse_balanced(
                    SyntaxKind::PAREN_EXPR,
                    SyntaxKind::L_PAREN,
                    SyntaxKind::R_PAREN,
                ),
                SyntaxKind::LT => {
                    self.parse_generic_args();
                }
                SyntaxKind::IDENT => {
                    after_name = true;
                    self.bump();
                }
                _ => {
                    after_name = false;
                    self.bump();
                }
            }
            self.skip_trivia();
        }

        if self.at(SyntaxKind::L_BRACE) {
            if is_enum {
                self.parse_block();
            } else {
                self.parse_type_body();
            }
            if self.skip_trivia_before(SyntaxKind::SEMICOLON) {
                self.bump();
            }
        } else if !self.eat(SyntaxKind::SEMICOLON) {
            self.error("expected type body");
        }

        self.finish_node();
    }

    /// TypeBody = '{' Member* '}'
    fn parse_type_body(&mut self) {
        self.start_node(SyntaxKind::TYPE_BODY);
        self.expect(SyntaxKind::L_BRACE);

        loop {
            let pos_before = self.pos;
            let checkpoint = self.member_leading_trivia();
            if self.at_eof() || self.at(SyntaxKind::R_BRACE) {
                break;
            }
            self.parse_member(checkpoint);
            if self.pos == pos_before && !self.at_eof() {
                self.error(format!("stuck on token: {:?}", self.current_kind()));
                self.bump();
            }
        }

        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    /// Scan a member head (return type, name, type parameters) until its
    /// parameter list or body tells us what kind of member it is.
    fn parse_member_head(&mut self, checkpoint: Checkpoint, forced: Option<SyntaxKind>) {
        let mut head_tokens = 0usize;
        let mut prev: Option<SyntaxKind> = None;
        let mut saw_operator = false;
        let destructor = self.at(SyntaxKind::TILDE);

        loop {
            if self.at_eof() {
                self.start_node_at(checkpoint, SyntaxKind::ERROR);
                self.error("unexpected end of member");
                self.finish_node();
                return;
            }

            match self.current_kind() {
                SyntaxKind::L_PAREN
                    if saw_operator
                        || (head_tokens > 0
                            && matches!(prev, Some(SyntaxKind::IDENT | SyntaxKind::GT))) =>
                {
                    let kind = if let Some(kind) = forced {
                        kind
                    } else if destructor {
                        SyntaxKind::MEMBER_DECL
                    } else if saw_operator {
                        SyntaxKind::OPERATOR_DECL
                    } else if head_tokens == 1 && prev == Some(SyntaxKind::IDENT) {
                        SyntaxKind::CONSTRUCTOR_DECL
                    } else {
                        SyntaxKind::METHOD_DECL
                    };
                    self.start_node_at(checkpoint, kind);
                    self.parse_parameter_list();
                    self.parse_method_tail(kind);
                    self.finish_node();
                    return;
                }
                SyntaxKind::THIS_KW if self.nth(1) == Some(SyntaxKind::L_BRACKET) => {
                    self.bump();
                    self.skip_trivia();
                    self.start_node_at(checkpoint, SyntaxKind::INDEXER_DECL);
                    self.parse_bracketed_parameter_list();
                    self.parse_property_tail();
                    self.finish_node();
                    return;
                }
                SyntaxKind::L_BRACE
                | SyntaxKind::FAT_ARROW
                | SyntaxKind::EQ
                | SyntaxKind::SEMICOLON => {
                    self.start_node_at(checkpoint, SyntaxKind::MEMBER_DECL);
                    self.parse_property_tail();
                    self.finish_node();
                    return;
                }
                SyntaxKind::R_BRACE => {
                    self.start_node_at(checkpoint, SyntaxKind::ERROR);
                    self.error("incomplete member");
                    self.finish_node();
                    return;
                }
                SyntaxKind::L_PAREN => {
                    // tuple type
                    self.parse_balanced(
                        SyntaxKind::PAREN_EXPR,
                        SyntaxKind::L_PAREN,
                        SyntaxKind::R_PAREN,
                    );
                    prev = Some(SyntaxKind::R_PAREN);
                    head_tokens += 1;
                }
                SyntaxKind::L_BRACKET => {
                    // array rank specifier
                    self.parse_balanced(
                        SyntaxKind::BRACKET_EXPR,
                        SyntaxKind::L_BRACKET,
                        SyntaxKind::R_BRACKET,
                    );
                    prev = Some(SyntaxKind::R_BRACKET);
                    head_tokens += 1;
                }
                SyntaxKind::LT => {
                    self.parse_generic_args();
                    prev = Some(SyntaxKind::GT);
                    head_tokens += 1;
                }
                SyntaxKind::OPERATOR_KW => {
                    saw_operator = true;
                    self.bump();
                    // the operator token itself, e.g. `+` or `==`
                    self.skip_trivia();
                    if !self.at(SyntaxKind::L_PAREN) {
                        self.bump();
                    }
                    prev = Some(SyntaxKind::OPERATOR_KW);
                    head_tokens += 1;
                }
                kind => {
                    self.bump();
                    prev = Some(kind);
                    head_tokens += 1;
                }
            }
            self.skip_trivia();
        }
    }

    /// MethodTail = ConstructorInitializer? Constraint* (Block | '=>' Expr ';' | ';')
    fn parse_method_tail(&mut self, kind: SyntaxKind) {
        if kind == SyntaxKind::CONSTRUCTOR_DECL && self.skip_trivia_before(SyntaxKind::COLON) {
            self.start_node(SyntaxKind::CONSTRUCTOR_INITIALIZER);
            self.bump();
            self.skip_trivia();
            if !self.eat(SyntaxKind::BASE_KW) && !self.eat(SyntaxKind::THIS_KW) {
                self.error("expected 'base' or 'this'");
            }
            if self.skip_trivia_before(SyntaxKind::L_PAREN) {
                self.parse_argument_list();
            }
            self.finish_node();
        }

        // type parameter constraints and anything else up to the body
        while let Some(next) = self.nth(0) {
            if matches!(
                next,
                SyntaxKind::L_BRACE
                    | SyntaxKind::FAT_ARROW
                    | SyntaxKind::SEMICOLON
                    | SyntaxKind::R_BRACE
            ) {
                break;
            }
            self.skip_trivia();
            self.bump();
        }

        match self.nth(0) {
            Some(SyntaxKind::L_BRACE) => {
                self.skip_trivia();
                self.parse_block();
            }
            Some(SyntaxKind::FAT_ARROW) => {
                self.skip_trivia();
                self.bump();
                self.parse_expression_until(&[]);
                if self.skip_trivia_before(SyntaxKind::SEMICOLON) {
                    self.bump();
                } else {
                    self.error("expected ';'");
                }
            }
            Some(SyntaxKind::SEMICOLON) => {
                self.skip_trivia();
                self.bump();
            }
            _ => self.error("expected method body"),
        }
    }

    /// PropertyTail = (AccessorBlock ('=' Expr ';')? | ('=>' | '=') Expr ';' | ';')
    fn parse_property_tail(&mut self) {
        match self.nth(0) {
            Some(SyntaxKind::L_BRACE) => {
                self.skip_trivia();
                self.parse_block();
                if self.skip_trivia_before(SyntaxKind::EQ) {
                    self.bump();
                    self.parse_expression_until(&[]);
                    if self.skip_trivia_before(SyntaxKind::SEMICOLON) {
                        self.bump();
                    } else {
                        self.error("expected ';'");
                    }
                }
            }
            Some(SyntaxKind::FAT_ARROW | SyntaxKind::EQ) => {
                self.skip_trivia();
                self.bump();
                self.parse_expression_until(&[]);
                if self.skip_trivia_before(SyntaxKind::SEMICOLON) {
                    self.bump();
                } else {
                    self.error("expected ';'");
                }
            }
            Some(SyntaxKind::SEMICOLON) => {
                self.skip_trivia();
                self.bump();
            }
            _ => self.error("expected member body"),
        }
    }

    // =========================================================================
    // Grammar rules: delimited lists
    // =========================================================================

    /// ParameterList = '(' (Parameter (',' Parameter)*)? ')'
    fn parse_parameter_list(&mut self) {
        self.parse_delimited_list(
            SyntaxKind::PARAMETER_LIST,
            SyntaxKind::PARAMETER,
            SyntaxKind::L_PAREN,
            SyntaxKind::R_PAREN,
        );
    }

    /// BracketedParameterList = '[' (Parameter (',' Parameter)*)? ']'
    fn parse_bracketed_parameter_list(&mut self) {
        self.parse_delimited_list(
            SyntaxKind::BRACKETED_PARAMETER_LIST,
            SyntaxKind::PARAMETER,
            SyntaxKind::L_BRACKET,
            SyntaxKind::R_BRACKET,
        );
    }

    /// ArgumentList = '(' (Argument (',' Argument)*)? ')'
    fn parse_argument_list(&mut self) {
        self.parse_delimited_list(
            SyntaxKind::ARGUMENT_LIST,
            SyntaxKind::ARGUMENT,
            SyntaxKind::L_PAREN,
            SyntaxKind::R_PAREN,
        );
    }

    /// BracketedArgumentList = '[' (Argument (',' Argument)*)? ']'
    fn parse_bracketed_argument_list(&mut self) {
        self.parse_delimited_list(
            SyntaxKind::BRACKETED_ARGUMENT_LIST,
            SyntaxKind::ARGUMENT,
            SyntaxKind::L_BRACKET,
            SyntaxKind::R_BRACKET,
        );
    }

    fn parse_delimited_list(
        &mut self,
        list: SyntaxKind,
        item: SyntaxKind,
        open: SyntaxKind,
        close: SyntaxKind,
    ) {
        self.start_node(list);
        self.expect(open);

        loop {
            match self.nth(0) {
                None => break,
                Some(kind) if kind == close => break,
                Some(SyntaxKind::SEMICOLON | SyntaxKind::R_BRACE) => break,
                Some(SyntaxKind::COMMA) => {
                    // empty item, e.g. `[,]`
                    self.skip_trivia();
                    self.bump();
                    continue;
                }
                Some(_) => {}
            }
            self.skip_trivia();
            self.start_node(item);
            self.parse_expression_until(&[SyntaxKind::COMMA, close]);
            self.finish_node();
            if self.skip_trivia_before(SyntaxKind::COMMA) {
                self.bump();
            } else {
                break;
            }
        }

        self.skip_trivia();
        self.expect(close);
        self.finish_node();
    }

    /// Balanced group whose contents are not interpreted
    fn parse_balanced(&mut self, kind: SyntaxKind, open: SyntaxKind, close: SyntaxKind) {
        self.start_node(kind);
        self.bump(); // open
        let mut depth = 1usize;
        while !self.at_eof() {
            let current = self.current_kind();
            self.bump();
            if current == open {
                depth += 1;
            } else if current == close {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
        }
        if depth > 0 {
            self.error(format!("expected {:?}", close));
        }
        self.finish_node();
    }

    // =========================================================================
    // Grammar rules: statements and expressions
    // =========================================================================

    /// Block = '{' Statement* '}'
    fn parse_block(&mut self) {
        self.start_node(SyntaxKind::BLOCK);
        self.expect(SyntaxKind::L_BRACE);

        loop {
            self.skip_trivia();
            if self.at_eof() || self.at(SyntaxKind::R_BRACE) {
                break;
            }
            let pos_before = self.pos;
            self.parse_statement();
            if self.pos == pos_before && !self.at_eof() {
                self.error(format!("unexpected token: {:?}", self.current_kind()));
                self.bump();
            }
        }

        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    /// Statement = Block | Expr* ';'
    fn parse_statement(&mut self) {
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_block();
            return;
        }

        self.start_node(SyntaxKind::STATEMENT);
        loop {
            self.parse_expression_until(&[]);
            match self.nth(0) {
                Some(SyntaxKind::SEMICOLON) => {
                    self.skip_trivia();
                    self.bump();
                    break;
                }
                Some(SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET) => {
                    self.skip_trivia();
                    self.error("unbalanced closing delimiter");
                    self.bump();
                }
                _ => break,
            }
        }
        self.finish_node();
    }

    /// Scan expression tokens until a terminator, `;` or an unbalanced closer.
    /// Trivia in front of the terminator is left for the caller.
    fn parse_expression_until(&mut self, terminators: &[SyntaxKind]) {
        while let Some(next) = self.nth(0) {
            if terminators.contains(&next)
                || matches!(
                    next,
                    SyntaxKind::SEMICOLON
                        | SyntaxKind::R_BRACE
                        | SyntaxKind::R_PAREN
                        | SyntaxKind::R_BRACKET
                )
            {
                return;
            }
            self.skip_trivia();
            self.parse_primary();
        }
    }

    /// Primary = ObjectCreation | ParenExpr | Block | BracketExpr | Atom, followed by postfix
    fn parse_primary(&mut self) {
        let checkpoint = self.builder.checkpoint();
        match self.current_kind() {
            SyntaxKind::NEW_KW => self.parse_object_creation(),
            SyntaxKind::L_PAREN => self.parse_group(SyntaxKind::PAREN_EXPR, SyntaxKind::R_PAREN),
            SyntaxKind::L_BRACKET => {
                self.parse_group(SyntaxKind::BRACKET_EXPR, SyntaxKind::R_BRACKET)
            }
            SyntaxKind::L_BRACE => {
                self.parse_block();
                return;
            }
            SyntaxKind::IDENT
            | SyntaxKind::THIS_KW
            | SyntaxKind::BASE_KW
            | SyntaxKind::PREDEFINED_TYPE
            | SyntaxKind::NUMBER
            | SyntaxKind::STRING
            | SyntaxKind::CHAR => self.bump(),
            _ => {
                self.bump();
                return;
            }
        }
        self.parse_postfix(checkpoint);
    }

    /// Postfix = ('.' Ident | '?.' Ident | GenericArgs? ArgumentList | BracketedArgumentList)*
    fn parse_postfix(&mut self, checkpoint: Checkpoint) {
        loop {
            match self.nth(0) {
                Some(SyntaxKind::L_PAREN) => {
                    self.start_node_at(checkpoint, SyntaxKind::INVOCATION_EXPR);
                    self.skip_trivia();
                    self.parse_argument_list();
                    self.finish_node();
                }
                Some(SyntaxKind::L_BRACKET) => {
                    self.start_node_at(checkpoint, SyntaxKind::ELEMENT_ACCESS_EXPR);
                    self.skip_trivia();
                    self.parse_bracketed_argument_list();
                    self.finish_node();
                }
                Some(
                    SyntaxKind::DOT
                    | SyntaxKind::QUESTION_DOT
                    | SyntaxKind::ARROW
                    | SyntaxKind::COLON_COLON,
                ) => {
                    self.skip_trivia();
                    self.bump();
                    self.skip_trivia();
                    if !self.eat(SyntaxKind::IDENT) {
                        return;
                    }
                }
                Some(SyntaxKind::LT) if self.at_generic_args() => {
                    self.skip_trivia();
                    self.parse_generic_args();
                }
                _ => return,
            }
        }
    }

    /// True if a `<...>` starting at the next significant token is a type
    /// argument list rather than a comparison: it must contain only type-like
    /// tokens and be followed by a token that cannot continue an expression.
    fn at_generic_args(&self) -> bool {
        let Some(start) = self.nth_index(0) else {
            return false;
        };
        let mut depth = 0usize;
        let mut idx = start;
        while let Some(token) = self.tokens.get(idx) {
            match token.kind {
                SyntaxKind::LT => depth += 1,
                SyntaxKind::GT => {
                    depth -= 1;
                    if depth == 0 {
                        return self.tokens[idx + 1..]
                            .iter()
                            .find(|t| !t.kind.is_trivia())
                            .is_none_or(|t| GENERIC_FOLLOW.contains(&t.kind));
                    }
                }
                SyntaxKind::IDENT
                | SyntaxKind::PREDEFINED_TYPE
                | SyntaxKind::COMMA
                | SyntaxKind::DOT
                | SyntaxKind::QUESTION
                | SyntaxKind::L_BRACKET
                | SyntaxKind::R_BRACKET
                | SyntaxKind::COLON_COLON => {}
                kind if kind.is_trivia() => {}
                _ => return false,
            }
            idx += 1;
        }
        false
    }

    /// ObjectCreation = 'new' Type? ArgumentList? Initializer?
    fn parse_object_creation(&mut self) {
        self.start_node(SyntaxKind::OBJECT_CREATION_EXPR);
        self.bump(); // new

        if self
            .nth(0)
            .is_some_and(|k| matches!(k, SyntaxKind::IDENT | SyntaxKind::PREDEFINED_TYPE))
        {
            self.skip_trivia();
            self.parse_type_reference();
        }
        while self.nth(0) == Some(SyntaxKind::L_BRACKET) {
            self.skip_trivia();
            self.parse_group(SyntaxKind::BRACKET_EXPR, SyntaxKind::R_BRACKET);
        }
        if self.skip_trivia_before(SyntaxKind::L_PAREN) {
            self.parse_argument_list();
        }
        if self.skip_trivia_before(SyntaxKind::L_BRACE) {
            self.parse_initializer();
        }

        self.finish_node();
    }

    /// Type = Name '?'?
    fn parse_type_reference(&mut self) {
        self.parse_name();
        if self.skip_trivia_before(SyntaxKind::QUESTION) {
            self.bump();
        }
    }

    /// Initializer = '{' (Initializer | Expr) (',' ...)* '}'
    fn parse_initializer(&mut self) {
        self.start_node(SyntaxKind::INITIALIZER_EXPR);
        self.expect(SyntaxKind::L_BRACE);

        loop {
            match self.nth(0) {
                None | Some(SyntaxKind::R_BRACE) => break,
                Some(SyntaxKind::COMMA) => {
                    self.skip_trivia();
                    self.bump();
                }
                Some(SyntaxKind::L_BRACE) => {
                    self.skip_trivia();
                    self.parse_initializer();
                }
                Some(_) => {
                    let pos_before = self.pos;
                    self.parse_expression_until(&[SyntaxKind::COMMA]);
                    if self.pos == pos_before {
                        // `;`, `)` or `]` inside an initializer
                        self.skip_trivia();
                        self.error("unexpected token in initializer");
                        self.bump();
                    }
                }
            }
        }

        self.skip_trivia();
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    /// Group = '(' Expr ((',' | ';') Expr)* ')', also used for brackets
    fn parse_group(&mut self, kind: SyntaxKind, close: SyntaxKind) {
        self.start_node(kind);
        self.bump(); // open

        loop {
            self.parse_expression_until(&[SyntaxKind::COMMA, close]);
            match self.nth(0) {
                Some(SyntaxKind::COMMA | SyntaxKind::SEMICOLON) => {
                    self.skip_trivia();
                    self.bump();
                }
                _ => break,
            }
        }

        self.skip_trivia();
        self.expect(close);
        self.finish_node();
    }
}

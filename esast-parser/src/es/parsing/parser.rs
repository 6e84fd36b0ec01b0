//! Recursive-descent parser
//!
//! One method per grammar production. Binary operator levels all go through
//! [`Parser::parse_binary_level`], which builds left-associative trees and
//! keeps the operator terminal as a child so the builder can look its text
//! up later. Statement semicolons are optional before `}` and end of input.

use std::fmt;
use std::ops::Range as ByteRange;

use crate::es::ast::range::{Position, Range, SourceLocation};
use crate::es::lexing::tokenize;
use crate::es::parsing::tree::{ParseChild, ParseTree, ProductionKind, Terminal};
use crate::es::token::Token;

/// A parse failure with the position of the offending token.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub message: String,
    pub position: Position,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "syntax error at {}:{}: {}",
            self.position.line + 1,
            self.position.column,
            self.message
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Parse a source string into a parse tree rooted at a `Program` node.
pub fn parse(source: &str) -> Result<ParseTree, SyntaxError> {
    Parser::new(source).parse_program()
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<(Token, ByteRange<usize>)>,
    pos: usize,
    locations: SourceLocation,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: tokenize(source),
            pos: 0,
            locations: SourceLocation::new(source),
        }
    }

    // ---- token-stream helpers ----

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn at(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn current_span(&self) -> ByteRange<usize> {
        match self.tokens.get(self.pos) {
            Some((_, span)) => span.clone(),
            None => self.source.len()..self.source.len(),
        }
    }

    fn advance(&mut self) -> Option<(Token, ByteRange<usize>)> {
        let entry = self.tokens.get(self.pos).cloned();
        if entry.is_some() {
            self.pos += 1;
        }
        entry
    }

    /// Consume the current token if it equals `token`, returning its span.
    fn eat(&mut self, token: &Token) -> Option<ByteRange<usize>> {
        if self.at(token) {
            self.advance().map(|(_, span)| span)
        } else {
            None
        }
    }

    fn expect(&mut self, token: &Token, what: &str) -> Result<ByteRange<usize>, SyntaxError> {
        self.eat(token)
            .ok_or_else(|| self.error(format!("expected {what}")))
    }

    fn error(&self, message: String) -> SyntaxError {
        SyntaxError {
            message,
            position: self.locations.position_at(self.current_span().start),
        }
    }

    // ---- node construction helpers ----

    fn range(&self, span: ByteRange<usize>) -> Range {
        self.locations.range_of(&span)
    }

    fn tree(
        &self,
        kind: ProductionKind,
        children: Vec<ParseChild>,
        span: ByteRange<usize>,
    ) -> ParseTree {
        ParseTree::new(kind, children, self.range(span))
    }

    fn terminal(&self, token: Token, span: ByteRange<usize>) -> Terminal {
        Terminal {
            text: self.source[span.clone()].to_string(),
            location: self.range(span),
            token,
        }
    }

    /// Consume the current token unconditionally and wrap it as a terminal.
    fn advance_terminal(&mut self) -> Result<Terminal, SyntaxError> {
        match self.advance() {
            Some((token, span)) => Ok(self.terminal(token, span)),
            None => Err(self.error("unexpected end of input".to_string())),
        }
    }

    // ---- statements ----

    fn parse_program(&mut self) -> Result<ParseTree, SyntaxError> {
        let end = self.tokens.last().map_or(0, |(_, span)| span.end);
        let mut children = Vec::new();
        while !self.at_end() {
            children.push(ParseChild::Tree(self.parse_statement()?));
        }
        Ok(self.tree(ProductionKind::Program, children, 0..end))
    }

    fn parse_statement(&mut self) -> Result<ParseTree, SyntaxError> {
        match self.peek() {
            Some(Token::OpenBrace) => self.parse_block(),
            Some(Token::Semicolon) => {
                let span = self.current_span();
                self.advance();
                Ok(self.tree(ProductionKind::EmptyStatement, vec![], span))
            }
            Some(Token::Var) => self.parse_var_statement(),
            Some(Token::If) => self.parse_if_statement(),
            Some(Token::While) => self.parse_while_statement(),
            Some(Token::Do) => self.parse_do_while_statement(),
            Some(Token::For) => self.parse_for_statement(),
            Some(Token::Break) => self.parse_jump_statement(ProductionKind::BreakStatement),
            Some(Token::Continue) => self.parse_jump_statement(ProductionKind::ContinueStatement),
            Some(Token::Return) => self.parse_return_statement(),
            Some(Token::Function) => self.parse_function_declaration(),
            Some(Token::Illegal) => Err(self.error("unrecognized character".to_string())),
            Some(_) => self.parse_expression_statement(),
            None => Err(self.error("unexpected end of input".to_string())),
        }
    }

    fn parse_block(&mut self) -> Result<ParseTree, SyntaxError> {
        let open = self.expect(&Token::OpenBrace, "'{'")?;
        let mut children = Vec::new();
        while !self.at(&Token::CloseBrace) && !self.at_end() {
            children.push(ParseChild::Tree(self.parse_statement()?));
        }
        let close = self.expect(&Token::CloseBrace, "'}'")?;
        Ok(self.tree(ProductionKind::Block, children, open.start..close.end))
    }

    /// Consume the end of a simple statement: an explicit semicolon, or
    /// nothing when the statement is followed by `}` or end of input.
    fn parse_statement_end(&mut self) -> Result<Option<ByteRange<usize>>, SyntaxError> {
        if let Some(span) = self.eat(&Token::Semicolon) {
            Ok(Some(span))
        } else if self.at(&Token::CloseBrace) || self.at_end() {
            Ok(None)
        } else {
            Err(self.error("expected ';'".to_string()))
        }
    }

    fn parse_expression_statement(&mut self) -> Result<ParseTree, SyntaxError> {
        let sequence = self.parse_expression_sequence()?;
        let start = sequence.location().span.start;
        let mut end = sequence.location().span.end;
        if let Some(semi) = self.parse_statement_end()? {
            end = semi.end;
        }
        Ok(self.tree(
            ProductionKind::ExpressionStatement,
            vec![ParseChild::Tree(sequence)],
            start..end,
        ))
    }

    /// The declaration list covers the declarations only; the `var` keyword
    /// and the terminating semicolon stay outside its range.
    fn parse_var_statement(&mut self) -> Result<ParseTree, SyntaxError> {
        self.expect(&Token::Var, "'var'")?;
        let list = self.parse_variable_declarations()?;
        self.parse_statement_end()?;
        Ok(list)
    }

    fn parse_variable_declarations(&mut self) -> Result<ParseTree, SyntaxError> {
        let mut children = vec![ParseChild::Tree(self.parse_variable_declaration()?)];
        while self.eat(&Token::Comma).is_some() {
            children.push(ParseChild::Tree(self.parse_variable_declaration()?));
        }
        let span = match (children.first(), children.last()) {
            (Some(ParseChild::Tree(first)), Some(ParseChild::Tree(last))) => {
                first.location().span.start..last.location().span.end
            }
            _ => self.current_span(),
        };
        Ok(self.tree(ProductionKind::VariableDeclarationList, children, span))
    }

    fn parse_variable_declaration(&mut self) -> Result<ParseTree, SyntaxError> {
        let identifier = self.parse_identifier("variable name")?;
        let start = identifier.location().span.start;
        let mut end = identifier.location().span.end;
        let mut children = vec![ParseChild::Tree(identifier)];
        if self.eat(&Token::Assign).is_some() {
            let init = self.parse_assignment()?;
            end = init.location().span.end;
            children.push(ParseChild::Tree(init));
        }
        Ok(self.tree(ProductionKind::VariableDeclaration, children, start..end))
    }

    fn parse_if_statement(&mut self) -> Result<ParseTree, SyntaxError> {
        let keyword = self.expect(&Token::If, "'if'")?;
        self.expect(&Token::OpenParen, "'('")?;
        let test = self.parse_expression_sequence()?;
        self.expect(&Token::CloseParen, "')'")?;
        let consequent = self.parse_statement()?;
        let mut end = consequent.location().span.end;
        let mut children = vec![ParseChild::Tree(test), ParseChild::Tree(consequent)];
        if self.eat(&Token::Else).is_some() {
            let alternate = self.parse_statement()?;
            end = alternate.location().span.end;
            children.push(ParseChild::Tree(alternate));
        }
        Ok(self.tree(ProductionKind::IfStatement, children, keyword.start..end))
    }

    fn parse_while_statement(&mut self) -> Result<ParseTree, SyntaxError> {
        let keyword = self.expect(&Token::While, "'while'")?;
        self.expect(&Token::OpenParen, "'('")?;
        let test = self.parse_expression_sequence()?;
        self.expect(&Token::CloseParen, "')'")?;
        let body = self.parse_statement()?;
        let end = body.location().span.end;
        Ok(self.tree(
            ProductionKind::WhileStatement,
            vec![ParseChild::Tree(test), ParseChild::Tree(body)],
            keyword.start..end,
        ))
    }

    /// Children are normalized to `[test, body]` so do-while and while look
    /// alike to the builder, even though the body comes first in source.
    fn parse_do_while_statement(&mut self) -> Result<ParseTree, SyntaxError> {
        let keyword = self.expect(&Token::Do, "'do'")?;
        let body = self.parse_statement()?;
        self.expect(&Token::While, "'while'")?;
        self.expect(&Token::OpenParen, "'('")?;
        let test = self.parse_expression_sequence()?;
        let close = self.expect(&Token::CloseParen, "')'")?;
        let end = self.parse_statement_end()?.map_or(close.end, |semi| semi.end);
        Ok(self.tree(
            ProductionKind::DoWhileStatement,
            vec![ParseChild::Tree(test), ParseChild::Tree(body)],
            keyword.start..end,
        ))
    }

    /// Both `for` forms. Children are the declaration list (var form only),
    /// then the clause sequences that were actually present, then the body
    /// last.
    fn parse_for_statement(&mut self) -> Result<ParseTree, SyntaxError> {
        let keyword = self.expect(&Token::For, "'for'")?;
        self.expect(&Token::OpenParen, "'('")?;

        let mut kind = ProductionKind::ForStatement;
        let mut children = Vec::new();
        if self.eat(&Token::Var).is_some() {
            kind = ProductionKind::ForVarStatement;
            children.push(ParseChild::Tree(self.parse_variable_declarations()?));
        } else if !self.at(&Token::Semicolon) {
            children.push(ParseChild::Tree(self.parse_expression_sequence()?));
        }
        self.expect(&Token::Semicolon, "';'")?;
        if !self.at(&Token::Semicolon) {
            children.push(ParseChild::Tree(self.parse_expression_sequence()?));
        }
        self.expect(&Token::Semicolon, "';'")?;
        if !self.at(&Token::CloseParen) {
            children.push(ParseChild::Tree(self.parse_expression_sequence()?));
        }
        self.expect(&Token::CloseParen, "')'")?;

        let body = self.parse_statement()?;
        let end = body.location().span.end;
        children.push(ParseChild::Tree(body));
        Ok(self.tree(kind, children, keyword.start..end))
    }

    fn parse_jump_statement(&mut self, kind: ProductionKind) -> Result<ParseTree, SyntaxError> {
        let keyword = self.current_span();
        self.advance();
        let end = self.parse_statement_end()?.map_or(keyword.end, |semi| semi.end);
        Ok(self.tree(kind, vec![], keyword.start..end))
    }

    fn parse_return_statement(&mut self) -> Result<ParseTree, SyntaxError> {
        let keyword = self.expect(&Token::Return, "'return'")?;
        let mut children = Vec::new();
        let mut end = keyword.end;
        if !self.at(&Token::Semicolon) && !self.at(&Token::CloseBrace) && !self.at_end() {
            let value = self.parse_expression_sequence()?;
            end = value.location().span.end;
            children.push(ParseChild::Tree(value));
        }
        if let Some(semi) = self.parse_statement_end()? {
            end = semi.end;
        }
        Ok(self.tree(ProductionKind::ReturnStatement, children, keyword.start..end))
    }

    fn parse_function_declaration(&mut self) -> Result<ParseTree, SyntaxError> {
        let keyword = self.expect(&Token::Function, "'function'")?;
        let id = self.parse_identifier("function name")?;
        let mut children = vec![ParseChild::Tree(id)];
        if let Some(params) = self.parse_formal_parameters()? {
            children.push(ParseChild::Tree(params));
        }
        let body = self.parse_function_body()?;
        let end = body.location().span.end;
        children.push(ParseChild::Tree(body));
        Ok(self.tree(
            ProductionKind::FunctionDeclaration,
            children,
            keyword.start..end,
        ))
    }

    /// `None` when the parameter list is empty: an absent parameter-list
    /// node and an empty one are indistinguishable downstream.
    fn parse_formal_parameters(&mut self) -> Result<Option<ParseTree>, SyntaxError> {
        self.expect(&Token::OpenParen, "'('")?;
        if self.eat(&Token::CloseParen).is_some() {
            return Ok(None);
        }
        let mut children = vec![ParseChild::Tree(self.parse_identifier("parameter name")?)];
        while self.eat(&Token::Comma).is_some() {
            children.push(ParseChild::Tree(self.parse_identifier("parameter name")?));
        }
        self.expect(&Token::CloseParen, "')'")?;
        let span = match (children.first(), children.last()) {
            (Some(ParseChild::Tree(first)), Some(ParseChild::Tree(last))) => {
                first.location().span.start..last.location().span.end
            }
            _ => self.current_span(),
        };
        Ok(Some(self.tree(
            ProductionKind::FormalParameterList,
            children,
            span,
        )))
    }

    fn parse_function_body(&mut self) -> Result<ParseTree, SyntaxError> {
        let open = self.expect(&Token::OpenBrace, "'{'")?;
        let mut children = Vec::new();
        while !self.at(&Token::CloseBrace) && !self.at_end() {
            children.push(ParseChild::Tree(self.parse_statement()?));
        }
        let close = self.expect(&Token::CloseBrace, "'}'")?;
        Ok(self.tree(
            ProductionKind::FunctionBody,
            children,
            open.start..close.end,
        ))
    }

    // ---- expressions ----

    fn parse_expression_sequence(&mut self) -> Result<ParseTree, SyntaxError> {
        let first = self.parse_assignment()?;
        let start = first.location().span.start;
        let mut end = first.location().span.end;
        let mut children = vec![ParseChild::Tree(first)];
        while self.eat(&Token::Comma).is_some() {
            let next = self.parse_assignment()?;
            end = next.location().span.end;
            children.push(ParseChild::Tree(next));
        }
        Ok(self.tree(ProductionKind::ExpressionSequence, children, start..end))
    }

    fn parse_assignment(&mut self) -> Result<ParseTree, SyntaxError> {
        let left = self.parse_logical_or()?;
        if !self.at(&Token::Assign) {
            return Ok(left);
        }
        let operator = self.advance_terminal()?;
        // Right-associative: a = b = c parses as a = (b = c).
        let right = self.parse_assignment()?;
        let span = left.location().span.start..right.location().span.end;
        Ok(self.tree(
            ProductionKind::Assignment,
            vec![
                ParseChild::Tree(left),
                ParseChild::Token(operator),
                ParseChild::Tree(right),
            ],
            span,
        ))
    }

    /// Left-associative binary level. Loops while the lookahead is one of
    /// `ops`, keeping the operator terminal between the operand subtrees.
    fn parse_binary_level(
        &mut self,
        kind: ProductionKind,
        ops: &[Token],
        next: fn(&mut Self) -> Result<ParseTree, SyntaxError>,
    ) -> Result<ParseTree, SyntaxError> {
        let mut left = next(self)?;
        while self.peek().is_some_and(|token| ops.contains(token)) {
            let operator = self.advance_terminal()?;
            let right = next(self)?;
            let span = left.location().span.start..right.location().span.end;
            left = self.tree(
                kind,
                vec![
                    ParseChild::Tree(left),
                    ParseChild::Token(operator),
                    ParseChild::Tree(right),
                ],
                span,
            );
        }
        Ok(left)
    }

    fn parse_logical_or(&mut self) -> Result<ParseTree, SyntaxError> {
        self.parse_binary_level(
            ProductionKind::LogicalOr,
            &[Token::OrOr],
            Self::parse_logical_and,
        )
    }

    fn parse_logical_and(&mut self) -> Result<ParseTree, SyntaxError> {
        self.parse_binary_level(
            ProductionKind::LogicalAnd,
            &[Token::AndAnd],
            Self::parse_bit_or,
        )
    }

    fn parse_bit_or(&mut self) -> Result<ParseTree, SyntaxError> {
        self.parse_binary_level(ProductionKind::BitOr, &[Token::Pipe], Self::parse_bit_xor)
    }

    fn parse_bit_xor(&mut self) -> Result<ParseTree, SyntaxError> {
        self.parse_binary_level(ProductionKind::BitXor, &[Token::Caret], Self::parse_bit_and)
    }

    fn parse_bit_and(&mut self) -> Result<ParseTree, SyntaxError> {
        self.parse_binary_level(
            ProductionKind::BitAnd,
            &[Token::Ampersand],
            Self::parse_equality,
        )
    }

    fn parse_equality(&mut self) -> Result<ParseTree, SyntaxError> {
        self.parse_binary_level(
            ProductionKind::Equality,
            &[
                Token::StrictEqual,
                Token::StrictNotEqual,
                Token::Equal,
                Token::NotEqual,
            ],
            Self::parse_relational,
        )
    }

    fn parse_relational(&mut self) -> Result<ParseTree, SyntaxError> {
        self.parse_binary_level(
            ProductionKind::Relational,
            &[
                Token::Less,
                Token::LessEqual,
                Token::Greater,
                Token::GreaterEqual,
            ],
            Self::parse_bit_shift,
        )
    }

    fn parse_bit_shift(&mut self) -> Result<ParseTree, SyntaxError> {
        self.parse_binary_level(
            ProductionKind::BitShift,
            &[
                Token::LeftShift,
                Token::RightShift,
                Token::UnsignedRightShift,
            ],
            Self::parse_additive,
        )
    }

    fn parse_additive(&mut self) -> Result<ParseTree, SyntaxError> {
        self.parse_binary_level(
            ProductionKind::Additive,
            &[Token::Plus, Token::Minus],
            Self::parse_multiplicative,
        )
    }

    fn parse_multiplicative(&mut self) -> Result<ParseTree, SyntaxError> {
        self.parse_binary_level(
            ProductionKind::Multiplicative,
            &[Token::Star, Token::Slash, Token::Percent],
            Self::parse_unary,
        )
    }

    fn parse_unary(&mut self) -> Result<ParseTree, SyntaxError> {
        let kind = match self.peek() {
            Some(Token::Minus) => ProductionKind::UnaryMinus,
            Some(Token::Plus) => ProductionKind::UnaryPlus,
            Some(Token::Not) => ProductionKind::LogicNot,
            Some(Token::Tilde) => ProductionKind::BitNot,
            Some(Token::Delete) => ProductionKind::Delete,
            Some(Token::PlusPlus) => ProductionKind::PreIncrement,
            Some(Token::MinusMinus) => ProductionKind::PreDecrement,
            _ => return self.parse_postfix(),
        };
        let operator = self.advance_terminal()?;
        let operand = self.parse_unary()?;
        let span = operator.location.span.start..operand.location().span.end;
        Ok(self.tree(
            kind,
            vec![ParseChild::Token(operator), ParseChild::Tree(operand)],
            span,
        ))
    }

    fn parse_postfix(&mut self) -> Result<ParseTree, SyntaxError> {
        let mut expr = self.parse_call_or_member()?;
        loop {
            let kind = match self.peek() {
                Some(Token::PlusPlus) => ProductionKind::PostIncrement,
                Some(Token::MinusMinus) => ProductionKind::PostDecrement,
                _ => break,
            };
            let operator = self.advance_terminal()?;
            let span = expr.location().span.start..operator.location.span.end;
            expr = self.tree(
                kind,
                vec![ParseChild::Tree(expr), ParseChild::Token(operator)],
                span,
            );
        }
        Ok(expr)
    }

    fn parse_call_or_member(&mut self) -> Result<ParseTree, SyntaxError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.peek() {
                Some(Token::Dot) => {
                    self.advance();
                    let property = self.parse_identifier("property name")?;
                    let span = expr.location().span.start..property.location().span.end;
                    expr = self.tree(
                        ProductionKind::MemberDot,
                        vec![ParseChild::Tree(expr), ParseChild::Tree(property)],
                        span,
                    );
                }
                Some(Token::OpenBracket) => {
                    self.advance();
                    let index = self.parse_expression_sequence()?;
                    let close = self.expect(&Token::CloseBracket, "']'")?;
                    let span = expr.location().span.start..close.end;
                    expr = self.tree(
                        ProductionKind::MemberIndex,
                        vec![ParseChild::Tree(expr), ParseChild::Tree(index)],
                        span,
                    );
                }
                Some(Token::OpenParen) => {
                    self.advance();
                    let mut children = vec![ParseChild::Tree(expr)];
                    if !self.at(&Token::CloseParen) {
                        children.push(ParseChild::Tree(self.parse_assignment()?));
                        while self.eat(&Token::Comma).is_some() {
                            children.push(ParseChild::Tree(self.parse_assignment()?));
                        }
                    }
                    let close = self.expect(&Token::CloseParen, "')'")?;
                    let span = match children.first() {
                        Some(ParseChild::Tree(callee)) => {
                            callee.location().span.start..close.end
                        }
                        _ => close,
                    };
                    expr = self.tree(ProductionKind::Call, children, span);
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<ParseTree, SyntaxError> {
        match self.peek() {
            Some(token) if token.is_identifier() => self.parse_identifier("identifier"),
            Some(token) if token.is_literal() => {
                let terminal = self.advance_terminal()?;
                let span = terminal.location.span.clone();
                Ok(self.tree(
                    ProductionKind::Literal,
                    vec![ParseChild::Token(terminal)],
                    span,
                ))
            }
            Some(Token::OpenParen) => self.parse_parenthesized(),
            Some(Token::OpenBracket) => self.parse_array_literal(),
            Some(Token::OpenBrace) => self.parse_object_literal(),
            Some(Token::Function) => self.parse_function_expression(),
            Some(_) => Err(self.error("unexpected token".to_string())),
            None => Err(self.error("unexpected end of input".to_string())),
        }
    }

    fn parse_identifier(&mut self, what: &str) -> Result<ParseTree, SyntaxError> {
        match self.peek() {
            Some(token) if token.is_identifier() => {
                let terminal = self.advance_terminal()?;
                let span = terminal.location.span.clone();
                Ok(self.tree(
                    ProductionKind::Identifier,
                    vec![ParseChild::Token(terminal)],
                    span,
                ))
            }
            _ => Err(self.error(format!("expected {what}"))),
        }
    }

    fn parse_parenthesized(&mut self) -> Result<ParseTree, SyntaxError> {
        let open = self.expect(&Token::OpenParen, "'('")?;
        let inner = self.parse_expression_sequence()?;
        let close = self.expect(&Token::CloseParen, "')'")?;
        Ok(self.tree(
            ProductionKind::Parenthesized,
            vec![ParseChild::Tree(inner)],
            open.start..close.end,
        ))
    }

    /// Array literal with elision support. A comma where an element is
    /// expected produces an `Elision` node spanning that comma; a comma
    /// after an element is a plain separator, so `[1,]` has one element
    /// and `[1,,3]` has three.
    fn parse_array_literal(&mut self) -> Result<ParseTree, SyntaxError> {
        let open = self.expect(&Token::OpenBracket, "'['")?;
        let mut children = Vec::new();
        while !self.at(&Token::CloseBracket) && !self.at_end() {
            if self.at(&Token::Comma) {
                let span = self.current_span();
                self.advance();
                children.push(ParseChild::Tree(self.tree(
                    ProductionKind::Elision,
                    vec![],
                    span,
                )));
                continue;
            }
            children.push(ParseChild::Tree(self.parse_assignment()?));
            if self.eat(&Token::Comma).is_none() {
                break;
            }
        }
        let close = self.expect(&Token::CloseBracket, "']'")?;
        Ok(self.tree(
            ProductionKind::ArrayLiteral,
            children,
            open.start..close.end,
        ))
    }

    fn parse_object_literal(&mut self) -> Result<ParseTree, SyntaxError> {
        let open = self.expect(&Token::OpenBrace, "'{'")?;
        let mut children = Vec::new();
        if !self.at(&Token::CloseBrace) {
            children.push(ParseChild::Tree(self.parse_property_assignment()?));
            while self.eat(&Token::Comma).is_some() {
                children.push(ParseChild::Tree(self.parse_property_assignment()?));
            }
        }
        let close = self.expect(&Token::CloseBrace, "'}'")?;
        Ok(self.tree(
            ProductionKind::ObjectLiteral,
            children,
            open.start..close.end,
        ))
    }

    fn parse_property_assignment(&mut self) -> Result<ParseTree, SyntaxError> {
        let key = match self.peek() {
            Some(token) if token.is_identifier() => self.parse_identifier("property key")?,
            Some(token) if token.is_literal() => {
                let terminal = self.advance_terminal()?;
                let span = terminal.location.span.clone();
                self.tree(
                    ProductionKind::Literal,
                    vec![ParseChild::Token(terminal)],
                    span,
                )
            }
            _ => return Err(self.error("expected property key".to_string())),
        };
        self.expect(&Token::Colon, "':'")?;
        let value = self.parse_assignment()?;
        let span = key.location().span.start..value.location().span.end;
        Ok(self.tree(
            ProductionKind::PropertyAssignment,
            vec![ParseChild::Tree(key), ParseChild::Tree(value)],
            span,
        ))
    }

    fn parse_function_expression(&mut self) -> Result<ParseTree, SyntaxError> {
        let keyword = self.expect(&Token::Function, "'function'")?;
        let mut children = Vec::new();
        if self.peek().is_some_and(Token::is_identifier) {
            children.push(ParseChild::Tree(self.parse_identifier("function name")?));
        }
        if let Some(params) = self.parse_formal_parameters()? {
            children.push(ParseChild::Tree(params));
        }
        let body = self.parse_function_body()?;
        let end = body.location().span.end;
        children.push(ParseChild::Tree(body));
        Ok(self.tree(
            ProductionKind::FunctionExpression,
            children,
            keyword.start..end,
        ))
    }
}

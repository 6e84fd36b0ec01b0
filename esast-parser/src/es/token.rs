//! Token definitions for the source language
//!
//! All tokens are defined with the logos derive macro. Whitespace and both
//! comment forms are skipped at this level; positions are recovered later
//! from the byte spans logos reports, so nothing here tracks lines or
//! columns.

use logos::Logos;
use serde::Serialize;

/// All possible tokens of the source language.
#[derive(Logos, Debug, Clone, PartialEq, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub enum Token {
    // Keywords
    #[token("var")]
    Var,
    #[token("function")]
    Function,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("do")]
    Do,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("return")]
    Return,
    #[token("delete")]
    Delete,

    // Literals
    #[token("null")]
    NullLiteral,
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    BooleanLiteral(bool),
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| lex.slice().to_owned())]
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().to_owned())]
    DecimalLiteral(String),
    // Raw slice is kept, quotes included, so dumps show the source spelling
    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| lex.slice().to_owned())]
    #[regex(r"'([^'\\\n]|\\.)*'", |lex| lex.slice().to_owned())]
    StringLiteral(String),

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*", |lex| lex.slice().to_owned())]
    Identifier(String),

    // Punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,

    // Operators
    #[token("=")]
    Assign,
    #[token("===")]
    StrictEqual,
    #[token("!==")]
    StrictNotEqual,
    #[token("==")]
    Equal,
    #[token("!=")]
    NotEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("<<")]
    LeftShift,
    #[token(">>>")]
    UnsignedRightShift,
    #[token(">>")]
    RightShift,
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
    #[token("&")]
    Ampersand,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Not,
    #[token("~")]
    Tilde,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,

    /// Catch-all for characters no other pattern accepts, kept in the
    /// stream so the parser can report a position instead of dropping
    /// input.
    #[regex(r".", priority = 0)]
    Illegal,
}

impl Token {
    /// True for tokens that carry an identifier name.
    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    /// True for the literal-carrying tokens (null, boolean, numeric, string).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::NullLiteral
                | Token::BooleanLiteral(_)
                | Token::DecimalLiteral(_)
                | Token::StringLiteral(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        crate::es::lexing::tokenize(source)
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn keywords_win_over_identifiers() {
        assert_eq!(kinds("var"), vec![Token::Var]);
        assert_eq!(
            kinds("variable"),
            vec![Token::Identifier("variable".to_string())]
        );
    }

    #[test]
    fn longest_operator_wins() {
        assert_eq!(kinds("==="), vec![Token::StrictEqual]);
        assert_eq!(kinds("=="), vec![Token::Equal]);
        assert_eq!(kinds(">>>"), vec![Token::UnsignedRightShift]);
        assert_eq!(kinds("++"), vec![Token::PlusPlus]);
        assert_eq!(kinds("+ +"), vec![Token::Plus, Token::Plus]);
    }

    #[test]
    fn literals_keep_raw_text() {
        assert_eq!(
            kinds("3.14 'hi' \"yo\" 0xFF true null"),
            vec![
                Token::DecimalLiteral("3.14".to_string()),
                Token::StringLiteral("'hi'".to_string()),
                Token::StringLiteral("\"yo\"".to_string()),
                Token::DecimalLiteral("0xFF".to_string()),
                Token::BooleanLiteral(true),
                Token::NullLiteral,
            ]
        );
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("a // trailing\n/* block\n comment */ b /***/ c"),
            vec![
                Token::Identifier("a".to_string()),
                Token::Identifier("b".to_string()),
                Token::Identifier("c".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_bytes_become_illegal() {
        assert_eq!(
            kinds("a @ b"),
            vec![
                Token::Identifier("a".to_string()),
                Token::Illegal,
                Token::Identifier("b".to_string()),
            ]
        );
    }
}

//! Base tokenization
//!
//! This is the entry point where source strings become token streams. The
//! raw tokenization is done by the logos lexer; every token is paired with
//! its byte span so later stages can recover line/column positions.
//!
//! The parser operates on the stream produced here and never re-reads the
//! source except to slice terminal text out of a span.

use crate::es::token::Token;
use logos::Logos;

/// Tokenize source code with location information.
///
/// Input the lexer cannot match is kept in the stream as
/// [`Token::Illegal`] rather than silently dropped, so the parser can
/// report a syntax error at the offending position.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => tokens.push((Token::Illegal, lexer.span())),
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = tokenize("a = 5;");
        let spans: Vec<_> = tokens.iter().map(|(_, span)| span.clone()).collect();
        assert_eq!(spans, vec![0..1, 2..3, 4..5, 5..6]);
    }

    #[test]
    fn test_whitespace_never_appears() {
        let tokens = tokenize("  a\n\tb  ");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].0, Token::Identifier("a".to_string()));
        assert_eq!(tokens[1].0, Token::Identifier("b".to_string()));
    }
}

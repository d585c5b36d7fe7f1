//! Functionality for classifying source characters into lexemes.
use crate::span::*;

use super::{char_ext::*, cursor::*, error::*, tokens::*};

/// Tokenizes `source`, producing its tokens in source order, or the error
/// for the first character that belongs to no supported category.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).run()
}

struct Lexer<'s> {
    cursor: CharCursor<'s>,
    tokens: Vec<Token>,
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            cursor: CharCursor::new(source),
            tokens: vec![],
        }
    }

    /// Finishes the lexer and consumes it, producing a [`Vec<Token>`]
    /// containing the tokens it read.
    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(ch) = self.cursor.peek() {
            match ch {
                '(' => self.single_char(TokenKind::OpenParen),
                ')' => self.single_char(TokenKind::CloseParen),
                '+' | '-' | '*' | '/' => self.single_char(TokenKind::BinaryOperator),
                '=' => self.single_char(TokenKind::Equals),
                _ if ch.is_ascii_digit() => self.number(),
                _ if ch.is_alpha() => self.identifier_or_keyword(),
                _ if ch.is_skippable() => {
                    self.cursor.try_next();
                }
                _ => return Err(self.unrecognized(ch)),
            }
        }

        Ok(self.tokens)
    }

    /// Emits a token for the single character at the cursor.
    fn single_char(&mut self, kind: TokenKind) {
        let ch = self.cursor.next();
        self.tokens.push(Token::new(ch, kind));
    }

    /// Greedily accumulates a run of decimal digits into one number token.
    fn number(&mut self) {
        let digits = self.cursor.eat_while(char::is_ascii_digit);
        self.tokens.push(Token::new(digits, TokenKind::Number));
    }

    /// Greedily accumulates a run of alphabetic characters, then resolves
    /// the run against the keyword table.
    fn identifier_or_keyword(&mut self) {
        let text = self.cursor.eat_while(|ch| ch.is_alpha());
        let kind = keyword(&text).unwrap_or(TokenKind::Identifier);
        self.tokens.push(Token::new(text, kind));
    }

    fn unrecognized(&self, ch: char) -> LexError {
        let position = self.cursor.byte_position();

        LexError {
            span: Span::new(position, position + ch.len_utf8()),
            error_type: ErrorType::UnrecognizedCharacter(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(value: &str, kind: TokenKind) -> Token {
        Token::new(value, kind)
    }

    fn assert_lexes(source: &str, expected: Vec<Token>) {
        let actual = tokenize(source).expect("Unexpected lexer error");

        assert_eq!(
            expected, actual,
            "\n\nWhen tokenizing: {:?}\nExpected: {:?}\nActual:   {:?}\n",
            source, expected, actual
        );
    }

    fn assert_lex_fails_at(source: &str, character: char) {
        match tokenize(source) {
            Ok(tokens) => panic!("Expected lexer to fail, but it produced: {:#?}", tokens),
            Err(error) => assert_eq!(
                ErrorType::UnrecognizedCharacter(character),
                error.error_type
            ),
        }
    }

    #[test]
    fn empty_input_produces_no_tokens() {
        assert_lexes("", vec![]);
    }

    #[test]
    fn whitespace_only_input_produces_no_tokens() {
        assert_lexes("  \n\t ", vec![]);
    }

    #[test]
    fn open_paren() {
        assert_lexes("(", vec![tok("(", TokenKind::OpenParen)]);
    }

    #[test]
    fn close_paren() {
        assert_lexes(")", vec![tok(")", TokenKind::CloseParen)]);
    }

    #[test]
    fn equals() {
        assert_lexes("=", vec![tok("=", TokenKind::Equals)]);
    }

    #[test]
    fn operators_share_one_kind() {
        for op in ["+", "-", "*", "/"] {
            assert_lexes(op, vec![tok(op, TokenKind::BinaryOperator)]);
        }
    }

    #[test]
    fn digits_accumulate_into_one_number() {
        assert_lexes("123", vec![tok("123", TokenKind::Number)]);
    }

    #[test]
    fn whitespace_splits_number_runs() {
        assert_lexes(
            "12 34",
            vec![tok("12", TokenKind::Number), tok("34", TokenKind::Number)],
        );
    }

    #[test]
    fn category_change_splits_runs_without_whitespace() {
        assert_lexes(
            "12ab",
            vec![tok("12", TokenKind::Number), tok("ab", TokenKind::Identifier)],
        );
    }

    #[test]
    fn let_is_a_keyword() {
        assert_lexes("let", vec![tok("let", TokenKind::Let)]);
    }

    #[test]
    fn keyword_prefix_does_not_split_an_identifier() {
        assert_lexes("letx", vec![tok("letx", TokenKind::Identifier)]);
    }

    #[test]
    fn single_letter_identifier() {
        assert_lexes("x", vec![tok("x", TokenKind::Identifier)]);
    }

    #[test]
    fn non_ascii_letters_form_identifiers() {
        assert_lexes("héllo", vec![tok("héllo", TokenKind::Identifier)]);
    }

    #[test]
    fn let_binding_expression() {
        assert_lexes(
            "let x = (1 + 23)",
            vec![
                tok("let", TokenKind::Let),
                tok("x", TokenKind::Identifier),
                tok("=", TokenKind::Equals),
                tok("(", TokenKind::OpenParen),
                tok("1", TokenKind::Number),
                tok("+", TokenKind::BinaryOperator),
                tok("23", TokenKind::Number),
                tok(")", TokenKind::CloseParen),
            ],
        );
    }

    #[test]
    fn unrecognized_character_fails_the_scan() {
        assert_lex_fails_at("a # b", '#');
    }

    #[test]
    fn carriage_return_is_not_skippable() {
        assert_lex_fails_at("a\rb", '\r');
    }

    #[test]
    fn error_span_points_at_the_offending_byte() {
        let error = tokenize("a # b").unwrap_err();

        assert_eq!(Bytes::new(2), error.span.start());
        assert_eq!(Bytes::new(1), error.length());
    }

    #[test]
    fn retokenizing_concatenated_values_preserves_kinds() {
        // No two neighboring tokens share a category here, so stripping the
        // whitespace between them cannot fuse their runs.
        let source = "let (x) = 1 + 23";
        let tokens = tokenize(source).expect("Unexpected lexer error");

        let concatenated: String = tokens.iter().map(|t| t.value.as_str()).collect();
        let retokenized = tokenize(&concatenated).expect("Unexpected lexer error");

        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        let rekinds: Vec<_> = retokenized.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, rekinds);
    }

    #[test]
    fn every_non_whitespace_character_lands_in_a_token() {
        let source = "let x = (1 + 23)";
        let tokens = tokenize(source).expect("Unexpected lexer error");

        let concatenated: String = tokens.iter().map(|t| t.value.as_str()).collect();
        let stripped: String = source.chars().filter(|ch| !ch.is_skippable()).collect();
        assert_eq!(stripped, concatenated);
    }

    #[test]
    fn no_token_has_an_empty_value() {
        let tokens = tokenize("let x = (1 + 23)").expect("Unexpected lexer error");

        assert!(tokens.iter().all(|t| !t.value.is_empty()));
    }
}

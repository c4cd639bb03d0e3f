//! SQL tokenizer implementation.

use super::{Keyword, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.advance_while(char::is_whitespace);

            // -- line comment
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                self.advance_while(|c| c != '\n');
                continue;
            }

            // /* block comment */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    fn scan_word(&mut self) -> Token {
        self.advance_while(is_identifier_char);
        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier),
        }
    }

    /// Scans a delimited token such as `'text'` or `"name"`, where a doubled
    /// closing delimiter stands for itself.
    fn scan_delimited(
        &mut self,
        close: char,
        kind: TokenKind,
        unterminated: &'static str,
    ) -> Token {
        loop {
            match self.advance() {
                Some(c) if c == close => {
                    if close != ']' && self.peek() == Some(close) {
                        self.advance();
                    } else {
                        return self.make_token(kind);
                    }
                }
                Some(_) => {}
                None => return self.make_token(TokenKind::Error(unterminated)),
            }
        }
    }

    fn scan_quoted_identifier(&mut self, close: char) -> Token {
        self.scan_delimited(close, TokenKind::Identifier, "unterminated quoted identifier")
    }

    fn scan_blob(&mut self) -> Token {
        // Opening X has been consumed; the quote is next.
        self.advance();
        let mut digits = 0usize;
        loop {
            match self.advance() {
                Some('\'') => break,
                Some(c) if c.is_ascii_hexdigit() => digits += 1,
                Some(_) => {
                    return self.make_token(TokenKind::Error("invalid character in blob literal"));
                }
                None => return self.make_token(TokenKind::Error("unterminated blob literal")),
            }
        }
        if digits % 2 == 1 {
            return self.make_token(TokenKind::Error("odd number of hex digits in blob literal"));
        }
        self.make_token(TokenKind::Blob)
    }

    fn scan_number(&mut self) -> Token {
        let first = self.input[self.start..].chars().next();
        if first == Some('0') && matches!(self.peek(), Some('x' | 'X')) {
            self.advance();
            if !self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                return self.make_token(TokenKind::Error("malformed hexadecimal literal"));
            }
            self.advance_while(|c| c.is_ascii_hexdigit());
            return self.make_token(TokenKind::Number);
        }

        self.advance_while(|c| c.is_ascii_digit());
        if first != Some('.') && self.peek() == Some('.') {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let exponent_follows = match self.peek_next() {
                Some('+' | '-') => self.input[self.pos + 2..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_digit()),
                Some(c) => c.is_ascii_digit(),
                None => false,
            };
            if !exponent_follows {
                return self.make_token(TokenKind::Error("malformed exponent in numeric literal"));
            }
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            self.advance_while(|c| c.is_ascii_digit());
        }

        if self.peek().is_some_and(is_identifier_char) {
            self.advance_while(is_identifier_char);
            return self.make_token(TokenKind::Error("malformed numeric literal"));
        }
        self.make_token(TokenKind::Number)
    }

    fn scan_named_parameter(&mut self) -> Token {
        if !self.peek().is_some_and(is_identifier_char) {
            return self.make_token(TokenKind::Error("parameter name expected"));
        }
        self.advance_while(is_identifier_char);
        self.make_token(TokenKind::Parameter)
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '~' => self.make_token(TokenKind::BitNot),
            '&' => self.make_token(TokenKind::BitAnd),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.scan_number(),
            '.' => self.make_token(TokenKind::Dot),
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                }
                self.make_token(TokenKind::Eq)
            }
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                }
                Some('<') => {
                    self.advance();
                    self.make_token(TokenKind::LeftShift)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            '>' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::RightShift)
                }
                _ => self.make_token(TokenKind::Gt),
            },
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Error("unexpected character '!'"))
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    self.make_token(TokenKind::Concat)
                } else {
                    self.make_token(TokenKind::BitOr)
                }
            }
            '?' => {
                self.advance_while(|c| c.is_ascii_digit());
                self.make_token(TokenKind::Parameter)
            }
            ':' | '@' | '$' => self.scan_named_parameter(),
            '\'' => self.scan_delimited('\'', TokenKind::String, "unterminated string literal"),
            '"' => self.scan_quoted_identifier('"'),
            '`' => self.scan_quoted_identifier('`'),
            '[' => self.scan_quoted_identifier(']'),
            'X' | 'x' if self.peek() == Some('\'') => self.scan_blob(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_word(),
            _ => self.make_token(TokenKind::Error("unexpected character")),
        }
    }

    /// Tokenizes the entire input. The last token is always `Eof`.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

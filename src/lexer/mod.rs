use ahash::AHashMap;

use token::{Token, TokenKind};

pub mod token;

const LEXEME_MAX_LENGTH: usize = 99;
const EOF_LEXEME: &str = "EOF";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum CharClass {
    Letter,
    Digit,
    Unknown,
    EndOfInput,
}

/// Pull-based lexer over a NUL-terminated source string. The caller appends
/// the `'\0'` sentinel; the cursor never advances past it.
pub struct Lexer<'source> {
    operators: AHashMap<u8, TokenKind>,
    source: &'source str,
    start: usize,
    current: usize,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        let mut operators = AHashMap::with_capacity(11);
        operators.insert(b'(', TokenKind::LeftParen);
        operators.insert(b')', TokenKind::RightParen);
        operators.insert(b'+', TokenKind::Add);
        operators.insert(b'-', TokenKind::Sub);
        operators.insert(b'*', TokenKind::Mult);
        operators.insert(b'/', TokenKind::Div);
        operators.insert(b'%', TokenKind::Mod);
        operators.insert(b'=', TokenKind::Assign);
        operators.insert(b';', TokenKind::Semicolon);
        operators.insert(b'{', TokenKind::OpenBrace);
        operators.insert(b'}', TokenKind::CloseBrace);
        Self {
            operators,
            source,
            start: 0,
            current: 0,
        }
    }

    pub fn next_token(&mut self) -> Token<'source> {
        self.skip_whitespace();
        self.start = self.current;
        let token = match classify(self.peek()) {
            CharClass::Letter => self.make_word_token(),
            CharClass::Digit => self.make_integer_token(),
            CharClass::Unknown => self.make_symbol_token(),
            CharClass::EndOfInput => Token {
                kind: TokenKind::Eof,
                lexeme: EOF_LEXEME,
            },
        };
        println!(
            "Next token is: {}       Next lexeme is {}",
            token.kind.code(),
            token.lexeme
        );
        token
    }

    fn advance(&mut self) -> u8 {
        let byte = self.source.as_bytes()[self.current];
        self.current += 1;
        byte
    }

    fn peek(&self) -> u8 {
        self.source.as_bytes()[self.current]
    }

    fn lexeme(&self) -> &'source str {
        &self.source[self.start..self.current]
    }

    fn make_token(&self, kind: TokenKind) -> Token<'source> {
        let mut lexeme = self.lexeme();
        if lexeme.len() > LEXEME_MAX_LENGTH {
            println!("Error - lexeme is too long");
            lexeme = &lexeme[..LEXEME_MAX_LENGTH];
        }
        Token { kind, lexeme }
    }

    fn make_word_token(&mut self) -> Token<'source> {
        self.advance();
        while matches!(classify(self.peek()), CharClass::Letter | CharClass::Digit) {
            self.current += 1;
        }
        self.make_token(keyword_kind(self.lexeme()))
    }

    fn make_integer_token(&mut self) -> Token<'source> {
        self.advance();
        while classify(self.peek()) == CharClass::Digit {
            self.current += 1;
        }
        self.make_token(TokenKind::IntLiteral)
    }

    fn make_symbol_token(&mut self) -> Token<'source> {
        let byte = self.advance();
        match self.operators.get(&byte) {
            Some(kind) => self.make_token(*kind),
            None => {
                // keep the lexeme slice on a char boundary for non-ascii input
                while !self.source.is_char_boundary(self.current) {
                    self.current += 1;
                }
                println!("Error - undefined operator/symbol");
                self.make_token(TokenKind::Eof)
            }
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                b' ' | b'\r' | b'\t' | b'\n' => self.current += 1,
                _ => break,
            }
        }
    }
}

fn classify(byte: u8) -> CharClass {
    if byte.is_ascii_alphabetic() || matches!(byte, b'&' | b'|' | b'!') {
        CharClass::Letter
    } else if byte.is_ascii_digit() {
        CharClass::Digit
    } else if byte == b'\0' {
        CharClass::EndOfInput
    } else {
        CharClass::Unknown
    }
}

// Keywords match by leading characters, so "iffy" still lexes as If.
fn keyword_kind(lexeme: &str) -> TokenKind {
    if lexeme == "TRUE" {
        TokenKind::True
    } else if lexeme == "FALSE" {
        TokenKind::False
    } else if lexeme.starts_with('!') {
        TokenKind::Not
    } else if lexeme.starts_with("&&") {
        TokenKind::And
    } else if lexeme.starts_with("||") {
        TokenKind::Or
    } else if lexeme.starts_with("if") {
        TokenKind::If
    } else if lexeme == "else" {
        TokenKind::Else
    } else {
        TokenKind::Identifier
    }
}

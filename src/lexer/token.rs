use num_derive::ToPrimitive;
use num_traits::ToPrimitive as _;

const EOF_CODE: i32 = -1;

// Discriminants are the numeric codes printed in trace lines.
#[derive(Debug, PartialEq, Eq, Clone, Copy, ToPrimitive)]
pub enum TokenKind {
    // Literals.
    IntLiteral = 10,
    Identifier = 11,
    // Operators and punctuation.
    Add = 21,
    Sub = 22,
    Mult = 23,
    Div = 24,
    Mod = 25,
    Assign = 26,
    Semicolon = 27,
    LeftParen = 28,
    RightParen = 29,
    // Boolean keywords and logical operators.
    True = 30,
    False = 31,
    Not = 32,
    And = 33,
    Or = 34,
    // Statement keywords.
    If = 35,
    Else = 36,
    OpenBrace = 37,
    CloseBrace = 38,
    // End of input, also produced for an unrecognized character.
    Eof = -1,
}

impl TokenKind {
    pub fn code(self) -> i32 {
        self.to_i32().unwrap_or(EOF_CODE)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Token<'source> {
    pub kind: TokenKind,
    pub lexeme: &'source str,
}

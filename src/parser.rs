use crate::error::SyntaxError;
use crate::lexer::token::{Token, TokenKind};
use crate::lexer::Lexer;

/// Recursive-descent recognizer with a single token of lookahead. A mismatch
/// prints a diagnostic, bumps the failure count, and returns without
/// consuming the offending token.
pub struct Parser<'source> {
    lexer: Lexer<'source>,
    current: Token<'source>,
    failures: usize,
}

impl<'source> Parser<'source> {
    pub fn new(lexer: Lexer<'source>) -> Self {
        let initial_token = Token {
            kind: TokenKind::Eof,
            lexeme: "",
        };
        Self {
            lexer,
            current: initial_token,
            failures: 0,
        }
    }

    pub fn run(mut self) -> usize {
        // the first pull primes the lookahead
        self.advance();
        loop {
            self.if_statement();
            self.advance();
            if self.check(TokenKind::Eof) {
                break;
            }
        }
        self.failures
    }

    // <ifstmt> -> if (<boolexpr>) '{'<assign>'}' [else '{'<assign>'}']
    //
    // The else tail is only recognized when the run loop re-enters this
    // procedure directly on an Else token; the if branch does not loop back
    // for it. A missing open brace after the condition is not reported.
    fn if_statement(&mut self) {
        if self.r#match(TokenKind::If) {
            if !self.r#match(TokenKind::LeftParen) {
                self.report(SyntaxError::MissingLeftParen);
                return;
            }
            self.boolean_expr();
            if !self.r#match(TokenKind::RightParen) {
                self.report(SyntaxError::MissingRightParen);
                return;
            }
            if self.r#match(TokenKind::OpenBrace) {
                self.assign();
            }
        } else if self.r#match(TokenKind::Else) {
            if self.r#match(TokenKind::OpenBrace) {
                self.assign();
            } else {
                self.report(SyntaxError::ElseStatement);
            }
        } else {
            self.report(SyntaxError::IfStatement);
        }
    }

    // <boolexpr> -> <boolterm> {|| <boolterm>}
    fn boolean_expr(&mut self) {
        self.boolean_term();
        if self.r#match(TokenKind::Or) {
            self.boolean_expr();
        }
    }

    // <boolterm> -> <boolfactor> {&& <boolfactor>}
    fn boolean_term(&mut self) {
        self.boolean_factor();
        if self.r#match(TokenKind::And) {
            self.boolean_term();
        }
    }

    // <boolfactor> -> TRUE | FALSE | ! <boolfactor> | (<boolexpr>)
    fn boolean_factor(&mut self) {
        match self.current.kind {
            TokenKind::True | TokenKind::False => self.advance(),
            TokenKind::Not => {
                self.advance();
                self.boolean_factor();
            }
            TokenKind::LeftParen => {
                self.advance();
                self.boolean_expr();
                if !self.r#match(TokenKind::RightParen) {
                    self.report(SyntaxError::MissingRightParen);
                }
            }
            _ => self.report(SyntaxError::BooleanFactor),
        }
    }

    // <assign> -> id = <expr>; {<assign>}
    fn assign(&mut self) {
        if !self.check(TokenKind::Identifier) {
            // end of input is the normal end of a statement sequence
            if !self.check(TokenKind::Eof) {
                self.report(SyntaxError::MissingIdentifier);
            }
            return;
        }
        self.advance();
        if !self.r#match(TokenKind::Assign) {
            self.report(SyntaxError::MissingAssignment);
            return;
        }
        self.expr();
        if !self.r#match(TokenKind::Semicolon) {
            self.report(SyntaxError::MissingSemicolon);
            return;
        }
        if self.check(TokenKind::Identifier) {
            self.assign();
        }
    }

    // <expr> -> <term> {(+|-) <term>}
    fn expr(&mut self) {
        self.term();
        while self.r#match(TokenKind::Add) || self.r#match(TokenKind::Sub) {
            self.term();
        }
    }

    // <term> -> <factor> {(*|/|%) <factor>}
    fn term(&mut self) {
        self.factor();
        while self.r#match(TokenKind::Mult)
            || self.r#match(TokenKind::Div)
            || self.r#match(TokenKind::Mod)
        {
            self.factor();
        }
    }

    // <factor> -> id | int_constant | (<expr>)
    fn factor(&mut self) {
        match self.current.kind {
            TokenKind::Identifier | TokenKind::IntLiteral => self.advance(),
            TokenKind::LeftParen => {
                self.advance();
                self.expr();
                if !self.r#match(TokenKind::RightParen) {
                    self.report(SyntaxError::MissingRightParen);
                }
            }
            _ => self.report(SyntaxError::MissingLeftParen),
        }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn check(&self, token_kind: TokenKind) -> bool {
        self.current.kind == token_kind
    }

    fn r#match(&mut self, token_kind: TokenKind) -> bool {
        if !self.check(token_kind) {
            return false;
        }
        self.advance();
        true
    }

    fn report(&mut self, error: SyntaxError) {
        println!("{error}");
        self.failures += 1;
    }
}

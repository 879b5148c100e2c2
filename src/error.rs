use thiserror::Error;

/// Grammar violations, printed and counted as they are found.
#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("Error - If statement")]
    IfStatement,
    #[error("Error - else statement")]
    ElseStatement,
    #[error("Error - missing left parenthesis")]
    MissingLeftParen,
    #[error("Error - missing right parenthesis")]
    MissingRightParen,
    #[error("Error - Boolean Factor")]
    BooleanFactor,
    #[error("Error - Missing an ID")]
    MissingIdentifier,
    #[error("Error - must be an assignment")]
    MissingAssignment,
    #[error("Error - missing a semicolon")]
    MissingSemicolon,
}

use thiserror::Error;

/// Failures the lexer can hit while scanning a string literal.
///
/// Everything else the lexer sees is representable as a token (unrecognized
/// characters become `TokenKind::Illegal`), so string scanning is the only
/// source of errors. The position is the character offset into the current
/// source buffer at which the failure was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unterminated string literal at offset {position}")]
    UnterminatedString { position: usize },
    #[error("invalid escape sequence `\\{escape}` at offset {position}")]
    InvalidEscape { escape: char, position: usize },
}

impl Error {
    pub fn position(&self) -> usize {
        match self {
            Error::UnterminatedString { position } => *position,
            Error::InvalidEscape { position, .. } => *position,
        }
    }
}

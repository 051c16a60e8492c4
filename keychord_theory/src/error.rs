// Errors from note-name and chord-symbol parsing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    #[error("empty chord symbol")]
    EmptySymbol,

    #[error("empty note name")]
    EmptyNote,

    #[error("unknown note name: {0}")]
    UnknownNote(String),

    #[error("slash chord {0:?} has no bass note")]
    MissingBass(String),

    #[error("unterminated extension in {0:?}")]
    UnterminatedExtension(String),
}

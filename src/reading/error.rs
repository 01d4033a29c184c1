use crate::reading::token::TokenId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No text to read")]
    EmptyDocument,

    #[error("Nothing marked to remove")]
    NothingMarked,

    /// A marked id that is not a word in the current document. The operation
    /// that hit it is aborted and nothing is changed.
    #[error("Marked token {0} is not a word in the current document")]
    UnknownToken(TokenId),
}

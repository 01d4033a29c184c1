pub mod blocks;
pub mod error;
pub mod mark_set;
pub mod normalize;
pub mod removal;
pub mod session;
pub mod token;
pub mod tokenizer;

pub use blocks::{group_blocks, Block};
pub use error::SessionError;
pub use mark_set::MarkSet;
pub use normalize::{canonical_key, normalize};
pub use removal::{remove_marked, HistoryEntry, Removal};
pub use session::{Activation, Session};
pub use token::{Token, TokenId, TokenKind};
pub use tokenizer::{reconstruct, tokenize, word_count};

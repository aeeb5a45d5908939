use std::result::Result as StdResult;

use thiserror::Error as ThisError;

pub type Result<T> = StdResult<T, Error>;

/// Decode failures, split by blast radius: the first three abort the whole
/// packet, the rest abort only the block being decoded while every field
/// accumulated so far is kept.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("short buffer: needed {needed} bytes, available {available} bytes")]
    ShortBuffer { needed: usize, available: usize },

    #[error("protocol id 0x{0:02x}, expected 0x32")]
    BadProtocolId(u8),

    #[error("rosctr 0x{0:02x} outside 0x01..=0x07")]
    BadRosctr(u8),

    #[error("truncated {context}")]
    Truncated { context: &'static str },

    #[error("unsupported syntax id 0x{0:02x} without a sized layout")]
    UnsupportedSyntaxId(u8),

    #[error("malformed BCD digit in timestamp")]
    MalformedTimestamp,
}

impl Error {
    /// Whether the failure poisons the entire packet rather than just the
    /// block that raised it.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ShortBuffer { .. } | Error::BadProtocolId(_) | Error::BadRosctr(_)
        )
    }
}

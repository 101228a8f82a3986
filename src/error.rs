//! Errors for the ledger.
//!
//! Covers two kinds of failure:
//! - Input rejections raised while building a transaction from user text
//!   (unknown kind, unparsable or negative amount, unknown menu choice)
//! - Totals too large to compute
//! - Storage failures (I/O, a store file that does not match the record
//!   schema, serialization)
//!
//! Input rejections are recoverable and reported by the shell. A store that
//! fails to load is downgraded to a warning, but I/O failures while
//! persisting are fatal.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid type {0:?}, must be 'income' or 'expense'")]
    InvalidKind(String),
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("totals exceed the largest representable amount")]
    SummaryOverflow,
    #[error("invalid choice {0:?}")]
    InvalidChoice(String),
    #[error("malformed record store {}: {source}", .path.display())]
    MalformedStore {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize transactions: {0}")]
    Serialize(serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

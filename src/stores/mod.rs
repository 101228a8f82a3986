//! Storage layer for the ledger. Provides the in-memory transaction
//! history and its aggregate figures ([`TransactionsStore`], [`Summary`]).
//!
//! Persistence to disk lives in [`crate::Ledger`]; this layer never touches
//! the filesystem.

mod transactions;

pub use transactions::{Summary, TransactionsStore};

mod config;
mod dto;
mod error;
mod json_utils;
mod ledger;
mod shell;
mod stores;

pub use config::Config;
pub use dto::{parse_amount, Transaction, TransactionKind, TIMESTAMP_FORMAT};
pub use error::Error;
pub use json_utils::{read_json, to_pretty_json, write_json};
pub use ledger::{Ledger, LoadStatus};
pub use shell::{run, Shell};
pub use stores::{Summary, TransactionsStore};

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    json_utils::{read_json, write_json},
    stores::{Summary, TransactionsStore},
    Config, Error, Transaction,
};

/// Outcome of reading the record store at startup.
#[derive(Debug)]
pub enum LoadStatus {
    /// No store file yet; the ledger starts empty.
    Missing,
    /// The store was read successfully with this many transactions.
    Loaded(usize),
    /// The store could not be read or parsed; the ledger starts empty.
    Corrupted(Error),
}

/// The record store: transactions held in memory and mirrored to a JSON file.
pub struct Ledger {
    path: PathBuf,
    store: TransactionsStore,
}

impl Ledger {
    /// Opens the ledger backed by the configured data file.
    ///
    /// Never fails: a store that cannot be read is reported through
    /// [`LoadStatus::Corrupted`] and the ledger starts empty. The broken file
    /// is left in place until the next [`Ledger::add`] overwrites it.
    pub fn open(config: &Config) -> (Self, LoadStatus) {
        let path = config.data_file().to_path_buf();
        let (store, status) = match Self::load(&path) {
            Ok(None) => (TransactionsStore::new(), LoadStatus::Missing),
            Ok(Some(transactions)) => {
                let count = transactions.len();
                debug!(path = %path.display(), count, "loaded transactions");
                (
                    TransactionsStore::from_transactions(transactions),
                    LoadStatus::Loaded(count),
                )
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "record store is corrupted, starting empty");
                (TransactionsStore::new(), LoadStatus::Corrupted(err))
            }
        };
        (Self { path, store }, status)
    }

    /// Reads every transaction from the store file.
    /// Returns `Ok(None)` if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Vec<Transaction>>, Error> {
        read_json(path)
    }

    /// Appends a transaction and rewrites the whole store.
    ///
    /// # Errors
    /// Returns an error if the store file cannot be written. The transaction
    /// stays in memory, but callers should treat the failure as fatal.
    pub fn add(&mut self, transaction: Transaction) -> Result<(), Error> {
        info!(
            kind = %transaction.kind(),
            amount = %transaction.amount(),
            category = transaction.category(),
            "adding transaction"
        );
        self.store.push(transaction);
        self.persist()
    }

    /// All transactions in insertion order.
    pub fn all(&self) -> &[Transaction] {
        self.store.all()
    }

    pub fn summary(&self) -> Result<Summary, Error> {
        self.store.summary()
    }

    /// Overwrites the store file with every transaction held in memory.
    pub fn persist(&self) -> Result<(), Error> {
        write_json(&self.path, self.store.all())?;
        debug!(path = %self.path.display(), count = self.store.len(), "persisted transactions");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

//! JSON serialization and deserialization utilities.
//!
//! Provides generic functions for reading a whole JSON document from a file
//! and for overwriting a file with a pretty-printed document.

use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::Error;

const INDENT: &[u8] = b"    ";

/// Reads and deserializes a JSON document from a file into type T.
/// Returns `Ok(None)` if the file does not exist.
pub fn read_json<T, P>(path: P) -> Result<Option<T>, Error>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| Error::MalformedStore {
            path: path.to_path_buf(),
            source,
        })
}

/// Serializes a value as JSON indented with four spaces.
pub fn to_pretty_json<T>(value: &T) -> Result<Vec<u8>, Error>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).map_err(Error::Serialize)?;
    Ok(buf)
}

/// Overwrites the file at `path` with the pretty-printed value, creating
/// missing parent directories.
pub fn write_json<T, P>(path: P, value: &T) -> Result<(), Error>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let payload = to_pretty_json(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, payload)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Transaction, TransactionKind};
    use rust_decimal_macros::dec;
    use std::error::Error as StdError;

    #[test]
    fn test_read_json() -> Result<(), Box<dyn StdError>> {
        let transactions: Vec<Transaction> =
            read_json("data/example_store.json")?.ok_or("fixture missing")?;

        let summary: Vec<_> = transactions
            .iter()
            .map(|t| (t.kind(), t.amount(), t.category(), t.note()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (TransactionKind::Income, dec!(1000), "Salary", ""),
                (TransactionKind::Expense, dec!(200), "Food", "lunch"),
                (TransactionKind::Expense, dec!(45.5), "Transport", "monthly pass"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_read_missing_file() -> Result<(), Box<dyn StdError>> {
        let result: Option<Vec<Transaction>> = read_json("data/does_not_exist.json")?;
        assert!(result.is_none());
        Ok(())
    }

    #[test]
    fn test_read_malformed_file() {
        let result: Result<Option<Vec<Transaction>>, _> = read_json("data/malformed_store.json");
        assert!(matches!(result, Err(Error::MalformedStore { .. })));
    }

    #[test]
    fn test_pretty_json_uses_four_spaces() -> Result<(), Box<dyn StdError>> {
        let payload = to_pretty_json(&vec![1, 2])?;
        assert_eq!(String::from_utf8(payload)?, "[\n    1,\n    2\n]");
        Ok(())
    }

    #[test]
    fn test_write_json_creates_parent_dirs() -> Result<(), Box<dyn StdError>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("store.json");

        write_json(&path, &vec!["a", "b"])?;

        let read: Option<Vec<String>> = read_json(&path)?;
        assert_eq!(read, Some(vec!["a".to_string(), "b".to_string()]));
        Ok(())
    }

    #[test]
    fn test_write_json_overwrites() -> Result<(), Box<dyn StdError>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("store.json");

        write_json(&path, &vec![1, 2, 3])?;
        write_json(&path, &vec![4])?;

        let read: Option<Vec<u32>> = read_json(&path)?;
        assert_eq!(read, Some(vec![4]));
        Ok(())
    }
}

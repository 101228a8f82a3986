use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, SubsecRound};
use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::Error;

/// Layout of the `date` field, both on disk and on screen.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl FromStr for TransactionKind {
    type Err = Error;

    /// Accepts "income" or "expense" in any case, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(Error::InvalidKind(s.trim().to_string())),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => f.write_str("Income"),
            TransactionKind::Expense => f.write_str("Expense"),
        }
    }
}

/// A single income or expense event. Fields are fixed once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(
        serialize_with = "serialize_amount",
        deserialize_with = "deserialize_amount"
    )]
    amount: Decimal,
    category: String,
    note: String,
    #[serde(rename = "t_type")]
    kind: TransactionKind,
    #[serde(rename = "date", with = "timestamp_format")]
    timestamp: NaiveDateTime,
}

impl Transaction {
    /// Creates a transaction stamped with the current local time.
    pub fn new(
        kind: TransactionKind,
        amount: Decimal,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::with_timestamp(kind, amount, category, note, Local::now().naive_local())
    }

    /// Creates a transaction with an explicit timestamp.
    /// Sub-second precision is dropped so the record matches what the store keeps.
    pub fn with_timestamp(
        kind: TransactionKind,
        amount: Decimal,
        category: impl Into<String>,
        note: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Result<Self, Error> {
        Ok(Self {
            amount: ensure_non_negative(amount)?,
            category: category.into(),
            note: note.into(),
            kind,
            timestamp: timestamp.trunc_subsecs(0),
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: ${} - {} ({})",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.amount,
            self.category,
            self.note
        )
    }
}

/// Parses an amount typed by the user. Accepts plain decimals and scientific notation.
pub fn parse_amount(input: &str) -> Result<Decimal, Error> {
    let trimmed = input.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| Error::InvalidAmount(trimmed.to_string()))?;
    ensure_non_negative(amount)
}

fn ensure_non_negative(amount: Decimal) -> Result<Decimal, Error> {
    if amount < Decimal::ZERO {
        return Err(Error::NegativeAmount);
    }
    Ok(amount)
}

/// Writes the amount as a JSON number with its exact decimal digits.
fn serialize_amount<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number =
        Number::from_str(&amount.to_string()).map_err(<S::Error as ser::Error>::custom)?;
    number.serialize(serializer)
}

/// Amounts are stored as JSON numbers; strings and negative values are rejected.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    let text = number.to_string();
    let amount = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(<D::Error as de::Error>::custom)?;
    ensure_non_negative(amount).map_err(<D::Error as de::Error>::custom)
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}

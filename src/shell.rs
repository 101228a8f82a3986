//! The interactive menu loop.
//!
//! Reads choices and transaction fields line by line from any [`BufRead`],
//! writes prompts and reports to any [`Write`], and drives a [`Ledger`].

use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::str::FromStr;

use crate::{
    dto::parse_amount,
    ledger::{Ledger, LoadStatus},
    Config, Error, Transaction, TransactionKind,
};

const MENU: &str = "
--- Personal Finance Tracker ---
1. Add Transaction
2. View All Transactions
3. View Summary
4. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    List,
    Summary,
    Exit,
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Action::Add),
            "2" => Ok(Action::List),
            "3" => Ok(Action::Summary),
            "4" => Ok(Action::Exit),
            other => Err(Error::InvalidChoice(other.to_string())),
        }
    }
}

/// Opens the ledger for the given config and runs the menu loop until the
/// user exits or input ends.
///
/// # Arguments
/// * `config` - Where the record store lives
/// * `input` - Where user input is read from (e.g. locked stdin)
/// * `output` - Where prompts and reports are written (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The record store cannot be written after adding a transaction
/// * Reading input or writing output fails
pub fn run<R, W>(config: &Config, input: R, output: W) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    let (mut ledger, status) = Ledger::open(config);
    let mut shell = Shell::new(&mut ledger, input, output);
    shell.report_load(&status)?;
    shell.run()
}

pub struct Shell<'a, R, W> {
    ledger: &'a mut Ledger,
    input: R,
    output: W,
}

impl<'a, R, W> Shell<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(ledger: &'a mut Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    /// Tells the user when the store could not be loaded.
    pub fn report_load(&mut self, status: &LoadStatus) -> Result<(), Error> {
        if let LoadStatus::Corrupted(_) = status {
            writeln!(
                self.output,
                "Failed to load data. The data file may be corrupted."
            )?;
        }
        Ok(())
    }

    /// Runs the menu loop. End of input is treated like choosing Exit.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter choice (1-4): ")? else {
                break;
            };
            let flow = match choice.parse::<Action>() {
                Ok(Action::Add) => self.add()?,
                Ok(Action::List) => self.list()?,
                Ok(Action::Summary) => self.summary()?,
                Ok(Action::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    ControlFlow::Break(())
                }
                Err(err) => self.reject(err)?,
            };
            if flow.is_break() {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Collects a transaction field by field. Any invalid field abandons the
    /// attempt and returns to the menu.
    fn add(&mut self) -> Result<ControlFlow<()>, Error> {
        let Some(kind) = self.prompt("Type (income/expense): ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let kind = match kind.parse::<TransactionKind>() {
            Ok(kind) => kind,
            Err(err) => return self.reject(err),
        };

        let Some(amount) = self.prompt("Amount: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let amount = match parse_amount(&amount) {
            Ok(amount) => amount,
            Err(err) => return self.reject(err),
        };

        let Some(category) = self.prompt("Category: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(note) = self.prompt("Note (optional): ")? else {
            return Ok(ControlFlow::Break(()));
        };

        self.ledger.add(Transaction::new(kind, amount, category, note)?)?;
        writeln!(self.output, "Transaction added.")?;
        Ok(ControlFlow::Continue(()))
    }

    fn list(&mut self) -> Result<ControlFlow<()>, Error> {
        let transactions = self.ledger.all();
        if transactions.is_empty() {
            writeln!(self.output, "No transactions yet.")?;
        }
        for transaction in transactions {
            writeln!(self.output, "{transaction}")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn summary(&mut self) -> Result<ControlFlow<()>, Error> {
        let summary = match self.ledger.summary() {
            Ok(summary) => summary,
            Err(err) => return self.reject(err),
        };
        writeln!(self.output, "\nSummary:")?;
        writeln!(self.output, "Total Income: ${}", summary.income)?;
        writeln!(self.output, "Total Expenses: ${}", summary.expense)?;
        writeln!(self.output, "Balance: ${}\n", summary.balance)?;
        Ok(ControlFlow::Continue(()))
    }

    /// Reports a rejected input and goes back to the menu.
    /// Errors that are not about user input are passed through as fatal.
    fn reject(&mut self, err: Error) -> Result<ControlFlow<()>, Error> {
        let message = match err {
            Error::InvalidKind(_) => "Invalid type. Must be 'income' or 'expense'.",
            Error::InvalidAmount(_) => "Invalid input. Please try again.",
            Error::NegativeAmount => "Amount must not be negative.",
            Error::InvalidChoice(_) => "Invalid choice. Try again.",
            Error::SummaryOverflow => "Totals are too large to display.",
            other => return Err(other),
        };
        writeln!(self.output, "{message}")?;
        Ok(ControlFlow::Continue(()))
    }

    /// Writes a prompt and reads one line without its line terminator.
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, Error> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

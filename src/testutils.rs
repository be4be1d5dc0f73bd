use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::commit::{CommitError, PersistenceCommitter};
use crate::ledger::{Ledger, Transaction, TransactionId, TransactionInfo};
use crate::terminal::{InteractiveStyle, LineWriter};

pub const CURRENCY: &str = "EUR";

/// Builds a transaction on 2024-01-`day` with the given amount in cents.
pub fn transaction(day: u32, cents: i64, category: Option<&str>, processed: bool) -> Transaction {
    let info = TransactionInfo {
        time: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        amount: Decimal::new(cents, 2),
        state: Decimal::new(100_000 + cents, 2),
        category: category.map(str::to_string),
        payee: format!("Payee {day}"),
        note: format!("Note {day}"),
    };
    Transaction::new(TransactionId::fingerprint(CURRENCY, &info), info, processed)
}

pub fn ledger(transactions: Vec<Transaction>) -> Ledger {
    Ledger::new(CURRENCY.to_string(), transactions)
}

pub fn formatter(amount: Decimal) -> String {
    format!("{amount} {CURRENCY}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Line(String),
    Note(String),
    Warning(String),
    Success(String),
    Confirm(String),
}

/// Answers confirmations from a script and records everything written to it.
pub struct ScriptedStyle {
    answers: RefCell<VecDeque<bool>>,
    events: RefCell<Vec<Event>>,
}

impl ScriptedStyle {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            events: RefCell::new(vec![]),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Confirm(prompt) => Some(prompt),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|event| !matches!(event, Event::Line(_)))
            .collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl LineWriter for ScriptedStyle {
    fn write_line(&self, line: &str) {
        self.record(Event::Line(line.to_string()));
    }
}

impl InteractiveStyle for ScriptedStyle {
    fn note(&self, message: &str) {
        self.record(Event::Note(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.record(Event::Warning(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.record(Event::Success(message.to_string()));
    }

    fn confirm(&self, prompt: &str) -> anyhow::Result<bool> {
        self.record(Event::Confirm(prompt.to_string()));
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted answer left for '{prompt}'"))
    }
}

/// Collects written lines; clones share the same buffer.
#[derive(Clone, Default)]
pub struct RecordingLineWriter {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingLineWriter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl LineWriter for RecordingLineWriter {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[derive(Default)]
pub struct RecordingCommitter {
    pub calls: Vec<Vec<TransactionId>>,
    pub fail: bool,
}

impl RecordingCommitter {
    pub fn failing() -> Self {
        Self {
            calls: vec![],
            fail: true,
        }
    }
}

impl PersistenceCommitter for RecordingCommitter {
    fn mark_processed(&mut self, transactions: &[&Transaction]) -> Result<usize, CommitError> {
        self.calls
            .push(transactions.iter().map(|t| t.id()).collect());
        if self.fail {
            return Err(CommitError::Write {
                path: "processed.db".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        Ok(transactions.len())
    }
}

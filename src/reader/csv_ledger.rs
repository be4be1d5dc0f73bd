use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::{amount::parse_amount, LedgerReader, ReadError};
use crate::config::{ColumnNames, Config, Profile};
use crate::db::ProcessedStore;
use crate::ledger::{Ledger, Transaction, TransactionId, TransactionInfo};

/// Reads delimited bank exports. Transactions already recorded in the store come back as processed.
pub struct CsvLedgerReader<'a> {
    config: &'a Config,
    store: &'a ProcessedStore,
}

impl<'a> CsvLedgerReader<'a> {
    pub fn new(config: &'a Config, store: &'a ProcessedStore) -> Self {
        Self { config, store }
    }

    pub fn read_from(&self, mut input: impl Read, profile_name: &str) -> Result<Ledger, ReadError> {
        let profile = self.config.profile(profile_name)?;
        let mut content = String::new();
        input
            .read_to_string(&mut content)
            .map_err(|err| match err.kind() {
                ErrorKind::InvalidData => ReadError::Encoding(err),
                _ => ReadError::Io(err),
            })?;
        let content = skip_lines(
            maybe_remove_byte_order_mark(&content),
            profile.skip_rows,
        );

        let mut reader = ReaderBuilder::new()
            .delimiter(profile.delimiter_byte())
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(content.as_bytes());
        let columns = ColumnIndices::find(reader.headers()?, &profile.columns)?;

        let mut transactions = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line = record.position().map(|p| p.line()).unwrap_or(0) + profile.skip_rows as u64;
            let info = parse_record(&record, &columns, profile, line)?;
            let id = TransactionId::fingerprint(&profile.currency, &info);
            transactions.push(Transaction::new(id, info, self.store.contains(id)));
        }

        log::info!(
            "Read {} transactions with profile '{}'",
            transactions.len(),
            profile_name
        );
        Ok(Ledger::new(profile.currency.clone(), transactions))
    }
}

impl LedgerReader for CsvLedgerReader<'_> {
    fn read(&self, path: &Path, profile: &str) -> Result<Ledger, ReadError> {
        log::info!("Reading ledger {}", path.display());
        let file = std::fs::File::open(path).map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_from(file, profile)
    }
}

struct ColumnIndices {
    time: usize,
    amount: usize,
    state: usize,
    payee: usize,
    category: Option<usize>,
    note: Option<usize>,
}

impl ColumnIndices {
    fn find(headers: &StringRecord, names: &ColumnNames) -> Result<Self, ReadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header == name.trim())
                .ok_or_else(|| ReadError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            time: find(names.time.as_str())?,
            amount: find(names.amount.as_str())?,
            state: find(names.state.as_str())?,
            payee: find(names.payee.as_str())?,
            category: names.category.as_deref().map(find).transpose()?,
            note: names.note.as_deref().map(find).transpose()?,
        })
    }
}

fn parse_record(
    record: &StringRecord,
    columns: &ColumnIndices,
    profile: &Profile,
    line: u64,
) -> Result<TransactionInfo, ReadError> {
    let field = |index: usize| record.get(index).unwrap_or("");
    let optional_field = |index: Option<usize>| index.map(field).unwrap_or("");

    let time = NaiveDate::parse_from_str(field(columns.time), &profile.date_format).map_err(
        |_| ReadError::InvalidDate {
            line,
            value: field(columns.time).to_string(),
            format: profile.date_format.clone(),
        },
    )?;
    let number_format = profile.number_format();
    let amount = |index: usize| {
        parse_amount(field(index), &number_format).map_err(|reason| ReadError::InvalidAmount {
            line,
            value: field(index).to_string(),
            reason,
        })
    };
    let category = optional_field(columns.category);

    Ok(TransactionInfo {
        time,
        amount: amount(columns.amount)?,
        state: amount(columns.state)?,
        category: (!category.is_empty()).then(|| category.to_string()),
        payee: field(columns.payee).to_string(),
        note: optional_field(columns.note).to_string(),
    })
}

fn maybe_remove_byte_order_mark(content: &str) -> &str {
    content.strip_prefix('\u{FEFF}').unwrap_or(content)
}

fn skip_lines(content: &str, count: usize) -> &str {
    let mut rest = content;
    for _ in 0..count {
        match rest.find('\n') {
            Some(end) => rest = &rest[end + 1..],
            None => return "",
        }
    }
    rest
}

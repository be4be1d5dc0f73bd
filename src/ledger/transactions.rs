use chrono::NaiveDate;
use crc::{Crc, CRC_64_ECMA_182};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

const FINGERPRINT: Crc<u64> = Crc::<u64>::new(&CRC_64_ECMA_182);
const FIELD_SEPARATOR: &[u8] = &[0x1f];

/// Identifies a ledger line across runs. Two lines with the same currency, date, amounts and payee
/// get the same id. Category and note are left out since they get edited after the export.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId(pub u64);

impl TransactionId {
    pub fn fingerprint(currency: &str, info: &TransactionInfo) -> Self {
        let mut digest = FINGERPRINT.digest();
        let fields = [
            currency.to_string(),
            info.time.format("%Y-%m-%d").to_string(),
            info.amount.normalize().to_string(),
            info.state.normalize().to_string(),
            info.payee.clone(),
        ];
        for field in &fields {
            digest.update(field.as_bytes());
            digest.update(FIELD_SEPARATOR);
        }
        Self(digest.finalize())
    }
}

impl Debug for TransactionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransactionId({:016x})", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInfo {
    pub time: NaiveDate,
    pub amount: Decimal,
    /// Balance of the account after this transaction
    pub state: Decimal,
    pub category: Option<String>,
    pub payee: String,
    pub note: String,
}

impl TransactionInfo {
    pub fn has_category(&self) -> bool {
        self.category
            .as_deref()
            .map(|category| !category.trim().is_empty())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    transaction: TransactionInfo,
    processed: bool,
}

impl Transaction {
    pub fn new(id: TransactionId, transaction: TransactionInfo, processed: bool) -> Self {
        Self {
            id,
            transaction,
            processed,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn info(&self) -> &TransactionInfo {
        &self.transaction
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    pub fn has_category(&self) -> bool {
        self.transaction.has_category()
    }

    /// Only reachable through [crate::commit::commit]; there is no way back to unprocessed.
    pub(crate) fn mark_as_processed(&mut self) {
        self.processed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(category: Option<&str>) -> TransactionInfo {
        TransactionInfo {
            time: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            amount: Decimal::new(-1250, 2),
            state: Decimal::new(100000, 2),
            category: category.map(str::to_string),
            payee: "Bakery".to_string(),
            note: "Bread".to_string(),
        }
    }

    #[test]
    fn category_presence() {
        assert!(info(Some("Food")).has_category());
        assert!(!info(None).has_category());
        assert!(!info(Some("")).has_category());
        assert!(!info(Some("   ")).has_category());
    }

    #[test]
    fn fingerprint_is_stable() {
        assert_eq!(
            TransactionId::fingerprint("EUR", &info(Some("Food"))),
            TransactionId::fingerprint("EUR", &info(Some("Food"))),
        );
    }

    #[test]
    fn fingerprint_ignores_trailing_zeros() {
        let mut other = info(Some("Food"));
        other.amount = Decimal::new(-125, 1);
        assert_eq!(
            TransactionId::fingerprint("EUR", &info(Some("Food"))),
            TransactionId::fingerprint("EUR", &other),
        );
    }

    #[test]
    fn fingerprint_depends_on_fields() {
        let base = TransactionId::fingerprint("EUR", &info(Some("Food")));
        assert_ne!(base, TransactionId::fingerprint("USD", &info(Some("Food"))));

        let mut other = info(Some("Food"));
        other.state = Decimal::new(98750, 2);
        assert_ne!(base, TransactionId::fingerprint("EUR", &other));

        let mut other = info(Some("Food"));
        other.payee = "Butcher".to_string();
        assert_ne!(base, TransactionId::fingerprint("EUR", &other));
    }

    #[test]
    fn fingerprint_survives_recategorization() {
        let base = TransactionId::fingerprint("EUR", &info(None));
        assert_eq!(base, TransactionId::fingerprint("EUR", &info(Some("Food"))));

        let mut other = info(Some("Food"));
        other.note = "Bread and milk".to_string();
        assert_eq!(base, TransactionId::fingerprint("EUR", &other));
    }

    #[test]
    fn fingerprint_separates_fields() {
        let mut first = info(None);
        first.state = Decimal::new(10005, 0);
        first.payee = "x".to_string();
        let mut second = info(None);
        second.state = Decimal::new(1000, 0);
        second.payee = "5x".to_string();
        assert_ne!(
            TransactionId::fingerprint("EUR", &first),
            TransactionId::fingerprint("EUR", &second),
        );
    }

    #[test]
    fn mark_as_processed() {
        let info = info(None);
        let mut transaction =
            Transaction::new(TransactionId::fingerprint("EUR", &info), info, false);
        assert!(!transaction.is_processed());
        transaction.mark_as_processed();
        assert!(transaction.is_processed());
    }
}

use super::Transaction;

/// Transactions of one source file, in file order, all denominated in `currency`.
#[derive(Debug, Clone)]
pub struct Ledger {
    currency: String,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(currency: String, transactions: Vec<Transaction>) -> Self {
        Self {
            currency,
            transactions,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Returns how many transactions changed from unprocessed to processed.
    pub(crate) fn mark_all_processed(&mut self) -> usize {
        let mut marked = 0;
        for transaction in self.transactions.iter_mut().filter(|t| !t.is_processed()) {
            transaction.mark_as_processed();
            marked += 1;
        }
        marked
    }
}

#[allow(clippy::module_inception)]
mod ledger;
mod transactions;

pub use ledger::Ledger;
pub use transactions::{Transaction, TransactionId, TransactionInfo};

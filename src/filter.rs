use crate::ledger::{Ledger, Transaction};

/// All transactions of the ledger that haven't been processed yet, in ledger order.
pub fn unprocessed(ledger: &Ledger) -> Vec<&Transaction> {
    ledger
        .transactions()
        .iter()
        .filter(|transaction| !transaction.is_processed())
        .collect()
}

/// The transactions without a category, in the order given.
pub fn uncategorized<'a>(transactions: &[&'a Transaction]) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .copied()
        .filter(|transaction| !transaction.has_category())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{ledger, transaction};

    #[test]
    fn unprocessed_of_empty_ledger() {
        assert!(unprocessed(&ledger(vec![])).is_empty());
    }

    #[test]
    fn unprocessed_keeps_ledger_order() {
        let ledger = ledger(vec![
            transaction(1, 100, Some("Food"), false),
            transaction(2, 200, Some("Food"), true),
            transaction(3, 300, None, false),
            transaction(4, 400, None, true),
            transaction(5, 500, Some("Rent"), false),
        ]);
        let expected: Vec<&Transaction> = [0, 2, 4]
            .iter()
            .map(|&index| &ledger.transactions()[index])
            .collect();
        assert_eq!(expected, unprocessed(&ledger));
    }

    #[test]
    fn unprocessed_when_everything_is_processed() {
        let ledger = ledger(vec![
            transaction(1, 100, Some("Food"), true),
            transaction(2, 200, None, true),
        ]);
        assert!(unprocessed(&ledger).is_empty());
    }

    #[test]
    fn uncategorized_keeps_order() {
        let ledger = ledger(vec![
            transaction(1, 100, None, false),
            transaction(2, 200, Some("Food"), false),
            transaction(3, 300, Some(""), false),
            transaction(4, 400, None, false),
        ]);
        let all = unprocessed(&ledger);
        let result = uncategorized(&all);
        assert_eq!(vec![all[0], all[2], all[3]], result);
        assert!(result.iter().all(|t| !t.has_category()));
    }

    #[test]
    fn uncategorized_of_categorized() {
        let ledger = ledger(vec![transaction(1, 100, Some("Food"), false)]);
        assert!(uncategorized(&unprocessed(&ledger)).is_empty());
    }
}

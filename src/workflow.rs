use anyhow::{Context as _, Result};
use std::num::NonZeroUsize;

use crate::commit::{self, PersistenceCommitter};
use crate::filter;
use crate::format::AmountFormatter;
use crate::ledger::Ledger;
use crate::preview::{self, DEFAULT_DISPLAY_LIMIT};
use crate::terminal::InteractiveStyle;

const ABORTED: &str = "Processing aborted.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every transaction was already processed, nothing was asked
    NoWork,
    AbortedByUncategorized,
    AbortedByProcess,
    Committed { processed: usize },
}

/// Previews the unprocessed transactions of a ledger and marks them as processed once the operator
/// confirmed. Uncategorized transactions need an extra confirmation first.
pub struct ConfirmationWorkflow<'a, S: InteractiveStyle> {
    style: &'a S,
    formatter: &'a dyn AmountFormatter,
    display_limit: usize,
}

impl<'a, S: InteractiveStyle> ConfirmationWorkflow<'a, S> {
    pub fn new(style: &'a S, formatter: &'a dyn AmountFormatter) -> Self {
        Self {
            style,
            formatter,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }

    pub fn with_display_limit(self, display_limit: NonZeroUsize) -> Self {
        Self {
            display_limit: display_limit.get(),
            ..self
        }
    }

    pub fn run(
        &self,
        ledger: &mut Ledger,
        committer: &mut impl PersistenceCommitter,
    ) -> Result<Outcome> {
        let unprocessed = filter::unprocessed(ledger);
        let unprocessed_count = unprocessed.len();
        log::info!(
            "{} of {} transactions are unprocessed",
            unprocessed_count,
            ledger.len()
        );
        if unprocessed.is_empty() {
            self.style
                .success("All the transactions have already been processed.");
            return Ok(Outcome::NoWork);
        }

        let uncategorized = filter::uncategorized(&unprocessed);
        preview::preview_uncategorized(self.style, self.formatter, &uncategorized);
        if !uncategorized.is_empty() {
            let proceed = self.style.confirm(&format!(
                "Proceed with {} uncategorized transactions?",
                uncategorized.len()
            ))?;
            if !proceed {
                self.style.warning(ABORTED);
                return Ok(Outcome::AbortedByUncategorized);
            }
        }

        preview::preview_unprocessed(
            self.style,
            self.formatter,
            &unprocessed,
            self.display_limit,
        );
        let process = self.style.confirm(&format!(
            "Process these {} transactions?",
            unprocessed_count
        ))?;
        if !process {
            self.style.warning(ABORTED);
            return Ok(Outcome::AbortedByProcess);
        }

        let processed = commit::commit(ledger, committer)
            .context("Failed to mark the transactions as processed")?;
        self.style.success(&format!(
            "Successfully processed {} new transactions.",
            unprocessed_count
        ));
        Ok(Outcome::Committed { processed })
    }
}

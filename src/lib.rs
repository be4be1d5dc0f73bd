pub mod args;
pub mod cli;
pub mod commit;
pub mod config;
pub mod db;
pub mod filter;
pub mod format;
pub mod ledger;
pub mod preview;
pub mod reader;
pub mod terminal;
pub mod workflow;

#[cfg(test)]
mod testutils;

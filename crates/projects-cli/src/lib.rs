//! projects-cli library
//!
//! Exports the typed HTTP client and the search debouncer for use in
//! tests and other crates.

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub mod debounce;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError, DeleteConfirmation};
pub use debounce::{DEBOUNCE_QUIET, Debouncer, SearchDispatch, drive};

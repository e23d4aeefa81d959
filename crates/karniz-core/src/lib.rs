//! Core domain + conversation logic for the curtain-rail calculator bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind the
//! `Messenger` port implemented in the adapter crate, so the calculator,
//! parser and dialog flow can be exercised without a network in sight.

pub mod calc;
pub mod config;
pub mod dialog;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod parse;
pub mod session;

pub use errors::{Error, Result};

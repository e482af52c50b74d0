//! Equity Swap Calculator
//!
//! This crate models a compensation calculator in which an employee trades part
//! of their cash pay for stock options. It provides a persisted settings store,
//! a decimal compensation engine with an optional audit trace, and display
//! formatting for the results.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod models;
pub mod session;
pub mod store;

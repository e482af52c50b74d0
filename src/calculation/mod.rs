//! Calculation logic for the Equity Swap Calculator.
//!
//! This module contains the individual calculation rules (cash pre-equity,
//! equity compensation, cash compensation, cash bonus, number of options and
//! total compensation) and the engine that chains them together. All
//! arithmetic uses `rust_decimal::Decimal`.

mod cash_bonus;
mod cash_pre_equity;
mod engine;
mod equity_swap;
mod stock_options;
mod total_compensation;

pub use cash_bonus::{CASH_BONUS_RATE, CashBonusResult, calculate_cash_bonus};
pub use cash_pre_equity::{CashPreEquityResult, calculate_cash_pre_equity};
pub use engine::{compute, compute_with_audit};
pub use equity_swap::{
    CashCompensationResult, EquityCompensationResult, calculate_cash_compensation,
    calculate_equity_compensation,
};
pub use stock_options::{NumberOfOptionsResult, calculate_number_of_options};
pub use total_compensation::{TotalCompensationResult, calculate_total_compensation};

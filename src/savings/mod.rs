//! Savings calculator

mod calculator;

pub use calculator::{compute_savings, SavingsResult};

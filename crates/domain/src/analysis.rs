// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Budget analysis for a single form submission.
//!
//! This module provides the pure, deterministic split of one paycheck into
//! debt, savings, and spending, plus the fixed linear scalings to monthly
//! equivalents and annual projections.

use crate::types::FinanceInput;
use serde::{Deserialize, Serialize};

/// Number of paychecks in a year (biweekly pay).
pub const PAYCHECKS_PER_YEAR: f64 = 26.0;

/// Scaling factor from a per-paycheck figure to its monthly equivalent.
pub const MONTHLY_FACTOR: f64 = PAYCHECKS_PER_YEAR / 12.0;

/// Result of analyzing one budget submission.
///
/// Recomputed fresh on every call and never cached. All fields are raw
/// (unrounded) values; rounding happens only at display time via
/// [`format_amount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sum of the four debt-like payments, per paycheck.
    pub total_debt: f64,
    /// Income minus total debt, per paycheck. May be negative.
    pub available_cash: f64,
    /// Whether there is anything left to save (`available_cash > 0`).
    pub can_save: bool,
    /// Amount set aside per paycheck. Zero when `can_save` is false.
    pub savings: f64,
    /// Amount kept for other expenses per paycheck. Equals `available_cash`
    /// (≤ 0) when `can_save` is false, signaling the shortfall.
    pub spending: f64,
    /// Total debt divided by income. `None` when income is zero — a missing
    /// ratio must stay distinguishable from a computed ratio of 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_income_ratio: Option<f64>,
    /// Monthly equivalent of `total_debt`.
    pub total_debt_monthly: f64,
    /// Monthly equivalent of `available_cash`.
    pub available_monthly: f64,
    /// Monthly equivalent of `savings`.
    pub savings_monthly: f64,
    /// Monthly equivalent of `spending`.
    pub spending_monthly: f64,
    /// Savings projected over 26 paychecks.
    pub annual_savings: f64,
    /// Spending projected over 26 paychecks.
    pub annual_spending: f64,
}

/// Analyzes a validated budget submission.
///
/// Pure and deterministic, with no error cases: validation is assumed to
/// have already passed. Out-of-contract inputs still produce mathematically
/// consistent output (the save fraction is clamped to 0..=1).
///
/// # Arguments
///
/// * `input` - The validated submission
///
/// # Returns
///
/// The derived [`AnalysisResult`] for this paycheck.
#[must_use]
pub fn analyze(input: &FinanceInput) -> AnalysisResult {
    let total_debt: f64 =
        input.housing_payment + input.auto_payment + input.credit_payment + input.student_payment;

    let income: f64 = input.monthly_after_tax_income;
    let available_cash: f64 = income - total_debt;

    // Nothing left over: savings stay at zero and spending carries the
    // (non-positive) available cash so the shortfall is visible downstream.
    let (can_save, savings, spending) = if available_cash <= 0.0 {
        (false, 0.0, available_cash)
    } else {
        let save_fraction: f64 = input.save_percent.clamp(0.0, 100.0) / 100.0;
        let savings: f64 = available_cash * save_fraction;
        (true, savings, available_cash - savings)
    };

    let debt_income_ratio: Option<f64> = if income > 0.0 {
        Some(total_debt / income)
    } else {
        None
    };

    AnalysisResult {
        total_debt,
        available_cash,
        can_save,
        savings,
        spending,
        debt_income_ratio,
        total_debt_monthly: total_debt * MONTHLY_FACTOR,
        available_monthly: available_cash * MONTHLY_FACTOR,
        savings_monthly: savings * MONTHLY_FACTOR,
        spending_monthly: spending * MONTHLY_FACTOR,
        annual_savings: savings * PAYCHECKS_PER_YEAR,
        annual_spending: spending * PAYCHECKS_PER_YEAR,
    }
}

/// Formats a monetary amount with exactly two fractional digits.
///
/// Trailing zeros are kept ("100.00", never "100" or "100.0"). Rounding is
/// round-half-to-even: the formatter rounds the exact binary value to the
/// nearest two-decimal representation, resolving representable ties toward
/// the even digit (100.125 → "100.12", 100.375 → "100.38").
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Qualitative advice derived from an analysis result.
//!
//! Rules are evaluated independently against fixed thresholds; every
//! applicable message is included, in a fixed order.

use crate::analysis::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Debt-to-income ratio above which the debt load is called very heavy.
const VERY_HEAVY_DEBT_RATIO: f64 = 0.6;

/// Debt-to-income ratio above which the debt load is called high.
const HIGH_DEBT_RATIO: f64 = 0.4;

/// Minimum per-paycheck savings amount before the low-savings nudge fires.
const SAVINGS_FLOOR: f64 = 20.0;

/// Minimum savings as a share of available cash before the nudge fires.
const SAVINGS_SHARE_OF_CASH: f64 = 0.05;

/// One piece of advice about a budget submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advice {
    /// Available cash is negative this period.
    PeriodShortfall,
    /// Companion to [`Advice::PeriodShortfall`]: triage bills vs. flexible
    /// expenses.
    TriageFlexibleExpenses,
    /// Debt payments exceed 60% of income.
    VeryHeavyDebtLoad,
    /// Debt payments are between 40% and 60% of income.
    HighDebtLoad,
    /// There is leftover cash but little of it is being saved.
    LowSavingsRate,
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PeriodShortfall => write!(
                f,
                "You are short this period. First goal: get leftover cash to at least 0. \
                 Options: reduce non-essential spending, pause extra debt payments, or \
                 temporarily increase income (overtime, side work, selling unused items)."
            ),
            Self::TriageFlexibleExpenses => write!(
                f,
                "List your must-pay bills vs. flexible expenses. Anything flexible should \
                 be cut or reduced until leftover cash is non-negative."
            ),
            Self::VeryHeavyDebtLoad => write!(
                f,
                "Your debt payments are more than 60% of your income this period. This is \
                 very heavy. Consider refinancing, consolidating, or focusing on paying \
                 down one high-interest debt while keeping others at minimum payments."
            ),
            Self::HighDebtLoad => write!(
                f,
                "Your debt payments are between 40% and 60% of your income this period. \
                 This is high. Be careful taking on new debt and try to reduce one balance \
                 consistently."
            ),
            Self::LowSavingsRate => write!(
                f,
                "You have leftover cash but are saving a small portion of it. If possible, \
                 slowly increase your save percentage (for example, +1% every month) until \
                 you reach a level that feels sustainable."
            ),
        }
    }
}

/// Derives advice from an analysis result.
///
/// Rules, in emission order:
/// 1. Negative available cash emits the shortfall message and the triage
///    message, always as a pair. The comparison is strict — at exactly zero
///    no shortfall advice is produced even though `can_save` is false.
/// 2. A present ratio above 0.6 emits the very-heavy message; otherwise a
///    ratio above 0.4 emits the high message. Mutually exclusive; a missing
///    ratio emits nothing.
/// 3. Positive available cash with savings under `max(20, 5% of available)`
///    emits the low-savings nudge.
///
/// # Arguments
///
/// * `result` - The analysis to advise on
///
/// # Returns
///
/// Every applicable message, possibly none.
#[must_use]
pub fn advice_messages(result: &AnalysisResult) -> Vec<Advice> {
    let mut messages: Vec<Advice> = Vec::new();

    if result.available_cash < 0.0 {
        messages.push(Advice::PeriodShortfall);
        messages.push(Advice::TriageFlexibleExpenses);
    }

    if let Some(ratio) = result.debt_income_ratio {
        if ratio > VERY_HEAVY_DEBT_RATIO {
            messages.push(Advice::VeryHeavyDebtLoad);
        } else if ratio > HIGH_DEBT_RATIO {
            messages.push(Advice::HighDebtLoad);
        }
    }

    if result.available_cash > 0.0 {
        let minimum: f64 = SAVINGS_FLOOR.max(SAVINGS_SHARE_OF_CASH * result.available_cash);
        if result.savings < minimum {
            messages.push(Advice::LowSavingsRate);
        }
    }

    messages
}

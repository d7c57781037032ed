// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Whether the user rents or owns their housing.
///
/// Informational only. The housing payment is what enters the computation;
/// the status is never consulted by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HousingStatus {
    /// The user rents.
    #[default]
    Rent,
    /// The user owns.
    Own,
}

impl HousingStatus {
    /// Converts this housing status to its wire/form representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rent => "rent",
            Self::Own => "own",
        }
    }
}

impl std::fmt::Display for HousingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display units for the result fragment.
///
/// All inputs are denominated per paycheck (biweekly). `Monthly` only changes
/// which figures the presenter shows, never what the analyzer computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodMode {
    /// Per-paycheck figures (biweekly).
    #[default]
    Paycheck,
    /// Monthly-equivalent figures (per-paycheck × 26/12).
    Monthly,
}

impl PeriodMode {
    /// Converts this period mode to its wire/form representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Paycheck => "paycheck",
            Self::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for PeriodMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One submission of the budget form.
///
/// Immutable once constructed; every request builds a fresh value and
/// discards it when the response is rendered. All monetary fields are
/// per-paycheck amounts. `monthly_after_tax_income` keeps its historical
/// form-field name but is a per-paycheck figure too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceInput {
    /// Rent or own. Not used in computation.
    pub housing_status: HousingStatus,
    /// Housing payment per paycheck.
    pub housing_payment: f64,
    /// Auto loan payment per paycheck.
    pub auto_payment: f64,
    /// Credit card payment per paycheck.
    pub credit_payment: f64,
    /// Student loan payment per paycheck.
    pub student_payment: f64,
    /// Take-home pay per paycheck (after tax).
    pub monthly_after_tax_income: f64,
    /// Percentage of leftover cash to save, 0..=100.
    pub save_percent: f64,
    /// Which figures the presenter displays.
    #[serde(default)]
    pub period_mode: PeriodMode,
    /// Whether to append the annual projection line.
    #[serde(default)]
    pub show_annual: bool,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod advice;
mod analysis;
mod chart;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use advice::{Advice, advice_messages};
pub use analysis::{AnalysisResult, MONTHLY_FACTOR, PAYCHECKS_PER_YEAR, analyze, format_amount};
pub use chart::{ChartBreakdown, ChartSegment, chart_breakdown};
pub use error::ValidationError;
pub use types::{FinanceInput, HousingStatus, PeriodMode};
pub use validation::validate;

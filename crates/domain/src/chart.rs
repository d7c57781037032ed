// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Percentage breakdown of a paycheck for the bar chart.
//!
//! The breakdown is always computed from per-paycheck values. Percentages
//! are period-invariant: the monthly scaling is a uniform multiplier, so the
//! same chart serves both display modes.

use crate::analysis::AnalysisResult;

/// One bar of the breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSegment {
    /// Category label.
    pub label: &'static str,
    /// Share of the clamped total, in percent, rounded to one decimal.
    pub percent: f64,
}

/// Normalized percentage breakdown of one paycheck.
///
/// Segments appear in fixed order: Debt, Savings, Spending. Because each
/// percentage is rounded independently, the three need not sum to exactly
/// 100 — an accepted cosmetic property, not a bug.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBreakdown {
    /// The three chart segments.
    pub segments: [ChartSegment; 3],
}

/// Builds the chart breakdown for an analysis result.
///
/// Each category is clamped to ≥ 0 for charting — a negative spending value
/// (a shortfall) charts as zero. If the clamped values sum to zero there is
/// nothing to chart and `None` is returned; the presenter shows a
/// placeholder instead.
///
/// # Arguments
///
/// * `result` - The analysis to chart
///
/// # Returns
///
/// The breakdown, or `None` when no category is positive.
#[must_use]
pub fn chart_breakdown(result: &AnalysisResult) -> Option<ChartBreakdown> {
    let debt: f64 = result.total_debt.max(0.0);
    let savings: f64 = result.savings.max(0.0);
    let spending: f64 = result.spending.max(0.0);

    let total: f64 = debt + savings + spending;
    if total <= 0.0 {
        return None;
    }

    let percent_of_total = |value: f64| -> f64 {
        if value <= 0.0 {
            return 0.0;
        }
        // One decimal place, ties away from zero.
        (100.0 * value / total * 10.0).round() / 10.0
    };

    Some(ChartBreakdown {
        segments: [
            ChartSegment {
                label: "Debt",
                percent: percent_of_total(debt),
            },
            ChartSegment {
                label: "Savings",
                percent: percent_of_total(savings),
            },
            ChartSegment {
                label: "Spending",
                percent: percent_of_total(spending),
            },
        ],
    })
}

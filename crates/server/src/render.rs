// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presenter: assembles domain output into the HTML fragment swapped into
//! the form page's `#result` element.
//!
//! All builders are pure `String` producers. Figures are pre-formatted by
//! the domain's `format_amount`, and every other piece of text is fixed, so
//! no escaping is required here.

use paysplit_domain::{
    Advice, AnalysisResult, ChartBreakdown, FinanceInput, PeriodMode, ValidationError,
    format_amount,
};

/// Renders the error list shown when validation fails.
///
/// Errors appear in validator order. No computation output accompanies
/// them — an invalid submission produces no partial result.
#[must_use]
pub fn error_fragment(errors: &[ValidationError]) -> String {
    let mut fragment: String = String::from(
        "<article class=\"card\">\n<h2>Please correct the following issues:</h2>\n<ul>\n",
    );
    for error in errors {
        fragment.push_str(&format!("<li>{error}</li>\n"));
    }
    fragment.push_str("</ul>\n</article>\n");
    fragment
}

/// Renders the full results fragment: summary, detail list, bar chart, and
/// the advice card when any advice applies.
///
/// `period_mode` selects per-paycheck vs. monthly figures for the summary
/// and the detail list. The chart always uses per-paycheck percentages —
/// they are identical in both modes.
#[must_use]
pub fn results_fragment(
    input: &FinanceInput,
    result: &AnalysisResult,
    advice: &[Advice],
    chart: Option<&ChartBreakdown>,
) -> String {
    let (summary, summary_class) = summary_line(result, input.period_mode);
    let items: String = detail_items(result, input.period_mode, input.show_annual);

    let mut fragment: String = String::from("<article class=\"card\">\n<h2>Results</h2>\n");
    fragment.push_str(&format!("<p class=\"{summary_class}\">{summary}</p>\n"));
    fragment.push_str(&format!("<ul>\n{items}</ul>\n"));
    fragment
        .push_str("<p class=\"muted\">If available_cash is ≤ 0, savings are set to 0.</p>\n");
    fragment.push_str("</article>\n");

    fragment.push_str(&chart_fragment(chart));

    if !advice.is_empty() {
        fragment.push_str(&advice_fragment(advice));
    }

    fragment
}

/// Picks the summary sentence and its styling class.
///
/// Polarity is decided solely by the sign of `available_cash` (≤ 0 is
/// unfavorable), independent of the display mode.
fn summary_line(result: &AnalysisResult, mode: PeriodMode) -> (String, &'static str) {
    if result.available_cash <= 0.0 {
        let text: &str = match mode {
            PeriodMode::Monthly => {
                "You do not have leftover cash after debts (in the monthly equivalent). \
                 You cannot save based on these numbers."
            }
            PeriodMode::Paycheck => {
                "You do not have leftover cash after debts this paycheck. \
                 You cannot save based on these numbers."
            }
        };
        return (String::from(text), "result-bad");
    }

    let text: String = match mode {
        PeriodMode::Monthly => {
            let available: String = format_amount(result.available_monthly);
            let savings: String = format_amount(result.savings_monthly);
            let spending: String = format_amount(result.spending_monthly);
            format!(
                "Monthly equivalent: you have {available} left after debts. \
                 You save {savings} and keep {spending} for other expenses per month."
            )
        }
        PeriodMode::Paycheck => {
            let available: String = format_amount(result.available_cash);
            let savings: String = format_amount(result.savings);
            let spending: String = format_amount(result.spending);
            format!(
                "You have {available} left after debts this paycheck. \
                 You save {savings} and keep {spending} for other expenses."
            )
        }
    };
    (text, "result-good")
}

/// Builds the `<li>` items of the detail list.
fn detail_items(result: &AnalysisResult, mode: PeriodMode, show_annual: bool) -> String {
    let mut items: String = String::new();

    match mode {
        PeriodMode::Monthly => {
            let total_debt: String = format_amount(result.total_debt_monthly);
            let available: String = format_amount(result.available_monthly);
            let savings: String = format_amount(result.savings_monthly);
            let spending: String = format_amount(result.spending_monthly);
            items.push_str(&format!("<li>total_debt_per_month (approx): {total_debt}</li>\n"));
            items.push_str(&format!(
                "<li>available_cash_before_saving_per_month (approx): {available}</li>\n"
            ));
            items.push_str(&format!("<li>savings_per_month (approx): {savings}</li>\n"));
            items.push_str(&format!(
                "<li>spending_money_per_month (approx): {spending}</li>\n"
            ));
        }
        PeriodMode::Paycheck => {
            let total_debt: String = format_amount(result.total_debt);
            let available: String = format_amount(result.available_cash);
            let savings: String = format_amount(result.savings);
            let spending: String = format_amount(result.spending);
            items.push_str(&format!("<li>total_debt_per_paycheck: {total_debt}</li>\n"));
            items.push_str(&format!(
                "<li>available_cash_before_saving: {available}</li>\n"
            ));
            items.push_str(&format!("<li>savings_per_paycheck: {savings}</li>\n"));
            items.push_str(&format!("<li>spending_money_per_paycheck: {spending}</li>\n"));
        }
    }

    if show_annual {
        let annual_savings: String = format_amount(result.annual_savings);
        let annual_spending: String = format_amount(result.annual_spending);
        items.push_str(&format!(
            "<li>annual_savings (26 paychecks): {annual_savings} | \
             annual_spending (26 paychecks): {annual_spending}</li>\n"
        ));
    }

    items
}

/// Renders the horizontal bar chart, or the placeholder when there is
/// nothing positive to chart.
fn chart_fragment(chart: Option<&ChartBreakdown>) -> String {
    let Some(chart) = chart else {
        return String::from(
            "<div class=\"chart\">\n\
             <p class=\"muted\">No positive amounts to display in the chart.</p>\n\
             </div>\n",
        );
    };

    let mut fragment: String = String::from(
        "<div class=\"chart card\">\n<h3>Per-paycheck breakdown (percentage of income)</h3>\n",
    );
    for segment in &chart.segments {
        let label: &str = segment.label;
        let percent: f64 = segment.percent;
        fragment.push_str(&format!(
            "<div class=\"chart-row\">\n\
             <span class=\"chart-label\">{label}</span>\n\
             <div class=\"chart-bar-wrapper\"><div class=\"chart-bar\" style=\"width: {percent:.1}%;\"></div></div>\n\
             <span class=\"muted\">{percent:.1}%</span>\n\
             </div>\n"
        ));
    }
    fragment.push_str(
        "<p class=\"muted\">Chart is based on per-paycheck values; \
         percentages are the same for monthly.</p>\n</div>\n",
    );
    fragment
}

/// Renders the advice card. Callers skip this entirely when no advice
/// applies.
fn advice_fragment(advice: &[Advice]) -> String {
    let mut fragment: String =
        String::from("<article class=\"card\">\n<h3>Advice based on these numbers</h3>\n<ul>\n");
    for message in advice {
        fragment.push_str(&format!("<li>{message}</li>\n"));
    }
    fragment.push_str("</ul>\n</article>\n");
    fragment
}

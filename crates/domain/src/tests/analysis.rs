// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AnalysisResult, FinanceInput, HousingStatus, MONTHLY_FACTOR, PAYCHECKS_PER_YEAR, PeriodMode,
    analyze, format_amount,
};

fn create_test_input() -> FinanceInput {
    FinanceInput {
        housing_status: HousingStatus::Rent,
        housing_payment: 0.0,
        auto_payment: 0.0,
        credit_payment: 0.0,
        student_payment: 0.0,
        monthly_after_tax_income: 0.0,
        save_percent: 10.0,
        period_mode: PeriodMode::Paycheck,
        show_annual: false,
    }
}

#[test]
fn test_analyze_debt_free_paycheck() {
    // Scenario: no debts, 1000 income, save 10%
    let mut input: FinanceInput = create_test_input();
    input.monthly_after_tax_income = 1000.0;

    let result: AnalysisResult = analyze(&input);
    assert_eq!(format_amount(result.total_debt), "0.00");
    assert_eq!(format_amount(result.available_cash), "1000.00");
    assert_eq!(format_amount(result.savings), "100.00");
    assert_eq!(format_amount(result.spending), "900.00");
    assert!(result.can_save);
    assert_eq!(result.debt_income_ratio, Some(0.0));
}

#[test]
fn test_analyze_shortfall_paycheck() {
    // Scenario: 1000 in debts against 900 income
    let mut input: FinanceInput = create_test_input();
    input.housing_payment = 500.0;
    input.auto_payment = 200.0;
    input.credit_payment = 150.0;
    input.student_payment = 150.0;
    input.monthly_after_tax_income = 900.0;
    input.save_percent = 20.0;

    let result: AnalysisResult = analyze(&input);
    assert_eq!(format_amount(result.total_debt), "1000.00");
    assert_eq!(format_amount(result.available_cash), "-100.00");
    assert_eq!(format_amount(result.savings), "0.00");
    assert_eq!(format_amount(result.spending), "-100.00");
    assert!(!result.can_save);
}

#[test]
fn test_analyze_total_debt_is_exact_sum() {
    let mut input: FinanceInput = create_test_input();
    input.housing_payment = 512.34;
    input.auto_payment = 210.55;
    input.credit_payment = 99.99;
    input.student_payment = 47.12;
    input.monthly_after_tax_income = 2000.0;

    let result: AnalysisResult = analyze(&input);
    assert_eq!(result.total_debt, 512.34 + 210.55 + 99.99 + 47.12);
}

#[test]
fn test_analyze_zero_available_cash_cannot_save() {
    // Income exactly consumed by debt: no shortfall, but nothing to save
    let mut input: FinanceInput = create_test_input();
    input.housing_payment = 500.0;
    input.monthly_after_tax_income = 500.0;

    let result: AnalysisResult = analyze(&input);
    assert_eq!(result.available_cash, 0.0);
    assert!(!result.can_save);
    assert_eq!(result.savings, 0.0);
    assert_eq!(result.spending, 0.0);
}

#[test]
fn test_analyze_savings_plus_spending_equals_available() {
    let mut input: FinanceInput = create_test_input();
    input.housing_payment = 123.45;
    input.monthly_after_tax_income = 1456.78;
    input.save_percent = 33.0;

    let result: AnalysisResult = analyze(&input);
    assert!(result.can_save);
    let recombined: f64 = result.savings + result.spending;
    assert!((recombined - result.available_cash).abs() < 1e-9);
}

#[test]
fn test_analyze_ratio_absent_when_income_is_zero() {
    let mut input: FinanceInput = create_test_input();
    input.housing_payment = 650.0;

    let result: AnalysisResult = analyze(&input);
    assert_eq!(result.debt_income_ratio, None);
}

#[test]
fn test_analyze_ratio_present_when_income_is_positive() {
    let mut input: FinanceInput = create_test_input();
    input.housing_payment = 650.0;
    input.monthly_after_tax_income = 1000.0;

    let result: AnalysisResult = analyze(&input);
    assert_eq!(result.debt_income_ratio, Some(0.65));
}

#[test]
fn test_analyze_monthly_fields_scale_by_monthly_factor() {
    let mut input: FinanceInput = create_test_input();
    input.housing_payment = 400.0;
    input.auto_payment = 100.0;
    input.monthly_after_tax_income = 1300.0;
    input.save_percent = 25.0;

    let result: AnalysisResult = analyze(&input);
    assert_eq!(result.total_debt_monthly, result.total_debt * MONTHLY_FACTOR);
    assert_eq!(
        result.available_monthly,
        result.available_cash * MONTHLY_FACTOR
    );
    assert_eq!(result.savings_monthly, result.savings * MONTHLY_FACTOR);
    assert_eq!(result.spending_monthly, result.spending * MONTHLY_FACTOR);
}

#[test]
fn test_analyze_annual_fields_scale_by_paychecks_per_year() {
    let mut input: FinanceInput = create_test_input();
    input.monthly_after_tax_income = 1000.0;
    input.save_percent = 10.0;

    let result: AnalysisResult = analyze(&input);
    assert_eq!(result.annual_savings, result.savings * PAYCHECKS_PER_YEAR);
    assert_eq!(result.annual_spending, result.spending * PAYCHECKS_PER_YEAR);
    assert_eq!(format_amount(result.annual_savings), "2600.00");
    assert_eq!(format_amount(result.annual_spending), "23400.00");
}

#[test]
fn test_analyze_clamps_out_of_contract_save_percent() {
    // Out-of-contract input (validation would have rejected it) still
    // produces a consistent result: the fraction clamps to 100%
    let mut input: FinanceInput = create_test_input();
    input.monthly_after_tax_income = 1000.0;
    input.save_percent = 150.0;

    let result: AnalysisResult = analyze(&input);
    assert_eq!(result.savings, 1000.0);
    assert_eq!(result.spending, 0.0);
}

#[test]
fn test_format_amount_keeps_two_fractional_digits() {
    assert_eq!(format_amount(100.0), "100.00");
    assert_eq!(format_amount(0.0), "0.00");
    assert_eq!(format_amount(-100.0), "-100.00");
    assert_eq!(format_amount(0.1), "0.10");
    assert_eq!(format_amount(1234.5678), "1234.57");
}

#[test]
fn test_format_amount_rounds_ties_to_even() {
    // x.125 and x.375 are exactly representable in binary, so these are
    // true ties at the second decimal
    assert_eq!(format_amount(100.125), "100.12");
    assert_eq!(format_amount(100.375), "100.38");
}

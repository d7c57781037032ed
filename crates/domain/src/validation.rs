// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ValidationError;
use crate::types::FinanceInput;

/// Validates a budget form submission.
///
/// Checks run independently — every violated rule is reported, nothing
/// short-circuits. The order of checks is fixed (housing, auto, credit,
/// student, income, save percent) and determines the order errors are
/// displayed.
///
/// # Arguments
///
/// * `input` - The submission to validate
///
/// # Returns
///
/// All violations found. An empty vector means the input is valid and may be
/// handed to the analyzer.
#[must_use]
pub fn validate(input: &FinanceInput) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rule: debt-like payments must be non-negative
    if input.housing_payment < 0.0 {
        errors.push(ValidationError::NegativeHousingPayment);
    }
    if input.auto_payment < 0.0 {
        errors.push(ValidationError::NegativeAutoPayment);
    }
    if input.credit_payment < 0.0 {
        errors.push(ValidationError::NegativeCreditPayment);
    }
    if input.student_payment < 0.0 {
        errors.push(ValidationError::NegativeStudentPayment);
    }

    // Rule: income must be non-negative
    if input.monthly_after_tax_income < 0.0 {
        errors.push(ValidationError::NegativeIncome);
    }

    // Rule: save percent must be within 0..=100
    if input.save_percent < 0.0 || input.save_percent > 100.0 {
        errors.push(ValidationError::SavePercentOutOfRange {
            percent: input.save_percent,
        });
    }

    errors
}

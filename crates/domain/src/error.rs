// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during input validation.
///
/// One variant per field-level rule. Violations are collected into a `Vec`
/// rather than returned one at a time, so the user can fix every problem in
/// a single pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The housing payment is negative.
    NegativeHousingPayment,
    /// The auto loan payment is negative.
    NegativeAutoPayment,
    /// The credit card payment is negative.
    NegativeCreditPayment,
    /// The student loan payment is negative.
    NegativeStudentPayment,
    /// The take-home pay is negative.
    NegativeIncome,
    /// The save percentage is outside 0..=100.
    SavePercentOutOfRange {
        /// The rejected percentage value.
        percent: f64,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeHousingPayment => {
                write!(f, "Housing payment cannot be negative.")
            }
            Self::NegativeAutoPayment => {
                write!(f, "Auto loan payment cannot be negative.")
            }
            Self::NegativeCreditPayment => {
                write!(f, "Credit card payment cannot be negative.")
            }
            Self::NegativeStudentPayment => {
                write!(f, "Student loan payment cannot be negative.")
            }
            Self::NegativeIncome => {
                write!(f, "Take-home pay per paycheck cannot be negative.")
            }
            Self::SavePercentOutOfRange { percent } => {
                write!(f, "Percent to save must be between 0 and 100, got {percent}.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

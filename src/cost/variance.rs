//! Budget variance calculation.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::CostVariance;

/// Compares actual labor cost against a budgeted amount.
///
/// `variance` is `actual - budgeted`; the percentage is relative to the
/// budget and guarded against a non-positive budget (reported as 0). The
/// percentage is rounded to 2 decimal places, half-up.
///
/// # Example
///
/// ```
/// use compliance_engine::cost::calculate_variance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let variance = calculate_variance(
///     Decimal::from(2000),
///     Decimal::from(2250),
/// );
/// assert!(variance.is_over_budget);
/// assert_eq!(variance.variance, Decimal::from(250));
/// assert_eq!(variance.variance_percentage, Decimal::from_str("12.50").unwrap());
/// ```
pub fn calculate_variance(budgeted: Decimal, actual: Decimal) -> CostVariance {
    let variance = actual - budgeted;

    let variance_percentage = if budgeted > Decimal::ZERO {
        (variance / budgeted * Decimal::from(100))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    } else {
        Decimal::ZERO
    };

    CostVariance {
        variance,
        variance_percentage,
        is_over_budget: variance > Decimal::ZERO,
    }
}

//! Cent rounding and rate conversion helpers

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Percent-per-year to fraction-per-month divisor (100 * 12)
const PERCENT_MONTHS: Decimal = dec!(1200);

/// Round an amount to the nearest cent, halves away from zero
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Interest accrued on `balance` over one month at an annual percentage rate
///
/// Simple monthly rate (`annual / 12`), rounded to the cent. Saturates rather
/// than overflowing for balances that have grown without bound.
pub fn monthly_interest(balance: Decimal, annual_rate_pct: Decimal) -> Decimal {
    round_cents(balance.saturating_mul(annual_rate_pct) / PERCENT_MONTHS)
}

/// Sum of amounts, clamped at `Decimal::MAX` instead of overflowing
pub fn saturating_sum<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
}

//! Money arithmetic shared by carts, checkout and payments.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::app_error::AppError;

/// Largest value a `NUMERIC(10, 2)` quantity or amount column holds.
pub fn max_amount() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn out_of_range(what: &str) -> AppError {
    AppError::BadRequest(format!("{} exceeds {}", what, max_amount()))
}

pub fn line_total(quantity: Decimal, unit_price: Decimal) -> Result<Decimal, AppError> {
    quantity
        .checked_mul(unit_price)
        .map(round_money)
        .filter(|total| *total <= max_amount())
        .ok_or_else(|| out_of_range("Line total"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub total_amount: Decimal,
}

/// `total = subtotal + delivery_fee + tax - discount`, with tax charged on the subtotal.
pub fn order_totals<I>(
    line_totals: I,
    delivery_fee: Decimal,
    tax_rate: Decimal,
) -> Result<OrderTotals, AppError>
where
    I: IntoIterator<Item = Decimal>,
{
    let subtotal = line_totals
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line))
        .map(round_money)
        .ok_or_else(|| out_of_range("Order subtotal"))?;
    let tax_amount = subtotal
        .checked_mul(tax_rate)
        .map(round_money)
        .ok_or_else(|| out_of_range("Order tax"))?;
    let discount_amount = Decimal::ZERO;
    let total_amount = subtotal
        .checked_add(delivery_fee)
        .and_then(|total| total.checked_add(tax_amount))
        .map(|total| total - discount_amount)
        .filter(|total| *total <= max_amount())
        .ok_or_else(|| out_of_range("Order total"))?;

    Ok(OrderTotals {
        subtotal,
        delivery_fee,
        tax_amount,
        discount_amount,
        total_amount,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSplit {
    pub processing_fee: Decimal,
    pub net_amount: Decimal,
}

/// `fee_fraction` is stored as a fraction of one (`0.0150` for 1.5%).
pub fn payment_split(amount: Decimal, fee_fraction: Decimal) -> PaymentSplit {
    let processing_fee = round_money(amount * fee_fraction);
    PaymentSplit {
        processing_fee,
        net_amount: amount - processing_fee,
    }
}

/// Whether `amount` is accepted by a payment method with the given bounds.
pub fn within_limits(amount: Decimal, minimum: Decimal, maximum: Option<Decimal>) -> bool {
    amount >= minimum && maximum.is_none_or(|max| amount <= max)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn line_total_rounds_half_away_from_zero() {
        assert_eq!(line_total(d("2.5"), d("45.50")).unwrap(), d("113.75"));
        assert_eq!(line_total(d("0.333"), d("10.00")).unwrap(), d("3.33"));
        assert_eq!(line_total(d("0.125"), d("1.00")).unwrap(), d("0.13"));
    }

    #[test]
    fn line_total_rejects_overflow_instead_of_panicking() {
        let err = line_total(d("79228162514264337593543950335"), d("50")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn line_total_must_fit_the_price_column() {
        assert_eq!(line_total(d("99999999.99"), d("1")).unwrap(), max_amount());
        assert!(matches!(
            line_total(d("10000000"), d("10.00")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn order_total_beyond_column_is_rejected() {
        let err = order_totals([max_amount()], d("1.00"), Decimal::ZERO).unwrap_err();
        assert_eq!(err.to_string(), "Order total exceeds 99999999.99");
    }

    #[test]
    fn order_totals_add_fee_and_tax() {
        let totals = order_totals([d("100.00"), d("50.25")], d("200.00"), d("0.16")).unwrap();
        assert_eq!(totals.subtotal, d("150.25"));
        assert_eq!(totals.tax_amount, d("24.04"));
        assert_eq!(totals.discount_amount, Decimal::ZERO);
        assert_eq!(totals.total_amount, d("374.29"));
    }

    #[test]
    fn order_totals_without_fee_or_tax_equal_subtotal() {
        let totals = order_totals([d("30"), d("12.5")], Decimal::ZERO, Decimal::ZERO).unwrap();
        assert_eq!(totals.total_amount, d("42.5"));
    }

    #[test]
    fn payment_split_deducts_processing_fee() {
        let split = payment_split(d("1000.00"), d("0.0150"));
        assert_eq!(split.processing_fee, d("15.00"));
        assert_eq!(split.net_amount, d("985.00"));
    }

    #[test]
    fn limits_are_inclusive_and_maximum_is_optional() {
        assert!(within_limits(d("10"), d("10"), Some(d("150000"))));
        assert!(!within_limits(d("9.99"), d("10"), None));
        assert!(within_limits(d("1000000"), d("0"), None));
        assert!(!within_limits(d("150000.01"), d("10"), Some(d("150000"))));
    }
}

//! Text to number conversion for record fields.
#![expect(
    clippy::map_err_ignore,
    reason = "Conversion failures are reported with the offending text instead of the source error"
)]

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::constants::YEAR_WIDTH;
use crate::error::{BuildError, BuildResult};

/// Significant digits a [`Decimal`] holds without rounding.
const DECIMAL_DIGITS: u32 = 28;

/// Fraction digits kept on a scaled product, below microsecond resolution.
const PRODUCT_FRACTION_DIGITS: u32 = 6;

/// Converts field text to `T`.
///
/// ## Errors
/// Returns `FormatError` naming `field` if the text is not a valid `T`.
pub fn cast<T: FromStr>(value: &str, field: &str) -> BuildResult<T> {
    value
        .parse::<T>()
        .map_err(|_| BuildError::FormatError(format!("could not interpret {field} {value:?}")))
}

/// Converts field text to an exact decimal.
///
/// Both `.` and `,` are accepted as the decimal sign. Fraction digits
/// beyond what a [`Decimal`] can hold are cut off, never rounded.
///
/// ## Errors
/// Returns `FormatError` naming `field` if the text is not a decimal number.
pub fn cast_decimal(value: &str, field: &str) -> BuildResult<Decimal> {
    let normalized = value.replace(',', ".");
    Decimal::from_str(truncate_fraction(&normalized))
        .map_err(|_| BuildError::FormatError(format!("could not interpret {field} {value:?}")))
}

/// Drops trailing fraction digits so the whole number fits in
/// [`DECIMAL_DIGITS`] significant digits.
fn truncate_fraction(text: &str) -> &str {
    let Some(point) = text.find('.') else {
        return text;
    };
    let integer_digits = text[..point]
        .trim_start_matches(['-', '+'])
        .trim_start_matches('0')
        .len();
    let fraction = &text[point + 1..];
    if !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
        return text;
    }
    let keep = (DECIMAL_DIGITS as usize).saturating_sub(integer_digits);
    if keep == 0 {
        return &text[..point];
    }
    &text[..(point + 1 + keep).min(text.len())]
}

/// Converts optional field text to an exact decimal, treating absence as zero.
///
/// ## Errors
/// Returns `FormatError` naming `field` if present text is not a decimal number.
pub fn cast_optional_decimal(value: Option<&str>, field: &str) -> BuildResult<Decimal> {
    value.map_or(Ok(Decimal::ZERO), |text| cast_decimal(text, field))
}

/// Multiplies `amount` by the whole number `unit` without ever rounding up.
///
/// Fraction digits of `amount` that would push the product past what a
/// [`Decimal`] holds are cut first, and the product keeps at most six
/// fraction digits. Returns `None` when the product does not fit.
#[must_use]
pub fn checked_scale(amount: Decimal, unit: i64) -> Option<Decimal> {
    let whole = amount.trunc().abs().to_u128()?;
    let whole_digits = whole.checked_ilog10().map_or(0, |digits| digits + 1);
    let unit_digits = unit
        .unsigned_abs()
        .checked_ilog10()
        .map_or(0, |digits| digits + 1);
    let room = DECIMAL_DIGITS.saturating_sub(whole_digits + unit_digits);

    amount
        .trunc_with_scale(room.min(amount.scale()))
        .checked_mul(Decimal::from(unit))
        .map(|product| product.trunc_with_scale(PRODUCT_FRACTION_DIGITS))
}

/// Widens a reduced-precision year to four digits by shifting in zeros on
/// the right (`"1"` → `"1000"`, `"12"` → `"1200"`).
///
/// ## Errors
/// Returns `FormatError` if the text is empty or not all ASCII digits.
pub fn widen_year(year: &str) -> BuildResult<String> {
    if year.is_empty() || !year.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(BuildError::FormatError(format!(
            "could not interpret year {year:?}"
        )));
    }
    Ok(format!("{year:0<YEAR_WIDTH$}"))
}

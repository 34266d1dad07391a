use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::UnitError;

/// 10^19 is the largest power of ten that still fits into a u64.
pub const MAX_DECIMALS: u32 = 19;

pub fn native_scale(decimals: u32) -> Result<u64, UnitError> {
    if decimals > MAX_DECIMALS {
        return Err(UnitError::UnsupportedDecimals(decimals));
    }
    10u64
        .checked_pow(decimals)
        .ok_or(UnitError::UnsupportedDecimals(decimals))
}

/// Scales a human readable decimal amount into native token units.
///
/// Accepts an optional leading `+`, digits with an optional fraction, and an
/// optional exponent (`1.5`, `+2`, `1e3`). Digit separators are rejected.
/// Digits below the native unit are dropped, so `"0.0000000019"` at 9
/// decimals becomes `1`.
pub fn convert_to_native_tokens(amount: &str, decimals: u32) -> Result<u64, UnitError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(UnitError::Empty);
    }

    let factor = Decimal::from(native_scale(decimals)?);
    // rust_decimal skips `_` while parsing
    if trimmed.contains('_') {
        return Err(UnitError::Malformed(trimmed.to_string()));
    }
    let parsed =
        Decimal::from_str(trimmed).map_err(|_| UnitError::Malformed(trimmed.to_string()))?;
    if parsed < Decimal::ZERO {
        return Err(UnitError::Negative(trimmed.to_string()));
    }

    parsed
        .checked_mul(factor)
        .map(|scaled| scaled.trunc())
        .and_then(|scaled| scaled.to_u64())
        .ok_or_else(|| UnitError::Overflow(trimmed.to_string()))
}

pub fn format_native_tokens(value: u64, decimals: u32) -> Result<String, UnitError> {
    native_scale(decimals)?;
    let amount = Decimal::try_from_i128_with_scale(i128::from(value), decimals)
        .map_err(|_| UnitError::UnsupportedDecimals(decimals))?;
    Ok(amount.normalize().to_string())
}

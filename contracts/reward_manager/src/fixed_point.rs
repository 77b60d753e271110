use soroban_sdk::{Env, U256};

use crate::ContractError;

/// Computes `a * b / scale`, truncating toward zero.
///
/// The product stays in `i128` when it fits and is otherwise carried out in a
/// 256-bit host integer, so only the final quotient has to fit in `i128`.
///
/// Operands are amounts, rates and accumulators, all non-negative; a negative
/// operand is reported as `ArithmeticOverflow`.
pub fn scaled_mul_div(env: &Env, a: i128, b: i128, scale: i128) -> Result<i128, ContractError> {
    if scale == 0 {
        return Err(ContractError::DivisionByZero);
    }
    if a < 0 || b < 0 || scale < 0 {
        return Err(ContractError::ArithmeticOverflow);
    }

    if let Some(product) = a.checked_mul(b) {
        return Ok(product / scale);
    }

    let wide = widen(env, a)?
        .mul(&widen(env, b)?)
        .div(&widen(env, scale)?);
    narrow(&wide)
}

/// Lifts a non-negative `i128` into a 256-bit host integer.
pub fn widen(env: &Env, value: i128) -> Result<U256, ContractError> {
    u128::try_from(value)
        .map(|v| U256::from_u128(env, v))
        .map_err(|_| ContractError::ArithmeticOverflow)
}

/// Brings a 256-bit value back to `i128`, failing when it does not fit.
pub fn narrow(value: &U256) -> Result<i128, ContractError> {
    value
        .to_u128()
        .and_then(|v| i128::try_from(v).ok())
        .ok_or(ContractError::ArithmeticOverflow)
}

/// `a - b` on 256-bit values, failing instead of trapping when `b > a`.
pub fn wide_sub(a: &U256, b: &U256) -> Result<U256, ContractError> {
    if b > a {
        return Err(ContractError::ArithmeticOverflow);
    }
    Ok(a.sub(b))
}

/// `a + b`, failing with `ArithmeticOverflow`.
pub fn add(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::ArithmeticOverflow)
}

/// `a - b`, failing with `ArithmeticOverflow`.
pub fn sub(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::ArithmeticOverflow)
}

//! Balance bookkeeping for stakers.
//!
//! Both functions assume the accumulator and `account` were already caught up
//! with `rewards::update_reward`; they only move stake weight.

use crate::fixed_point;
use crate::storage::{RewardState, StakerAccount};
use crate::ContractError;

/// Add `amount` to the staker and to the total supply.
pub fn credit(
    state: &mut RewardState,
    account: &mut StakerAccount,
    amount: i128,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    account.balance = fixed_point::add(account.balance, amount)?;
    state.total_supply = fixed_point::add(state.total_supply, amount)?;
    Ok(())
}

/// Remove `amount` from the staker and from the total supply.
///
/// Settled `rewards` are left alone, so a full withdrawal keeps them claimable.
pub fn debit(
    state: &mut RewardState,
    account: &mut StakerAccount,
    amount: i128,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount > account.balance {
        return Err(ContractError::InsufficientStake);
    }

    account.balance = fixed_point::sub(account.balance, amount)?;
    state.total_supply = fixed_point::sub(state.total_supply, amount)?;
    Ok(())
}

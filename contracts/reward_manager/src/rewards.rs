use soroban_sdk::{Env, U256};

use crate::config::{RATE_SCALE, RATE_TO_SCALE, SCALE};
use crate::fixed_point::{self, narrow, scaled_mul_div, widen};
use crate::storage::{RewardState, StakerAccount};
use crate::ContractError;

// ── Core reward engine ──────────────────────────────────────────────────────

/// Emission stops counting once the funding period has elapsed.
pub fn last_time_reward_applicable(state: &RewardState, now: u64) -> u64 {
    now.min(state.period_finish)
}

/// Current value of the reward-per-token accumulator.
///
/// This is the O(1) accumulation step:
///
/// ```text
/// emitted = (min(now, period_finish) − last_update_time) × reward_rate
/// new_rpt = stored_rpt + emitted × (SCALE / RATE_SCALE) / total_supply
/// ```
///
/// `emitted` is bounded by the funding, so it fits `i128`; the rescale and
/// division run in 256 bits. With nothing staked the stored value is
/// returned unchanged: no division by zero, and nothing accrues while no one
/// is staked.
pub fn reward_per_token(env: &Env, state: &RewardState, now: u64) -> Result<U256, ContractError> {
    if state.total_supply == 0 {
        return Ok(state.reward_per_token_stored.clone());
    }

    let elapsed = last_time_reward_applicable(state, now).saturating_sub(state.last_update_time);
    let emitted = scaled_mul_div(env, elapsed as i128, state.reward_rate, 1)?;
    let delta = widen(env, emitted)?
        .mul(&widen(env, RATE_TO_SCALE)?)
        .div(&widen(env, state.total_supply)?);

    Ok(state.reward_per_token_stored.add(&delta))
}

/// Total reward owed to `account`, settled and pending.
///
/// ```text
/// earned = balance × (current_rpt − user_rpt_paid) / SCALE + rewards
/// ```
///
/// Only the accumulation since the staker's last snapshot is counted, so
/// earlier snapshots are never double-counted.
pub fn earned(
    env: &Env,
    account: &StakerAccount,
    current_rpt: &U256,
) -> Result<i128, ContractError> {
    let rpt_delta = fixed_point::wide_sub(current_rpt, &account.user_reward_per_token_paid)?;
    let pending = widen(env, account.balance)?
        .mul(&rpt_delta)
        .div(&widen(env, SCALE)?);

    fixed_point::add(account.rewards, narrow(&pending)?)
}

/// Catch the accumulator up to `now` and, when given, settle `account`
/// against the fresh value.
///
/// Must run before any balance or rate change, otherwise earnings are
/// computed against stale stake weights.
pub fn update_reward(
    env: &Env,
    state: &mut RewardState,
    account: Option<&mut StakerAccount>,
    now: u64,
) -> Result<(), ContractError> {
    let rpt = reward_per_token(env, state, now)?;
    state.last_update_time = last_time_reward_applicable(state, now);

    if let Some(account) = account {
        account.rewards = earned(env, account, &rpt)?;
        account.user_reward_per_token_paid = rpt.clone();
    }

    state.reward_per_token_stored = rpt;
    Ok(())
}

/// Start a new funding period of `duration` seconds carrying `amount` plus
/// whatever the running period has not emitted yet.
///
/// The accumulator must already be caught up to `now`.
pub fn start_period(
    env: &Env,
    state: &mut RewardState,
    amount: i128,
    now: u64,
    duration: u64,
) -> Result<(), ContractError> {
    let duration_i = duration as i128;
    let scaled_amount = scaled_mul_div(env, amount, RATE_SCALE, 1)?;

    state.reward_rate = if now >= state.period_finish {
        scaled_amount / duration_i
    } else {
        let remaining = (state.period_finish - now) as i128;
        let leftover = scaled_mul_div(env, remaining, state.reward_rate, 1)?;
        fixed_point::add(scaled_amount, leftover)? / duration_i
    };

    state.last_update_time = now;
    state.period_finish = now
        .checked_add(duration)
        .ok_or(ContractError::ArithmeticOverflow)?;

    Ok(())
}

/// Reward emitted over one full period at the current rate, in token units.
pub fn reward_for_duration(
    env: &Env,
    state: &RewardState,
    duration: u64,
) -> Result<i128, ContractError> {
    scaled_mul_div(env, state.reward_rate, duration as i128, RATE_SCALE)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure accumulator math; the contract-level flows live in `test.rs`.

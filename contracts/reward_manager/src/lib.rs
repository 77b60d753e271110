#![no_std]

//! Streams reward tokens to stakers in proportion to their stake over time.
//!
//! A funding module (role `BALANCE`) injects rewards that are emitted
//! linearly over a fixed period; the stake manager (role `STAKE`) reports
//! deposits and withdrawals; anyone can trigger payout of a staker's own
//! entitlement. Every operation is O(1): a global reward-per-token
//! accumulator is caught up to the ledger timestamp first, then per-staker
//! snapshots are settled against it.

pub mod config;
pub mod events;
pub mod fixed_point;
pub mod ledger;
pub mod rewards;
pub mod storage;

use common::roles;
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Symbol, U256};

use storage::{Config, RewardState, StakerAccount};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InsufficientStake = 5,
    InsufficientBalance = 6,
    TransferFailed = 7,
    ArithmeticOverflow = 8,
    DivisionByZero = 9,
    InvalidDuration = 10,
    InvalidConfiguration = 11,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct RewardManagerContract;

#[contractimpl]
impl RewardManagerContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bind the manager to its collaborators. Callable once.
    ///
    /// * `registry`         – role resolver answering `get_module`.
    /// * `reward_token`     – SAC address of the token paid out as reward.
    /// * `rewards_duration` – length of every funding period, in seconds.
    pub fn initialize(
        env: Env,
        registry: Address,
        reward_token: Address,
        rewards_duration: u64,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if rewards_duration == 0 {
            return Err(ContractError::InvalidDuration);
        }
        if registry == reward_token {
            return Err(ContractError::InvalidConfiguration);
        }

        storage::set_config(
            &env,
            &Config {
                registry: registry.clone(),
                reward_token: reward_token.clone(),
                rewards_duration,
            },
        );
        storage::set_state(&env, &RewardState::new(&env));

        events::publish_initialized(&env, registry, reward_token, rewards_duration);

        Ok(())
    }

    // ── Funding ─────────────────────────────────────────────────────────────

    /// Start a new funding period carrying `amount` reward tokens.
    ///
    /// Rewards not yet emitted from a running period are folded into the new
    /// rate, so a mid-period top-up neither loses nor double-counts anything.
    /// The funder must have approved the manager for `amount` beforehand.
    pub fn notify_reward_amount(
        env: Env,
        funder: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        let config = storage::get_config(&env)?;
        funder.require_auth();
        Self::require_role(&env, &config, &roles::BALANCE, &funder)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let mut state = storage::get_state(&env);

        // 1. Flush the accumulator at the old rate.
        rewards::update_reward(&env, &mut state, None, now)?;

        // 2. Derive the new rate and period.
        rewards::start_period(&env, &mut state, amount, now, config.rewards_duration)?;

        // 3. Pull the funding from the caller's allowance.
        let this = env.current_contract_address();
        let reward_token = token::Client::new(&env, &config.reward_token);
        if reward_token.balance(&funder) < amount {
            return Err(ContractError::InsufficientBalance);
        }
        if reward_token.allowance(&funder, &this) < amount {
            return Err(ContractError::TransferFailed);
        }
        reward_token.transfer_from(&this, &funder, &this, &amount);

        // 4. Commit.
        storage::set_state(&env, &state);

        log!(
            &env,
            "reward period started",
            state.reward_rate,
            state.period_finish
        );
        events::publish_reward_added(
            &env,
            funder,
            amount,
            state.reward_rate,
            state.period_finish,
        );

        Ok(())
    }

    // ── Stake ledger ────────────────────────────────────────────────────────

    /// Record `amount` of new stake for `staker` under deposit tag `position`.
    ///
    /// The accumulator is flushed first so the new stake does not earn
    /// retroactively.
    pub fn stake(
        env: Env,
        caller: Address,
        staker: Address,
        amount: i128,
        position: u64,
    ) -> Result<(), ContractError> {
        let config = storage::get_config(&env)?;
        caller.require_auth();
        Self::require_role(&env, &config, &roles::STAKE, &caller)?;

        let now = env.ledger().timestamp();
        let mut state = storage::get_state(&env);
        let mut account = storage::get_account(&env, &staker).unwrap_or_else(|| StakerAccount::new(&env));

        rewards::update_reward(&env, &mut state, Some(&mut account), now)?;
        ledger::credit(&mut state, &mut account, amount)?;

        storage::set_state(&env, &state);
        storage::set_account(&env, &staker, &account);

        events::publish_staked(
            &env,
            staker,
            amount,
            position,
            account.balance,
            state.total_supply,
        );

        Ok(())
    }

    /// Remove `amount` of stake recorded for `staker` under `position`.
    ///
    /// Settled rewards stay with the staker and remain claimable after a full
    /// withdrawal.
    pub fn withdraw(
        env: Env,
        caller: Address,
        staker: Address,
        amount: i128,
        position: u64,
    ) -> Result<(), ContractError> {
        let config = storage::get_config(&env)?;
        caller.require_auth();
        Self::require_role(&env, &config, &roles::STAKE, &caller)?;

        let now = env.ledger().timestamp();
        let mut state = storage::get_state(&env);
        let mut account = storage::get_account(&env, &staker).unwrap_or_else(|| StakerAccount::new(&env));

        rewards::update_reward(&env, &mut state, Some(&mut account), now)?;
        ledger::debit(&mut state, &mut account, amount)?;

        storage::set_state(&env, &state);
        storage::set_account(&env, &staker, &account);

        events::publish_withdrawn(
            &env,
            staker,
            amount,
            position,
            account.balance,
            state.total_supply,
        );

        Ok(())
    }

    // ── Settlement ──────────────────────────────────────────────────────────

    /// Pay `staker` everything they have earned so far and return the amount.
    ///
    /// Anyone may call this; the payout always goes to `staker`. Nothing owed
    /// is a successful no-op returning `0`.
    pub fn get_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        let config = storage::get_config(&env)?;

        let now = env.ledger().timestamp();
        let mut state = storage::get_state(&env);

        let Some(mut account) = storage::get_account(&env, &staker) else {
            rewards::update_reward(&env, &mut state, None, now)?;
            storage::set_state(&env, &state);
            return Ok(0);
        };

        rewards::update_reward(&env, &mut state, Some(&mut account), now)?;

        let reward = account.rewards;
        if reward > 0 {
            account.rewards = 0;

            let this = env.current_contract_address();
            let reward_token = token::Client::new(&env, &config.reward_token);
            if reward_token.balance(&this) < reward {
                return Err(ContractError::InsufficientBalance);
            }
            reward_token.transfer(&this, &staker, &reward);
        }

        // The zeroed balance is only written once the transfer went through.
        storage::set_state(&env, &state);
        storage::set_account(&env, &staker, &account);

        if reward > 0 {
            log!(&env, "reward paid", reward);
            events::publish_reward_paid(&env, staker, reward);
        }

        Ok(reward)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Sum of every staker's balance.
    pub fn total_supply(env: Env) -> i128 {
        storage::get_state(&env).total_supply
    }

    pub fn balance_of(env: Env, staker: Address) -> i128 {
        storage::get_account(&env, &staker)
            .map(|account| account.balance)
            .unwrap_or(0)
    }

    /// Real-time entitlement of `staker`, settled and pending, without
    /// mutating state.
    pub fn earned(env: Env, staker: Address) -> Result<i128, ContractError> {
        let state = storage::get_state(&env);
        let account = storage::get_account(&env, &staker).unwrap_or_else(|| StakerAccount::new(&env));
        let current_rpt = rewards::reward_per_token(&env, &state, env.ledger().timestamp())?;
        rewards::earned(&env, &account, &current_rpt)
    }

    /// Reward settled at the staker's last interaction and not yet paid.
    pub fn rewards(env: Env, staker: Address) -> i128 {
        storage::get_account(&env, &staker)
            .map(|account| account.rewards)
            .unwrap_or(0)
    }

    pub fn user_reward_per_token_paid(env: Env, staker: Address) -> U256 {
        storage::get_account(&env, &staker)
            .map(|account| account.user_reward_per_token_paid)
            .unwrap_or_else(|| U256::from_u32(&env, 0))
    }

    /// Accumulator value, scaled by `config::SCALE`.
    pub fn reward_per_token(env: Env) -> Result<U256, ContractError> {
        let state = storage::get_state(&env);
        rewards::reward_per_token(&env, &state, env.ledger().timestamp())
    }

    pub fn last_time_reward_applicable(env: Env) -> u64 {
        let state = storage::get_state(&env);
        rewards::last_time_reward_applicable(&state, env.ledger().timestamp())
    }

    /// Current emission rate per second, scaled by `config::RATE_SCALE`.
    pub fn reward_rate(env: Env) -> i128 {
        storage::get_state(&env).reward_rate
    }

    pub fn period_finish(env: Env) -> u64 {
        storage::get_state(&env).period_finish
    }

    pub fn last_update_time(env: Env) -> u64 {
        storage::get_state(&env).last_update_time
    }

    pub fn rewards_duration(env: Env) -> Result<u64, ContractError> {
        Ok(storage::get_config(&env)?.rewards_duration)
    }

    /// Tokens a full period emits at the current rate.
    pub fn get_reward_for_duration(env: Env) -> Result<i128, ContractError> {
        let config = storage::get_config(&env)?;
        let state = storage::get_state(&env);
        rewards::reward_for_duration(&env, &state, config.rewards_duration)
    }

    pub fn reward_token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.reward_token)
    }

    pub fn registry(env: Env) -> Result<Address, ContractError> {
        Ok(storage::get_config(&env)?.registry)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    /// Whether the registry resolves the `REWARD` role to this contract.
    pub fn is_registered(env: Env) -> Result<bool, ContractError> {
        let config = storage::get_config(&env)?;
        Ok(roles::holds_role(
            &env,
            &config.registry,
            &roles::REWARD,
            &env.current_contract_address(),
        ))
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert unless the registry resolves `role` to `caller`.
    fn require_role(
        env: &Env,
        config: &Config,
        role: &Symbol,
        caller: &Address,
    ) -> Result<(), ContractError> {
        if !roles::holds_role(env, &config.registry, role, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

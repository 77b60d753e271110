use common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, U256};

use crate::ContractError;

// ── Storage key constants ───────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const REGISTRY: Symbol = symbol_short!("REGISTRY");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const DURATION: Symbol = symbol_short!("DURATION");
const STATE: Symbol = symbol_short!("STATE");

// Per-staker persistent storage uses tuple keys:  (prefix, staker_address)
const ACCOUNT: Symbol = symbol_short!("ACCOUNT");

// ── Types ───────────────────────────────────────────────────────────────────

/// Global accumulator, one per contract instance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardState {
    /// Reward tokens emitted per second across all stakers, scaled by
    /// `RATE_SCALE`.
    pub reward_rate: i128,
    /// Cumulative reward per unit of stake, scaled by `SCALE`. Never decreases.
    pub reward_per_token_stored: U256,
    /// Timestamp the accumulator was last brought up to date.
    pub last_update_time: u64,
    /// End of the current emission schedule.
    pub period_finish: u64,
    /// Sum of every staker's balance.
    pub total_supply: i128,
}

impl RewardState {
    /// No funding and nothing staked.
    pub fn new(env: &Env) -> Self {
        RewardState {
            reward_rate: 0,
            reward_per_token_stored: U256::from_u32(env, 0),
            last_update_time: 0,
            period_finish: 0,
            total_supply: 0,
        }
    }
}

/// Per-staker bookkeeping.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerAccount {
    pub balance: i128,
    /// `reward_per_token_stored` at the staker's last interaction.
    pub user_reward_per_token_paid: U256,
    /// Settled but unpaid reward.
    pub rewards: i128,
}

impl StakerAccount {
    pub fn new(env: &Env) -> Self {
        StakerAccount {
            balance: 0,
            user_reward_per_token_paid: U256::from_u32(env, 0),
            rewards: 0,
        }
    }
}

/// Wiring fixed by `initialize`.
#[derive(Clone, Debug)]
pub struct Config {
    pub registry: Address,
    pub reward_token: Address,
    pub rewards_duration: u64,
}

// ── Instance storage ────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn set_config(env: &Env, config: &Config) {
    let instance = env.storage().instance();
    instance.set(&REGISTRY, &config.registry);
    instance.set(&REWARD_TOKEN, &config.reward_token);
    instance.set(&DURATION, &config.rewards_duration);
    instance.set(&INITIALIZED, &true);
    ttl::extend_instance(env);
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    let instance = env.storage().instance();
    let registry = instance
        .get(&REGISTRY)
        .ok_or(ContractError::NotInitialized)?;
    let reward_token = instance
        .get(&REWARD_TOKEN)
        .ok_or(ContractError::NotInitialized)?;
    let rewards_duration = instance
        .get(&DURATION)
        .ok_or(ContractError::NotInitialized)?;
    Ok(Config {
        registry,
        reward_token,
        rewards_duration,
    })
}

/// The accumulator; all-zero until the first mutation is stored.
pub fn get_state(env: &Env) -> RewardState {
    env.storage()
        .instance()
        .get(&STATE)
        .unwrap_or_else(|| RewardState::new(env))
}

pub fn set_state(env: &Env, state: &RewardState) {
    env.storage().instance().set(&STATE, state);
    ttl::extend_instance(env);
}

// ── Persistent storage ──────────────────────────────────────────────────────

fn account_key(staker: &Address) -> (Symbol, Address) {
    (ACCOUNT, staker.clone())
}

/// `None` until the staker's first stake.
pub fn get_account(env: &Env, staker: &Address) -> Option<StakerAccount> {
    let key = account_key(staker);
    let account: Option<StakerAccount> = env.storage().persistent().get(&key);
    if account.is_some() {
        ttl::extend_persistent(env, &key);
    }
    account
}

pub fn set_account(env: &Env, staker: &Address, account: &StakerAccount) {
    let key = account_key(staker);
    env.storage().persistent().set(&key, account);
    ttl::extend_persistent(env, &key);
}

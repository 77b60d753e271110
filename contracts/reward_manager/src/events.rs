use soroban_sdk::{contracttype, symbol_short, Address, Env};

// ── Payloads ────────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub registry: Address,
    pub reward_token: Address,
    pub rewards_duration: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardAddedEvent {
    pub funder: Address,
    pub amount: i128,
    /// Per-second emission scaled by `RATE_SCALE`.
    pub reward_rate: i128,
    pub period_finish: u64,
}

/// Stake movement. `position` is the caller's deposit tag, carried through
/// untouched.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeChangedEvent {
    pub staker: Address,
    pub amount: i128,
    pub position: u64,
    pub balance: i128,
    pub total_supply: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub staker: Address,
    pub reward: i128,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    registry: Address,
    reward_token: Address,
    rewards_duration: u64,
) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        registry,
        reward_token,
        rewards_duration,
    };
    env.events().publish(topics, data);
}

pub fn publish_reward_added(
    env: &Env,
    funder: Address,
    amount: i128,
    reward_rate: i128,
    period_finish: u64,
) {
    let topics = (symbol_short!("RWD_ADD"), funder.clone());
    let data = RewardAddedEvent {
        funder,
        amount,
        reward_rate,
        period_finish,
    };
    env.events().publish(topics, data);
}

pub fn publish_staked(
    env: &Env,
    staker: Address,
    amount: i128,
    position: u64,
    balance: i128,
    total_supply: i128,
) {
    let topics = (symbol_short!("STAKED"), staker.clone());
    let data = StakeChangedEvent {
        staker,
        amount,
        position,
        balance,
        total_supply,
    };
    env.events().publish(topics, data);
}

pub fn publish_withdrawn(
    env: &Env,
    staker: Address,
    amount: i128,
    position: u64,
    balance: i128,
    total_supply: i128,
) {
    let topics = (symbol_short!("WITHDRAWN"), staker.clone());
    let data = StakeChangedEvent {
        staker,
        amount,
        position,
        balance,
        total_supply,
    };
    env.events().publish(topics, data);
}

pub fn publish_reward_paid(env: &Env, staker: Address, reward: i128) {
    let topics = (symbol_short!("RWD_PAID"), staker.clone());
    env.events()
        .publish(topics, RewardPaidEvent { staker, reward });
}

#![no_main]

use arbitrary::Arbitrary;
use common::roles;
use libfuzzer_sys::fuzz_target;
use module_registry::{ModuleRegistryContract, ModuleRegistryContractClient};
use reward_manager::{RewardManagerContract, RewardManagerContractClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

#[derive(Arbitrary, Debug)]
enum Action {
    Stake { who: u8, amount: i64 },
    Withdraw { who: u8, amount: i64 },
    Claim { who: u8 },
    Fund { amount: u32 },
    Wait { seconds: u32 },
}

#[derive(Arbitrary, Debug)]
struct Input {
    actions: Vec<Action>,
}

fuzz_target!(|input: Input| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_700_000_000);

    let owner = Address::generate(&env);
    let registry_id = env.register(ModuleRegistryContract, ());
    let registry = ModuleRegistryContractClient::new(&env, &registry_id);
    registry.initialize(&owner);

    let sac = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let token = TokenClient::new(&env, &sac.address());
    let token_admin = StellarAssetClient::new(&env, &sac.address());

    let manager_id = env.register(RewardManagerContract, ());
    let manager = RewardManagerContractClient::new(&env, &manager_id);
    manager.initialize(&registry_id, &sac.address(), &604_800);

    let stake_manager = Address::generate(&env);
    let funder = Address::generate(&env);
    registry.register_module(&owner, &roles::STAKE, &stake_manager);
    registry.register_module(&owner, &roles::BALANCE, &funder);

    let stakers = [Address::generate(&env), Address::generate(&env)];
    let mut funded: i128 = 0;
    let mut paid: i128 = 0;

    for action in input.actions.iter().take(32) {
        match *action {
            Action::Stake { who, amount } => {
                let staker = &stakers[who as usize % stakers.len()];
                let amount = amount as i128;
                let result = manager.try_stake(&stake_manager, staker, &amount, &0);
                if amount > 0 {
                    assert!(result.is_ok());
                } else {
                    assert!(result.is_err());
                }
            }
            Action::Withdraw { who, amount } => {
                let staker = &stakers[who as usize % stakers.len()];
                let amount = amount as i128;
                let balance = manager.balance_of(staker);
                let result = manager.try_withdraw(&stake_manager, staker, &amount, &0);
                if amount > 0 && amount <= balance {
                    assert!(result.is_ok());
                } else {
                    assert!(result.is_err());
                }
            }
            Action::Claim { who } => {
                let staker = &stakers[who as usize % stakers.len()];
                let owed = manager.earned(staker);
                let reward = manager.get_reward(staker);
                assert_eq!(reward, owed);
                paid += reward;
            }
            Action::Fund { amount } => {
                let amount = amount as i128 + 1;
                let live_until = env.ledger().sequence() + 1_000;
                token_admin.mint(&funder, &amount);
                token.approve(&funder, &manager_id, &amount, &live_until);
                manager.notify_reward_amount(&funder, &amount);
                funded += amount;
            }
            Action::Wait { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + seconds as u64);
            }
        }

        let balances: i128 = stakers.iter().map(|s| manager.balance_of(s)).sum();
        assert_eq!(manager.total_supply(), balances);
        assert_eq!(token.balance(&manager_id) + paid, funded);
    }
});

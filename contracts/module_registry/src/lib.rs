#![no_std]

pub mod events;

use common::ttl;
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

/// Storage keys
const OWNER: Symbol = symbol_short!("OWNER");
const INITIALIZED: Symbol = symbol_short!("INIT");
const MODULE: Symbol = symbol_short!("MODULE");

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
}

/// Name → address directory for the protocol's modules.
///
/// Other contracts resolve roles such as `STAKE` or `BALANCE` through
/// `get_module` (see `common::roles::RoleResolver`).
#[contract]
pub struct ModuleRegistryContract;

#[contractimpl]
impl ModuleRegistryContract {
    /// Initialize the registry with its owner
    pub fn initialize(env: Env, owner: Address) -> Result<(), RegistryError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(RegistryError::AlreadyInitialized);
        }

        env.storage().instance().set(&OWNER, &owner);
        env.storage().instance().set(&INITIALIZED, &true);
        ttl::extend_instance(&env);

        events::publish_initialized(&env, owner);

        Ok(())
    }

    /// Register (or replace) the module stored under `name`. Owner only.
    pub fn register_module(
        env: Env,
        caller: Address,
        name: Symbol,
        module: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        let owner = Self::get_owner(env.clone())?;
        if caller != owner {
            return Err(RegistryError::Unauthorized);
        }

        let key = (MODULE, name.clone());
        env.storage().persistent().set(&key, &module);
        ttl::extend_persistent(&env, &key);
        ttl::extend_instance(&env);

        events::publish_module_registered(&env, name, module);

        Ok(())
    }

    /// Address registered under `name`, if any
    pub fn get_module(env: Env, name: Symbol) -> Option<Address> {
        let key = (MODULE, name);
        let module: Option<Address> = env.storage().persistent().get(&key);
        if module.is_some() {
            ttl::extend_persistent(&env, &key);
        }
        module
    }

    pub fn get_owner(env: Env) -> Result<Address, RegistryError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(RegistryError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }
}

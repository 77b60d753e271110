use soroban_sdk::{contractclient, symbol_short, Address, Env, Symbol};

/// Role allowed to move stake in and out of the reward manager.
pub const STAKE: Symbol = symbol_short!("STAKE");

/// Role allowed to fund reward periods.
pub const BALANCE: Symbol = symbol_short!("BALANCE");

/// The reward manager's own registration.
pub const REWARD: Symbol = symbol_short!("REWARD");

/// Resolves a role name to the address currently holding it.
///
/// Any contract exposing a matching `get_module` entrypoint can be wired in
/// as the resolver, which keeps the access-control collaborator swappable.
#[contractclient(name = "RoleResolverClient")]
pub trait RoleResolver {
    /// Returns `None` when nothing is registered under `name`.
    fn get_module(env: Env, name: Symbol) -> Option<Address>;
}

/// True when `caller` is the address registered for `role` on `resolver`.
pub fn holds_role(env: &Env, resolver: &Address, role: &Symbol, caller: &Address) -> bool {
    match RoleResolverClient::new(env, resolver).get_module(role) {
        Some(module) => module == *caller,
        None => false,
    }
}

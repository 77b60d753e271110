use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleRegisteredEvent {
    pub name: Symbol,
    pub module: Address,
}

pub fn publish_initialized(env: &Env, owner: Address) {
    let topics = (symbol_short!("INIT"),);
    env.events().publish(topics, InitializedEvent { owner });
}

pub fn publish_module_registered(env: &Env, name: Symbol, module: Address) {
    let topics = (symbol_short!("MOD_REG"), name.clone());
    env.events()
        .publish(topics, ModuleRegisteredEvent { name, module });
}

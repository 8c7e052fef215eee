//! Stand-in contracts for the ledger's external collaborators.

pub mod price_feed {
    use soroban_sdk::{contract, contractimpl, contracttype, Env};

    use crate::oracle::PriceData;

    #[contracttype]
    #[derive(Clone)]
    enum FeedKey {
        Price,
        Decimals,
        Halted,
    }

    /// Configurable price feed. A halted feed panics on every read.
    #[contract]
    pub struct MockPriceFeed;

    #[contractimpl]
    impl MockPriceFeed {
        pub fn set_price(env: Env, price: i128, decimals: u32) {
            env.storage().instance().set(&FeedKey::Price, &price);
            env.storage().instance().set(&FeedKey::Decimals, &decimals);
        }

        pub fn clear_price(env: Env) {
            env.storage().instance().remove(&FeedKey::Price);
        }

        pub fn set_halted(env: Env, halted: bool) {
            env.storage().instance().set(&FeedKey::Halted, &halted);
        }

        pub fn decimals(env: Env) -> u32 {
            Self::check_running(&env);
            env.storage()
                .instance()
                .get(&FeedKey::Decimals)
                .unwrap_or(8)
        }

        pub fn latest_price(env: Env) -> Option<PriceData> {
            Self::check_running(&env);
            let price: Option<i128> = env.storage().instance().get(&FeedKey::Price);
            price.map(|price| PriceData {
                price,
                timestamp: env.ledger().timestamp(),
            })
        }
    }

    impl MockPriceFeed {
        fn check_running(env: &Env) {
            let halted: bool = env
                .storage()
                .instance()
                .get(&FeedKey::Halted)
                .unwrap_or(false);
            if halted {
                panic!("price feed halted");
            }
        }
    }
}

pub mod token {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    #[contracttype]
    #[derive(Clone)]
    enum TokenKey {
        Balance(Address),
        RejectTo(Address),
    }

    /// Minimal token that can be told to reject transfers to one recipient.
    #[contract]
    pub struct RejectingToken;

    #[contractimpl]
    impl RejectingToken {
        pub fn mint(env: Env, to: Address, amount: i128) {
            let balance = Self::balance(env.clone(), to.clone());
            env.storage()
                .instance()
                .set(&TokenKey::Balance(to), &(balance + amount));
        }

        pub fn reject_transfers_to(env: Env, recipient: Address, reject: bool) {
            env.storage()
                .instance()
                .set(&TokenKey::RejectTo(recipient), &reject);
        }

        pub fn decimals(_env: Env) -> u32 {
            7
        }

        pub fn balance(env: Env, id: Address) -> i128 {
            env.storage()
                .instance()
                .get(&TokenKey::Balance(id))
                .unwrap_or(0)
        }

        pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
            from.require_auth();
            let rejected: bool = env
                .storage()
                .instance()
                .get(&TokenKey::RejectTo(to.clone()))
                .unwrap_or(false);
            if rejected {
                panic!("transfer rejected by recipient");
            }

            let from_balance = Self::balance(env.clone(), from.clone());
            if from_balance < amount {
                panic!("insufficient balance");
            }
            let to_balance = Self::balance(env.clone(), to.clone());
            env.storage()
                .instance()
                .set(&TokenKey::Balance(from), &(from_balance - amount));
            env.storage()
                .instance()
                .set(&TokenKey::Balance(to), &(to_balance + amount));
        }
    }
}

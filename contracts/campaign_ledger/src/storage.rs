//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the ledger:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type           | Description                          |
//! |------------------|----------------|--------------------------------------|
//! | `Config`         | `LedgerConfig` | Owner, native token, price feed      |
//! | `CampaignCount`  | `u64`          | Number of successful creations       |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                       | Type            | Description                   |
//! |---------------------------|-----------------|-------------------------------|
//! | `CampaignInfo(id)`        | `CampaignInfo`  | Creation-time fields          |
//! | `CampaignState(id)`       | `CampaignState` | Running donated total         |
//! | `Contribution(id, addr)`  | `i128`          | Contributor's recorded amount |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Contributions are keyed independently of the campaign entries. Re-creating
//! a campaign under the same identifier rewrites `CampaignInfo` and
//! `CampaignState` but leaves every `Contribution` entry in place.

use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::types::{Campaign, CampaignInfo, CampaignState, LedgerConfig};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable ledger configuration (Instance).
    Config,
    /// Informational creation counter (Instance).
    CampaignCount,
    /// Creation-time campaign fields keyed by ID (Persistent).
    CampaignInfo(BytesN<32>),
    /// Mutable campaign totals keyed by ID (Persistent).
    CampaignState(BytesN<32>),
    /// Per-contributor amount keyed by (campaign ID, contributor) (Persistent).
    Contribution(BytesN<32>, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Returns `None` before `init` has run.
pub fn load_config(env: &Env) -> Option<LedgerConfig> {
    let config = env.storage().instance().get(&DataKey::Config);
    if config.is_some() {
        bump_instance(env);
    }
    config
}

/// Reads, increments, and stores the creation counter.
/// Returns the post-increment value.
pub fn increment_campaign_count(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0);
    let next = current.saturating_add(1);
    env.storage().instance().set(&DataKey::CampaignCount, &next);
    next
}

pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Insert-or-overwrite both campaign entries. Contribution entries under the
/// same identifier are left untouched.
pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let info_key = DataKey::CampaignInfo(campaign.id.clone());
    let state_key = DataKey::CampaignState(campaign.id.clone());

    let info = CampaignInfo {
        title: campaign.title.clone(),
        description: campaign.description.clone(),
        target_amount: campaign.target_amount,
        deadline: campaign.deadline,
    };

    let state = CampaignState {
        current_amount: campaign.current_amount,
    };

    env.storage().persistent().set(&info_key, &info);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &info_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Campaign` by combining info and state.
pub fn load_campaign(env: &Env, id: &BytesN<32>) -> Option<Campaign> {
    let info_key = DataKey::CampaignInfo(id.clone());
    let info: CampaignInfo = env.storage().persistent().get(&info_key)?;
    bump_persistent(env, &info_key);

    let state = load_campaign_state(env, id);
    Some(Campaign {
        id: id.clone(),
        title: info.title,
        description: info.description,
        target_amount: info.target_amount,
        current_amount: state.current_amount,
        deadline: info.deadline,
    })
}

fn load_campaign_state(env: &Env, id: &BytesN<32>) -> CampaignState {
    let key = DataKey::CampaignState(id.clone());
    match env.storage().persistent().get(&key) {
        Some(state) => {
            bump_persistent(env, &key);
            state
        }
        None => CampaignState { current_amount: 0 },
    }
}

/// Save only the mutable campaign state (the donation hot path).
pub fn save_campaign_state(env: &Env, id: &BytesN<32>, state: &CampaignState) {
    let key = DataKey::CampaignState(id.clone());
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// A contributor's recorded amount, `0` if they never donated.
pub fn load_contribution(env: &Env, id: &BytesN<32>, contributor: &Address) -> i128 {
    let key = DataKey::Contribution(id.clone(), contributor.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn save_contribution(env: &Env, id: &BytesN<32>, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(id.clone(), contributor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

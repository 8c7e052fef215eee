//! # Types
//!
//! Shared data structures used across all modules of the campaign ledger.
//!
//! ## Design decisions
//!
//! ### Info / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignInfo`] — written at creation (and overwritten when a creation
//!   collides on the same identifier).
//! - [`CampaignState`] — written on every donation.
//!
//! Per-contributor amounts live under their own keys, so neither entry
//! carries the contribution sub-ledger. The public API exposes the
//! reconstructed [`Campaign`] struct.
//!
//! ### Lifecycle
//!
//! A campaign has no stored status; it is derived from time and totals:
//!
//! ```text
//! Open ──(current >= target)──► Funded
//!   └───(now > deadline, current < target)──► Failed (refundable)
//! ```

use soroban_sdk::{contracttype, Address, BytesN, Env, String};

/// Immutable ledger configuration, written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Single administrative identity allowed to create campaigns.
    pub owner: Address,
    /// Token contract of the native currency donations are made in.
    pub native_token: Address,
    /// Decimal places of `native_token`, read at init.
    pub native_decimals: u32,
    /// External price feed quoting the native currency in USD.
    pub price_feed: Address,
}

/// Campaign fields set at creation time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignInfo {
    pub title: String,
    pub description: String,
    pub target_amount: i128,
    pub deadline: u64,
}

/// Mutable campaign state, updated on donations.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    pub current_amount: i128,
}

/// Full representation of a funding campaign.
///
/// Used as the public API return type; reconstructed internally from
/// the split `CampaignInfo` + `CampaignState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Hash-derived identifier, see [`crate::id::compute_id`].
    pub id: BytesN<32>,
    pub title: String,
    pub description: String,
    /// Funding goal in the native token's smallest unit.
    pub target_amount: i128,
    /// Cumulative funds donated (not decremented by refunds).
    pub current_amount: i128,
    /// Ledger timestamp after which the campaign stops accepting donations.
    pub deadline: u64,
}

impl Campaign {
    /// Zero-valued record returned by queries for an unknown identifier.
    pub fn empty(env: &Env, id: BytesN<32>) -> Self {
        Campaign {
            id,
            title: String::from_str(env, ""),
            description: String::from_str(env, ""),
            target_amount: 0,
            current_amount: 0,
            deadline: 0,
        }
    }

    /// `true` while the campaign accepts donations at `now`.
    pub fn is_open(&self, now: u64) -> bool {
        self.current_amount < self.target_amount && now < self.deadline
    }
}

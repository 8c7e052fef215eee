//! # Campaign Ledger Contract
//!
//! A campaign-based funding ledger. The owner registers campaigns with a
//! target and a deadline, anyone may donate while a campaign is open, and
//! contributors reclaim their funds if the campaign misses its target.
//!
//! | Phase        | Entry Point(s)                                         |
//! |--------------|--------------------------------------------------------|
//! | Bootstrap    | [`CampaignLedger::init`]                               |
//! | Registration | [`CampaignLedger::create_campaign`]                    |
//! | Funding      | [`CampaignLedger::donate`]                             |
//! | Refunds      | [`CampaignLedger::refund`]                             |
//! | Queries      | `get_campaign_details`, `get_campaign_contributions`,  |
//! |              | `get_raised_amount_for_campaign`,                      |
//! |              | `get_campaign_availability`, `compute_campaign_id`, …  |
//!
//! ## Architecture
//!
//! Storage access is delegated to [`storage`], identifiers to [`id`], and
//! USD conversion to [`oracle`]. Every mutating entry point returns
//! `Result<_, Error>`; an `Err` aborts the invocation and the host discards
//! every storage write and event made before it.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, BytesN, Env, String};

pub mod events;
pub mod id;
pub mod oracle;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_mocks;

use storage::{
    campaign_count, has_config, increment_campaign_count, load_campaign, load_config,
    load_contribution, save_campaign, save_campaign_state, save_config, save_contribution,
};
pub use oracle::{PriceData, PriceFeed, PriceFeedClient, MINIMUM_USD};
pub use types::{Campaign, CampaignState, LedgerConfig};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AccessDenied = 3,
    InvalidDeadline = 4,
    InvalidAmount = 5,
    UnknownCampaign = 6,
    CampaignClosed = 7,
    AlreadyFunded = 8,
    InsufficientAmount = 9,
    CampaignStillActive = 10,
    CampaignFunded = 11,
    NoContribution = 12,
    TransferFailed = 13,
    OracleUnavailable = 14,
    InvalidPrice = 15,
    Overflow = 16,
}

#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the ledger with its owner, native token and price feed.
    ///
    /// Must be called exactly once immediately after deployment; none of the
    /// three addresses can be changed afterwards.
    pub fn init(
        env: Env,
        owner: Address,
        native_token: Address,
        price_feed: Address,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        let native_decimals = token::Client::new(&env, &native_token).decimals();
        save_config(
            &env,
            &LedgerConfig {
                owner,
                native_token,
                native_decimals,
                price_feed,
            },
        );
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────

    /// Create (or overwrite) the campaign identified by `(title, description)`.
    ///
    /// Only the owner may call this. A second creation with the same title and
    /// description resolves to the same identifier and overwrites the target,
    /// current amount and deadline in place. Recorded contributions under that
    /// identifier are kept and the creation counter still increments.
    pub fn create_campaign(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        target_amount: i128,
        current_amount: i128,
        deadline: u64,
    ) -> Result<BytesN<32>, Error> {
        let config = load_config(&env).ok_or(Error::NotInitialized)?;
        caller.require_auth();
        if caller != config.owner {
            return Err(Error::AccessDenied);
        }

        if deadline <= env.ledger().timestamp() {
            return Err(Error::InvalidDeadline);
        }
        if target_amount < 0 || current_amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let campaign_id = id::compute_id(&env, &title, &description);
        let campaign = Campaign {
            id: campaign_id.clone(),
            title,
            description,
            target_amount,
            current_amount,
            deadline,
        };

        save_campaign(&env, &campaign);
        increment_campaign_count(&env);

        events::emit_campaign_created(
            &env,
            events::CampaignCreated {
                campaign_id: campaign_id.clone(),
                title: campaign.title,
                description: campaign.description,
                target_amount,
                current_amount,
                deadline,
            },
        );
        Ok(campaign_id)
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Donate `amount` of the native token to an open campaign.
    ///
    /// The USD value of `amount` must be at least [`MINIMUM_USD`]. The raw
    /// native amount, not its USD value, is added to the campaign total and
    /// to the donor's recorded contribution.
    pub fn donate(
        env: Env,
        campaign_id: BytesN<32>,
        donor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let config = load_config(&env).ok_or(Error::NotInitialized)?;
        donor.require_auth();

        let campaign = load_campaign(&env, &campaign_id).ok_or(Error::UnknownCampaign)?;
        if env.ledger().timestamp() >= campaign.deadline {
            return Err(Error::CampaignClosed);
        }
        if campaign.current_amount >= campaign.target_amount {
            return Err(Error::AlreadyFunded);
        }
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let usd_value = oracle::convert(&env, &config, amount)?;
        if usd_value < MINIMUM_USD {
            return Err(Error::InsufficientAmount);
        }

        let current_amount = campaign
            .current_amount
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let contribution = load_contribution(&env, &campaign_id, &donor)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        // Pull the donation into the ledger's custody.
        let token_client = token::Client::new(&env, &config.native_token);
        if !matches!(
            token_client.try_transfer(&donor, &env.current_contract_address(), &amount),
            Ok(Ok(()))
        ) {
            return Err(Error::TransferFailed);
        }

        save_campaign_state(&env, &campaign_id, &CampaignState { current_amount });
        save_contribution(&env, &campaign_id, &donor, contribution);

        events::emit_donation_sent(&env, campaign_id, donor, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Refunds
    // ─────────────────────────────────────────────────────────

    /// Return `contributor`'s recorded contribution from a failed campaign.
    ///
    /// The campaign must be past its deadline and below target. The recorded
    /// entry is zeroed before the outbound transfer; a rejected transfer fails
    /// the whole call with `TransferFailed`, which restores the entry.
    /// The campaign's `current_amount` is left unchanged.
    pub fn refund(env: Env, campaign_id: BytesN<32>, contributor: Address) -> Result<i128, Error> {
        let config = load_config(&env).ok_or(Error::NotInitialized)?;
        contributor.require_auth();

        let campaign = load_campaign(&env, &campaign_id).ok_or(Error::UnknownCampaign)?;
        if env.ledger().timestamp() <= campaign.deadline {
            return Err(Error::CampaignStillActive);
        }
        if campaign.current_amount >= campaign.target_amount {
            return Err(Error::CampaignFunded);
        }

        let amount = load_contribution(&env, &campaign_id, &contributor);
        if amount == 0 {
            return Err(Error::NoContribution);
        }

        // Effects before interaction.
        save_contribution(&env, &campaign_id, &contributor, 0);

        let token_client = token::Client::new(&env, &config.native_token);
        if !matches!(
            token_client.try_transfer(&env.current_contract_address(), &contributor, &amount),
            Ok(Ok(()))
        ) {
            return Err(Error::TransferFailed);
        }

        events::emit_refunded(&env, campaign_id, contributor, amount);
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Campaign details, or a zero-valued record for an unknown identifier.
    pub fn get_campaign_details(env: Env, campaign_id: BytesN<32>) -> Campaign {
        load_campaign(&env, &campaign_id)
            .unwrap_or_else(|| Campaign::empty(&env, campaign_id))
    }

    /// Recorded contribution of `contributor` to a campaign.
    pub fn get_campaign_contributions(
        env: Env,
        campaign_id: BytesN<32>,
        contributor: Address,
    ) -> i128 {
        load_contribution(&env, &campaign_id, &contributor)
    }

    pub fn get_raised_amount_for_campaign(env: Env, campaign_id: BytesN<32>) -> i128 {
        load_campaign(&env, &campaign_id)
            .map(|campaign| campaign.current_amount)
            .unwrap_or(0)
    }

    /// `true` while the campaign is below target and before its deadline.
    pub fn get_campaign_availability(env: Env, campaign_id: BytesN<32>) -> bool {
        let now = env.ledger().timestamp();
        load_campaign(&env, &campaign_id)
            .map(|campaign| campaign.is_open(now))
            .unwrap_or(false)
    }

    /// Identifier a campaign with this title and description would get.
    pub fn compute_campaign_id(env: Env, title: String, description: String) -> BytesN<32> {
        id::compute_id(&env, &title, &description)
    }

    /// Number of successful `create_campaign` calls, collisions included.
    pub fn number_of_campaigns(env: Env) -> u64 {
        campaign_count(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        load_config(&env)
            .map(|config| config.owner)
            .ok_or(Error::NotInitialized)
    }

    pub fn native_token(env: Env) -> Result<Address, Error> {
        load_config(&env)
            .map(|config| config.native_token)
            .ok_or(Error::NotInitialized)
    }

    pub fn price_feed(env: Env) -> Result<Address, Error> {
        load_config(&env)
            .map(|config| config.price_feed)
            .ok_or(Error::NotInitialized)
    }

    pub fn minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }

    /// USD value (18 decimals) of `amount` native units at the current price.
    pub fn get_usd_value(env: Env, amount: i128) -> Result<i128, Error> {
        let config = load_config(&env).ok_or(Error::NotInitialized)?;
        oracle::convert(&env, &config, amount)
    }
}

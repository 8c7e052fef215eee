//! Events published by the campaign ledger.
//!
//! Every event is published under the topic `(symbol, campaign_id)` with one
//! of the structs below as its data. Together they form the audit trail that
//! the off-chain indexer reconstructs.
//!
//! | Topic       | Data              |
//! |-------------|-------------------|
//! | `created`   | [`CampaignCreated`] |
//! | `donated`   | [`DonationSent`]    |
//! | `refunded`  | [`Refunded`]        |

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: BytesN<32>,
    pub title: String,
    pub description: String,
    pub target_amount: i128,
    pub current_amount: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationSent {
    pub campaign_id: BytesN<32>,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refunded {
    pub campaign_id: BytesN<32>,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreated) {
    let topics = (symbol_short!("created"), event.campaign_id.clone());
    env.events().publish(topics, event);
}

pub fn emit_donation_sent(env: &Env, campaign_id: BytesN<32>, donor: Address, amount: i128) {
    let topics = (symbol_short!("donated"), campaign_id.clone());
    env.events().publish(
        topics,
        DonationSent {
            campaign_id,
            donor,
            amount,
        },
    );
}

pub fn emit_refunded(env: &Env, campaign_id: BytesN<32>, contributor: Address, amount: i128) {
    let topics = (symbol_short!("refunded"), campaign_id.clone());
    env.events().publish(
        topics,
        Refunded {
            campaign_id,
            contributor,
            amount,
        },
    );
}

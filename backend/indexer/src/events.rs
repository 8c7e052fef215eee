//! Canonical event types emitted by the campaign ledger contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/campaign_ledger/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the campaign ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A campaign was created or overwritten (`created` topic).
    CampaignCreated,
    /// A donation was accepted (`donated` topic).
    DonationSent,
    /// A contributor reclaimed their contribution (`refunded` topic).
    Refunded,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::CampaignCreated,
            "donated" => Self::DonationSent,
            "refunded" => Self::Refunded,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignCreated => "campaign_created",
            Self::DonationSent => "donation_sent",
            Self::Refunded => "refunded",
            Self::Unknown => "unknown",
        }
    }

    /// Inverse of [`EventKind::as_str`].
    pub fn from_stored(stored: &str) -> Self {
        match stored {
            "campaign_created" => Self::CampaignCreated,
            "donation_sent" => Self::DonationSent,
            "refunded" => Self::Refunded,
            _ => Self::Unknown,
        }
    }
}

/// A fully decoded ledger event, ready to be stored in the database.
///
/// `rpc_id` is the RPC's event id and identifies the event on-chain.
/// `campaign_id` is the hex-encoded 32-byte identifier. `actor` is the donor
/// or contributor, absent for creations. `amount` is the donated or refunded
/// amount, or the target amount for creations, kept as a decimal string since
/// it is an `i128` on-chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEvent {
    pub rpc_id: String,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub rpc_id: String,
    pub event_type: String,
    pub campaign_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

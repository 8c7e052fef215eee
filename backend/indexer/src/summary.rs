//! Per-campaign totals rebuilt from the indexed audit trail.
//!
//! Replays a campaign's events in ledger order with the same accounting the
//! contract applies: donations add to the donor's entry, a refund clears the
//! contributor's entry entirely, and re-creating a campaign under the same
//! identifier does not reset existing entries.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::errors::{IndexerError, Result};
use crate::events::{EventKind, EventRecord};

/// Amounts are `i128` on-chain and are serialised as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignSummary {
    pub campaign_id: String,
    /// Target from the most recent `created` event, if one was indexed.
    pub target_amount: Option<String>,
    pub total_donated: String,
    pub total_refunded: String,
    pub donor_count: usize,
    pub refund_count: usize,
    /// Contributors with a non-zero recorded contribution.
    pub outstanding: BTreeMap<String, String>,
}

pub fn summarize(campaign_id: &str, records: &[EventRecord]) -> Result<CampaignSummary> {
    let mut target_amount = None;
    let mut total_donated: i128 = 0;
    let mut total_refunded: i128 = 0;
    let mut refund_count = 0usize;
    let mut donors = BTreeSet::new();
    let mut outstanding: BTreeMap<String, i128> = BTreeMap::new();

    for record in records {
        match EventKind::from_stored(&record.event_type) {
            EventKind::CampaignCreated => {
                if record.amount.is_some() {
                    target_amount = Some(parse_amount(record)?.to_string());
                }
            }
            EventKind::DonationSent => {
                let amount = parse_amount(record)?;
                total_donated = total_donated.saturating_add(amount);
                if let Some(actor) = &record.actor {
                    donors.insert(actor.clone());
                    let entry = outstanding.entry(actor.clone()).or_insert(0);
                    *entry = entry.saturating_add(amount);
                }
            }
            EventKind::Refunded => {
                total_refunded = total_refunded.saturating_add(parse_amount(record)?);
                refund_count += 1;
                if let Some(actor) = &record.actor {
                    outstanding.remove(actor);
                }
            }
            EventKind::Unknown => {}
        }
    }

    Ok(CampaignSummary {
        campaign_id: campaign_id.to_string(),
        target_amount,
        total_donated: total_donated.to_string(),
        total_refunded: total_refunded.to_string(),
        donor_count: donors.len(),
        refund_count,
        outstanding: outstanding
            .into_iter()
            .filter(|(_, amount)| *amount != 0)
            .map(|(actor, amount)| (actor, amount.to_string()))
            .collect(),
    })
}

fn parse_amount(record: &EventRecord) -> Result<i128> {
    let raw = record.amount.as_deref().ok_or(IndexerError::MissingAmount {
        event_id: record.id,
    })?;
    raw.parse().map_err(|_| IndexerError::InvalidAmount {
        event_id: record.id,
        amount: raw.to_string(),
    })
}

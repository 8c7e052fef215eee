#![allow(dead_code)]

extern crate std;

use crate::types::Campaign;

/// Campaign amounts must never be negative.
pub fn assert_amounts_non_negative(campaign: &Campaign) {
    assert!(
        campaign.target_amount >= 0,
        "campaign has negative target ({})",
        campaign.target_amount
    );
    assert!(
        campaign.current_amount >= 0,
        "campaign has negative raised amount ({})",
        campaign.current_amount
    );
}

/// A stored campaign always has a deadline set.
pub fn assert_deadline_positive(campaign: &Campaign) {
    assert!(campaign.deadline > 0, "campaign has zero deadline");
}

/// After a donation of `amount`, a balance increases by exactly `amount`.
pub fn assert_donation_invariant(balance_before: i128, balance_after: i128, amount: i128) {
    assert_eq!(
        balance_after,
        balance_before + amount,
        "donation invariant broken: {} + {} != {}",
        balance_before,
        amount,
        balance_after
    );
}

/// The raised amount only moves through donations, so it never decreases.
pub fn assert_raised_monotonic(raised_before: i128, raised_after: i128) {
    assert!(
        raised_after >= raised_before,
        "raised amount decreased from {} to {}",
        raised_before,
        raised_after
    );
}

/// Donations and refunds never touch the fields set at creation.
pub fn assert_creation_fields_unchanged(original: &Campaign, current: &Campaign) {
    assert_eq!(original.id, current.id, "campaign id changed");
    assert_eq!(original.title, current.title, "campaign title changed");
    assert_eq!(
        original.description, current.description,
        "campaign description changed"
    );
    assert_eq!(
        original.target_amount, current.target_amount,
        "campaign target changed"
    );
    assert_eq!(
        original.deadline, current.deadline,
        "campaign deadline changed"
    );
}

/// The availability query agrees with the donation window rules.
pub fn assert_availability_consistent(campaign: &Campaign, now: u64, available: bool) {
    let expected = campaign.current_amount < campaign.target_amount && now < campaign.deadline;
    assert_eq!(
        available, expected,
        "availability {} disagrees with rules at t={}",
        available, now
    );
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_amounts_non_negative(campaign);
    assert_deadline_positive(campaign);
}

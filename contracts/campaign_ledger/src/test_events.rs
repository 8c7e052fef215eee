extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, Address, BytesN, Env, String, Symbol, TryIntoVal, Val, Vec,
};

use crate::events::{CampaignCreated, DonationSent, Refunded};
use crate::test_mocks::price_feed::{MockPriceFeed, MockPriceFeedClient};
use crate::{CampaignLedger, CampaignLedgerClient};

fn setup() -> (Env, CampaignLedgerClient<'static>, Address, token::StellarAssetClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000);

    let owner = Address::generate(&env);
    let issuer = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(issuer);
    let token_sac = token::StellarAssetClient::new(&env, &sac.address());

    let feed_id = env.register(MockPriceFeed, ());
    // One stroop is worth $1.
    MockPriceFeedClient::new(&env, &feed_id).set_price(&1_000_000_000_000_000, &8);

    let contract_id = env.register(CampaignLedger, ());
    let client = CampaignLedgerClient::new(&env, &contract_id);
    client.init(&owner, &sac.address(), &feed_id);
    (env, client, owner, token_sac)
}

/// Decode `(symbol, campaign_id)` from an event's topic list.
fn decode_topics(env: &Env, topics: &Vec<Val>) -> (Symbol, BytesN<32>) {
    assert_eq!(topics.len(), 2);
    let symbol: Symbol = topics.get(0).unwrap().try_into_val(env).unwrap();
    let id: BytesN<32> = topics.get(1).unwrap().try_into_val(env).unwrap();
    (symbol, id)
}

#[test]
fn test_campaign_created_event() {
    let (env, client, owner, _) = setup();
    let title = String::from_str(&env, "Library");
    let description = String::from_str(&env, "Books for the district");

    let id = client.create_campaign(&owner, &title, &description, &5_000, &0, &2_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.0, client.address);

    let (symbol, topic_id) = decode_topics(&env, &last_event.1);
    assert_eq!(symbol, symbol_short!("created"));
    assert_eq!(topic_id, id);

    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id: id,
            title,
            description,
            target_amount: 5_000,
            current_amount: 0,
            deadline: 2_000,
        }
    );
}

#[test]
fn test_donation_sent_event() {
    let (env, client, owner, token_sac) = setup();
    let donor = Address::generate(&env);
    token_sac.mint(&donor, &100);

    let id = client.create_campaign(
        &owner,
        &String::from_str(&env, "Park"),
        &String::from_str(&env, "Benches"),
        &1_000,
        &0,
        &2_000,
    );
    client.donate(&id, &donor, &75);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.0, client.address);

    let (symbol, topic_id) = decode_topics(&env, &last_event.1);
    assert_eq!(symbol, symbol_short!("donated"));
    assert_eq!(topic_id, id);

    let event_data: DonationSent = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonationSent {
            campaign_id: id,
            donor,
            amount: 75,
        }
    );
}

#[test]
fn test_refunded_event() {
    let (env, client, owner, token_sac) = setup();
    let donor = Address::generate(&env);
    token_sac.mint(&donor, &100);

    let id = client.create_campaign(
        &owner,
        &String::from_str(&env, "Bridge"),
        &String::from_str(&env, "Footbridge repair"),
        &1_000,
        &0,
        &2_000,
    );
    client.donate(&id, &donor, &40);

    env.ledger().set_timestamp(3_000);
    client.refund(&id, &donor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.0, client.address);

    let (symbol, topic_id) = decode_topics(&env, &last_event.1);
    assert_eq!(symbol, symbol_short!("refunded"));
    assert_eq!(topic_id, id);

    let event_data: Refunded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Refunded {
            campaign_id: id,
            contributor: donor,
            amount: 40,
        }
    );
}

#[test]
fn test_failed_donation_emits_nothing() {
    let (env, client, owner, token_sac) = setup();
    let donor = Address::generate(&env);
    token_sac.mint(&donor, &100);

    let id = client.create_campaign(
        &owner,
        &String::from_str(&env, "Closed"),
        &String::from_str(&env, "Already over"),
        &1_000,
        &0,
        &2_000,
    );

    env.ledger().set_timestamp(2_500);
    assert!(client.try_donate(&id, &donor, &50).is_err());

    let donated = env.events().all().iter().any(|(_, topics, _)| {
        let symbol: Symbol = topics.get(0).unwrap().try_into_val(&env).unwrap();
        symbol == symbol_short!("donated")
    });
    assert!(!donated);
}

use multi_choice_governance::{allocation::allocate, errors::GovernanceError};
use multiversx_sc::types::{BigUint, ManagedAddress, ManagedVec};
use multiversx_sc_scenario::api::StaticApi;

fn votes(values: &[u64]) -> ManagedVec<StaticApi, BigUint<StaticApi>> {
    let mut result = ManagedVec::new();
    for value in values {
        result.push(BigUint::from(*value));
    }
    result
}

fn address(seed: u8) -> ManagedAddress<StaticApi> {
    ManagedAddress::new_from_bytes(&[seed; 32])
}

fn recipients(seeds: &[u8]) -> ManagedVec<StaticApi, ManagedAddress<StaticApi>> {
    let mut result = ManagedVec::new();
    for seed in seeds {
        let recipient = if *seed == 0 {
            ManagedAddress::zero()
        } else {
            address(*seed)
        };
        result.push(recipient);
    }
    result
}

fn winners_of(
    winners: &ManagedVec<StaticApi, ManagedAddress<StaticApi>>,
) -> Vec<ManagedAddress<StaticApi>> {
    winners.iter().map(|winner| (*winner).clone()).collect()
}

#[test]
fn top_n_winners_share_balance() {
    let plan = allocate(
        &votes(&[100, 300, 200]),
        2,
        &recipients(&[1, 2, 3]),
        &BigUint::from(1_000u64),
    )
    .unwrap();

    assert_eq!(winners_of(&plan.winners), vec![address(2), address(3)]);
    assert_eq!(plan.amount_per_recipient, BigUint::from(500u64));
}

#[test]
fn ties_at_threshold_expand_winners() {
    let plan = allocate(
        &votes(&[500, 400, 400]),
        2,
        &recipients(&[1, 2, 3]),
        &BigUint::from(900u64),
    )
    .unwrap();

    assert_eq!(
        winners_of(&plan.winners),
        vec![address(1), address(2), address(3)]
    );
    assert_eq!(plan.amount_per_recipient, BigUint::from(300u64));
}

#[test]
fn tied_options_keep_index_order() {
    let plan = allocate(
        &votes(&[10, 50, 10, 50]),
        2,
        &recipients(&[1, 2, 3, 4]),
        &BigUint::from(10u64),
    )
    .unwrap();

    assert_eq!(winners_of(&plan.winners), vec![address(2), address(4)]);
}

#[test]
fn remainder_stays_unspent() {
    let plan = allocate(
        &votes(&[10, 10, 10]),
        1,
        &recipients(&[1, 2, 3]),
        &BigUint::from(5u64),
    )
    .unwrap();

    assert_eq!(plan.winners.len(), 3);
    assert_eq!(plan.amount_per_recipient, BigUint::from(1u64));
    assert_eq!(plan.total_payout(), BigUint::from(3u64));
}

#[test]
fn balance_below_winner_count_gives_zero_amount() {
    let plan = allocate(
        &votes(&[7, 7]),
        2,
        &recipients(&[1, 2]),
        &BigUint::from(1u64),
    )
    .unwrap();

    assert_eq!(plan.winners.len(), 2);
    assert_eq!(plan.amount_per_recipient, BigUint::zero());
}

#[test]
fn zero_address_recipient_is_skipped() {
    let plan = allocate(
        &votes(&[60, 40, 0]),
        2,
        &recipients(&[0, 2, 3]),
        &BigUint::from(100u64),
    )
    .unwrap();

    assert_eq!(winners_of(&plan.winners), vec![address(2)]);
    assert_eq!(plan.amount_per_recipient, BigUint::from(100u64));
}

#[test]
fn only_zero_address_winners_fail() {
    let result = allocate(
        &votes(&[60, 40]),
        1,
        &recipients(&[0, 2]),
        &BigUint::from(100u64),
    );

    assert_eq!(result.err(), Some(GovernanceError::NoWinners));
}

#[test]
fn options_without_votes_never_win() {
    let plan = allocate(
        &votes(&[0, 25, 0]),
        3,
        &recipients(&[1, 2, 3]),
        &BigUint::from(100u64),
    )
    .unwrap();
    assert_eq!(winners_of(&plan.winners), vec![address(2)]);

    let result = allocate(
        &votes(&[0, 0, 0]),
        2,
        &recipients(&[1, 2, 3]),
        &BigUint::from(100u64),
    );
    assert_eq!(result.err(), Some(GovernanceError::NoWinners));
}

#[test]
fn duplicate_recipient_is_paid_per_option() {
    let plan = allocate(
        &votes(&[50, 30, 20]),
        2,
        &recipients(&[7, 7, 3]),
        &BigUint::from(1_000u64),
    )
    .unwrap();

    assert_eq!(winners_of(&plan.winners), vec![address(7), address(7)]);
    assert_eq!(plan.amount_per_recipient, BigUint::from(500u64));
    assert_eq!(plan.total_payout(), BigUint::from(1_000u64));
}

#[test]
fn recipient_count_must_match_options() {
    let result = allocate(
        &votes(&[1, 2, 3]),
        1,
        &recipients(&[1, 2]),
        &BigUint::from(10u64),
    );

    assert_eq!(
        result.err(),
        Some(GovernanceError::RecipientArrayLengthMismatch)
    );
}

#[test]
fn top_n_must_be_within_option_count() {
    let option_votes = votes(&[1, 2, 3]);
    let option_recipients = recipients(&[1, 2, 3]);
    let balance = BigUint::from(10u64);

    for top_n in [0usize, 4] {
        let result = allocate(&option_votes, top_n, &option_recipients, &balance);
        assert_eq!(result.err(), Some(GovernanceError::InvalidTopN));
    }
}

#[test]
fn allocation_is_repeatable() {
    let option_votes = votes(&[5, 9, 9, 1]);
    let option_recipients = recipients(&[1, 2, 3, 4]);
    let balance = BigUint::from(77u64);

    let first = allocate(&option_votes, 2, &option_recipients, &balance).unwrap();
    let second = allocate(&option_votes, 2, &option_recipients, &balance).unwrap();

    assert_eq!(winners_of(&first.winners), winners_of(&second.winners));
    assert_eq!(first.amount_per_recipient, second.amount_per_recipient);
}

#[test]
fn more_options_than_a_proposal_holds_fail() {
    let option_votes = votes(&[1; 11]);
    let option_recipients = recipients(&[1; 11]);

    let result = allocate(&option_votes, 1, &option_recipients, &BigUint::from(10u64));

    assert_eq!(result.err(), Some(GovernanceError::InvalidOptionCount));
}

multiversx_sc::imports!();

use crate::{
    errors::GovernanceError,
    types::{FundingPlan, MAX_OPTIONS},
};

/// Splits `available_balance` evenly across the recipients of the top
/// `top_n` options.
///
/// Options are ranked by weight with a stable sort. Every option tied with
/// the `top_n`-th one is a winner as well, so ties grow the winner set
/// instead of being broken. Options without votes and options mapped to the
/// zero address never win. The integer-division remainder is not assigned.
///
/// Tallies hold at most [`MAX_OPTIONS`] options; longer inputs fail with
/// `InvalidOptionCount`.
pub fn allocate<M: ManagedTypeApi>(
    option_votes: &ManagedVec<M, BigUint<M>>,
    top_n: usize,
    recipients: &ManagedVec<M, ManagedAddress<M>>,
    available_balance: &BigUint<M>,
) -> Result<FundingPlan<M>, GovernanceError> {
    let option_count = option_votes.len();
    if recipients.len() != option_count {
        return Err(GovernanceError::RecipientArrayLengthMismatch);
    }
    if option_count > MAX_OPTIONS {
        return Err(GovernanceError::InvalidOptionCount);
    }
    if top_n == 0 || top_n > option_count {
        return Err(GovernanceError::InvalidTopN);
    }

    let (ranked, ranked_len) = rank_options(option_votes);
    let vote_threshold = (*option_votes.get(ranked[top_n - 1])).clone();

    let mut winners = ManagedVec::new();
    for &index in ranked.iter().take(ranked_len) {
        let votes = option_votes.get(index);
        if *votes < vote_threshold {
            break;
        }
        if *votes == 0u64 {
            continue;
        }

        let recipient = recipients.get(index);
        if recipient.is_zero() {
            continue;
        }
        winners.push((*recipient).clone());
    }

    if winners.is_empty() {
        return Err(GovernanceError::NoWinners);
    }

    let amount_per_recipient = available_balance.clone() / (winners.len() as u64);
    Ok(FundingPlan {
        winners,
        amount_per_recipient,
    })
}

/// Option indices ordered by descending weight; equal weights keep index order.
/// `option_votes` holds at most [`MAX_OPTIONS`] entries.
fn rank_options<M: ManagedTypeApi>(
    option_votes: &ManagedVec<M, BigUint<M>>,
) -> ([usize; MAX_OPTIONS], usize) {
    let len = option_votes.len();
    let mut ranked = [0usize; MAX_OPTIONS];
    for (slot, index) in ranked.iter_mut().zip(0..len) {
        *slot = index;
    }

    // insertion sort, swapping only on strictly fewer votes
    for i in 1..len {
        let mut j = i;
        while j > 0 && *option_votes.get(ranked[j - 1]) < *option_votes.get(ranked[j]) {
            ranked.swap(j - 1, j);
            j -= 1;
        }
    }

    (ranked, len)
}

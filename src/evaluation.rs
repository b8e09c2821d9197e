multiversx_sc::imports!();

use crate::types::{EvaluationStrategy, Outcome};

/// Picks the winning option from per-option vote weights.
///
/// Pure: the same votes and strategy always give the same outcome.
pub fn evaluate<M: ManagedTypeApi>(
    strategy: EvaluationStrategy,
    option_votes: &ManagedVec<M, BigUint<M>>,
) -> Outcome {
    match strategy {
        EvaluationStrategy::Plurality => plurality(option_votes),
        EvaluationStrategy::Majority => majority(option_votes),
    }
}

/// Highest weight wins, earlier index on ties.
///
/// When nobody voted every option ties at zero and index 0 wins.
pub fn plurality<M: ManagedTypeApi>(option_votes: &ManagedVec<M, BigUint<M>>) -> Outcome {
    if option_votes.is_empty() {
        return Outcome::NoWinner;
    }

    let mut leader = 0usize;
    let mut max_votes = BigUint::zero();
    for (index, votes) in option_votes.iter().enumerate() {
        if *votes > max_votes {
            max_votes = (*votes).clone();
            leader = index;
        }
    }

    Outcome::Winner(leader as u32)
}

/// First option holding strictly more than half of all option votes.
pub fn majority<M: ManagedTypeApi>(option_votes: &ManagedVec<M, BigUint<M>>) -> Outcome {
    let mut total = BigUint::zero();
    for votes in option_votes.iter() {
        total += &*votes;
    }
    if total == 0u64 {
        return Outcome::NoWinner;
    }

    // floor division: exactly half never qualifies
    let threshold = total / 2u64;
    for (index, votes) in option_votes.iter().enumerate() {
        if *votes > threshold {
            return Outcome::Winner(index as u32);
        }
    }

    Outcome::NoWinner
}

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::errors::GovernanceError;

/// Fewest options a multiple-choice proposal may carry.
pub const MIN_OPTIONS: usize = 2;

/// Most options a multiple-choice proposal may carry.
pub const MAX_OPTIONS: usize = 10;

// ============================================================
// Proposal State — as reported by the governor
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalState {
    Pending,
    /// Voting window is open. The only state in which ballots are accepted.
    Active,
    Canceled,
    Defeated,
    Succeeded,
    Queued,
    Executed,
}

impl ProposalState {
    /// Funds may only be settled once the governor considers the proposal passed.
    pub fn allows_settlement(&self) -> bool {
        matches!(self, ProposalState::Succeeded | ProposalState::Executed)
    }
}

// ============================================================
// Ballots
// ============================================================

/// Encodes as 0, 1, 2 in events, matching the standard governor support values.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteSupport {
    Against,
    For,
    Abstain,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum BallotKind {
    /// Plain against / for / abstain ballot.
    Standard(VoteSupport),
    /// Vote for one option of a multiple-choice proposal, by 0-based index.
    Option(u32),
}

impl BallotKind {
    pub fn option_index(&self) -> Option<u32> {
        match self {
            BallotKind::Standard(_) => None,
            BallotKind::Option(index) => Some(*index),
        }
    }
}

// ============================================================
// Vote Tally — weighted counts for one proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteTally<M: ManagedTypeApi> {
    pub against_votes: BigUint<M>,
    /// Includes the weight of every option ballot.
    pub for_votes: BigUint<M>,
    pub abstain_votes: BigUint<M>,
    /// One entry per option; empty for standard proposals.
    pub option_votes: ManagedVec<M, BigUint<M>>,
}

impl<M: ManagedTypeApi> VoteTally<M> {
    pub fn zeroed(option_count: usize) -> Self {
        let mut option_votes = ManagedVec::new();
        for _ in 0..option_count {
            option_votes.push(BigUint::zero());
        }

        VoteTally {
            against_votes: BigUint::zero(),
            for_votes: BigUint::zero(),
            abstain_votes: BigUint::zero(),
            option_votes,
        }
    }

    pub fn option_count(&self) -> usize {
        self.option_votes.len()
    }

    /// Adds `weight` to the counters touched by `ballot` and returns the
    /// support value recorded in the standard tally.
    ///
    /// Option ballots are always recorded as `For` in the standard tally, so
    /// quorum and success checks that only read against/for/abstain keep
    /// working on multiple-choice proposals. Nothing is modified on error.
    pub fn count(
        &mut self,
        ballot: &BallotKind,
        weight: &BigUint<M>,
    ) -> Result<VoteSupport, GovernanceError> {
        let support = match ballot {
            BallotKind::Standard(support) => *support,
            BallotKind::Option(index) => {
                if self.option_count() == 0 {
                    return Err(GovernanceError::OptionVotingNotEnabled);
                }
                let index = *index as usize;
                if index >= self.option_count() {
                    return Err(GovernanceError::InvalidOptionIndex);
                }
                self.add_option_weight(index, weight)?;
                VoteSupport::For
            },
        };

        match support {
            VoteSupport::Against => self.against_votes += weight,
            VoteSupport::For => self.for_votes += weight,
            VoteSupport::Abstain => self.abstain_votes += weight,
        }

        Ok(support)
    }

    pub fn total_option_votes(&self) -> BigUint<M> {
        let mut total = BigUint::zero();
        for votes in self.option_votes.iter() {
            total += &*votes;
        }
        total
    }

    fn add_option_weight(
        &mut self,
        index: usize,
        weight: &BigUint<M>,
    ) -> Result<(), GovernanceError> {
        let updated = &*self.option_votes.get(index) + weight;
        self.option_votes
            .set(index, updated)
            .map_err(|_| GovernanceError::InvalidOptionIndex)
    }
}

// ============================================================
// Evaluation
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum EvaluationStrategy {
    /// Highest option wins; ties go to the lower index.
    Plurality,
    /// An option needs strictly more than half of all option votes.
    Majority,
}

impl EvaluationStrategy {
    pub fn from_code(code: u8) -> Result<Self, GovernanceError> {
        match code {
            0 => Ok(EvaluationStrategy::Plurality),
            1 => Ok(EvaluationStrategy::Majority),
            _ => Err(GovernanceError::UnsupportedStrategy),
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Outcome {
    NoWinner,
    Winner(u32),
}

// ============================================================
// Funding Plan — result of the allocation step
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct FundingPlan<M: ManagedTypeApi> {
    /// Recipients in payout order. A recipient mapped from several winning
    /// options appears once per option.
    pub winners: ManagedVec<M, ManagedAddress<M>>,
    pub amount_per_recipient: BigUint<M>,
}

impl<M: ManagedTypeApi> FundingPlan<M> {
    /// Sum actually paid out; anything above this stays in the pool.
    pub fn total_payout(&self) -> BigUint<M> {
        &self.amount_per_recipient * (self.winners.len() as u64)
    }
}

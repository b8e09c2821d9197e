multiversx_sc::imports!();

use crate::{
    config,
    errors::GovernanceError,
    evaluation, governor_proxy, options,
    types::{BallotKind, EvaluationStrategy, Outcome, ProposalState, VoteSupport, VoteTally},
    voting_power_proxy,
};

/// Ballot intake and the per-proposal vote tally.
#[multiversx_sc::module]
pub trait CountingModule: config::ConfigModule + options::OptionsModule {
    // ========================================================
    // ENDPOINT: recordVote
    // Governor-driven path: the governor already resolved the
    // voter's weight at the proposal snapshot.
    // ========================================================

    #[endpoint(recordVote)]
    fn record_vote(
        &self,
        proposal_id: u64,
        voter: ManagedAddress,
        weight: BigUint,
        ballot: BallotKind,
        reason: ManagedBuffer,
    ) -> BigUint {
        self.require_governor_caller();
        self.count_ballot(proposal_id, &voter, weight, &ballot, &reason)
    }

    // ========================================================
    // ENDPOINT: castVote
    // Voter-driven path: weight is read from the voting-power
    // contract at the snapshot reported by the governor.
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote(&self, proposal_id: u64, ballot: BallotKind, reason: ManagedBuffer) -> BigUint {
        let voter = self.blockchain().get_caller();

        let governor = self.governor_address().get();
        let snapshot: u64 = self
            .tx()
            .to(&governor)
            .typed(governor_proxy::GovernorProxy)
            .proposal_snapshot(proposal_id)
            .returns(ReturnsResult)
            .sync_call_readonly();

        let voting_power = self.voting_power_address().get();
        let weight: BigUint = self
            .tx()
            .to(&voting_power)
            .typed(voting_power_proxy::VotingPowerProxy)
            .get_past_votes(voter.clone(), snapshot)
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.count_ballot(proposal_id, &voter, weight, &ballot, &reason)
    }

    // ========================================================
    // INTERNAL: apply one ballot
    // ========================================================

    fn count_ballot(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
        weight: BigUint,
        ballot: &BallotKind,
        reason: &ManagedBuffer,
    ) -> BigUint {
        let state = self.proposal_state(proposal_id);
        self.apply_ballot(proposal_id, state, voter, weight, ballot, reason)
    }

    /// Records a ballot against the lifecycle `state` already read from the
    /// governor. The has-voted check and mark happen in the same call, so a
    /// voter can only ever be counted once per proposal.
    fn apply_ballot(
        &self,
        proposal_id: u64,
        state: ProposalState,
        voter: &ManagedAddress,
        weight: BigUint,
        ballot: &BallotKind,
        reason: &ManagedBuffer,
    ) -> BigUint {
        if state != ProposalState::Active {
            sc_panic!(GovernanceError::VotingNotActive.message());
        }
        if self.has_voted(proposal_id, voter).get() {
            sc_panic!(GovernanceError::AlreadyVoted.message());
        }

        let mut tally = self.load_tally(proposal_id);
        let support = match tally.count(ballot, &weight) {
            Ok(support) => support,
            Err(err) => sc_panic!(err.message()),
        };

        self.tallies(proposal_id).set(&tally);
        self.has_voted(proposal_id, voter).set(true);

        self.vote_cast_event(
            voter,
            proposal_id,
            support,
            &weight,
            ballot.option_index(),
            reason,
        );

        weight
    }

    /// Stored tally, or an all-zero one sized to the proposal's options.
    fn load_tally(&self, proposal_id: u64) -> VoteTally<Self::Api> {
        let mapper = self.tallies(proposal_id);
        if mapper.is_empty() {
            let option_count = self.option_count(proposal_id).get() as usize;
            VoteTally::zeroed(option_count)
        } else {
            mapper.get()
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposalVotes)]
    fn get_proposal_votes(&self, proposal_id: u64) -> MultiValue3<BigUint, BigUint, BigUint> {
        let tally = self.load_tally(proposal_id);
        (tally.against_votes, tally.for_votes, tally.abstain_votes).into()
    }

    #[view(getOptionVotes)]
    fn get_option_votes(&self, proposal_id: u64) -> ManagedVec<BigUint> {
        self.load_tally(proposal_id).option_votes
    }

    #[view(hasVoted)]
    fn has_account_voted(&self, proposal_id: u64, account: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, account).get()
    }

    /// Winning option under the given strategy code (0 = plurality,
    /// 1 = majority). Only authoritative once voting has closed.
    #[view(evaluateOutcome)]
    fn evaluate_outcome(&self, proposal_id: u64, strategy_code: u8) -> Outcome {
        let strategy = match EvaluationStrategy::from_code(strategy_code) {
            Ok(strategy) => strategy,
            Err(err) => sc_panic!(err.message()),
        };
        if !self.is_multiple_choice(proposal_id) {
            sc_panic!(GovernanceError::OptionVotingNotEnabled.message());
        }

        let tally = self.load_tally(proposal_id);
        evaluation::evaluate(strategy, &tally.option_votes)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposal_id: u64,
        #[indexed] support: VoteSupport,
        #[indexed] weight: &BigUint,
        #[indexed] option_index: Option<u32>,
        reason: &ManagedBuffer,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("tallies")]
    fn tallies(&self, proposal_id: u64) -> SingleValueMapper<VoteTally<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}

multiversx_sc::imports!();

use crate::{
    allocation, config, counting,
    errors::GovernanceError,
    options,
    types::{FundingPlan, ProposalState},
};

/// EGLD pool paid out to the recipients of winning options.
#[multiversx_sc::module]
pub trait FundingModule:
    config::ConfigModule + options::OptionsModule + counting::CountingModule
{
    #[endpoint(depositFunds)]
    #[payable("EGLD")]
    fn deposit_funds(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, "Nothing deposited");

        self.funds_deposited_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: distributeFunds
    // Settlement authority pays every winner the same share of
    // the pool. Any failed transfer fails the whole call, which
    // reverts the transfers already made.
    // ========================================================

    #[endpoint(distributeFunds)]
    fn distribute_funds(
        &self,
        proposal_id: u64,
        top_n: u32,
        recipients: MultiValueEncoded<ManagedAddress>,
    ) {
        self.require_settlement_caller();
        let state = self.proposal_state(proposal_id);
        self.settle_proposal(proposal_id, state, top_n, &recipients.to_vec());
    }

    /// The plan `distributeFunds` would execute against the current pool.
    #[view(previewFunding)]
    fn preview_funding(
        &self,
        proposal_id: u64,
        top_n: u32,
        recipients: MultiValueEncoded<ManagedAddress>,
    ) -> FundingPlan<Self::Api> {
        self.funding_plan(proposal_id, top_n, &recipients.to_vec())
    }

    #[view(getFundBalance)]
    fn get_fund_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Pays out one proposal given the lifecycle `state` already read from
    /// the governor.
    fn settle_proposal(
        &self,
        proposal_id: u64,
        state: ProposalState,
        top_n: u32,
        recipients: &ManagedVec<ManagedAddress>,
    ) {
        if !state.allows_settlement() {
            sc_panic!(GovernanceError::InvalidProposalState.message());
        }
        if self.funds_distributed(proposal_id).get() {
            sc_panic!(GovernanceError::FundsAlreadyDistributed.message());
        }

        let plan = self.funding_plan(proposal_id, top_n, recipients);

        self.funds_distributed(proposal_id).set(true);
        if plan.amount_per_recipient > 0u64 {
            for winner in plan.winners.iter() {
                self.send().direct_egld(&winner, &plan.amount_per_recipient);
            }
        }

        self.funds_distributed_event(proposal_id, &plan.amount_per_recipient, &plan.winners);
    }

    fn funding_plan(
        &self,
        proposal_id: u64,
        top_n: u32,
        recipients: &ManagedVec<ManagedAddress>,
    ) -> FundingPlan<Self::Api> {
        let tally = self.load_tally(proposal_id);
        let balance = self.get_fund_balance();

        match allocation::allocate(&tally.option_votes, top_n as usize, recipients, &balance) {
            Ok(plan) => plan,
            Err(err) => sc_panic!(err.message()),
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fundsDeposited")]
    fn funds_deposited_event(&self, #[indexed] depositor: &ManagedAddress, amount: &BigUint);

    #[event("fundsDistributed")]
    fn funds_distributed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] amount_per_recipient: &BigUint,
        winners: &ManagedVec<ManagedAddress>,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(isFundsDistributed)]
    #[storage_mapper("fundsDistributed")]
    fn funds_distributed(&self, proposal_id: u64) -> SingleValueMapper<bool>;
}

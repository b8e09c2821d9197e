multiversx_sc::imports!();

use crate::{errors::GovernanceError, governor_proxy, types::ProposalState};

/// Collaborator addresses and the caller checks built on them.
#[multiversx_sc::module]
pub trait ConfigModule {
    // ========================================================
    // OWNER ENDPOINTS
    // ========================================================

    #[only_owner]
    #[endpoint(setGovernorAddress)]
    fn set_governor_address(&self, governor: ManagedAddress) {
        self.governor_address().set(&governor);
        self.governor_changed_event(&governor);
    }

    #[only_owner]
    #[endpoint(setVotingPowerAddress)]
    fn set_voting_power_address(&self, voting_power: ManagedAddress) {
        self.voting_power_address().set(&voting_power);
        self.voting_power_changed_event(&voting_power);
    }

    #[only_owner]
    #[endpoint(setSettlementAuthority)]
    fn set_settlement_authority(&self, authority: ManagedAddress) {
        self.settlement_authority().set(&authority);
        self.settlement_authority_changed_event(&authority);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_governor_caller(&self) {
        let caller = self.blockchain().get_caller();
        if caller != self.governor_address().get() {
            sc_panic!(GovernanceError::UnauthorizedCaller.message());
        }
    }

    fn require_settlement_caller(&self) {
        let caller = self.blockchain().get_caller();
        if caller != self.settlement_authority().get() {
            sc_panic!(GovernanceError::UnauthorizedCaller.message());
        }
    }

    fn proposal_state(&self, proposal_id: u64) -> ProposalState {
        let governor = self.governor_address().get();
        self.tx()
            .to(&governor)
            .typed(governor_proxy::GovernorProxy)
            .state(proposal_id)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("governorChanged")]
    fn governor_changed_event(&self, #[indexed] governor: &ManagedAddress);

    #[event("votingPowerChanged")]
    fn voting_power_changed_event(&self, #[indexed] voting_power: &ManagedAddress);

    #[event("settlementAuthorityChanged")]
    fn settlement_authority_changed_event(&self, #[indexed] authority: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getGovernorAddress)]
    #[storage_mapper("governorAddress")]
    fn governor_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getVotingPowerAddress)]
    #[storage_mapper("votingPowerAddress")]
    fn voting_power_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getSettlementAuthority)]
    #[storage_mapper("settlementAuthority")]
    fn settlement_authority(&self) -> SingleValueMapper<ManagedAddress>;
}

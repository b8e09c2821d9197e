multiversx_sc::imports!();

use crate::{
    config,
    errors::GovernanceError,
    types::{MAX_OPTIONS, MIN_OPTIONS},
};

/// Option lists attached to multiple-choice proposals.
///
/// A proposal without options is a standard proposal: every read returns an
/// empty list and a count of zero.
#[multiversx_sc::module]
pub trait OptionsModule: config::ConfigModule {
    /// Attaches the option list to a proposal. Called by the governor once,
    /// when the proposal is created; calling it again overwrites the list.
    #[endpoint(setProposalOptions)]
    fn set_proposal_options(&self, proposal_id: u64, options: MultiValueEncoded<ManagedBuffer>) {
        self.require_governor_caller();

        let options = options.to_vec();
        let count = options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            sc_panic!(GovernanceError::InvalidOptionCount.message());
        }

        self.proposal_options(proposal_id).set(&options);
        self.option_count(proposal_id).set(count as u32);

        self.options_created_event(proposal_id, &options);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposalOptions)]
    fn get_proposal_options(
        &self,
        proposal_id: u64,
    ) -> MultiValue2<ManagedVec<ManagedBuffer>, u32> {
        let options = self.proposal_options(proposal_id).get();
        let count = self.option_count(proposal_id).get();
        (options, count).into()
    }

    #[view(isMultipleChoice)]
    fn is_multiple_choice(&self, proposal_id: u64) -> bool {
        self.option_count(proposal_id).get() > 0
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("optionsCreated")]
    fn options_created_event(
        &self,
        #[indexed] proposal_id: u64,
        options: &ManagedVec<ManagedBuffer>,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposalOptions")]
    fn proposal_options(&self, proposal_id: u64) -> SingleValueMapper<ManagedVec<ManagedBuffer>>;

    #[view(getOptionCount)]
    #[storage_mapper("optionCount")]
    fn option_count(&self, proposal_id: u64) -> SingleValueMapper<u32>;
}

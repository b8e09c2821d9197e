#![no_std]

multiversx_sc::imports!();

pub mod allocation;
pub mod config;
pub mod counting;
pub mod errors;
pub mod evaluation;
pub mod funding;
pub mod governor_proxy;
pub mod options;
pub mod types;
pub mod voting_power_proxy;

// ============================================================
// Contract
// ============================================================

/// Multiple-choice extension for a governor.
///
/// The governor owns the proposal lifecycle and attaches option lists at
/// creation; this contract counts option ballots next to the standard
/// against/for/abstain tally, evaluates the winning option and pays out the
/// pooled EGLD to the recipients of the winning options.
#[multiversx_sc::contract]
pub trait MultiChoiceGovernance:
    config::ConfigModule
    + options::OptionsModule
    + counting::CountingModule
    + funding::FundingModule
{
    #[init]
    fn init(
        &self,
        governor_address: ManagedAddress,
        voting_power_address: ManagedAddress,
        settlement_authority: ManagedAddress,
    ) {
        self.governor_address().set(&governor_address);
        self.voting_power_address().set(&voting_power_address);
        self.settlement_authority().set(&settlement_authority);
    }

    #[upgrade]
    fn upgrade(&self) {}
}

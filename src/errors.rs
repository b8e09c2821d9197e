/// Failure kinds of the counting, evaluation and allocation steps.
///
/// Pure code returns these; endpoints turn them into a failed transaction
/// carrying [`GovernanceError::message`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GovernanceError {
    InvalidOptionCount,
    AlreadyVoted,
    InvalidOptionIndex,
    OptionVotingNotEnabled,
    UnsupportedStrategy,
    RecipientArrayLengthMismatch,
    InvalidTopN,
    NoWinners,
    UnauthorizedCaller,
    InvalidProposalState,
    VotingNotActive,
    FundsAlreadyDistributed,
}

impl GovernanceError {
    pub fn message(&self) -> &'static str {
        match self {
            GovernanceError::InvalidOptionCount => "Option count must be between 2 and 10",
            GovernanceError::AlreadyVoted => "Already voted",
            GovernanceError::InvalidOptionIndex => "Invalid option index",
            GovernanceError::OptionVotingNotEnabled => {
                "Option voting not enabled for this proposal"
            },
            GovernanceError::UnsupportedStrategy => "Unsupported evaluation strategy",
            GovernanceError::RecipientArrayLengthMismatch => {
                "Recipient count does not match option count"
            },
            GovernanceError::InvalidTopN => "Invalid top N",
            GovernanceError::NoWinners => "No winners",
            GovernanceError::UnauthorizedCaller => "Unauthorized caller",
            GovernanceError::InvalidProposalState => "Invalid proposal state",
            GovernanceError::VotingNotActive => "Voting is not active",
            GovernanceError::FundsAlreadyDistributed => "Funds already distributed",
        }
    }
}

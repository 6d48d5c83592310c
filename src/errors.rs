// ============================================================
// Error taxonomy
// Codes 100 to 120. Every failed call aborts with one of these
// messages (or one of the two generic ones below), so the
// numeric code can be read back from the transaction error.
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum ProposalError {
    NotAuthorized = 100,
    InvalidProposalAmount = 101,
    InvalidProposalTarget = 102,
    InvalidProposalDuration = 103,
    ProposalAlreadyExists = 104,
    ProposalNotFound = 105,
    VotingClosed = 106,
    AlreadyVoted = 107,
    InsufficientStake = 108,
    ProposalNotOpen = 109,
    VotingThresholdNotMet = 110,
    InvalidClubId = 111,
    InvalidVote = 112,
    FundTransferFailed = 113,
    InvalidProposalDescription = 114,
    InvalidRiskLevel = 115,
    InvalidExpectedReturn = 116,
    ProposalExpired = 117,
    InvalidTimestamp = 118,
    ClubNotActive = 119,
    MaxProposalsExceeded = 120,
}

impl ProposalError {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn message(self) -> &'static str {
        match self {
            ProposalError::NotAuthorized => "E100: NOT_AUTHORIZED",
            ProposalError::InvalidProposalAmount => "E101: INVALID_PROPOSAL_AMOUNT",
            ProposalError::InvalidProposalTarget => "E102: INVALID_PROPOSAL_TARGET",
            ProposalError::InvalidProposalDuration => "E103: INVALID_PROPOSAL_DURATION",
            ProposalError::ProposalAlreadyExists => "E104: PROPOSAL_ALREADY_EXISTS",
            ProposalError::ProposalNotFound => "E105: PROPOSAL_NOT_FOUND",
            ProposalError::VotingClosed => "E106: VOTING_CLOSED",
            ProposalError::AlreadyVoted => "E107: ALREADY_VOTED",
            ProposalError::InsufficientStake => "E108: INSUFFICIENT_STAKE",
            ProposalError::ProposalNotOpen => "E109: PROPOSAL_NOT_OPEN",
            ProposalError::VotingThresholdNotMet => "E110: VOTING_THRESHOLD_NOT_MET",
            ProposalError::InvalidClubId => "E111: INVALID_CLUB_ID",
            ProposalError::InvalidVote => "E112: INVALID_VOTE",
            ProposalError::FundTransferFailed => "E113: FUND_TRANSFER_FAILED",
            ProposalError::InvalidProposalDescription => "E114: INVALID_PROPOSAL_DESCRIPTION",
            ProposalError::InvalidRiskLevel => "E115: INVALID_RISK_LEVEL",
            ProposalError::InvalidExpectedReturn => "E116: INVALID_EXPECTED_RETURN",
            ProposalError::ProposalExpired => "E117: PROPOSAL_EXPIRED",
            ProposalError::InvalidTimestamp => "E118: INVALID_TIMESTAMP",
            ProposalError::ClubNotActive => "E119: CLUB_NOT_ACTIVE",
            ProposalError::MaxProposalsExceeded => "E120: MAX_PROPOSALS_EXCEEDED",
        }
    }
}

/// Message for a vote/execute/close on a proposal that was never created.
/// Carries no code.
pub const PROPOSAL_MISSING: &str = "proposal does not exist";

/// Message for a close attempted by anyone other than the proposer.
pub const NOT_PROPOSER: &str = "caller is not the proposer";

// ============================================================
// Failure: the error side of every operation's result
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Failure {
    Code(ProposalError),
    ProposalMissing,
    NotProposer,
}

impl Failure {
    /// The numeric code, if this failure has one.
    pub const fn code(self) -> Option<u32> {
        match self {
            Failure::Code(err) => Some(err.code()),
            Failure::ProposalMissing | Failure::NotProposer => None,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Failure::Code(err) => err.message(),
            Failure::ProposalMissing => PROPOSAL_MISSING,
            Failure::NotProposer => NOT_PROPOSER,
        }
    }
}

impl From<ProposalError> for Failure {
    fn from(err: ProposalError) -> Self {
        Failure::Code(err)
    }
}

pub type Outcome<T> = Result<T, Failure>;

/// `giveRightToVote` called by anyone but the chairperson.
pub const ERR_NOT_CHAIRPERSON: &str = "Only chairperson can give right to vote.";
/// `giveRightToVote` for a voter who already voted or delegated.
pub const ERR_VOTER_ALREADY_VOTED: &str = "The voter already voted.";
/// `delegate` by a caller who already voted or delegated.
pub const ERR_DELEGATOR_ALREADY_VOTED: &str = "You already voted.";
/// `vote` by a caller who already voted or delegated.
pub const ERR_ALREADY_VOTED: &str = "Already voted.";
pub const ERR_SELF_DELEGATION: &str = "Self-delegation is disallowed.";
/// `delegate` whose chain leads back to the caller.
pub const ERR_DELEGATION_LOOP: &str = "Found loop in delegation.";
/// `vote` by a caller with zero weight.
pub const ERR_NO_RIGHT_TO_VOTE: &str = "Has no right to vote";
/// Proposal index out of range (`vote`, `proposals`, `winningProposal`).
pub const ERR_INVALID_PROPOSAL: &str = "Invalid proposal index";
/// A weight or vote count would exceed `u64::MAX`.
pub const ERR_OVERFLOW: &str = "Arithmetic overflow";

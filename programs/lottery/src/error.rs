use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Entry must deposit exactly the stake unit")]
    InvalidStake,
    #[msg("Only the manager can start a draw")]
    Unauthorized,
    #[msg("No players in the pool")]
    EmptyPool,
    #[msg("A draw is already awaiting randomness")]
    DrawInProgress,
    #[msg("Fulfillment does not match the outstanding randomness request")]
    UnknownRequest,
    #[msg("Payout transfer to the winner failed")]
    TransferFailure,
    #[msg("The pool has reached its maximum number of entries")]
    PoolFull,
    #[msg("Fulfillment carried no random words")]
    MissingRandomWords,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Invalid lottery configuration")]
    InvalidConfig,
    #[msg("Randomness account is not a valid Switchboard randomness account")]
    InvalidRandomnessAccount,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness not resolved")]
    RandomnessNotResolved,
}

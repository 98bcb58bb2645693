use anchor_lang::prelude::*;

use crate::state::RequestId;

#[event]
pub struct LotteryInitialized {
    pub manager: Pubkey,
    pub stake_unit: u64,
    pub subscription_id: u64,
    pub lock_entries_during_draw: bool,
}

#[event]
pub struct PlayerEntered {
    pub player: Pubkey,
    pub entries: u64,
    pub pot: u64,
}

/// Emitted by `pick_winner`. Off-chain cranks watch for this to know which
/// request id to fulfill.
#[event]
pub struct RandomWordsRequested {
    pub request_id: RequestId,
    pub randomness_account: Pubkey,
    pub subscription_id: u64,
    pub key_hash: [u8; 32],
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub requested_slot: u64,
}

#[event]
pub struct WinnerPicked {
    pub request_id: RequestId,
    pub winner: Pubkey,
    pub winner_index: u64,
    pub amount: u64,
    pub round: u64,
}

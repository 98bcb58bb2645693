use anchor_lang::prelude::*;

use crate::constants::{MAX_PLAYERS, MAX_RANDOM_WORDS};
use crate::error::LotteryError;

/// Correlation token linking a randomness request to its fulfillment.
pub type RequestId = [u8; 32];

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The only identity allowed to start a draw. Set once at initialization.
    pub manager: Pubkey,

    /// The exact amount (in lamports) every entry must deposit.
    pub stake_unit: u64,

    /// When `true`, `enter` is rejected while a draw awaits randomness.
    /// When `false`, late entrants join the draw that is being settled.
    pub lock_entries_during_draw: bool,

    /// Oracle request parameters, passed through to every request.
    pub oracle: OracleConfig,

    /// Entries of the active pool in insertion order. A key appears once
    /// per entry. The pot is always `stake_unit * players.len()` and is never
    /// stored separately.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,

    /// The single randomness request slot.
    pub pending: PendingRequest,

    /// Id of the most recently issued request, kept after it is consumed.
    pub last_request_id: [u8; 32],

    /// Incremented on every issued request so ids are never reused.
    pub request_nonce: u64,

    /// Number of settled draws.
    pub draws_completed: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct OracleConfig {
    /// Opaque subscription identifier reported back to clients.
    pub subscription_id: u64,

    /// Opaque verification key identifier, emitted with each request.
    pub key_hash: [u8; 32],

    /// Slots that must pass between the request and its fulfillment.
    pub request_confirmations: u16,

    /// Callback budget, passed through to the oracle crank.
    pub callback_gas_limit: u32,

    /// Random words requested per draw (1..=MAX_RANDOM_WORDS).
    pub num_words: u32,

    /// Program that must own randomness accounts.
    pub randomness_program: Pubkey,
}

impl OracleConfig {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.num_words >= 1 && self.num_words <= MAX_RANDOM_WORDS,
            LotteryError::InvalidConfig
        );
        require!(
            self.randomness_program != Pubkey::default(),
            LotteryError::InvalidConfig
        );
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RequestStatus {
    /// No request has been issued yet.
    Unset,
    /// Outstanding. The only state in which a fulfillment is accepted.
    Valid,
    /// A fulfillment is paying out. Never persisted past an instruction.
    Settling,
    /// Settled. The id will not be accepted again.
    Consumed,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct PendingRequest {
    pub id: [u8; 32],
    pub randomness_account: Pubkey,
    /// Slot the randomness account was committed in. A fulfillment must
    /// read a reveal of this exact commit.
    pub seed_slot: u64,
    pub requested_slot: u64,
    pub status: RequestStatus,
}

impl Default for PendingRequest {
    fn default() -> Self {
        Self {
            id: [0u8; 32],
            randomness_account: Pubkey::default(),
            seed_slot: 0,
            requested_slot: 0,
            status: RequestStatus::Unset,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawPhase {
    Idle,
    AwaitingRandomness,
}

/// Arguments of the `initialize` instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    pub stake_unit: u64,
    pub subscription_id: u64,
    pub key_hash: [u8; 32],
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub randomness_program: Pubkey,
    pub lock_entries_during_draw: bool,
}

impl Lottery {
    pub fn new(bump: u8, manager: Pubkey, params: &InitializeParams) -> Result<Self> {
        require!(params.stake_unit > 0, LotteryError::InvalidConfig);

        let oracle = OracleConfig {
            subscription_id: params.subscription_id,
            key_hash: params.key_hash,
            request_confirmations: params.request_confirmations,
            callback_gas_limit: params.callback_gas_limit,
            num_words: params.num_words,
            randomness_program: params.randomness_program,
        };
        oracle.validate()?;

        Ok(Self {
            bump,
            manager,
            stake_unit: params.stake_unit,
            lock_entries_during_draw: params.lock_entries_during_draw,
            oracle,
            players: Vec::new(),
            pending: PendingRequest::default(),
            last_request_id: [0u8; 32],
            request_nonce: 0,
            draws_completed: 0,
        })
    }

    pub fn phase(&self) -> DrawPhase {
        match self.pending.status {
            RequestStatus::Valid | RequestStatus::Settling => DrawPhase::AwaitingRandomness,
            RequestStatus::Unset | RequestStatus::Consumed => DrawPhase::Idle,
        }
    }

    /// Whether `id` is the request currently awaiting fulfillment.
    pub fn is_valid_request(&self, id: &RequestId) -> bool {
        self.pending.status == RequestStatus::Valid && self.pending.id == *id
    }
}
